mod progress;
mod summaries;
mod workflow;

// Public API of the session subsystem.
pub use crate::error::SessionError;
pub use progress::ProgressTotals;
pub use summaries::{SummaryListItem, SummaryService};
pub use workflow::{FinishOutcome, SessionFlowService};
