#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod model;
pub mod session;
pub mod set_tracker;
pub mod time;
pub mod timer;

pub use catalog::{Catalog, CatalogError, ExerciseFilter, WorkoutFilter};
pub use error::Error;
pub use session::{CompletionOutcome, SessionPhase, SessionProgress, SessionStateError, WorkoutSession};
pub use set_tracker::{SetTracker, SetTrackerError};
pub use time::Clock;
pub use timer::{Countdown, TickOutcome, TimerState};
