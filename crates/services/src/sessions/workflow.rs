use std::sync::Arc;

use fit_core::catalog::Catalog;
use fit_core::model::{SessionSummary, SummaryId, WorkoutDefinition, WorkoutId};
use fit_core::session::{CompletionOutcome, WorkoutSession};

use crate::error::SessionError;
use crate::navigation::Destination;
use crate::notice::{Notice, Notifier};
use crate::Clock;

use super::summaries::SummaryService;

/// Result of finishing a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishOutcome {
    pub summary_id: SummaryId,
    pub summary: SessionSummary,
    pub destination: Destination,
}

/// Drives a `WorkoutSession` through its lifecycle and tells the user about it.
///
/// The session itself stays with the caller (the view that plays it); this
/// service only owns the time source, the summary log and the notifier.
#[derive(Clone)]
pub struct SessionFlowService {
    clock: Clock,
    catalog: Arc<Catalog>,
    summaries: Arc<SummaryService>,
    notifier: Arc<dyn Notifier>,
}

impl SessionFlowService {
    #[must_use]
    pub fn new(
        clock: Clock,
        catalog: Arc<Catalog>,
        summaries: Arc<SummaryService>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            clock,
            catalog,
            summaries,
            notifier,
        }
    }

    /// Prepare a session for a catalogue workout.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::UnknownWorkout` when the id is not in the catalogue.
    pub fn open(&self, workout_id: &WorkoutId) -> Result<WorkoutSession, SessionError> {
        let Some(workout) = self.catalog.workout(workout_id) else {
            tracing::warn!(workout = %workout_id, "session requested for unknown workout");
            return Err(SessionError::UnknownWorkout(workout_id.clone()));
        };
        tracing::debug!(workout = %workout_id, "session opened");
        Ok(WorkoutSession::new(workout))
    }

    /// Prepare a session for a workout that is not in the catalogue, such as a generated one.
    #[must_use]
    pub fn open_definition(&self, workout: Arc<WorkoutDefinition>) -> WorkoutSession {
        tracing::debug!(workout = %workout.id(), "session opened from definition");
        WorkoutSession::new(workout)
    }

    /// # Errors
    ///
    /// Returns `SessionError::State` if the session was already started.
    pub fn begin(&self, session: &mut WorkoutSession) -> Result<(), SessionError> {
        session.start(self.clock.now())?;
        let title = session.workout().title();
        tracing::info!(workout = %session.workout().id(), "workout started");
        self.notifier.notify(Notice::success(
            "Workout Started!",
            format!("Let's crush this {title} session!"),
        ));
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::State` when the current exercise cannot be completed.
    pub fn complete_current(
        &self,
        session: &mut WorkoutSession,
    ) -> Result<CompletionOutcome, SessionError> {
        let name = session.current_exercise().name().to_string();
        let outcome = session.complete_current()?;
        tracing::info!(
            workout = %session.workout().id(),
            exercise = %name,
            completed = session.completed_count(),
            "exercise completed"
        );
        match outcome {
            CompletionOutcome::Rest { .. } => self.notifier.notify(Notice::success(
                "Exercise Complete!",
                format!("Great job on {name}. Time to rest!"),
            )),
            CompletionOutcome::WorkoutComplete => {
                let title = session.workout().title();
                self.notifier.notify(Notice::success(
                    "Workout Complete!",
                    format!("Amazing work! You've completed {title}!"),
                ));
            }
        }
        Ok(outcome)
    }

    /// Move to the next exercise, returning its index.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::State` when the current exercise is not completed
    /// or it is the last one.
    pub fn advance(&self, session: &mut WorkoutSession) -> Result<usize, SessionError> {
        let next = session.advance()?.name().to_string();
        tracing::debug!(exercise = %next, index = session.current_index(), "advanced");
        Ok(session.current_index())
    }

    /// The rest countdown ran out. The cursor does not move.
    pub fn rest_finished(&self, session: &mut WorkoutSession) {
        session.finish_rest();
    }

    /// Build and record the summary, then name where the shell should go next.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::State` until every exercise is completed.
    pub fn finish(&self, session: &WorkoutSession) -> Result<FinishOutcome, SessionError> {
        let summary = session.summary(self.clock.now())?;
        let summary_id = self.summaries.record(summary.clone());
        self.notifier.notify(Notice::success(
            "Fantastic Work!",
            format!(
                "You completed {} in {} minutes!",
                summary.workout_title(),
                summary.elapsed_minutes()
            ),
        ));
        Ok(FinishOutcome {
            summary_id,
            summary,
            destination: Destination::Progress,
        })
    }
}
