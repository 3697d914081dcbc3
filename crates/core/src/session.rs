//! Guided workout session: a forward-only walk through a workout's exercises.

use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;

use crate::model::{
    ExerciseDefinition, ExerciseId, SessionSummary, SessionSummaryError, WorkoutDefinition,
};
use crate::set_tracker::SetTracker;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionStateError {
    #[error("session has not been started")]
    NotStarted,

    #[error("session already started")]
    AlreadyStarted,

    #[error("session already finished")]
    Finished,

    #[error("only {completed} of {target} target sets completed")]
    TargetNotMet { completed: u32, target: u32 },

    #[error("exercise already completed")]
    AlreadyCompleted,

    #[error("current exercise is not completed yet")]
    CurrentNotCompleted,

    #[error("no exercise after the current one")]
    NoNextExercise,

    #[error("session is not finished")]
    NotFinished,

    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress { index: usize, resting: bool },
    Finished,
}

/// What happened when the current exercise was marked complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// More exercises follow; rest for `secs` before advancing.
    Rest { secs: u32 },
    WorkoutComplete,
}

/// Progress figures for the header bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub completed: usize,
    pub total: usize,
    /// Cursor position as a share of the workout, like the header bar shows it.
    pub percent: u32,
}

/// State of one run through a workout. Owned by the view that plays it and
/// dropped when that view goes away.
#[derive(Debug, Clone)]
pub struct WorkoutSession {
    workout: Arc<WorkoutDefinition>,
    current_index: usize,
    completed: HashSet<ExerciseId>,
    resting: bool,
    started_at: Option<DateTime<Utc>>,
    tracker: SetTracker,
}

impl WorkoutSession {
    #[must_use]
    pub fn new(workout: Arc<WorkoutDefinition>) -> Self {
        let target = workout.exercises()[0].target_sets();
        Self {
            workout,
            current_index: 0,
            completed: HashSet::new(),
            resting: false,
            started_at: None,
            tracker: SetTracker::new(target),
        }
    }

    #[must_use]
    pub fn workout(&self) -> &WorkoutDefinition {
        &self.workout
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.started_at.is_none() {
            SessionPhase::NotStarted
        } else if self.is_complete() {
            SessionPhase::Finished
        } else {
            SessionPhase::InProgress {
                index: self.current_index,
                resting: self.resting,
            }
        }
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current_exercise(&self) -> &ExerciseDefinition {
        &self.workout.exercises()[self.current_index]
    }

    #[must_use]
    pub fn is_resting(&self) -> bool {
        self.resting
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.completed.len() == self.workout.exercise_count()
    }

    #[must_use]
    pub fn is_exercise_completed(&self, id: &ExerciseId) -> bool {
        self.completed.contains(id)
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    #[must_use]
    pub fn tracker(&self) -> &SetTracker {
        &self.tracker
    }

    pub fn tracker_mut(&mut self) -> &mut SetTracker {
        &mut self.tracker
    }

    /// Seconds for the timer shown beside the tracker.
    #[must_use]
    pub fn rest_timer_secs(&self) -> u32 {
        let rest = self.workout.rest();
        if self.resting {
            rest.between_exercises_secs
        } else {
            rest.between_sets_secs
        }
    }

    #[must_use]
    pub fn progress(&self) -> SessionProgress {
        let total = self.workout.exercise_count();
        let percent = u32::try_from(self.current_index * 100 / total).unwrap_or(100);
        SessionProgress {
            completed: self.completed.len(),
            total,
            percent,
        }
    }

    /// # Errors
    ///
    /// Returns `SessionStateError::AlreadyStarted` on a second call.
    pub fn start(&mut self, now: DateTime<Utc>) -> Result<(), SessionStateError> {
        if self.started_at.is_some() {
            return Err(SessionStateError::AlreadyStarted);
        }
        self.started_at = Some(now);
        Ok(())
    }

    /// Mark the current exercise complete once its set target is met.
    ///
    /// # Errors
    ///
    /// Returns `NotStarted`, `Finished`, `AlreadyCompleted` or `TargetNotMet`
    /// when the exercise cannot be completed right now.
    pub fn complete_current(&mut self) -> Result<CompletionOutcome, SessionStateError> {
        self.ensure_in_progress()?;
        let exercise_id = self.current_exercise().id().clone();
        if self.completed.contains(&exercise_id) {
            return Err(SessionStateError::AlreadyCompleted);
        }
        if !self.tracker.is_target_met() {
            return Err(SessionStateError::TargetNotMet {
                completed: self.tracker.completed_count(),
                target: self.tracker.target_sets(),
            });
        }

        self.completed.insert(exercise_id);
        if self.has_next() {
            self.resting = true;
            Ok(CompletionOutcome::Rest {
                secs: self.workout.rest().between_exercises_secs,
            })
        } else {
            Ok(CompletionOutcome::WorkoutComplete)
        }
    }

    /// Whether the "next exercise" action is available.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.started_at.is_some()
            && self.completed.contains(self.current_exercise().id())
            && self.has_next()
    }

    /// Move to the next exercise and reset the set tracker for it.
    ///
    /// # Errors
    ///
    /// Returns `CurrentNotCompleted` or `NoNextExercise` when advancing is not allowed.
    pub fn advance(&mut self) -> Result<&ExerciseDefinition, SessionStateError> {
        if self.started_at.is_none() {
            return Err(SessionStateError::NotStarted);
        }
        if !self.completed.contains(self.current_exercise().id()) {
            return Err(SessionStateError::CurrentNotCompleted);
        }
        if !self.has_next() {
            return Err(SessionStateError::NoNextExercise);
        }

        self.current_index += 1;
        self.resting = false;
        let target = self.current_exercise().target_sets();
        self.tracker.reset(target);
        Ok(self.current_exercise())
    }

    /// The rest timer ran out. Clears the resting flag; the cursor stays put.
    pub fn finish_rest(&mut self) {
        self.resting = false;
    }

    /// # Errors
    ///
    /// Returns `SessionStateError::NotFinished` until every exercise is completed.
    pub fn summary(&self, now: DateTime<Utc>) -> Result<SessionSummary, SessionStateError> {
        let started_at = self.started_at.ok_or(SessionStateError::NotStarted)?;
        if !self.is_complete() {
            return Err(SessionStateError::NotFinished);
        }
        let total = u32::try_from(self.workout.exercise_count()).unwrap_or(u32::MAX);
        let completed = u32::try_from(self.completed.len()).unwrap_or(u32::MAX);
        Ok(SessionSummary::new(
            self.workout.id().clone(),
            self.workout.title(),
            started_at,
            now,
            self.workout.calories(),
            completed,
            total,
        )?)
    }

    fn has_next(&self) -> bool {
        self.current_index + 1 < self.workout.exercise_count()
    }

    fn ensure_in_progress(&self) -> Result<(), SessionStateError> {
        match self.phase() {
            SessionPhase::NotStarted => Err(SessionStateError::NotStarted),
            SessionPhase::Finished => Err(SessionStateError::Finished),
            SessionPhase::InProgress { .. } => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::model::WorkoutId;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn session(id: &str) -> WorkoutSession {
        let catalog = Catalog::builtin().unwrap();
        let workout = catalog.workout(&WorkoutId::new(id).unwrap()).unwrap();
        WorkoutSession::new(workout)
    }

    fn meet_target(session: &mut WorkoutSession) {
        let target = session.tracker().target_sets();
        let tracker = session.tracker_mut();
        while tracker.len() < target as usize {
            tracker.add_set();
        }
        let ids: Vec<_> = tracker.sets().iter().map(|set| set.id).collect();
        for id in ids {
            tracker.toggle_complete(id).unwrap();
        }
    }

    #[test]
    fn new_session_is_not_started() {
        let session = session("full-body-beginner");
        assert_eq!(session.phase(), SessionPhase::NotStarted);
        assert!(session.started_at().is_none());
        assert_eq!(session.tracker().target_sets(), 3);
    }

    #[test]
    fn completing_before_start_is_rejected() {
        let mut session = session("full-body-beginner");
        assert_eq!(session.complete_current(), Err(SessionStateError::NotStarted));
    }

    #[test]
    fn start_twice_is_rejected() {
        let mut session = session("full-body-beginner");
        session.start(fixed_now()).unwrap();
        assert_eq!(session.start(fixed_now()), Err(SessionStateError::AlreadyStarted));
    }

    #[test]
    fn completion_requires_target_met() {
        let mut session = session("full-body-beginner");
        session.start(fixed_now()).unwrap();
        let err = session.complete_current().unwrap_err();
        assert_eq!(err, SessionStateError::TargetNotMet { completed: 0, target: 3 });
    }

    #[test]
    fn completing_non_last_exercise_starts_rest() {
        let mut session = session("full-body-beginner");
        session.start(fixed_now()).unwrap();
        meet_target(&mut session);

        let outcome = session.complete_current().unwrap();
        assert_eq!(outcome, CompletionOutcome::Rest { secs: 90 });
        assert!(session.is_resting());
        assert_eq!(session.rest_timer_secs(), 90);
        assert_eq!(session.phase(), SessionPhase::InProgress { index: 0, resting: true });
        assert_eq!(session.complete_current(), Err(SessionStateError::AlreadyCompleted));
    }

    #[test]
    fn rest_completion_does_not_advance() {
        let mut session = session("full-body-beginner");
        session.start(fixed_now()).unwrap();
        meet_target(&mut session);
        session.complete_current().unwrap();

        session.finish_rest();
        assert!(!session.is_resting());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.rest_timer_secs(), 60);
    }

    #[test]
    fn advance_requires_current_completed() {
        let mut session = session("full-body-beginner");
        session.start(fixed_now()).unwrap();
        assert!(!session.can_advance());
        assert_eq!(session.advance().unwrap_err(), SessionStateError::CurrentNotCompleted);
    }

    #[test]
    fn advance_resets_tracker_and_rest() {
        let mut session = session("upper-body-strength");
        session.start(fixed_now()).unwrap();
        meet_target(&mut session);
        session.complete_current().unwrap();
        assert!(session.can_advance());

        let next = session.advance().unwrap();
        assert_eq!(next.id().as_str(), "bent-over-rows");
        assert_eq!(session.current_index(), 1);
        assert!(!session.is_resting());
        assert_eq!(session.tracker().len(), 1);
        assert_eq!(session.tracker().completed_count(), 0);
        assert_eq!(session.tracker().target_sets(), 4);
    }

    #[test]
    fn index_never_exceeds_last_and_never_decreases() {
        let mut session = session("lower-body-power");
        session.start(fixed_now()).unwrap();
        let last = session.workout().exercise_count() - 1;
        let mut previous = session.current_index();

        loop {
            meet_target(&mut session);
            let outcome = session.complete_current().unwrap();
            if session.current_index() == last {
                assert_eq!(outcome, CompletionOutcome::WorkoutComplete);
                assert!(!session.is_resting());
                assert_eq!(session.advance().unwrap_err(), SessionStateError::NoNextExercise);
                break;
            }
            assert!(session.is_resting());
            session.advance().unwrap();
            assert!(session.current_index() > previous);
            assert!(session.current_index() <= last);
            previous = session.current_index();
        }
        assert_eq!(session.current_index(), last);
    }

    #[test]
    fn full_body_beginner_runs_to_finished_summary() {
        let mut session = session("full-body-beginner");
        let start = fixed_now();
        session.start(start).unwrap();
        assert_eq!(session.workout().exercise_count(), 6);

        for index in 0..6 {
            assert_eq!(session.phase(), SessionPhase::InProgress { index, resting: false });
            meet_target(&mut session);
            session.complete_current().unwrap();
            if index < 5 {
                assert_ne!(session.phase(), SessionPhase::Finished);
                session.advance().unwrap();
            }
        }

        assert_eq!(session.phase(), SessionPhase::Finished);
        let summary = session.summary(start + Duration::minutes(33)).unwrap();
        assert_eq!(summary.completed_exercises(), 6);
        assert_eq!(summary.calories(), 250);
        assert_eq!(summary.elapsed_minutes(), 33);
        assert_eq!(session.complete_current(), Err(SessionStateError::Finished));
    }

    #[test]
    fn summary_before_finish_is_rejected() {
        let mut session = session("hiit-cardio-blast");
        session.start(fixed_now()).unwrap();
        assert_eq!(session.summary(fixed_now()).unwrap_err(), SessionStateError::NotFinished);
    }

    #[test]
    fn progress_tracks_cursor() {
        let mut session = session("lower-body-power");
        session.start(fixed_now()).unwrap();
        meet_target(&mut session);
        session.complete_current().unwrap();
        session.advance().unwrap();

        let progress = session.progress();
        assert_eq!(progress.completed, 1);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.percent, 25);
    }
}
