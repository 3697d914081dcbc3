use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::ids::WorkoutId;
use crate::time::round_to_minutes;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionSummaryError {
    #[error("finished_at is before started_at")]
    InvalidTimeRange,

    #[error("completed exercises ({completed}) exceed the workout's {total}")]
    TooManyExercises { completed: u32, total: u32 },
}

/// Aggregate summary for a finished workout session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    workout_id: WorkoutId,
    workout_title: String,
    started_at: DateTime<Utc>,
    finished_at: DateTime<Utc>,
    elapsed_minutes: u32,
    calories: u32,
    completed_exercises: u32,
    total_exercises: u32,
}

impl SessionSummary {
    /// Build a summary for a session that ran from `started_at` to `finished_at`.
    ///
    /// Elapsed time is rounded to the nearest whole minute.
    ///
    /// # Errors
    ///
    /// Returns `SessionSummaryError::InvalidTimeRange` if `finished_at` is before `started_at`.
    /// Returns `SessionSummaryError::TooManyExercises` if the counts are inconsistent.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        workout_id: WorkoutId,
        workout_title: impl Into<String>,
        started_at: DateTime<Utc>,
        finished_at: DateTime<Utc>,
        calories: u32,
        completed_exercises: u32,
        total_exercises: u32,
    ) -> Result<Self, SessionSummaryError> {
        if finished_at < started_at {
            return Err(SessionSummaryError::InvalidTimeRange);
        }
        if completed_exercises > total_exercises {
            return Err(SessionSummaryError::TooManyExercises {
                completed: completed_exercises,
                total: total_exercises,
            });
        }

        Ok(Self {
            workout_id,
            workout_title: workout_title.into(),
            started_at,
            finished_at,
            elapsed_minutes: round_to_minutes(finished_at - started_at),
            calories,
            completed_exercises,
            total_exercises,
        })
    }

    #[must_use]
    pub fn workout_id(&self) -> &WorkoutId {
        &self.workout_id
    }

    #[must_use]
    pub fn workout_title(&self) -> &str {
        &self.workout_title
    }

    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    #[must_use]
    pub fn finished_at(&self) -> DateTime<Utc> {
        self.finished_at
    }

    #[must_use]
    pub fn elapsed_minutes(&self) -> u32 {
        self.elapsed_minutes
    }

    #[must_use]
    pub fn calories(&self) -> u32 {
        self.calories
    }

    #[must_use]
    pub fn completed_exercises(&self) -> u32 {
        self.completed_exercises
    }

    #[must_use]
    pub fn total_exercises(&self) -> u32 {
        self.total_exercises
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn workout_id() -> WorkoutId {
        WorkoutId::new("full-body-beginner").unwrap()
    }

    #[test]
    fn summary_rounds_elapsed_minutes() {
        let start = fixed_now();
        let end = start + Duration::seconds(34 * 60 + 31);
        let summary =
            SessionSummary::new(workout_id(), "Full Body Beginner", start, end, 250, 6, 6).unwrap();

        assert_eq!(summary.elapsed_minutes(), 35);
        assert_eq!(summary.calories(), 250);
        assert_eq!(summary.completed_exercises(), 6);
    }

    #[test]
    fn summary_rejects_reversed_range() {
        let start = fixed_now();
        let err = SessionSummary::new(
            workout_id(),
            "Full Body Beginner",
            start,
            start - Duration::seconds(1),
            250,
            6,
            6,
        )
        .unwrap_err();
        assert_eq!(err, SessionSummaryError::InvalidTimeRange);
    }

    #[test]
    fn summary_rejects_inconsistent_counts() {
        let now = fixed_now();
        let err = SessionSummary::new(workout_id(), "x", now, now, 0, 7, 6).unwrap_err();
        assert_eq!(
            err,
            SessionSummaryError::TooManyExercises {
                completed: 7,
                total: 6
            }
        );
    }
}
