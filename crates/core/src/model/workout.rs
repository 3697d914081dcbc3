use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::exercise::{ExerciseCategory, ExerciseDefinition};
use crate::model::ids::{ExerciseId, WorkoutId};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum WorkoutError {
    #[error("workout title cannot be empty")]
    EmptyTitle,

    #[error("workout must contain at least one exercise")]
    NoExercises,

    #[error("exercise {0} appears more than once")]
    DuplicateExercise(ExerciseId),

    #[error("unknown difficulty: {0}")]
    UnknownDifficulty(String),
}

//
// ─── DIFFICULTY ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| WorkoutError::UnknownDifficulty(s.to_string()))
    }
}

//
// ─── DEFINITION ────────────────────────────────────────────────────────────────
//

/// Descriptive metadata shown on catalogue cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutMeta {
    pub duration_label: String,
    pub difficulty: Difficulty,
    pub category: ExerciseCategory,
    pub description: String,
}

/// Rest intervals used by the session player, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RestPlan {
    pub between_sets_secs: u32,
    pub between_exercises_secs: u32,
}

/// Immutable catalogue entry describing a full workout.
///
/// Always holds at least one exercise and no exercise id twice, so a session
/// cursor over it is never empty and completion can be tracked by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutDefinition {
    id: WorkoutId,
    title: String,
    meta: WorkoutMeta,
    calories: u32,
    rest: RestPlan,
    exercises: Vec<ExerciseDefinition>,
}

impl WorkoutDefinition {
    /// Creates a validated workout definition.
    ///
    /// # Errors
    ///
    /// Returns `WorkoutError::EmptyTitle`, `WorkoutError::NoExercises` or
    /// `WorkoutError::DuplicateExercise` when the definition is unusable.
    pub fn new(
        id: WorkoutId,
        title: impl Into<String>,
        meta: WorkoutMeta,
        calories: u32,
        rest: RestPlan,
        exercises: Vec<ExerciseDefinition>,
    ) -> Result<Self, WorkoutError> {
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(WorkoutError::EmptyTitle);
        }
        if exercises.is_empty() {
            return Err(WorkoutError::NoExercises);
        }
        let mut seen = HashSet::with_capacity(exercises.len());
        for exercise in &exercises {
            if !seen.insert(exercise.id()) {
                return Err(WorkoutError::DuplicateExercise(exercise.id().clone()));
            }
        }

        Ok(Self {
            id,
            title,
            meta,
            calories,
            rest,
            exercises,
        })
    }

    #[must_use]
    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn meta(&self) -> &WorkoutMeta {
        &self.meta
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.meta.difficulty
    }

    #[must_use]
    pub fn category(&self) -> ExerciseCategory {
        self.meta.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.meta.description
    }

    #[must_use]
    pub fn calories(&self) -> u32 {
        self.calories
    }

    #[must_use]
    pub fn rest(&self) -> RestPlan {
        self.rest
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, index: usize) -> Option<&ExerciseDefinition> {
        self.exercises.get(index)
    }

    #[must_use]
    pub fn exercise_count(&self) -> usize {
        self.exercises.len()
    }

    #[must_use]
    pub fn contains_exercise(&self, id: &ExerciseId) -> bool {
        self.exercises.iter().any(|exercise| exercise.id() == id)
    }
}
