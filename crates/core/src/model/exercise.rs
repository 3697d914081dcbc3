use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::model::ids::ExerciseId;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ExerciseError {
    #[error("exercise name cannot be empty")]
    EmptyName,

    #[error("target set count must be > 0")]
    InvalidTargetSets,

    #[error("unknown category: {0}")]
    UnknownCategory(String),
}

/// Broad training category shared by exercises and workouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExerciseCategory {
    Strength,
    Cardio,
    Flexibility,
}

impl ExerciseCategory {
    pub const ALL: [ExerciseCategory; 3] = [Self::Strength, Self::Cardio, Self::Flexibility];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "Strength",
            Self::Cardio => "Cardio",
            Self::Flexibility => "Flexibility",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = ExerciseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ExerciseError::UnknownCategory(s.to_string()))
    }
}

/// Immutable catalogue entry for a single exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseDefinition {
    id: ExerciseId,
    name: String,
    target_sets: u32,
    target_reps: String,
    category: ExerciseCategory,
    description: String,
    target_muscles: Vec<String>,
}

impl ExerciseDefinition {
    /// Creates a validated exercise definition.
    ///
    /// `target_reps` is free-form (`"8-12"`, `"30 sec"`, `"10 each leg"`).
    ///
    /// # Errors
    ///
    /// Returns `ExerciseError::EmptyName` for a blank name and
    /// `ExerciseError::InvalidTargetSets` when `target_sets` is zero.
    pub fn new(
        id: ExerciseId,
        name: impl Into<String>,
        target_sets: u32,
        target_reps: impl Into<String>,
        category: ExerciseCategory,
        description: impl Into<String>,
        target_muscles: Vec<String>,
    ) -> Result<Self, ExerciseError> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(ExerciseError::EmptyName);
        }
        if target_sets == 0 {
            return Err(ExerciseError::InvalidTargetSets);
        }

        Ok(Self {
            id,
            name,
            target_sets,
            target_reps: target_reps.into(),
            category,
            description: description.into(),
            target_muscles,
        })
    }

    #[must_use]
    pub fn id(&self) -> &ExerciseId {
        &self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn target_sets(&self) -> u32 {
        self.target_sets
    }

    #[must_use]
    pub fn target_reps(&self) -> &str {
        &self.target_reps
    }

    #[must_use]
    pub fn category(&self) -> ExerciseCategory {
        self.category
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn target_muscles(&self) -> &[String] {
        &self.target_muscles
    }

    #[must_use]
    pub fn targets_muscle(&self, muscle: &str) -> bool {
        self.target_muscles.iter().any(|m| m == muscle)
    }
}
