use serde::Serialize;
use thiserror::Error;

use crate::model::exercise::{ExerciseCategory, ExerciseDefinition, ExerciseError};
use crate::model::ids::{BuilderEntryId, ExerciseId, WorkoutId};
use crate::model::workout::{Difficulty, RestPlan, WorkoutDefinition, WorkoutError, WorkoutMeta};

/// Rest given to a freshly added exercise, in seconds.
pub const DEFAULT_BUILDER_REST_SECS: u32 = 60;

/// Working time budgeted per exercise when estimating duration.
const WORK_SECS_PER_EXERCISE: u32 = 120;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BuilderError {
    #[error("please add a title for your workout")]
    MissingTitle,

    #[error("please add at least one exercise to your workout")]
    NoExercises,

    #[error("builder entry not found: {0}")]
    UnknownEntry(BuilderEntryId),

    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}

/// One exercise row of a custom workout, seeded from the library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuilderEntry {
    pub id: BuilderEntryId,
    pub exercise_id: ExerciseId,
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_secs: u32,
    pub notes: String,
    pub category: ExerciseCategory,
    pub description: String,
    pub target_muscles: Vec<String>,
}

/// Field-level edit applied to a builder row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryEdit {
    Sets(u32),
    Reps(String),
    RestSecs(u32),
    Notes(String),
}

/// Draft of a user-defined workout.
///
/// Rows keep insertion order. The same library exercise may be added more
/// than once; `to_definition` gives repeats distinct ids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkoutBuilder {
    pub title: String,
    pub description: String,
    pub category: ExerciseCategory,
    pub difficulty: Difficulty,
    entries: Vec<BuilderEntry>,
    next_id: u64,
}

impl Default for WorkoutBuilder {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: ExerciseCategory::Strength,
            difficulty: Difficulty::Beginner,
            entries: Vec::new(),
            next_id: 0,
        }
    }
}

impl WorkoutBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn entries(&self) -> &[BuilderEntry] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a library exercise with its prescribed sets and reps.
    pub fn add_exercise(&mut self, exercise: &ExerciseDefinition) -> BuilderEntryId {
        self.next_id += 1;
        let id = BuilderEntryId::new(self.next_id);
        self.entries.push(BuilderEntry {
            id,
            exercise_id: exercise.id().clone(),
            name: exercise.name().to_string(),
            sets: exercise.target_sets(),
            reps: exercise.target_reps().to_string(),
            rest_secs: DEFAULT_BUILDER_REST_SECS,
            notes: String::new(),
            category: exercise.category(),
            description: exercise.description().to_string(),
            target_muscles: exercise.target_muscles().to_vec(),
        });
        id
    }

    /// # Errors
    ///
    /// Returns `BuilderError::UnknownEntry` if no row has this id.
    pub fn remove_exercise(&mut self, id: BuilderEntryId) -> Result<BuilderEntry, BuilderError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(BuilderError::UnknownEntry(id))?;
        Ok(self.entries.remove(index))
    }

    /// # Errors
    ///
    /// Returns `BuilderError::UnknownEntry` if no row has this id.
    pub fn edit(&mut self, id: BuilderEntryId, edit: EntryEdit) -> Result<(), BuilderError> {
        let entry = self
            .entries
            .iter_mut()
            .find(|entry| entry.id == id)
            .ok_or(BuilderError::UnknownEntry(id))?;
        match edit {
            EntryEdit::Sets(sets) => entry.sets = sets,
            EntryEdit::Reps(reps) => entry.reps = reps,
            EntryEdit::RestSecs(secs) => entry.rest_secs = secs,
            EntryEdit::Notes(notes) => entry.notes = notes,
        }
        Ok(())
    }

    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.entries.iter().map(|entry| entry.sets).sum()
    }

    /// Rest across every set plus two working minutes per exercise, rounded
    /// to the nearest minute.
    #[must_use]
    pub fn estimated_minutes(&self) -> u32 {
        let rest: u32 = self
            .entries
            .iter()
            .map(|entry| entry.rest_secs.saturating_mul(entry.sets))
            .sum();
        let work = WORK_SECS_PER_EXERCISE.saturating_mul(self.entries.len() as u32);
        (rest.saturating_add(work) + 30) / 60
    }

    /// # Errors
    ///
    /// Returns `BuilderError::MissingTitle` for a blank title, then
    /// `BuilderError::NoExercises` for an empty list.
    pub fn validate(&self) -> Result<(), BuilderError> {
        if self.title.trim().is_empty() {
            return Err(BuilderError::MissingTitle);
        }
        if self.entries.is_empty() {
            return Err(BuilderError::NoExercises);
        }
        Ok(())
    }

    /// Freeze the draft into a workout the session player can run.
    ///
    /// # Errors
    ///
    /// Returns the `validate` errors, or `BuilderError::Exercise` when a row
    /// has zero sets.
    pub fn to_definition(
        &self,
        id: WorkoutId,
        calories: u32,
    ) -> Result<WorkoutDefinition, BuilderError> {
        self.validate()?;

        let mut exercises = Vec::with_capacity(self.entries.len());
        for (index, entry) in self.entries.iter().enumerate() {
            let repeats = self.entries[..index]
                .iter()
                .filter(|earlier| earlier.exercise_id == entry.exercise_id)
                .count();
            let exercise_id = if repeats == 0 {
                entry.exercise_id.clone()
            } else {
                ExerciseId::new(format!("{}-{}", entry.exercise_id, repeats + 1))
                    .map_err(|_| WorkoutError::DuplicateExercise(entry.exercise_id.clone()))?
            };
            let description = if entry.notes.trim().is_empty() {
                entry.description.clone()
            } else {
                entry.notes.trim().to_string()
            };
            exercises.push(ExerciseDefinition::new(
                exercise_id,
                entry.name.clone(),
                entry.sets,
                entry.reps.clone(),
                entry.category,
                description,
                entry.target_muscles.clone(),
            )?);
        }

        let min_rest = self
            .entries
            .iter()
            .map(|entry| entry.rest_secs)
            .min()
            .unwrap_or(DEFAULT_BUILDER_REST_SECS);
        let max_rest = self
            .entries
            .iter()
            .map(|entry| entry.rest_secs)
            .max()
            .unwrap_or(DEFAULT_BUILDER_REST_SECS);

        Ok(WorkoutDefinition::new(
            id,
            self.title.clone(),
            WorkoutMeta {
                duration_label: format!("{} min", self.estimated_minutes()),
                difficulty: self.difficulty,
                category: self.category,
                description: self.description.trim().to_string(),
            },
            calories,
            RestPlan {
                between_sets_secs: min_rest,
                between_exercises_secs: max_rest,
            },
            exercises,
        )?)
    }
}
