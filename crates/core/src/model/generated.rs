use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::exercise::{ExerciseCategory, ExerciseDefinition, ExerciseError};
use crate::model::ids::{ExerciseId, WorkoutId};
use crate::model::workout::{Difficulty, RestPlan, WorkoutDefinition, WorkoutError, WorkoutMeta};

pub const MIN_GENERATED_MINUTES: u32 = 10;
pub const MAX_GENERATED_MINUTES: u32 = 120;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeneratorParamsError {
    #[error("please describe your workout goal")]
    MissingGoal,

    #[error("time available must be between 10 and 120 minutes, got {0}")]
    InvalidDuration(u32),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GeneratedWorkoutError {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    #[error(transparent)]
    Workout(#[from] WorkoutError),
}

/// Inputs to the workout generator, as filled in on the generator form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorParams {
    pub goal: String,
    pub minutes: u32,
    pub fitness_level: Difficulty,
    pub equipment: Vec<String>,
    pub target_muscles: Vec<String>,
    pub workout_type: ExerciseCategory,
    pub intensity: String,
    pub previous_injuries: String,
}

impl Default for GeneratorParams {
    fn default() -> Self {
        Self {
            goal: String::new(),
            minutes: 30,
            fitness_level: Difficulty::Intermediate,
            equipment: Vec::new(),
            target_muscles: Vec::new(),
            workout_type: ExerciseCategory::Strength,
            intensity: "Moderate".into(),
            previous_injuries: String::new(),
        }
    }
}

impl GeneratorParams {
    /// # Errors
    ///
    /// Returns `GeneratorParamsError::MissingGoal` for a blank goal and
    /// `GeneratorParamsError::InvalidDuration` when minutes are out of range.
    pub fn validate(&self) -> Result<(), GeneratorParamsError> {
        if self.goal.trim().is_empty() {
            return Err(GeneratorParamsError::MissingGoal);
        }
        if !(MIN_GENERATED_MINUTES..=MAX_GENERATED_MINUTES).contains(&self.minutes) {
            return Err(GeneratorParamsError::InvalidDuration(self.minutes));
        }
        Ok(())
    }

    /// Adds the label if absent, removes it if present.
    pub fn toggle_equipment(&mut self, label: &str) {
        toggle(&mut self.equipment, label);
    }

    pub fn toggle_muscle(&mut self, label: &str) {
        toggle(&mut self.target_muscles, label);
    }
}

fn toggle(list: &mut Vec<String>, label: &str) {
    if let Some(index) = list.iter().position(|item| item == label) {
        list.remove(index);
    } else {
        list.push(label.to_string());
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedExercise {
    pub name: String,
    pub sets: u32,
    pub reps: String,
    pub rest_secs: u32,
    pub instructions: String,
    pub target_muscles: Vec<String>,
}

/// A generated plan as returned by a workout generator backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedWorkout {
    pub title: String,
    pub description: String,
    pub minutes: u32,
    pub difficulty: Difficulty,
    pub exercises: Vec<GeneratedExercise>,
    pub warmup: Vec<String>,
    pub cooldown: Vec<String>,
    pub tips: Vec<String>,
}

impl GeneratedWorkout {
    /// Convert the plan into a playable workout definition.
    ///
    /// Exercise ids are derived from names; the longest per-exercise rest
    /// becomes the between-exercise rest.
    ///
    /// # Errors
    ///
    /// Returns `GeneratedWorkoutError` if the plan has no exercises or an
    /// exercise is invalid.
    pub fn to_definition(
        &self,
        id: WorkoutId,
        category: ExerciseCategory,
        calories: u32,
    ) -> Result<WorkoutDefinition, GeneratedWorkoutError> {
        let mut exercises = Vec::with_capacity(self.exercises.len());
        for (index, exercise) in self.exercises.iter().enumerate() {
            let id = ExerciseId::new(slugify(&exercise.name))
                .or_else(|_| ExerciseId::new(format!("exercise-{}", index + 1)))
                .map_err(|_| ExerciseError::EmptyName)?;
            exercises.push(ExerciseDefinition::new(
                id,
                exercise.name.clone(),
                exercise.sets,
                exercise.reps.clone(),
                category,
                exercise.instructions.clone(),
                exercise.target_muscles.clone(),
            )?);
        }

        let min_rest = self.exercises.iter().map(|e| e.rest_secs).min().unwrap_or(60);
        let max_rest = self.exercises.iter().map(|e| e.rest_secs).max().unwrap_or(90);

        Ok(WorkoutDefinition::new(
            id,
            self.title.clone(),
            WorkoutMeta {
                duration_label: format!("{} min", self.minutes),
                difficulty: self.difficulty,
                category,
                description: self.description.clone(),
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

/// Lowercase kebab-case slug of a display name; non-alphanumerics collapse to `-`.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() {
            slug.push(ch.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }
    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan() -> GeneratedWorkout {
        GeneratedWorkout {
            title: "AI-Generated Strength Workout".into(),
            description: "Personalized strength workout".into(),
            minutes: 45,
            difficulty: Difficulty::Intermediate,
            exercises: vec![
                GeneratedExercise {
                    name: "Push-ups (Diamond Variation)".into(),
                    sets: 3,
                    reps: "8-12".into(),
                    rest_secs: 60,
                    instructions: "Form diamond shape with hands".into(),
                    target_muscles: vec!["Chest".into()],
                },
                GeneratedExercise {
                    name: "Pike Push-ups".into(),
                    sets: 3,
                    reps: "6-10".into(),
                    rest_secs: 90,
                    instructions: "Create inverted V shape".into(),
                    target_muscles: vec!["Shoulders".into()],
                },
            ],
            warmup: vec![],
            cooldown: vec![],
            tips: vec![],
        }
    }

    #[test]
    fn validate_requires_goal() {
        let params = GeneratorParams::default();
        assert_eq!(params.validate(), Err(GeneratorParamsError::MissingGoal));
    }

    #[test]
    fn validate_checks_minutes() {
        let params = GeneratorParams {
            goal: "get stronger".into(),
            minutes: 5,
            ..GeneratorParams::default()
        };
        assert_eq!(params.validate(), Err(GeneratorParamsError::InvalidDuration(5)));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut params = GeneratorParams::default();
        params.toggle_equipment("Dumbbells");
        params.toggle_muscle("Core");
        assert_eq!(params.equipment, vec!["Dumbbells".to_string()]);
        params.toggle_equipment("Dumbbells");
        assert!(params.equipment.is_empty());
        assert_eq!(params.target_muscles, vec!["Core".to_string()]);
    }

    #[test]
    fn slugify_collapses_punctuation() {
        assert_eq!(slugify("Push-ups (Diamond Variation)"), "push-ups-diamond-variation");
        assert_eq!(slugify("  "), "");
    }

    #[test]
    fn to_definition_builds_playable_workout() {
        let workout = plan()
            .to_definition(WorkoutId::new("ai-generated").unwrap(), ExerciseCategory::Strength, 300)
            .unwrap();
        assert_eq!(workout.exercise_count(), 2);
        assert_eq!(workout.exercise(0).unwrap().id().as_str(), "push-ups-diamond-variation");
        assert_eq!(workout.rest().between_sets_secs, 60);
        assert_eq!(workout.rest().between_exercises_secs, 90);
        assert_eq!(workout.meta().duration_label, "45 min");
    }

    #[test]
    fn to_definition_rejects_empty_plan() {
        let mut empty = plan();
        empty.exercises.clear();
        let err = empty
            .to_definition(WorkoutId::new("ai-generated").unwrap(), ExerciseCategory::Cardio, 0)
            .unwrap_err();
        assert_eq!(err, GeneratedWorkoutError::Workout(WorkoutError::NoExercises));
    }
}
