//! Built-in workouts, exercise library, foods and themes.

mod data;

use std::collections::HashSet;
use std::sync::Arc;

use thiserror::Error;

use crate::model::{
    Difficulty, ExerciseCategory, ExerciseDefinition, ExerciseError, ExerciseId, FoodId, FoodItem,
    ThemeId, ThemeOption, WorkoutDefinition, WorkoutError, WorkoutId,
};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),

    #[error(transparent)]
    Workout(#[from] WorkoutError),

    #[error("workout not found: {0}")]
    UnknownWorkout(WorkoutId),

    #[error("food not found: {0}")]
    UnknownFood(FoodId),

    #[error("theme not found: {0}")]
    UnknownTheme(ThemeId),
}

/// Workout catalogue query. Empty search matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkoutFilter {
    pub search: String,
    pub difficulty: Option<Difficulty>,
    pub category: Option<ExerciseCategory>,
}

/// Exercise library query. `muscle` matches a target muscle label exactly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExerciseFilter {
    pub search: String,
    pub category: Option<ExerciseCategory>,
    pub muscle: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    workouts: Vec<Arc<WorkoutDefinition>>,
    exercises: Vec<ExerciseDefinition>,
    foods: Vec<FoodItem>,
    themes: Vec<ThemeOption>,
}

impl Catalog {
    /// Build the compiled-in catalogue.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any built-in entry fails validation.
    pub fn builtin() -> Result<Self, CatalogError> {
        let workouts = data::workouts()?;
        let mut exercises: Vec<ExerciseDefinition> = Vec::new();
        let mut seen: HashSet<ExerciseId> = HashSet::new();
        for exercise in workouts
            .iter()
            .flat_map(|w| w.exercises().iter().cloned())
            .chain(data::standalone_exercises()?)
        {
            if seen.insert(exercise.id().clone()) {
                exercises.push(exercise);
            }
        }

        Ok(Self {
            workouts: workouts.into_iter().map(Arc::new).collect(),
            exercises,
            foods: data::foods(),
            themes: data::themes(),
        })
    }

    #[must_use]
    pub fn workouts(&self) -> &[Arc<WorkoutDefinition>] {
        &self.workouts
    }

    #[must_use]
    pub fn workout(&self, id: &WorkoutId) -> Option<Arc<WorkoutDefinition>> {
        self.workouts.iter().find(|w| w.id() == id).cloned()
    }

    #[must_use]
    pub fn filter_workouts(&self, filter: &WorkoutFilter) -> Vec<Arc<WorkoutDefinition>> {
        let needle = filter.search.trim().to_lowercase();
        self.workouts
            .iter()
            .filter(|w| filter.difficulty.is_none_or(|d| w.difficulty() == d))
            .filter(|w| filter.category.is_none_or(|c| w.category() == c))
            .filter(|w| matches_text(&needle, w.title(), w.description()))
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    #[must_use]
    pub fn exercise(&self, id: &ExerciseId) -> Option<&ExerciseDefinition> {
        self.exercises.iter().find(|e| e.id() == id)
    }

    #[must_use]
    pub fn filter_exercises(&self, filter: &ExerciseFilter) -> Vec<&ExerciseDefinition> {
        let needle = filter.search.trim().to_lowercase();
        self.exercises
            .iter()
            .filter(|e| filter.category.is_none_or(|c| e.category() == c))
            .filter(|e| filter.muscle.as_deref().is_none_or(|m| e.targets_muscle(m)))
            .filter(|e| matches_text(&needle, e.name(), e.description()))
            .collect()
    }

    /// Distinct target muscles across the library, in first-seen order.
    #[must_use]
    pub fn muscle_labels(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.exercises
            .iter()
            .flat_map(|e| e.target_muscles().iter().map(String::as_str))
            .filter(|m| seen.insert(*m))
            .collect()
    }

    #[must_use]
    pub fn foods(&self) -> &[FoodItem] {
        &self.foods
    }

    #[must_use]
    pub fn food(&self, id: FoodId) -> Option<&FoodItem> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Case-insensitive substring match on the food name.
    #[must_use]
    pub fn search_foods(&self, term: &str) -> Vec<&FoodItem> {
        let needle = term.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| needle.is_empty() || f.name.to_lowercase().contains(&needle))
            .collect()
    }

    #[must_use]
    pub fn themes(&self) -> &[ThemeOption] {
        &self.themes
    }

    #[must_use]
    pub fn theme(&self, id: &ThemeId) -> Option<&ThemeOption> {
        self.themes.iter().find(|t| &t.id == id)
    }
}

fn matches_text(needle: &str, title: &str, description: &str) -> bool {
    needle.is_empty()
        || title.to_lowercase().contains(needle)
        || description.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::builtin().unwrap()
    }

    #[test]
    fn builtin_has_all_content() {
        let catalog = catalog();
        assert_eq!(catalog.workouts().len(), 4);
        assert_eq!(catalog.exercises().len(), 24);
        assert_eq!(catalog.foods().len(), 8);
        assert_eq!(catalog.themes().len(), 6);
    }

    #[test]
    fn workout_lookup_by_id() {
        let catalog = catalog();
        let id = WorkoutId::new("full-body-beginner").unwrap();
        let workout = catalog.workout(&id).unwrap();
        assert_eq!(workout.title(), "Full Body Beginner");
        assert_eq!(workout.calories(), 250);
        assert_eq!(workout.exercise_count(), 6);

        assert!(catalog.workout(&WorkoutId::new("yoga-flow").unwrap()).is_none());
    }

    #[test]
    fn filter_workouts_by_text_and_difficulty() {
        let catalog = catalog();

        let hits = catalog.filter_workouts(&WorkoutFilter {
            search: "CARDIO".into(),
            ..WorkoutFilter::default()
        });
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id().as_str(), "hiit-cardio-blast");

        let advanced = catalog.filter_workouts(&WorkoutFilter {
            difficulty: Some(Difficulty::Advanced),
            ..WorkoutFilter::default()
        });
        assert_eq!(advanced.len(), 2);

        let none = catalog.filter_workouts(&WorkoutFilter {
            search: "upper".into(),
            difficulty: Some(Difficulty::Beginner),
            category: None,
        });
        assert!(none.is_empty());
    }

    #[test]
    fn filter_exercises_by_muscle_and_category() {
        let catalog = catalog();
        let triceps = catalog.filter_exercises(&ExerciseFilter {
            muscle: Some("Triceps".into()),
            ..ExerciseFilter::default()
        });
        let names: Vec<_> = triceps.iter().map(|e| e.name()).collect();
        assert!(names.contains(&"Tricep Extensions"));
        assert!(names.contains(&"Bench Press"));

        let cardio = catalog.filter_exercises(&ExerciseFilter {
            category: Some(ExerciseCategory::Cardio),
            ..ExerciseFilter::default()
        });
        assert_eq!(cardio.len(), 6);
    }

    #[test]
    fn muscle_labels_are_distinct_in_first_seen_order() {
        let catalog = catalog();
        let labels = catalog.muscle_labels();
        assert_eq!(&labels[..3], &["Chest", "Triceps", "Shoulders"]);
        let unique: HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), labels.len());
        assert!(labels.contains(&"Calves"));
    }

    #[test]
    fn food_search_is_case_insensitive() {
        let catalog = catalog();
        let hits = catalog.search_foods("rice");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Brown Rice");
        assert_eq!(catalog.search_foods("").len(), 8);
        assert_eq!(catalog.food(FoodId::new(6)).map(|f| f.name.as_str()), Some("Salmon"));
    }

    #[test]
    fn default_theme_is_energy_orange() {
        let catalog = catalog();
        let theme = catalog.theme(&ThemeId::new("default").unwrap()).unwrap();
        assert_eq!(theme.name, "Energy Orange");
        assert!(theme.css_variables().contains("--accent: 25 95% 58%"));
    }
}
