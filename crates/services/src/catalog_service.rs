use std::sync::Arc;

use fit_core::catalog::{Catalog, CatalogError, ExerciseFilter, WorkoutFilter};
use fit_core::model::{ExerciseDefinition, FoodItem, ThemeId, ThemeOption, WorkoutDefinition, WorkoutId};

use crate::error::CatalogServiceError;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogStats {
    pub workout_count: usize,
    pub exercise_count: usize,
    pub average_calories: u32,
}

/// Read-only queries over the built-in catalogue.
#[derive(Clone)]
pub struct CatalogService {
    catalog: Arc<Catalog>,
}

impl CatalogService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// # Errors
    ///
    /// Returns `CatalogServiceError` if the built-in data fails validation.
    pub fn builtin() -> Result<Self, CatalogServiceError> {
        Ok(Self::new(Arc::new(Catalog::builtin()?)))
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn workouts(&self) -> Vec<Arc<WorkoutDefinition>> {
        self.catalog.workouts().to_vec()
    }

    /// # Errors
    ///
    /// Returns `CatalogError::UnknownWorkout` when the id is not in the catalogue.
    pub fn workout(&self, id: &WorkoutId) -> Result<Arc<WorkoutDefinition>, CatalogError> {
        self.catalog
            .workout(id)
            .ok_or_else(|| CatalogError::UnknownWorkout(id.clone()))
    }

    #[must_use]
    pub fn filter_workouts(&self, filter: &WorkoutFilter) -> Vec<Arc<WorkoutDefinition>> {
        self.catalog.filter_workouts(filter)
    }

    #[must_use]
    pub fn filter_exercises(&self, filter: &ExerciseFilter) -> Vec<ExerciseDefinition> {
        self.catalog
            .filter_exercises(filter)
            .into_iter()
            .cloned()
            .collect()
    }

    #[must_use]
    pub fn muscle_labels(&self) -> Vec<String> {
        self.catalog
            .muscle_labels()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn foods(&self) -> Vec<FoodItem> {
        self.catalog.foods().to_vec()
    }

    #[must_use]
    pub fn themes(&self) -> Vec<ThemeOption> {
        self.catalog.themes().to_vec()
    }

    #[must_use]
    pub fn theme(&self, id: &ThemeId) -> Option<ThemeOption> {
        self.catalog.theme(id).cloned()
    }

    #[must_use]
    pub fn stats(&self) -> CatalogStats {
        let workouts = self.catalog.workouts();
        let total: u32 = workouts.iter().map(|w| w.calories()).sum();
        let count = u32::try_from(workouts.len()).unwrap_or(u32::MAX);
        CatalogStats {
            workout_count: workouts.len(),
            exercise_count: self.catalog.exercises().len(),
            average_calories: total.checked_div(count).unwrap_or(0),
        }
    }
}
