//! Shared error types for the services crate.

use thiserror::Error;

use fit_core::catalog::CatalogError;
use fit_core::model::{
    AppSettingsError, BuilderError, ExerciseId, FoodId, GeneratedWorkoutError,
    GeneratorParamsError, MeasurementError, NutritionError, ParseIdError, SummaryId, ThemeId,
    WorkoutId,
};
use fit_core::session::SessionStateError;
use fit_core::set_tracker::SetTrackerError;

/// Errors emitted by `CatalogService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogServiceError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Errors emitted by the session flow.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionError {
    #[error("workout not found: {0}")]
    UnknownWorkout(WorkoutId),
    #[error(transparent)]
    State(#[from] SessionStateError),
    #[error(transparent)]
    Tracker(#[from] SetTrackerError),
}

/// Errors emitted by `SummaryService`.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum SummaryError {
    #[error("session summary not found: {0}")]
    NotFound(SummaryId),
}

/// Errors emitted by `NutritionService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum NutritionServiceError {
    #[error("food not found: {0}")]
    UnknownFood(FoodId),
    #[error(transparent)]
    Nutrition(#[from] NutritionError),
}

/// Errors emitted by `BuilderService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BuilderServiceError {
    #[error("exercise not found: {0}")]
    UnknownExercise(ExerciseId),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Id(#[from] ParseIdError),
}

/// Errors emitted by `MeasurementService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum MeasurementServiceError {
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}

/// Errors emitted by `SettingsStore`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SettingsError {
    #[error("theme not found: {0}")]
    UnknownTheme(ThemeId),
    #[error(transparent)]
    Invalid(#[from] AppSettingsError),
}

/// Why a workout generator produced no plan.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GenerationFailure {
    #[error(transparent)]
    InvalidParams(#[from] GeneratorParamsError),
    #[error("generator template is malformed: {0}")]
    Template(String),
    #[error("no exercises match the request")]
    NoExercises,
    #[error(transparent)]
    Unplayable(#[from] GeneratedWorkoutError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
