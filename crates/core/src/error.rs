use thiserror::Error;

use crate::catalog::CatalogError;
use crate::model::{
    BuilderError, ExerciseError, MeasurementError, NutritionError, SessionSummaryError, WorkoutError,
};
use crate::session::SessionStateError;
use crate::set_tracker::SetTrackerError;

/// Umbrella error for callers that do not care which domain rule failed.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Exercise(#[from] ExerciseError),
    #[error(transparent)]
    Workout(#[from] WorkoutError),
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    SetTracker(#[from] SetTrackerError),
    #[error(transparent)]
    Session(#[from] SessionStateError),
    #[error(transparent)]
    Summary(#[from] SessionSummaryError),
    #[error(transparent)]
    Nutrition(#[from] NutritionError),
    #[error(transparent)]
    Builder(#[from] BuilderError),
    #[error(transparent)]
    Measurement(#[from] MeasurementError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SetId;

    #[test]
    fn domain_errors_convert_into_umbrella() {
        let err: Error = SetTrackerError::UnknownSet(SetId::new(7)).into();
        assert!(matches!(err, Error::SetTracker(_)));
        assert_eq!(err.to_string(), "set 7 not found");

        let err: Error = WorkoutError::NoExercises.into();
        assert!(matches!(err, Error::Workout(WorkoutError::NoExercises)));
    }
}
