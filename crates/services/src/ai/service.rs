use std::sync::Arc;

use fit_core::model::{
    ExerciseCategory, GeneratedWorkout, GeneratorParams, GeneratorParamsError,
    MAX_GENERATED_MINUTES, MIN_GENERATED_MINUTES, WorkoutDefinition, WorkoutId,
};

use crate::error::GenerationFailure;
use crate::notice::{Notice, Notifier};

use super::generator::{GenerationResult, WorkoutGenerator};

/// Rough burn rate used to label generated workouts.
const KCAL_PER_MINUTE: u32 = 7;

fn invalid_params_notice(err: &GeneratorParamsError) -> Notice {
    match err {
        GeneratorParamsError::MissingGoal => {
            Notice::error("Missing Goal", "Please describe your workout goal")
        }
        GeneratorParamsError::InvalidDuration(_) => Notice::error(
            "Invalid Duration",
            format!(
                "Time available must be between {MIN_GENERATED_MINUTES} and {MAX_GENERATED_MINUTES} minutes"
            ),
        ),
        other => Notice::error("Invalid Request", other.to_string()),
    }
}

/// Front door for workout generation: validates, calls the backend and tells the user.
#[derive(Clone)]
pub struct AiWorkoutService {
    generator: Arc<dyn WorkoutGenerator>,
    notifier: Arc<dyn Notifier>,
}

impl AiWorkoutService {
    #[must_use]
    pub fn new(generator: Arc<dyn WorkoutGenerator>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            generator,
            notifier,
        }
    }

    /// # Errors
    ///
    /// Returns `GenerationFailure` when the params are invalid or the backend fails.
    pub async fn generate(&self, params: &GeneratorParams) -> GenerationResult {
        if let Err(err) = params.validate() {
            tracing::debug!(error = %err, "generator params rejected");
            self.notifier.notify(invalid_params_notice(&err));
            return Err(err.into());
        }

        match self.generator.generate(params).await {
            Ok(plan) => {
                tracing::info!(
                    title = %plan.title,
                    exercises = plan.exercises.len(),
                    "workout generated"
                );
                self.notifier.notify(Notice::success(
                    "Workout Generated!",
                    "Your personalized AI workout is ready",
                ));
                Ok(plan)
            }
            Err(err) => {
                tracing::warn!(error = %err, "workout generation failed");
                self.notifier
                    .notify(Notice::error("Generation Failed", err.to_string()));
                Err(err)
            }
        }
    }

    /// Turn a generated plan into a workout the session player can run.
    ///
    /// # Errors
    ///
    /// Returns `GenerationFailure::Unplayable` if the plan has no valid exercises.
    pub fn playable(
        &self,
        plan: &GeneratedWorkout,
        category: ExerciseCategory,
    ) -> Result<Arc<WorkoutDefinition>, GenerationFailure> {
        let id = WorkoutId::new("ai-generated")
            .map_err(|err| GenerationFailure::Template(err.to_string()))?;
        let calories = plan.minutes.saturating_mul(KCAL_PER_MINUTE);
        Ok(Arc::new(plan.to_definition(id, category, calories)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::CannedGenerator;
    use crate::notice::{NoticeQueue, Severity};
    use fit_core::catalog::Catalog;
    use std::time::Duration;

    fn service() -> (AiWorkoutService, NoticeQueue) {
        let queue = NoticeQueue::new();
        let generator = CannedGenerator::new(Arc::new(Catalog::builtin().unwrap()))
            .with_delay(Duration::ZERO)
            .with_seed(1);
        (
            AiWorkoutService::new(Arc::new(generator), Arc::new(queue.clone())),
            queue,
        )
    }

    #[tokio::test]
    async fn missing_goal_notifies_error() {
        let (service, queue) = service();
        let result = service.generate(&GeneratorParams::default()).await;
        assert!(result.is_err());

        let notices = queue.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Missing Goal");
        assert_eq!(notices[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn out_of_range_minutes_notify_duration_error() {
        let (service, queue) = service();
        let params = GeneratorParams {
            goal: "build muscle".into(),
            minutes: 0,
            ..GeneratorParams::default()
        };
        let result = service.generate(&params).await;
        assert!(matches!(
            result,
            Err(GenerationFailure::InvalidParams(GeneratorParamsError::InvalidDuration(0)))
        ));

        let notices = queue.drain();
        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].title, "Invalid Duration");
        assert_eq!(
            notices[0].body,
            "Time available must be between 10 and 120 minutes"
        );
        assert_eq!(notices[0].severity, Severity::Error);
    }

    #[tokio::test]
    async fn success_notifies_and_is_playable() {
        let (service, queue) = service();
        let params = GeneratorParams {
            goal: "tone up".into(),
            ..GeneratorParams::default()
        };
        let plan = service.generate(&params).await.unwrap();
        assert_eq!(queue.drain()[0].title, "Workout Generated!");

        let workout = service.playable(&plan, params.workout_type).unwrap();
        assert_eq!(workout.id().as_str(), "ai-generated");
        assert_eq!(workout.calories(), 210);
        assert_eq!(workout.exercise_count(), plan.exercises.len());
    }
}
