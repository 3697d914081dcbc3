use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use fit_core::catalog::Catalog;
use fit_core::model::{
    ExerciseCategory, ExerciseDefinition, GeneratedExercise, GeneratedWorkout, GeneratorParams,
};

use crate::error::GenerationFailure;

pub type GenerationResult = Result<GeneratedWorkout, GenerationFailure>;

/// Something that turns generator params into a workout plan.
///
/// Implementations may take a while; callers await them off the UI thread.
#[async_trait]
pub trait WorkoutGenerator: Send + Sync {
    async fn generate(&self, params: &GeneratorParams) -> GenerationResult;
}

pub const DEFAULT_GENERATION_DELAY: Duration = Duration::from_secs(2);

const TEMPLATE: &str = include_str!("template.json");

/// Offline generator: waits a fixed delay, then fills a canned plan from the params.
#[derive(Clone)]
pub struct CannedGenerator {
    library: Arc<Catalog>,
    delay: Duration,
    seed: Option<u64>,
}

impl CannedGenerator {
    #[must_use]
    pub fn new(library: Arc<Catalog>) -> Self {
        Self {
            library,
            delay: DEFAULT_GENERATION_DELAY,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fixed RNG seed so exercise picks repeat across runs.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn plan(&self, params: &GeneratorParams) -> GenerationResult {
        let mut plan: GeneratedWorkout =
            serde_json::from_str(TEMPLATE).map_err(|err| GenerationFailure::Template(err.to_string()))?;

        let kind = params.workout_type.as_str();
        plan.title = format!("AI-Generated {kind} Workout");
        plan.description = format!(
            "Personalized {} workout for {}",
            kind.to_lowercase(),
            params.goal.trim()
        );
        plan.minutes = params.minutes;
        plan.difficulty = params.fitness_level;

        if !params.target_muscles.is_empty() {
            let mut picks = self.matching_exercises(params);
            if picks.is_empty() {
                return Err(GenerationFailure::NoExercises);
            }
            match self.seed {
                Some(seed) => picks.shuffle(&mut StdRng::seed_from_u64(seed)),
                None => picks.shuffle(&mut rand::rng()),
            }
            picks.truncate(exercise_budget(params.minutes));
            plan.exercises = picks.into_iter().map(to_generated).collect();
        }

        Ok(plan)
    }

    fn matching_exercises(&self, params: &GeneratorParams) -> Vec<&ExerciseDefinition> {
        let wanted: Vec<&str> = params
            .target_muscles
            .iter()
            .flat_map(|label| expand_muscle_group(label))
            .collect();
        let by_muscle: Vec<&ExerciseDefinition> = self
            .library
            .exercises()
            .iter()
            .filter(|exercise| wanted.iter().any(|m| exercise.targets_muscle(m)))
            .collect();
        let by_type: Vec<&ExerciseDefinition> = by_muscle
            .iter()
            .copied()
            .filter(|exercise| exercise.category() == params.workout_type)
            .collect();
        if by_type.is_empty() { by_muscle } else { by_type }
    }
}

#[async_trait]
impl WorkoutGenerator for CannedGenerator {
    async fn generate(&self, params: &GeneratorParams) -> GenerationResult {
        params.validate()?;
        tracing::debug!(delay_ms = self.delay.as_millis(), "generating canned workout");
        tokio::time::sleep(self.delay).await;
        self.plan(params)
    }
}

/// Form labels that cover several library muscles.
fn expand_muscle_group(label: &str) -> Vec<&str> {
    match label {
        "Arms" => vec!["Biceps", "Triceps", "Forearms"],
        other => vec![other],
    }
}

fn exercise_budget(minutes: u32) -> usize {
    usize::try_from((minutes / 10).clamp(3, 6)).unwrap_or(3)
}

fn to_generated(exercise: &ExerciseDefinition) -> GeneratedExercise {
    let rest_secs = match exercise.category() {
        ExerciseCategory::Strength => 90,
        ExerciseCategory::Cardio => 45,
        ExerciseCategory::Flexibility => 30,
    };
    GeneratedExercise {
        name: exercise.name().to_string(),
        sets: exercise.target_sets(),
        reps: exercise.target_reps().to_string(),
        rest_secs,
        instructions: exercise.description().to_string(),
        target_muscles: exercise.target_muscles().to_vec(),
    }
}
