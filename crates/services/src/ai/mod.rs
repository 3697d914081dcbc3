pub mod generator;
pub mod service;

pub use generator::{CannedGenerator, DEFAULT_GENERATION_DELAY, GenerationResult, WorkoutGenerator};
pub use service::AiWorkoutService;
