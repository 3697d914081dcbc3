use fit_core::model::WorkoutId;

/// Where the shell should go after a service-level step.
///
/// Services only name the destination; the UI maps it onto its router.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Dashboard,
    Workouts,
    Session(WorkoutId),
    Exercises,
    Nutrition,
    AiWorkout,
    Progress,
    Settings,
}
