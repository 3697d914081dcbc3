mod ai_workout;
mod analytics;
mod builder;
mod dashboard;
mod exercises;
mod measurements;
mod nutrition;
mod profile;
mod progress;
mod session;
mod settings;
mod social;
mod state;
mod toast;
mod workouts;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use ai_workout::AiWorkoutView;
pub use analytics::AnalyticsView;
pub use builder::BuilderView;
pub use dashboard::DashboardView;
pub use exercises::ExercisesView;
pub use measurements::MeasurementsPanel;
pub use nutrition::NutritionView;
pub use profile::ProfileView;
pub use progress::ProgressView;
pub use session::SessionView;
pub use settings::SettingsView;
pub use social::SocialView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use toast::ToastHost;
pub use workouts::WorkoutsView;
