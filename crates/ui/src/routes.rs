use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use services::Destination;

use crate::views::{
    AiWorkoutView, AnalyticsView, BuilderView, DashboardView, ExercisesView, NutritionView,
    ProfileView, ProgressView, SessionView, SettingsView, SocialView, ToastHost, WorkoutsView,
};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", DashboardView)] Dashboard {},
        #[route("/workouts", WorkoutsView)] Workouts {},
        #[route("/workouts/:workout_id", SessionView)] Session { workout_id: String },
        #[route("/workout-builder", BuilderView)] Builder {},
        #[route("/exercises", ExercisesView)] Exercises {},
        #[route("/nutrition", NutritionView)] Nutrition {},
        #[route("/ai-workout", AiWorkoutView)] AiWorkout {},
        #[route("/progress", ProgressView)] Progress {},
        #[route("/analytics", AnalyticsView)] Analytics {},
        #[route("/social", SocialView)] Social {},
        #[route("/profile", ProfileView)] Profile {},
        #[route("/settings", SettingsView)] Settings {},
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Dashboard => Self::Dashboard {},
            Destination::Workouts => Self::Workouts {},
            Destination::Session(workout_id) => Self::Session {
                workout_id: workout_id.to_string(),
            },
            Destination::Exercises => Self::Exercises {},
            Destination::Nutrition => Self::Nutrition {},
            Destination::AiWorkout => Self::AiWorkout {},
            Destination::Progress => Self::Progress {},
            Destination::Settings => Self::Settings {},
        }
    }
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
            ToastHost {}
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "FitTrack" }
            ul {
                li { Link { to: Route::Dashboard {}, "Dashboard" } }
                li { Link { to: Route::Workouts {}, "Workouts" } }
                li { Link { to: Route::Builder {}, "Workout Builder" } }
                li { Link { to: Route::Exercises {}, "Exercises" } }
                li { Link { to: Route::Nutrition {}, "Nutrition" } }
                li { Link { to: Route::AiWorkout {}, "AI Workout" } }
                li { Link { to: Route::Progress {}, "Progress" } }
                li { Link { to: Route::Analytics {}, "Analytics" } }
                li { Link { to: Route::Social {}, "Social" } }
                li { Link { to: Route::Profile {}, "Profile" } }
                li { Link { to: Route::Settings {}, "Settings" } }
            }
        }
    }
}
