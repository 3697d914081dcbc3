use dioxus::prelude::*;
use dioxus_router::Link;

use fit_core::catalog::WorkoutFilter;
use fit_core::model::{Difficulty, ExerciseCategory};

use crate::app::ActiveSettings;
use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{ALL_OPTION, WorkoutCardVm, parse_category_option, parse_difficulty_option};

#[component]
pub fn WorkoutsView() -> Element {
    let ctx = use_context::<AppContext>();
    let settings = use_context::<ActiveSettings>();
    let catalog = ctx.catalog();

    let mut search = use_signal(String::new);
    let mut difficulty = use_signal(|| ALL_OPTION.to_string());
    let mut category = use_signal(|| ALL_OPTION.to_string());

    let filter = WorkoutFilter {
        search: search.read().clone(),
        difficulty: parse_difficulty_option(&difficulty.read()),
        category: parse_category_option(&category.read()),
    };
    let cards: Vec<WorkoutCardVm> = catalog
        .filter_workouts(&filter)
        .iter()
        .map(|workout| WorkoutCardVm::from(workout.as_ref()))
        .collect();
    let stats = catalog.stats();
    let show_badges = settings.0.read().show_difficulty_badges();

    rsx! {
        div { class: "page",
            h2 { "Workouts" }
            p { class: "muted", "Choose from our curated workout programs" }

            div { class: "stats-grid",
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.workout_count}" }
                    span { class: "stat-title", "Available programs" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.exercise_count}" }
                    span { class: "stat-title", "Exercises" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{stats.average_calories}" }
                    span { class: "stat-title", "Avg. calories" }
                }
            }

            div { class: "filters",
                input {
                    r#type: "search",
                    placeholder: "Search workouts...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
                label { "Difficulty"
                    select {
                        value: "{difficulty}",
                        onchange: move |evt| difficulty.set(evt.value()),
                        option { value: ALL_OPTION, "All" }
                        for level in Difficulty::ALL {
                            option { value: level.as_str(), "{level}" }
                        }
                    }
                }
                label { "Category"
                    select {
                        value: "{category}",
                        onchange: move |evt| category.set(evt.value()),
                        option { value: ALL_OPTION, "All" }
                        for kind in ExerciseCategory::ALL {
                            option { value: kind.as_str(), "{kind}" }
                        }
                    }
                }
            }

            if cards.is_empty() {
                p { class: "muted", "No workouts match your filters." }
            } else {
                div { class: "card-grid",
                    for card in cards {
                        WorkoutCard { key: "{card.id}", card, show_badges }
                    }
                }
            }
        }
    }
}

#[component]
fn WorkoutCard(card: WorkoutCardVm, show_badges: bool) -> Element {
    rsx! {
        div { class: "card workout-card",
            div { class: "card-header",
                h3 { "{card.title}" }
                if show_badges {
                    span { class: card.difficulty_class, "{card.difficulty}" }
                }
            }
            p { "{card.description}" }
            p { class: "muted",
                "{card.duration} • {card.calories_label} • {card.exercises_label} • {card.category}"
            }
            Link {
                class: "btn btn-primary",
                to: Route::Session { workout_id: card.id.to_string() },
                "Start Workout"
            }
        }
    }
}
