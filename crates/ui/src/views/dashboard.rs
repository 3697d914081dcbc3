use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use services::Destination;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressVm, StatTileVm, SummaryCardVm, WorkoutCardVm, map_summary_cards};

const RECENT_LIMIT: usize = 3;
const FEATURED_LIMIT: usize = 2;

#[derive(Clone, Debug, PartialEq)]
struct DashboardData {
    tiles: Vec<StatTileVm>,
    featured: Vec<WorkoutCardVm>,
    recent: Vec<SummaryCardVm>,
}

#[component]
pub fn DashboardView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    // Launch-time `--workout` jumps straight into the player, once.
    let launch_ctx = ctx.clone();
    use_effect(move || {
        if let Some(workout_id) = launch_ctx.take_initial_workout() {
            tracing::debug!(workout = %workout_id, "opening launch workout");
            navigator.replace(Route::from(Destination::Session(workout_id)));
        }
    });

    let catalog = ctx.catalog();
    let summaries = ctx.summaries();
    let resource = use_resource(move || {
        let catalog = catalog.clone();
        let summaries = summaries.clone();
        async move {
            let tiles = ProgressVm::from(summaries.totals()).tiles;
            let featured = catalog
                .workouts()
                .iter()
                .take(FEATURED_LIMIT)
                .map(|workout| WorkoutCardVm::from(workout.as_ref()))
                .collect();
            let recent = map_summary_cards(&summaries.list_recent(RECENT_LIMIT));
            Ok::<_, ViewError>(DashboardData {
                tiles,
                featured,
                recent,
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            section { class: "hero",
                h2 { "Transform Your Fitness Journey" }
                p { "Track workouts, monitor progress, and achieve your fitness goals." }
                div { class: "hero-actions",
                    Link { class: "btn btn-primary", to: Route::Workouts {}, "Start Workout" }
                    Link { class: "btn btn-secondary", to: Route::AiWorkout {}, "Generate with AI" }
                }
            }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "stats-grid",
                        for tile in data.tiles {
                            div { class: "stat-card",
                                span { class: "stat-title", "{tile.title}" }
                                span { class: "stat-value", "{tile.value}" }
                            }
                        }
                    }

                    h3 { "Featured Workouts" }
                    div { class: "card-grid",
                        for card in data.featured {
                            div { class: "card",
                                h4 { "{card.title}" }
                                p { "{card.duration} • {card.calories_label}" }
                                Link {
                                    class: "btn btn-secondary",
                                    to: Route::Session { workout_id: card.id.to_string() },
                                    "Start"
                                }
                            }
                        }
                    }

                    h3 { "Recent Workouts" }
                    if data.recent.is_empty() {
                        p { class: "muted", "No workouts completed yet." }
                    } else {
                        ul { class: "summary-list",
                            for card in data.recent {
                                li {
                                    strong { "{card.title}" }
                                    span { " {card.finished_at_str} • {card.duration_str}" }
                                }
                            }
                        }
                    }
                },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}
