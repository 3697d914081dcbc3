use dioxus::prelude::*;
use dioxus_router::Link;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{ProgressVm, SummaryCardVm, map_summary_cards};

const HISTORY_LIMIT: usize = 20;

#[derive(Clone, Debug, PartialEq)]
struct ProgressData {
    progress: ProgressVm,
    cards: Vec<SummaryCardVm>,
}

#[component]
pub fn ProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let summaries = ctx.summaries();

    let resource = use_resource(move || {
        let summaries = summaries.clone();
        async move {
            Ok::<_, ViewError>(ProgressData {
                progress: ProgressVm::from(summaries.totals()),
                cards: map_summary_cards(&summaries.list_recent(HISTORY_LIMIT)),
            })
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Progress Tracking" }
            p { class: "muted", "Monitor your fitness journey and celebrate achievements" }

            match state {
                ViewState::Idle => rsx! {
                    p { "Idle" }
                },
                ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! {
                    div { class: "stats-grid",
                        for tile in data.progress.tiles {
                            div { class: "stat-card",
                                span { class: "stat-title", "{tile.title}" }
                                span { class: "stat-value", "{tile.value}" }
                            }
                        }
                    }
                    h3 { "Workout History" }
                    if data.progress.is_empty {
                        p { class: "muted", "No workouts completed yet." }
                        Link { class: "btn btn-primary", to: Route::Workouts {}, "Browse Workouts" }
                    } else {
                        ul { class: "summary-list",
                            for card in data.cards {
                                SummaryRow { key: "{card.id}", card }
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

#[component]
fn SummaryRow(card: SummaryCardVm) -> Element {
    rsx! {
        li {
            div { class: "summary-title",
                strong { "{card.title}" }
                span { class: "muted", " {card.finished_at_str}" }
            }
            p { "{card.duration_str} | {card.calories_str} | {card.exercises_str}" }
            Link {
                class: "summary-link",
                to: Route::Session { workout_id: card.workout_id.to_string() },
                "Do it again"
            }
        }
    }
}
