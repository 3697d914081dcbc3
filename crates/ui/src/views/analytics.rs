use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{AnalyticsVm, analytics};

const HISTORY_WINDOW: usize = 200;

#[component]
pub fn AnalyticsView() -> Element {
    let ctx = use_context::<AppContext>();
    let summaries = ctx.summaries();

    let resource = use_resource(move || {
        let summaries = summaries.clone();
        async move {
            let items = summaries.list_recent(HISTORY_WINDOW);
            Ok::<_, ViewError>(analytics(summaries.totals(), &items, summaries.now()))
        }
    });
    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            h2 { "Advanced Analytics" }
            p { class: "muted", "Deep insights into your training patterns" }

            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    p { "Loading..." }
                },
                ViewState::Ready(data) => rsx! { AnalyticsBody { data } },
                ViewState::Error(err) => rsx! {
                    p { "{err.message()}" }
                },
            }
        }
    }
}

#[component]
fn AnalyticsBody(data: AnalyticsVm) -> Element {
    rsx! {
        div { class: "stats-grid",
            for tile in data.tiles {
                div { class: "stat-card",
                    span { class: "stat-value", "{tile.value}" }
                    span { class: "stat-title", "{tile.title}" }
                }
            }
        }

        div { class: "card",
            h3 { "Weekly Activity" }
            div { class: "week-chart",
                for day in data.week {
                    div { class: "week-bar",
                        div { class: "bar-track",
                            div { class: "bar-fill", style: "height: {day.percent}%" }
                        }
                        span { class: "small", "{day.label}" }
                        span { class: "muted small", "{day.minutes}m" }
                    }
                }
            }
        }

        div { class: "card",
            h3 { "Workout Mix" }
            if data.mix.is_empty() {
                p { class: "muted", "Finish a workout to see your training mix." }
            } else {
                for row in data.mix {
                    div { class: "macro-row",
                        div { class: "macro-header",
                            span { "{row.title}" }
                            span { class: "muted", "{row.count} sessions" }
                        }
                        div { class: "progress",
                            div { class: "progress-fill", style: "width: {row.percent}%" }
                        }
                    }
                }
            }
        }
    }
}
