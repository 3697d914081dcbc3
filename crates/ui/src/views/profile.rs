use dioxus::prelude::*;

use services::{Notice, Notifier};

use crate::app::ActiveSettings;
use crate::context::AppContext;
use crate::vm::{ProfileForm, profile_tiles, weekly_goals};

const HISTORY_WINDOW: usize = 200;

#[component]
pub fn ProfileView() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveSettings>();
    let summaries = ctx.summaries();

    let mut profile = use_signal(ProfileForm::default);
    let mut editing = use_signal(|| false);

    let tiles = profile_tiles(summaries.totals());
    let goals = weekly_goals(&summaries.list_recent(HISTORY_WINDOW), summaries.now());
    let unit = active.0.read().weight_unit().label();
    let current = profile.read().clone();
    let initials = current.initials();

    let on_toggle = {
        let notices = ctx.notices();
        move |_: MouseEvent| {
            if editing() {
                notices.notify(Notice::success(
                    "Profile Updated",
                    "Your profile information has been saved successfully.",
                ));
            }
            editing.toggle();
        }
    };

    rsx! {
        div { class: "page",
            h2 { "Profile" }
            p { class: "muted", "Manage your personal information and fitness goals" }

            div { class: "card profile-card",
                div { class: "card-header",
                    div { class: "avatar", "{initials}" }
                    div {
                        h3 { "{current.name}" }
                        p { class: "muted", "{current.email}" }
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: on_toggle,
                        if editing() { "Save" } else { "Edit Profile" }
                    }
                }
                p { "{current.bio}" }
                div { class: "stats-grid",
                    for tile in tiles {
                        div { class: "stat-card",
                            span { class: "stat-value", "{tile.value}" }
                            span { class: "stat-title", "{tile.title}" }
                        }
                    }
                }
            }

            div { class: "card",
                h3 { "Personal Information" }
                label { "Name"
                    input {
                        r#type: "text",
                        disabled: !editing(),
                        value: "{current.name}",
                        oninput: move |evt| profile.write().name = evt.value(),
                    }
                }
                label { "Email"
                    input {
                        r#type: "email",
                        disabled: !editing(),
                        value: "{current.email}",
                        oninput: move |evt| profile.write().email = evt.value(),
                    }
                }
                label { "Bio"
                    textarea {
                        disabled: !editing(),
                        value: "{current.bio}",
                        oninput: move |evt| profile.write().bio = evt.value(),
                    }
                }
            }

            div { class: "card",
                h3 { "Fitness Goals" }
                for goal in goals {
                    div { class: "macro-row",
                        div { class: "macro-header",
                            span { "{goal.label}" }
                            span { class: "muted", "{goal.progress}" }
                        }
                        div { class: "progress",
                            div { class: "progress-fill", style: "width: {goal.percent}%" }
                        }
                    }
                }
                div { class: "form-grid",
                    label { "Current weight ({unit})"
                        input {
                            r#type: "number",
                            disabled: !editing(),
                            value: "{current.current_weight}",
                            oninput: move |evt| profile.write().current_weight = evt.value(),
                        }
                    }
                    label { "Target weight ({unit})"
                        input {
                            r#type: "number",
                            disabled: !editing(),
                            value: "{current.target_weight}",
                            oninput: move |evt| profile.write().target_weight = evt.value(),
                        }
                    }
                }
            }
        }
    }
}
