use dioxus::prelude::*;

use fit_core::model::{AppSettingsDraft, ThemeId, WeightUnit};

use crate::app::ActiveSettings;
use crate::context::AppContext;
use crate::views::{MeasurementsPanel, ViewError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SaveState {
    Idle,
    Saved,
    Reset,
    Failed(ViewError),
}

fn weight_unit_from(value: &str) -> WeightUnit {
    if value == WeightUnit::Kilograms.label() {
        WeightUnit::Kilograms
    } else {
        WeightUnit::Pounds
    }
}

#[component]
pub fn SettingsView() -> Element {
    let ctx = use_context::<AppContext>();
    let mut active = use_context::<ActiveSettings>();
    let store = ctx.settings();

    let mut draft = use_signal({
        let store = store.clone();
        move || store.current().to_draft()
    });
    let mut status = use_signal(|| SaveState::Idle);

    let on_theme = {
        let store = store.clone();
        move |id: ThemeId| match store.apply_theme(&id) {
            Ok(_) => {
                draft.write().theme = Some(id.to_string());
                active.0.set(store.current());
                status.set(SaveState::Idle);
            }
            Err(err) => status.set(SaveState::Failed(ViewError::from(err))),
        }
    };
    let on_save = {
        let store = store.clone();
        move |_: MouseEvent| match store.save(draft.read().clone()) {
            Ok(saved) => {
                active.0.set(saved);
                status.set(SaveState::Saved);
            }
            Err(err) => status.set(SaveState::Failed(ViewError::from(err))),
        }
    };
    let on_reset = {
        let store = store.clone();
        move |_: MouseEvent| {
            let defaults = store.reset();
            draft.set(defaults.to_draft());
            active.0.set(defaults);
            status.set(SaveState::Reset);
        }
    };

    let current: AppSettingsDraft = draft.read().clone();
    let active_theme = active.0.read().theme().clone();
    let themes = ctx.catalog().themes();
    let status_line = match status() {
        SaveState::Idle => None,
        SaveState::Saved => Some("Settings saved".to_string()),
        SaveState::Reset => Some("Settings reset to defaults".to_string()),
        SaveState::Failed(err) => Some(err.message().to_string()),
    };

    rsx! {
        div { class: "page",
            h2 { "Settings" }
            p { class: "muted", "Customize your FitTracker experience" }

            div { class: "card",
                h3 { "Theme Customizer" }
                p { class: "muted", "Choose your preferred color scheme to personalize your workout experience" }
                div { class: "card-grid themes",
                    for theme in themes {
                        div {
                            key: "{theme.id}",
                            class: if theme.id == active_theme { "card theme-card active" } else { "card theme-card" },
                            onclick: {
                                let mut on_theme = on_theme.clone();
                                let id = theme.id.clone();
                                move |_| on_theme(id.clone())
                            },
                            div { class: "card-header",
                                h4 { "{theme.name}" }
                                if theme.id == active_theme {
                                    span { class: "badge", "Active" }
                                }
                            }
                            p { class: "muted small", "{theme.description}" }
                            div { class: "swatches",
                                span { class: "swatch", style: "background: hsl({theme.primary})" }
                                span { class: "swatch", style: "background: hsl({theme.accent})" }
                                span { class: "swatch", style: "background: hsl({theme.background})" }
                            }
                        }
                    }
                }
            }

            MeasurementsPanel {}

            div { class: "card",
                h3 { "Display Preferences" }
                label { class: "setting-row", "Weight unit"
                    select {
                        value: current.weight_unit.label(),
                        onchange: move |evt| draft.write().weight_unit = weight_unit_from(&evt.value()),
                        option { value: WeightUnit::Pounds.label(), "Pounds (lbs)" }
                        option { value: WeightUnit::Kilograms.label(), "Kilograms (kg)" }
                    }
                }
                label { class: "setting-row",
                    input {
                        r#type: "checkbox",
                        checked: current.show_difficulty_badges,
                        onchange: move |evt| draft.write().show_difficulty_badges = evt.checked(),
                    }
                    "Show workout difficulty badges"
                }
                label { class: "setting-row",
                    input {
                        r#type: "checkbox",
                        checked: current.compact_mode,
                        onchange: move |evt| draft.write().compact_mode = evt.checked(),
                    }
                    "Compact view mode"
                }
                label { class: "setting-row",
                    input {
                        r#type: "checkbox",
                        checked: current.animations,
                        onchange: move |evt| draft.write().animations = evt.checked(),
                    }
                    "Animation effects"
                }
            }

            div { class: "card",
                h3 { "Workout Reminders" }
                label { class: "setting-row",
                    input {
                        r#type: "checkbox",
                        checked: current.workout_reminders,
                        onchange: move |evt| draft.write().workout_reminders = evt.checked(),
                    }
                    "Daily workout reminders"
                }
                label { class: "setting-row",
                    input {
                        r#type: "checkbox",
                        checked: current.achievement_alerts,
                        onchange: move |evt| draft.write().achievement_alerts = evt.checked(),
                    }
                    "Achievement notifications"
                }
            }

            div { class: "settings-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: on_save,
                    "Save Changes"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: on_reset,
                    "Reset to Defaults"
                }
            }
            if let Some(line) = status_line {
                p { class: "status", "{line}" }
            }
        }
    }
}
