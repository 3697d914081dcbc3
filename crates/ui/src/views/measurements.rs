use dioxus::prelude::*;

use fit_core::model::{MeasurementId, MeasurementLog};

use crate::app::ActiveSettings;
use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{MeasurementForm, measurement_rows, measurement_tiles};

/// Body measurement log shown on the settings page.
#[component]
pub fn MeasurementsPanel() -> Element {
    let ctx = use_context::<AppContext>();
    let active = use_context::<ActiveSettings>();
    let service = ctx.measurements();

    let mut log = use_signal({
        let service = service.clone();
        move || {
            service.sample_log().unwrap_or_else(|err| {
                tracing::warn!(error = %err, "sample measurements unavailable");
                MeasurementLog::new()
            })
        }
    });
    let mut form = use_signal(MeasurementForm::default);
    let mut open = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let unit = active.0.read().weight_unit().label();
    let tiles = measurement_tiles(&log.read(), unit);
    let rows = measurement_rows(&log.read(), unit);

    let on_add = {
        let service = service.clone();
        let summaries = ctx.summaries();
        move |_: MouseEvent| {
            let today = summaries.now().date_naive();
            let outcome = form.read().to_draft(today).and_then(|draft| {
                service
                    .add(&mut log.write(), &draft)
                    .map_err(ViewError::from)
            });
            match outcome {
                Ok(_) => {
                    form.set(MeasurementForm::default());
                    open.set(false);
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    };
    let remove = {
        let service = service.clone();
        move |id: MeasurementId| {
            let outcome = service.remove(&mut log.write(), id).map_err(ViewError::from);
            error.set(outcome.err());
        }
    };

    rsx! {
        div { class: "card measurements",
            div { class: "card-header",
                h3 { "Body Measurements" }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| open.toggle(),
                    if open() { "Cancel" } else { "Add Measurement" }
                }
            }
            div { class: "stats-grid",
                for tile in tiles {
                    div { key: "{tile.title}", class: "stat-card",
                        span { class: "stat-value", "{tile.value}" }
                        span { class: "stat-title", "{tile.title}" }
                        if let Some(trend) = tile.trend {
                            span { class: "trend {trend.class}", "{trend.arrow} {trend.label}" }
                        }
                    }
                }
            }

            if open() {
                div { class: "measurement-form",
                    if let Some(err) = error() {
                        p { class: "error", "{err.message()}" }
                    }
                    div { class: "form-grid",
                        label { "Weight ({unit})"
                            input {
                                r#type: "number",
                                step: "0.1",
                                value: "{form.read().weight}",
                                oninput: move |evt| form.write().weight = evt.value(),
                            }
                        }
                        label { "Body fat (%)"
                            input {
                                r#type: "number",
                                step: "0.1",
                                value: "{form.read().body_fat}",
                                oninput: move |evt| form.write().body_fat = evt.value(),
                            }
                        }
                        label { "Muscle mass ({unit})"
                            input {
                                r#type: "number",
                                step: "0.1",
                                value: "{form.read().muscle_mass}",
                                oninput: move |evt| form.write().muscle_mass = evt.value(),
                            }
                        }
                        label { "Chest (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().chest}",
                                oninput: move |evt| form.write().chest = evt.value(),
                            }
                        }
                        label { "Waist (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().waist}",
                                oninput: move |evt| form.write().waist = evt.value(),
                            }
                        }
                        label { "Hips (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().hips}",
                                oninput: move |evt| form.write().hips = evt.value(),
                            }
                        }
                        label { "Arms (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().arms}",
                                oninput: move |evt| form.write().arms = evt.value(),
                            }
                        }
                        label { "Thighs (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().thighs}",
                                oninput: move |evt| form.write().thighs = evt.value(),
                            }
                        }
                        label { "Neck (in)"
                            input {
                                r#type: "number",
                                value: "{form.read().neck}",
                                oninput: move |evt| form.write().neck = evt.value(),
                            }
                        }
                    }
                    button {
                        class: "btn btn-primary",
                        r#type: "button",
                        onclick: on_add,
                        "Save Measurement"
                    }
                }
            }

            h4 { "Measurement History" }
            if rows.is_empty() {
                p { class: "muted", "No measurements recorded yet" }
            } else {
                ul { class: "measurement-history",
                    for row in rows {
                        li { key: "{row.id}",
                            div {
                                strong { "{row.date}" }
                                span { class: "muted", " {row.weight} • {row.body_fat} body fat • {row.muscle_mass} muscle" }
                                if !row.sizes.is_empty() {
                                    p { class: "muted small", "{row.sizes}" }
                                }
                            }
                            button {
                                class: "btn btn-ghost",
                                r#type: "button",
                                onclick: {
                                    let mut remove = remove.clone();
                                    let id = row.id;
                                    move |_| remove(id)
                                },
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
