use dioxus::prelude::*;
use dioxus_router::Link;

use fit_core::model::{BuilderEntryId, Difficulty, ExerciseCategory, ExerciseId, WorkoutBuilder};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;
use crate::vm::{
    BuilderField, ExerciseCardVm, WorkoutCardVm, builder_rows, builder_summary,
    parse_category_option, parse_difficulty_option, parse_entry_edit,
};

#[component]
pub fn BuilderView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.builder();

    let mut draft = use_signal(WorkoutBuilder::new);
    let mut picking = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);
    let mut saved_count = use_signal(|| 0_usize);

    let rows = builder_rows(&draft.read());
    let summary = builder_summary(&draft.read());
    let library: Vec<ExerciseCardVm> = service.library().iter().map(ExerciseCardVm::from).collect();
    // Re-read after every save.
    let _ = saved_count();
    let saved: Vec<WorkoutCardVm> = service
        .saved()
        .iter()
        .map(|workout| WorkoutCardVm::from(workout.as_ref()))
        .collect();
    let current = draft.read().clone();

    let add = {
        let service = service.clone();
        move |id: ExerciseId| {
            let outcome = service
                .add_exercise(&mut draft.write(), &id)
                .map_err(ViewError::from);
            if outcome.is_ok() {
                picking.set(false);
            }
            error.set(outcome.err());
        }
    };
    let remove = {
        let service = service.clone();
        move |id: BuilderEntryId| {
            let outcome = service
                .remove_exercise(&mut draft.write(), id)
                .map_err(ViewError::from);
            error.set(outcome.err());
        }
    };
    let edit = {
        let service = service.clone();
        move |id: BuilderEntryId, field: BuilderField, raw: String| {
            let outcome = parse_entry_edit(field, &raw).and_then(|edit| {
                service
                    .edit(&mut draft.write(), id, edit)
                    .map_err(ViewError::from)
            });
            error.set(outcome.err());
        }
    };
    let on_save = {
        let service = service.clone();
        move |_: MouseEvent| {
            let outcome = service.save(&draft.read()).map_err(ViewError::from);
            match outcome {
                Ok(_) => {
                    draft.set(WorkoutBuilder::new());
                    saved_count += 1;
                    error.set(None);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    };

    rsx! {
        div { class: "page",
            h2 { "Workout Builder" }
            p { class: "muted", "Create custom workouts tailored to your fitness goals" }

            div { class: "builder-layout",
                div { class: "builder-main",
                    div { class: "card",
                        h3 { "Workout Details" }
                        label { "Title"
                            input {
                                r#type: "text",
                                placeholder: "e.g. Upper Body Power",
                                value: "{current.title}",
                                oninput: move |evt| draft.write().title = evt.value(),
                            }
                        }
                        label { "Description"
                            textarea {
                                value: "{current.description}",
                                oninput: move |evt| draft.write().description = evt.value(),
                            }
                        }
                        div { class: "filters",
                            label { "Category"
                                select {
                                    value: current.category.as_str(),
                                    onchange: move |evt| {
                                        if let Some(kind) = parse_category_option(&evt.value()) {
                                            draft.write().category = kind;
                                        }
                                    },
                                    for kind in ExerciseCategory::ALL {
                                        option { value: kind.as_str(), "{kind}" }
                                    }
                                }
                            }
                            label { "Difficulty"
                                select {
                                    value: current.difficulty.as_str(),
                                    onchange: move |evt| {
                                        if let Some(level) = parse_difficulty_option(&evt.value()) {
                                            draft.write().difficulty = level;
                                        }
                                    },
                                    for level in Difficulty::ALL {
                                        option { value: level.as_str(), "{level}" }
                                    }
                                }
                            }
                        }
                    }

                    div { class: "card",
                        div { class: "card-header",
                            h3 { "{summary.heading}" }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| picking.toggle(),
                                "Add Exercise"
                            }
                        }
                        if let Some(err) = error() {
                            p { class: "error", "{err.message()}" }
                        }
                        if picking() {
                            ul { class: "exercise-picker",
                                for card in library {
                                    li { key: "{card.id}",
                                        div {
                                            strong { "{card.name}" }
                                            p { class: "muted small", "{card.prescription}" }
                                        }
                                        button {
                                            class: "btn btn-primary",
                                            r#type: "button",
                                            onclick: {
                                                let mut add = add.clone();
                                                let id = card.id.clone();
                                                move |_| add(id.clone())
                                            },
                                            "Add"
                                        }
                                    }
                                }
                            }
                        }
                        if rows.is_empty() {
                            p { class: "muted", "No exercises added yet. Click \"Add Exercise\" to get started." }
                        } else {
                            for row in rows {
                                div { key: "{row.id}", class: "builder-row",
                                    div { class: "card-header",
                                        h4 { "{row.position}. {row.name}" }
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
                                    p { class: "muted small", "{row.muscles}" }
                                    div { class: "form-grid",
                                        label { "Sets"
                                            input {
                                                r#type: "number",
                                                min: "1",
                                                value: "{row.sets}",
                                                oninput: {
                                                    let mut edit = edit.clone();
                                                    let id = row.id;
                                                    move |evt: FormEvent| edit(id, BuilderField::Sets, evt.value())
                                                },
                                            }
                                        }
                                        label { "Reps"
                                            input {
                                                r#type: "text",
                                                value: "{row.reps}",
                                                oninput: {
                                                    let mut edit = edit.clone();
                                                    let id = row.id;
                                                    move |evt: FormEvent| edit(id, BuilderField::Reps, evt.value())
                                                },
                                            }
                                        }
                                        label { "Rest (s)"
                                            input {
                                                r#type: "number",
                                                min: "0",
                                                value: "{row.rest}",
                                                oninput: {
                                                    let mut edit = edit.clone();
                                                    let id = row.id;
                                                    move |evt: FormEvent| edit(id, BuilderField::RestSecs, evt.value())
                                                },
                                            }
                                        }
                                    }
                                    label { "Notes"
                                        input {
                                            r#type: "text",
                                            value: "{row.notes}",
                                            oninput: {
                                                let mut edit = edit.clone();
                                                let id = row.id;
                                                move |evt: FormEvent| edit(id, BuilderField::Notes, evt.value())
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }

                div { class: "builder-side",
                    div { class: "card",
                        h3 { "Estimated Duration" }
                        p { class: "stat-value", "{summary.duration}" }
                        p { class: "muted", "{summary.total_sets} total sets" }
                        button {
                            class: "btn btn-primary",
                            r#type: "button",
                            onclick: on_save,
                            "Save Workout"
                        }
                    }
                    div { class: "card",
                        h3 { "Custom Workouts" }
                        if saved.is_empty() {
                            p { class: "muted", "Saved workouts appear here" }
                        } else {
                            ul {
                                for card in saved {
                                    li { key: "{card.id}",
                                        strong { "{card.title}" }
                                        span { class: "muted", " {card.duration} • {card.exercises_label}" }
                                        Link {
                                            class: "btn btn-secondary",
                                            to: Route::Session { workout_id: card.id.to_string() },
                                            "Start"
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
