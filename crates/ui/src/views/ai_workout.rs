use dioxus::prelude::*;
use dioxus_router::use_navigator;

use fit_core::model::{Difficulty, ExerciseCategory, GeneratedWorkout, GeneratorParams};

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::ViewError;

const EQUIPMENT_OPTIONS: [&str; 8] = [
    "Dumbbells",
    "Barbell",
    "Resistance Bands",
    "Pull-up Bar",
    "Kettlebells",
    "Medicine Ball",
    "Bodyweight Only",
    "Yoga Mat",
];

const MUSCLE_GROUPS: [&str; 8] = [
    "Chest", "Back", "Shoulders", "Arms", "Legs", "Core", "Glutes", "Full Body",
];

const INTENSITIES: [&str; 4] = ["Light", "Moderate", "High", "Maximum"];

fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip-selected" } else { "chip" }
}

#[component]
pub fn AiWorkoutView() -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();

    let mut params = use_signal(GeneratorParams::default);
    let mut minutes_raw = use_signal(|| GeneratorParams::default().minutes.to_string());
    let plan = use_signal(|| None::<GeneratedWorkout>);
    let generating = use_signal(|| false);
    let mut error = use_signal(|| None::<ViewError>);

    let on_generate = {
        let ai = ctx.ai_workouts();
        move |_: MouseEvent| {
            let ai = ai.clone();
            let request = params.read().clone();
            let mut plan = plan;
            let mut generating = generating;
            let mut error = error;
            generating.set(true);
            spawn(async move {
                let result = ai.generate(&request).await;
                generating.set(false);
                match result {
                    Ok(generated) => {
                        plan.set(Some(generated));
                        error.set(None);
                    }
                    Err(err) => error.set(Some(ViewError::from(err))),
                }
            });
        }
    };

    let on_start = {
        let ctx = ctx.clone();
        move |_: MouseEvent| {
            let Some(generated) = plan.read().clone() else {
                return;
            };
            let category = params.read().workout_type;
            match ctx.ai_workouts().playable(&generated, category) {
                Ok(workout) => {
                    let workout_id = workout.id().to_string();
                    ctx.stash_generated(workout);
                    navigator.push(Route::Session { workout_id });
                }
                Err(err) => error.set(Some(ViewError::from(err))),
            }
        }
    };

    let current = params.read().clone();
    let busy = generating();
    let generate_label = if busy {
        "Generating Your Perfect Workout..."
    } else {
        "Generate AI Workout"
    };

    rsx! {
        div { class: "page",
            h2 { "AI Workout Generator" }
            p { class: "muted", "Describe your goal and get a personalized plan" }

            div { class: "card generator-form",
                label { "What's your fitness goal?"
                    textarea {
                        placeholder: "e.g., Build upper body strength, lose weight, improve endurance...",
                        value: "{current.goal}",
                        oninput: move |evt| params.write().goal = evt.value(),
                    }
                }
                div { class: "form-grid",
                    label { "Time Available (minutes)"
                        input {
                            r#type: "number",
                            min: "10",
                            max: "120",
                            value: "{minutes_raw}",
                            oninput: move |evt| {
                                let raw = evt.value();
                                params.write().minutes = raw.trim().parse().unwrap_or(0);
                                minutes_raw.set(raw);
                            },
                        }
                    }
                    label { "Fitness Level"
                        select {
                            value: "{current.fitness_level}",
                            onchange: move |evt| {
                                if let Ok(level) = evt.value().parse::<Difficulty>() {
                                    params.write().fitness_level = level;
                                }
                            },
                            for level in Difficulty::ALL {
                                option { value: level.as_str(), "{level}" }
                            }
                        }
                    }
                    label { "Workout Type"
                        select {
                            value: "{current.workout_type}",
                            onchange: move |evt| {
                                if let Ok(kind) = evt.value().parse::<ExerciseCategory>() {
                                    params.write().workout_type = kind;
                                }
                            },
                            for kind in ExerciseCategory::ALL {
                                option { value: kind.as_str(), "{kind}" }
                            }
                        }
                    }
                    label { "Intensity"
                        select {
                            value: "{current.intensity}",
                            onchange: move |evt| params.write().intensity = evt.value(),
                            for intensity in INTENSITIES {
                                option { value: intensity, "{intensity}" }
                            }
                        }
                    }
                }

                div { class: "chip-group",
                    h4 { "Available Equipment" }
                    for equipment in EQUIPMENT_OPTIONS {
                        button {
                            class: chip_class(current.equipment.iter().any(|item| item == equipment)),
                            r#type: "button",
                            onclick: move |_| params.write().toggle_equipment(equipment),
                            "{equipment}"
                        }
                    }
                }
                div { class: "chip-group",
                    h4 { "Target Muscle Groups" }
                    for muscle in MUSCLE_GROUPS {
                        button {
                            class: chip_class(current.target_muscles.iter().any(|item| item == muscle)),
                            r#type: "button",
                            onclick: move |_| params.write().toggle_muscle(muscle),
                            "{muscle}"
                        }
                    }
                }
                label { "Previous Injuries/Limitations"
                    textarea {
                        placeholder: "Any injuries or physical limitations to consider...",
                        value: "{current.previous_injuries}",
                        oninput: move |evt| params.write().previous_injuries = evt.value(),
                    }
                }

                if let Some(err) = error() {
                    p { class: "error", "{err.message()}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: busy,
                    onclick: on_generate.clone(),
                    "{generate_label}"
                }
            }

            if let Some(generated) = plan() {
                GeneratedPlan {
                    plan: generated,
                    on_start,
                    on_regenerate: on_generate.clone(),
                }
            }
        }
    }
}

#[component]
fn GeneratedPlan(
    plan: GeneratedWorkout,
    on_start: EventHandler<MouseEvent>,
    on_regenerate: EventHandler<MouseEvent>,
) -> Element {
    let exercise_count = plan.exercises.len();
    rsx! {
        div { class: "card generated-plan",
            div { class: "card-header",
                h3 { "{plan.title}" }
                span { class: "badge", "AI Generated" }
            }
            p { class: "muted", "{plan.description}" }
            p { "{plan.minutes} min • {plan.difficulty} • {exercise_count} exercises" }

            h4 { "Warmup (5 minutes)" }
            ul {
                for item in plan.warmup.iter() {
                    li { "{item}" }
                }
            }

            h4 { "Main Workout" }
            for exercise in plan.exercises.iter() {
                div { class: "card exercise-card",
                    div { class: "card-header",
                        h5 { "{exercise.name}" }
                        span { class: "badge", "{exercise.sets} sets × {exercise.reps}" }
                    }
                    p { class: "muted", "{exercise.instructions}" }
                    div { class: "tags",
                        for muscle in exercise.target_muscles.iter() {
                            span { class: "tag", "{muscle}" }
                        }
                    }
                    p { class: "muted small", "Rest: {exercise.rest_secs} seconds between sets" }
                }
            }

            h4 { "Cooldown (5 minutes)" }
            ul {
                for item in plan.cooldown.iter() {
                    li { "{item}" }
                }
            }

            h4 { "AI Training Tips" }
            ul {
                for tip in plan.tips.iter() {
                    li { "{tip}" }
                }
            }

            div { class: "plan-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |evt| on_start.call(evt),
                    "Start This Workout"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |evt| on_regenerate.call(evt),
                    "Generate New"
                }
            }
        }
    }
}
