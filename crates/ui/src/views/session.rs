use std::time::Duration;

use chrono::{DateTime, Utc};

use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use fit_core::model::{SessionSummary, SetId, WorkoutId};
use fit_core::session::SessionPhase;

use crate::app::ActiveSettings;
use crate::context::AppContext;
use crate::routes::Route;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SessionVm, SetRowVm, prescription};

const TICK: Duration = Duration::from_secs(1);

/// Catalogue workouts first, then saved custom workouts, then the last generated plan.
fn open_session(ctx: &AppContext, workout_id: &str) -> Result<SessionVm, ViewError> {
    let id = WorkoutId::new(workout_id).map_err(|_| ViewError::NotFound)?;
    let flow = ctx.sessions();
    match SessionVm::open(&flow, &id) {
        Err(ViewError::NotFound) => ctx
            .builder()
            .saved_workout(&id)
            .or_else(|| ctx.generated(&id))
            .map(|workout| SessionVm::from_session(flow.open_definition(workout)))
            .ok_or(ViewError::NotFound),
        other => other,
    }
}

#[component]
pub fn SessionView(workout_id: String) -> Element {
    let ctx = use_context::<AppContext>();
    let settings = use_context::<ActiveSettings>();
    let navigator = use_navigator();
    let flow = ctx.sessions();

    let mut error = use_signal(|| None::<ViewError>);
    let mut vm = use_signal(|| None::<SessionVm>);

    let loader_ctx = ctx.clone();
    let resource = use_resource(use_reactive!(|(workout_id,)| {
        let ctx = loader_ctx.clone();
        let mut vm = vm;
        async move {
            let opened = open_session(&ctx, &workout_id)?;
            vm.set(Some(opened));
            Ok::<_, ViewError>(())
        }
    }));
    let state = view_state_from_resource(&resource);

    use_effect(move || {
        if matches!(*resource.value().read(), Some(Err(ViewError::NotFound))) {
            navigator.replace(Route::Workouts {});
        }
    });

    // Dropped with the view, which cancels the ticker.
    let ticker_flow = flow.clone();
    use_future(move || {
        let flow = ticker_flow.clone();
        let mut vm = vm;
        async move {
            loop {
                tokio::time::sleep(TICK).await;
                let running = vm
                    .peek()
                    .as_ref()
                    .is_some_and(|session| session.timer().is_running());
                if running {
                    if let Some(session) = vm.write().as_mut() {
                        session.tick(&flow);
                    }
                }
            }
        }
    });

    let on_start = {
        let flow = flow.clone();
        move |_: MouseEvent| {
            if let Some(session) = vm.write().as_mut() {
                error.set(session.start(&flow).err());
            }
        }
    };
    let on_complete = {
        let flow = flow.clone();
        move |_: MouseEvent| {
            if let Some(session) = vm.write().as_mut() {
                error.set(session.complete_exercise(&flow).err());
            }
        }
    };
    let on_next = {
        let flow = flow.clone();
        move |_: MouseEvent| {
            if let Some(session) = vm.write().as_mut() {
                error.set(session.next_exercise(&flow).err());
            }
        }
    };
    let on_finish = {
        let flow = flow.clone();
        move |_: MouseEvent| {
            let result = vm.read().as_ref().map(|session| session.finish(&flow));
            match result {
                Some(Ok(outcome)) => {
                    navigator.push(Route::from(outcome.destination));
                }
                Some(Err(err)) => error.set(Some(err)),
                None => error.set(Some(ViewError::Unknown)),
            }
        }
    };

    let weight_unit = settings.0.read().weight_unit().label();
    let now = ctx.summaries().now();
    let guard = vm.read();

    rsx! {
        div { class: "page session",
            Link { class: "back-link", to: Route::Workouts {}, "← Back to Workouts" }

            match (state, guard.as_ref()) {
                (ViewState::Error(err), _) => rsx! {
                    p { "{err.message()}" }
                },
                (_, Some(session)) => rsx! {
                    {session_header(session)}
                    if let Some(err) = error() {
                        p { class: "error", "{err.message()}" }
                    }
                    match session.phase() {
                        SessionPhase::NotStarted => rsx! {
                            {exercise_preview(session)}
                            button {
                                class: "btn btn-primary",
                                r#type: "button",
                                onclick: on_start,
                                "Start Workout"
                            }
                        },
                        SessionPhase::InProgress { .. } => rsx! {
                            div { class: "session-grid",
                                {current_exercise(session, vm, error, weight_unit)}
                                {timer_panel(session, vm)}
                            }
                            div { class: "session-actions",
                                button {
                                    class: "btn btn-primary",
                                    r#type: "button",
                                    disabled: !session.can_complete(),
                                    onclick: on_complete,
                                    "Complete Exercise"
                                }
                                if session.can_advance() {
                                    button {
                                        class: "btn btn-secondary",
                                        r#type: "button",
                                        onclick: on_next,
                                        "Next Exercise"
                                    }
                                }
                            }
                        },
                        SessionPhase::Finished => rsx! {
                            CompleteCard {
                                summary: finished_summary(session, now),
                                on_finish,
                            }
                        },
                    }
                },
                (ViewState::Loading, None) | (ViewState::Ready(()), None) => rsx! {
                    p { "Loading..." }
                },
                (ViewState::Idle, None) => rsx! {
                    p { "Idle" }
                },
            }
        }
    }
}

fn finished_summary(session: &SessionVm, now: DateTime<Utc>) -> Option<SessionSummary> {
    match session.session().summary(now) {
        Ok(summary) => Some(summary),
        Err(err) => {
            tracing::warn!(error = %err, "finished session has no summary");
            None
        }
    }
}

fn session_header(session: &SessionVm) -> Element {
    let header = session.header();
    rsx! {
        div { class: "session-header",
            h2 { "{header.title}" }
            p { class: "muted", "{header.description}" }
            div { class: "session-meta",
                span { class: "badge", "{header.difficulty}" }
                span { "{header.exercise_label}" }
                span { "{header.completed_label}" }
            }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {header.progress_percent}%" }
            }
        }
    }
}

fn exercise_preview(session: &SessionVm) -> Element {
    let workout = session.session().workout();
    rsx! {
        ol { class: "exercise-preview",
            for exercise in workout.exercises() {
                li { key: "{exercise.id()}",
                    strong { "{exercise.name()}" }
                    span { class: "muted", " {prescription(exercise)}" }
                }
            }
        }
    }
}

fn current_exercise(
    session: &SessionVm,
    mut vm: Signal<Option<SessionVm>>,
    error: Signal<Option<ViewError>>,
    weight_unit: &'static str,
) -> Element {
    let exercise = session.session().current_exercise();
    let rows = session.set_rows();
    let sets_label = session.sets_label();

    rsx! {
        div { class: "card current-exercise",
            h3 { "{exercise.name()}" }
            p { class: "muted", "{prescription(exercise)}" }
            p { "{exercise.description()}" }
            div { class: "tags",
                for muscle in exercise.target_muscles() {
                    span { class: "tag", "{muscle}" }
                }
            }

            div { class: "set-tracker",
                div { class: "set-tracker-header",
                    h4 { "Sets" }
                    span { "{sets_label}" }
                }
                table {
                    thead {
                        tr {
                            th { "Set" }
                            th { "Reps" }
                            th { "Weight ({weight_unit})" }
                            th { "Done" }
                            th {}
                        }
                    }
                    tbody {
                        for row in rows {
                            SetRow { key: "{row.id}", row, vm, error }
                        }
                    }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(session) = vm.write().as_mut() {
                            session.add_set();
                        }
                    },
                    "Add Set"
                }
            }
        }
    }
}

fn with_session(
    mut vm: Signal<Option<SessionVm>>,
    mut error: Signal<Option<ViewError>>,
    action: impl FnOnce(&mut SessionVm) -> Result<(), ViewError>,
) {
    let result = vm
        .write()
        .as_mut()
        .map_or(Err(ViewError::Unknown), action);
    error.set(result.err());
}

#[component]
fn SetRow(
    row: SetRowVm,
    vm: Signal<Option<SessionVm>>,
    error: Signal<Option<ViewError>>,
) -> Element {
    let id: SetId = row.id;
    let row_class = if row.completed { "set-row done" } else { "set-row" };
    rsx! {
        tr { class: row_class,
            td { "{row.number}" }
            td {
                input {
                    r#type: "number",
                    value: "{row.reps}",
                    oninput: move |evt| with_session(vm, error, |session| session.set_reps(id, &evt.value())),
                }
            }
            td {
                input {
                    r#type: "number",
                    step: "0.5",
                    value: "{row.weight}",
                    oninput: move |evt| with_session(vm, error, |session| session.set_weight(id, &evt.value())),
                }
            }
            td {
                input {
                    r#type: "checkbox",
                    checked: row.completed,
                    onchange: move |_| with_session(vm, error, |session| session.toggle_set(id).map(|_| ())),
                }
            }
            td {
                button {
                    class: "btn btn-ghost",
                    r#type: "button",
                    onclick: move |_| with_session(vm, error, |session| session.remove_set(id)),
                    "Remove"
                }
            }
        }
    }
}

fn timer_panel(session: &SessionVm, mut vm: Signal<Option<SessionVm>>) -> Element {
    let timer = session.timer();
    let title = session.timer_title();
    let clock = session.timer_label();
    let percent = timer.progress_percent();
    let toggle_label = if timer.is_running() { "Pause" } else { "Start" };

    rsx! {
        div { class: "card timer",
            h4 { "{title}" }
            div { class: "timer-clock", "{clock}" }
            div { class: "progress",
                div { class: "progress-fill", style: "width: {percent}%" }
            }
            div { class: "timer-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    disabled: timer.is_completed(),
                    onclick: move |_| {
                        if let Some(session) = vm.write().as_mut() {
                            session.toggle_timer();
                        }
                    },
                    "{toggle_label}"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| {
                        if let Some(session) = vm.write().as_mut() {
                            session.reset_timer();
                        }
                    },
                    "Reset"
                }
            }
        }
    }
}

#[component]
fn CompleteCard(summary: Option<SessionSummary>, on_finish: EventHandler<MouseEvent>) -> Element {
    let (exercises, calories, minutes) = summary.map_or((0, 0, 0), |summary| {
        (
            summary.completed_exercises(),
            summary.calories(),
            summary.elapsed_minutes(),
        )
    });
    rsx! {
        div { class: "card complete",
            h3 { "Workout Complete!" }
            div { class: "stats-grid",
                div { class: "stat-card",
                    span { class: "stat-value", "{exercises}" }
                    span { class: "stat-title", "Exercises" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{calories}" }
                    span { class: "stat-title", "Calories Burned" }
                }
                div { class: "stat-card",
                    span { class: "stat-value", "{minutes}" }
                    span { class: "stat-title", "Minutes" }
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "button",
                onclick: move |evt| on_finish.call(evt),
                "View Progress"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::model::{GeneratorParams, WorkoutBuilder};

    use crate::views::test_harness::test_context;

    fn finish_all(vm: &mut SessionVm, flow: &services::SessionFlowService) {
        vm.start(flow).unwrap();
        loop {
            let target = vm.session().tracker().target_sets() as usize;
            while vm.set_rows().len() < target {
                vm.add_set();
            }
            for row in vm.set_rows() {
                vm.toggle_set(row.id).unwrap();
            }
            vm.complete_exercise(flow).unwrap();
            if vm.is_finished() {
                break;
            }
            vm.next_exercise(flow).unwrap();
        }
    }

    #[tokio::test(flavor = "current_thread")]
    async fn open_session_falls_back_to_generated_plan() {
        let ctx = test_context();
        assert_eq!(open_session(&ctx, "ai-generated").err(), Some(ViewError::NotFound));
        assert_eq!(open_session(&ctx, "Not A Slug").err(), Some(ViewError::NotFound));

        let ai = ctx.ai_workouts();
        let params = GeneratorParams {
            goal: "tone up".into(),
            ..GeneratorParams::default()
        };
        let plan = ai.generate(&params).await.unwrap();
        ctx.stash_generated(ai.playable(&plan, params.workout_type).unwrap());

        let vm = open_session(&ctx, "ai-generated").unwrap();
        assert_eq!(vm.header().title, plan.title);
        assert_eq!(
            vm.session().workout().exercise_count(),
            plan.exercises.len()
        );
        assert!(open_session(&ctx, "full-body-beginner").is_ok());
    }

    #[test]
    fn open_session_plays_saved_custom_workout() {
        let ctx = test_context();
        assert_eq!(open_session(&ctx, "custom-leg-day").err(), Some(ViewError::NotFound));

        let builder = ctx.builder();
        let mut draft = WorkoutBuilder::new();
        draft.title = "Leg Day".into();
        for exercise in builder.library().iter().take(2) {
            builder.add_exercise(&mut draft, exercise.id()).unwrap();
        }
        builder.save(&draft).unwrap();

        let vm = open_session(&ctx, "custom-leg-day").unwrap();
        assert_eq!(vm.header().title, "Leg Day");
        assert_eq!(vm.session().workout().exercise_count(), 2);
    }

    #[test]
    fn finished_summary_only_for_finished_sessions() {
        let ctx = test_context();
        let flow = ctx.sessions();
        let mut vm = open_session(&ctx, "full-body-beginner").unwrap();
        let now = ctx.summaries().now();
        assert_eq!(finished_summary(&vm, now), None);

        finish_all(&mut vm, &flow);
        let summary = finished_summary(&vm, now).unwrap();
        assert_eq!(summary.completed_exercises(), 6);
        assert_eq!(summary.calories(), 250);
    }
}
