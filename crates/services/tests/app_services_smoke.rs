use std::time::Duration;

use fit_core::model::{
    DailyLog, FoodId, GeneratorParams, MealKind, MeasurementDraft, ThemeId, WorkoutBuilder,
};
use fit_core::time::fixed_clock;
use services::{AppServices, AppServicesError, ServicesConfig, SettingsError};

fn config() -> ServicesConfig {
    ServicesConfig {
        ai_delay: Duration::ZERO,
        ai_seed: Some(3),
        ..ServicesConfig::default()
    }
}

#[test]
fn configured_theme_is_applied() {
    let services = AppServices::new(
        fixed_clock(),
        ServicesConfig {
            theme: Some(ThemeId::new("purple-power").unwrap()),
            ..config()
        },
    )
    .unwrap();
    let theme = services.settings().theme().unwrap();
    assert_eq!(theme.name, "Purple Power");
}

#[test]
fn unknown_configured_theme_fails_startup() {
    let result = AppServices::new(
        fixed_clock(),
        ServicesConfig {
            theme: Some(ThemeId::new("no-such-theme").unwrap()),
            ..config()
        },
    );
    assert!(matches!(
        result,
        Err(AppServicesError::Settings(SettingsError::UnknownTheme(_)))
    ));
}

#[test]
fn services_share_one_notice_queue() {
    let services = AppServices::new(fixed_clock(), config()).unwrap();
    let mut log = DailyLog::new();
    services
        .nutrition()
        .add_food(&mut log, FoodId::new(7), 0.5, MealKind::Breakfast)
        .unwrap();
    let notices = services.notices().drain();
    assert_eq!(notices.len(), 1);
    assert_eq!(notices[0].body, "Oats added to breakfast");
}

#[tokio::test]
async fn generated_workout_can_be_played() {
    let services = AppServices::new(fixed_clock(), config()).unwrap();
    let mut params = GeneratorParams {
        goal: "core stability".into(),
        ..GeneratorParams::default()
    };
    params.toggle_muscle("Core");

    let ai = services.ai_workouts();
    let plan = ai.generate(&params).await.unwrap();
    let workout = ai.playable(&plan, params.workout_type).unwrap();

    let flow = services.sessions();
    let mut session = flow.open_definition(workout);
    flow.begin(&mut session).unwrap();
    assert_eq!(session.current_exercise().name(), plan.exercises[0].name);

    let titles: Vec<_> = services.notices().drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Workout Generated!", "Workout Started!"]);
}

#[test]
fn saved_custom_workout_can_be_played() {
    let services = AppServices::new(fixed_clock(), config()).unwrap();
    let builder = services.builder();
    let mut draft = WorkoutBuilder::new();
    draft.title = "Morning Mobility".into();
    let first = builder.library()[0].id().clone();
    builder.add_exercise(&mut draft, &first).unwrap();
    let saved = builder.save(&draft).unwrap();

    let flow = services.sessions();
    let workout = builder.saved_workout(saved.id()).unwrap();
    let mut session = flow.open_definition(workout);
    flow.begin(&mut session).unwrap();
    assert_eq!(session.workout().title(), "Morning Mobility");

    let titles: Vec<_> = services.notices().drain().into_iter().map(|n| n.title).collect();
    assert_eq!(titles, vec!["Workout Saved!", "Workout Started!"]);
}

#[test]
fn measurement_notices_share_the_queue() {
    let services = AppServices::new(fixed_clock(), config()).unwrap();
    let measurements = services.measurements();
    let mut log = measurements.sample_log().unwrap();
    let draft = MeasurementDraft::new(fixed_clock().now().date_naive());
    assert!(measurements.add(&mut log, &draft).is_err());
    assert_eq!(services.notices().drain()[0].title, "Missing Weight");
}
