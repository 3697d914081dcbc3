use fit_core::model::WorkoutBuilder;

use super::test_harness::{ViewKind, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_renders_featured_and_empty_history() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Transform Your Fitness Journey"), "missing hero in {html}");
    assert!(html.contains("Upper Body Strength"), "missing featured workout in {html}");
    assert!(html.contains("No workouts completed yet."), "missing empty state in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_view_smoke_lists_recent_sessions() {
    let mut harness = setup_view_harness(ViewKind::Dashboard);
    harness.record_summary("lower-body-power", "Lower Body Power", 52, 450);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Lower Body Power"), "missing recent session in {html}");
    assert!(html.contains("52 min"), "missing duration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn workouts_view_smoke_renders_catalogue() {
    let mut harness = setup_view_harness(ViewKind::Workouts);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Available programs"), "missing stats in {html}");
    for title in ["Upper Body Strength", "HIIT Cardio Blast", "Full Body Beginner", "Lower Body Power"] {
        assert!(html.contains(title), "missing {title} in {html}");
    }
    assert!(html.contains("320 cal"), "missing calories label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_renders_preview_before_start() {
    let mut harness = setup_view_harness(ViewKind::Session("full-body-beginner"));
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Back to Workouts"), "missing back link in {html}");
    assert!(html.contains("Full Body Beginner"), "missing title in {html}");
    assert!(html.contains("Exercise 1 of 6"), "missing cursor label in {html}");
    assert!(html.contains("3 sets × 12-15 reps"), "missing preview row in {html}");
    assert!(html.contains("Start Workout"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_redirects_unknown_workout_to_catalogue() {
    let mut harness = setup_view_harness(ViewKind::Session("no-such-workout"));
    harness.rebuild();
    for _ in 0..3 {
        harness.drive_async().await;
    }
    let html = harness.render();
    assert!(!html.contains("Back to Workouts"), "session still mounted in {html}");
    assert!(!html.contains("Exercise 1 of"), "session header rendered in {html}");
    assert!(html.contains("Available programs"), "catalogue not shown in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn exercises_view_smoke_renders_library() {
    let mut harness = setup_view_harness(ViewKind::Exercises);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Exercise Library"), "missing title in {html}");
    assert!(html.contains("24 exercises"), "missing count in {html}");
    assert!(html.contains("Calf Raises"), "missing standalone exercise in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn nutrition_view_smoke_renders_empty_day() {
    let mut harness = setup_view_harness(ViewKind::Nutrition);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Daily Macros"), "missing macros in {html}");
    assert!(html.contains("0/2000"), "missing calorie goal in {html}");
    assert!(html.contains("No foods logged yet"), "missing empty meal in {html}");
    assert!(html.contains("Add Food to Breakfast"), "missing search header in {html}");
    assert!(html.contains("Greek Yogurt"), "missing food row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn ai_workout_view_smoke_renders_form() {
    let mut harness = setup_view_harness(ViewKind::AiWorkout);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("AI Workout Generator"), "missing title in {html}");
    assert!(html.contains("Generate AI Workout"), "missing button in {html}");
    assert!(html.contains("Resistance Bands"), "missing equipment chip in {html}");
    assert!(html.contains("Full Body"), "missing muscle chip in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn progress_view_smoke_renders_totals() {
    let mut harness = setup_view_harness(ViewKind::Progress);
    harness.record_summary("hiit-cardio-blast", "HIIT Cardio Blast", 30, 400);
    harness.record_summary("full-body-beginner", "Full Body Beginner", 40, 250);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Workouts Completed"), "missing tile in {html}");
    assert!(html.contains("650"), "missing calorie total in {html}");
    assert!(html.contains("35 min"), "missing average in {html}");
    assert!(html.contains("HIIT Cardio Blast"), "missing history row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_marks_active_theme() {
    let mut harness = setup_view_harness(ViewKind::Settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Theme Customizer"), "missing section in {html}");
    assert!(html.contains("Energy Orange"), "missing default theme in {html}");
    assert!(html.contains("Golden Hour"), "missing last theme in {html}");
    assert!(html.contains("Active"), "missing active badge in {html}");
    assert!(html.contains("Save Changes"), "missing save button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn settings_view_smoke_shows_measurement_history() {
    let mut harness = setup_view_harness(ViewKind::Settings);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Body Measurements"), "missing panel in {html}");
    assert!(html.contains("175.0 lbs"), "missing current weight in {html}");
    assert!(html.contains("2.0 lbs (1.1%)"), "missing weight trend in {html}");
    assert!(html.contains("Jan 20, 2024"), "missing history row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn builder_view_smoke_renders_empty_draft() {
    let mut harness = setup_view_harness(ViewKind::Builder);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Workout Builder"), "missing title in {html}");
    assert!(html.contains("Exercises (0)"), "missing count in {html}");
    assert!(html.contains("No exercises added yet."), "missing empty state in {html}");
    assert!(html.contains("Estimated Duration"), "missing duration card in {html}");
    assert!(html.contains("Save Workout"), "missing save button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn session_view_smoke_plays_saved_custom_workout() {
    let mut harness = setup_view_harness(ViewKind::Session("custom-quick-core"));
    let builder = harness.services.builder();
    let mut draft = WorkoutBuilder::new();
    draft.title = "Quick Core".into();
    let first = builder.library()[0].id().clone();
    builder.add_exercise(&mut draft, &first).unwrap();
    builder.save(&draft).unwrap();

    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Quick Core"), "missing custom title in {html}");
    assert!(html.contains("Exercise 1 of 1"), "missing cursor label in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn analytics_view_smoke_renders_history() {
    let mut harness = setup_view_harness(ViewKind::Analytics);
    harness.record_summary("hiit-cardio-blast", "HIIT Cardio Blast", 30, 400);
    harness.record_summary("hiit-cardio-blast", "HIIT Cardio Blast", 40, 450);
    harness.rebuild();
    harness.drive_async().await;
    let html = harness.render();
    assert!(html.contains("Advanced Analytics"), "missing title in {html}");
    assert!(html.contains("Active Hours"), "missing tile in {html}");
    assert!(html.contains("1.1"), "missing hours value in {html}");
    assert!(html.contains("70m"), "missing weekly bar in {html}");
    assert!(html.contains("2 sessions"), "missing mix row in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn social_view_smoke_renders_friends_tab() {
    let mut harness = setup_view_harness(ViewKind::Social);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Social Hub"), "missing title in {html}");
    assert!(html.contains("Sarah Chen"), "missing friend in {html}");
    assert!(html.contains("21 day streak"), "missing streak in {html}");
    assert!(html.contains("Leaderboard"), "missing tab in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn profile_view_smoke_counts_recent_sessions() {
    let mut harness = setup_view_harness(ViewKind::Profile);
    harness.record_summary("full-body-beginner", "Full Body Beginner", 40, 250);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Alex Johnson"), "missing name in {html}");
    assert!(html.contains("Personal Information"), "missing section in {html}");
    assert!(html.contains("1/5"), "missing weekly goal in {html}");
    assert!(html.contains("250/2500"), "missing calorie goal in {html}");
}
