use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use fit_core::model::{SessionSummary, WorkoutId};
use fit_core::time::{fixed_clock, fixed_now};
use services::{
    AiWorkoutService, AppServices, BuilderService, CatalogService, MeasurementService,
    NoticeQueue, NutritionService, ServicesConfig, SessionFlowService, SettingsStore,
    SummaryService,
};

use crate::app::ActiveSettings;
use crate::context::{AppContext, UiApp, build_app_context};
use crate::views::{
    AiWorkoutView, AnalyticsView, BuilderView, DashboardView, ExercisesView, NutritionView,
    ProfileView, ProgressView, SessionView, SettingsView, SocialView, WorkoutsView,
};

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<CatalogService> {
        self.services.catalog()
    }

    fn sessions(&self) -> Arc<SessionFlowService> {
        self.services.sessions()
    }

    fn summaries(&self) -> Arc<SummaryService> {
        self.services.summaries()
    }

    fn nutrition(&self) -> Arc<NutritionService> {
        self.services.nutrition()
    }

    fn settings(&self) -> Arc<SettingsStore> {
        self.services.settings()
    }

    fn ai_workouts(&self) -> Arc<AiWorkoutService> {
        self.services.ai_workouts()
    }

    fn builder(&self) -> Arc<BuilderService> {
        self.services.builder()
    }

    fn measurements(&self) -> Arc<MeasurementService> {
        self.services.measurements()
    }

    fn notices(&self) -> NoticeQueue {
        self.services.notices()
    }

    fn initial_workout(&self) -> Option<WorkoutId> {
        None
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Dashboard,
    Workouts,
    Session(&'static str),
    Builder,
    Exercises,
    Nutrition,
    AiWorkout,
    Progress,
    Analytics,
    Social,
    Profile,
    Settings,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let settings = props.app.settings();
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| ActiveSettings(Signal::new(settings.current())));
    use_context_provider(|| props.view);
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/workouts")]
    Catalogue {},
}

/// Landing page for redirects back to the catalogue.
#[component]
fn Catalogue() -> Element {
    rsx! { WorkoutsView {} }
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Dashboard => rsx! { DashboardView {} },
        ViewKind::Workouts => rsx! { WorkoutsView {} },
        ViewKind::Session(workout_id) => rsx! { SessionView { workout_id: workout_id.to_string() } },
        ViewKind::Builder => rsx! { BuilderView {} },
        ViewKind::Exercises => rsx! { ExercisesView {} },
        ViewKind::Nutrition => rsx! { NutritionView {} },
        ViewKind::AiWorkout => rsx! { AiWorkoutView {} },
        ViewKind::Progress => rsx! { ProgressView {} },
        ViewKind::Analytics => rsx! { AnalyticsView {} },
        ViewKind::Social => rsx! { SocialView {} },
        ViewKind::Profile => rsx! { ProfileView {} },
        ViewKind::Settings => rsx! { SettingsView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub services: AppServices,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Store a finished session as if the player had recorded it.
    pub fn record_summary(&self, workout_id: &str, title: &str, minutes: i64, calories: u32) {
        let finished = fixed_now();
        let started = finished - chrono::Duration::minutes(minutes);
        let summary = SessionSummary::new(
            WorkoutId::new(workout_id).expect("workout id"),
            title,
            started,
            finished,
            calories,
            5,
            5,
        )
        .expect("summary");
        self.services.summaries().record(summary);
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

fn test_services() -> AppServices {
    let config = ServicesConfig {
        ai_delay: Duration::ZERO,
        ai_seed: Some(7),
        ..ServicesConfig::default()
    };
    AppServices::new(fixed_clock(), config).expect("services")
}

/// Context over fresh services, for exercising view helpers without a DOM.
pub fn test_context() -> AppContext {
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        services: test_services(),
    });
    build_app_context(&app)
}

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let services = test_services();
    let app = Arc::new(TestApp {
        services: services.clone(),
    });
    let dom = VirtualDom::new_with_props(ViewRouterHarness, ViewHarnessProps { app, view });
    ViewHarness { dom, services }
}
