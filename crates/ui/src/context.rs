use std::sync::{Arc, Mutex, PoisonError};

use fit_core::model::{WorkoutDefinition, WorkoutId};
use services::{
    AiWorkoutService, BuilderService, CatalogService, MeasurementService, NoticeQueue,
    NutritionService, SessionFlowService, SettingsStore, SummaryService,
};

pub trait UiApp: Send + Sync {
    fn catalog(&self) -> Arc<CatalogService>;
    fn sessions(&self) -> Arc<SessionFlowService>;
    fn summaries(&self) -> Arc<SummaryService>;
    fn nutrition(&self) -> Arc<NutritionService>;
    fn settings(&self) -> Arc<SettingsStore>;
    fn ai_workouts(&self) -> Arc<AiWorkoutService>;
    fn builder(&self) -> Arc<BuilderService>;
    fn measurements(&self) -> Arc<MeasurementService>;
    fn notices(&self) -> NoticeQueue;

    /// Workout to open straight away, if the launcher asked for one.
    fn initial_workout(&self) -> Option<WorkoutId>;
}

#[derive(Clone)]
pub struct AppContext {
    catalog: Arc<CatalogService>,
    sessions: Arc<SessionFlowService>,
    summaries: Arc<SummaryService>,
    nutrition: Arc<NutritionService>,
    settings: Arc<SettingsStore>,
    ai_workouts: Arc<AiWorkoutService>,
    builder: Arc<BuilderService>,
    measurements: Arc<MeasurementService>,
    notices: NoticeQueue,

    initial_workout_once: Arc<Mutex<Option<WorkoutId>>>,
    generated: Arc<Mutex<Option<Arc<WorkoutDefinition>>>>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            catalog: app.catalog(),
            sessions: app.sessions(),
            summaries: app.summaries(),
            nutrition: app.nutrition(),
            settings: app.settings(),
            ai_workouts: app.ai_workouts(),
            builder: app.builder(),
            measurements: app.measurements(),
            notices: app.notices(),
            initial_workout_once: Arc::new(Mutex::new(app.initial_workout())),
            generated: Arc::new(Mutex::new(None)),
        }
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<CatalogService> {
        Arc::clone(&self.catalog)
    }

    #[must_use]
    pub fn sessions(&self) -> Arc<SessionFlowService> {
        Arc::clone(&self.sessions)
    }

    #[must_use]
    pub fn summaries(&self) -> Arc<SummaryService> {
        Arc::clone(&self.summaries)
    }

    #[must_use]
    pub fn nutrition(&self) -> Arc<NutritionService> {
        Arc::clone(&self.nutrition)
    }

    #[must_use]
    pub fn settings(&self) -> Arc<SettingsStore> {
        Arc::clone(&self.settings)
    }

    #[must_use]
    pub fn ai_workouts(&self) -> Arc<AiWorkoutService> {
        Arc::clone(&self.ai_workouts)
    }

    #[must_use]
    pub fn builder(&self) -> Arc<BuilderService> {
        Arc::clone(&self.builder)
    }

    #[must_use]
    pub fn measurements(&self) -> Arc<MeasurementService> {
        Arc::clone(&self.measurements)
    }

    #[must_use]
    pub fn notices(&self) -> NoticeQueue {
        self.notices.clone()
    }

    /// One-shot: returns the launch workout the first time only.
    #[must_use]
    pub fn take_initial_workout(&self) -> Option<WorkoutId> {
        self.initial_workout_once
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take()
    }

    /// Keep the latest generated workout so the session route can play it.
    pub fn stash_generated(&self, workout: Arc<WorkoutDefinition>) {
        *self.generated.lock().unwrap_or_else(PoisonError::into_inner) = Some(workout);
    }

    #[must_use]
    pub fn generated(&self, id: &WorkoutId) -> Option<Arc<WorkoutDefinition>> {
        self.generated
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .filter(|workout| workout.id() == id)
            .cloned()
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
