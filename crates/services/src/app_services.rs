use std::sync::Arc;
use std::time::Duration;

use fit_core::catalog::Catalog;
use fit_core::model::ThemeId;

use crate::ai::{AiWorkoutService, CannedGenerator, DEFAULT_GENERATION_DELAY, WorkoutGenerator};
use crate::builder_service::BuilderService;
use crate::catalog_service::CatalogService;
use crate::error::AppServicesError;
use crate::measurement_service::MeasurementService;
use crate::notice::{LogNotifier, NoticeQueue, Notifier};
use crate::nutrition_service::NutritionService;
use crate::sessions::{SessionFlowService, SummaryService};
use crate::settings_store::SettingsStore;
use crate::Clock;

/// Launch-time knobs for the service graph.
#[derive(Debug, Clone)]
pub struct ServicesConfig {
    pub theme: Option<ThemeId>,
    pub ai_delay: Duration,
    pub ai_seed: Option<u64>,
}

impl Default for ServicesConfig {
    fn default() -> Self {
        Self {
            theme: None,
            ai_delay: DEFAULT_GENERATION_DELAY,
            ai_seed: None,
        }
    }
}

/// Assembles app-facing services around the built-in catalogue.
#[derive(Clone)]
pub struct AppServices {
    notices: NoticeQueue,
    catalog: Arc<CatalogService>,
    sessions: Arc<SessionFlowService>,
    summaries: Arc<SummaryService>,
    nutrition: Arc<NutritionService>,
    settings: Arc<SettingsStore>,
    ai_workouts: Arc<AiWorkoutService>,
    builder: Arc<BuilderService>,
    measurements: Arc<MeasurementService>,
}

impl AppServices {
    /// Build services with the canned workout generator.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the catalogue is invalid or the configured
    /// theme is not built in.
    pub fn new(clock: Clock, config: ServicesConfig) -> Result<Self, AppServicesError> {
        let catalog = Arc::new(Catalog::builtin()?);
        let mut generator = CannedGenerator::new(Arc::clone(&catalog)).with_delay(config.ai_delay);
        if let Some(seed) = config.ai_seed {
            generator = generator.with_seed(seed);
        }
        Self::with_generator(clock, catalog, Arc::new(generator), config.theme.as_ref())
    }

    /// Build services around a caller-supplied generator backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError::Settings` if `theme` is not built in.
    pub fn with_generator(
        clock: Clock,
        catalog: Arc<Catalog>,
        generator: Arc<dyn WorkoutGenerator>,
        theme: Option<&ThemeId>,
    ) -> Result<Self, AppServicesError> {
        let notices = NoticeQueue::new();
        let notifier: Arc<dyn Notifier> = Arc::new((notices.clone(), LogNotifier));

        let settings = Arc::new(SettingsStore::new(Arc::clone(&catalog)));
        if let Some(theme) = theme {
            settings.apply_theme(theme)?;
        }

        let summaries = Arc::new(SummaryService::new(clock));
        let sessions = Arc::new(SessionFlowService::new(
            clock,
            Arc::clone(&catalog),
            Arc::clone(&summaries),
            Arc::clone(&notifier),
        ));
        let nutrition = Arc::new(NutritionService::new(
            Arc::clone(&catalog),
            Arc::clone(&notifier),
        ));
        let ai_workouts = Arc::new(AiWorkoutService::new(generator, Arc::clone(&notifier)));
        let builder = Arc::new(BuilderService::new(
            Arc::clone(&catalog),
            Arc::clone(&notifier),
        ));
        let measurements = Arc::new(MeasurementService::new(Arc::clone(&notifier)));

        tracing::info!(
            workouts = catalog.workouts().len(),
            theme = %settings.current().theme(),
            "services ready"
        );

        Ok(Self {
            notices,
            catalog: Arc::new(CatalogService::new(catalog)),
            sessions,
            summaries,
            nutrition,
            settings,
            ai_workouts,
            builder,
            measurements,
        })
    }

    #[must_use]
    pub fn notices(&self) -> NoticeQueue {
        self.notices.clone()
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
}
