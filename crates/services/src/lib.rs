#![forbid(unsafe_code)]

pub mod ai;
pub mod app_services;
pub mod builder_service;
pub mod catalog_service;
pub mod error;
pub mod measurement_service;
pub mod navigation;
pub mod notice;
pub mod nutrition_service;
pub mod sessions;
pub mod settings_store;

pub use fit_core::Clock;

pub use ai::{AiWorkoutService, CannedGenerator, GenerationResult, WorkoutGenerator};
pub use app_services::{AppServices, ServicesConfig};
pub use builder_service::BuilderService;
pub use catalog_service::{CatalogService, CatalogStats};
pub use error::{
    AppServicesError, BuilderServiceError, CatalogServiceError, GenerationFailure,
    MeasurementServiceError, NutritionServiceError, SessionError, SettingsError, SummaryError,
};
pub use measurement_service::MeasurementService;
pub use navigation::Destination;
pub use notice::{LogNotifier, Notice, NoticeQueue, Notifier, Severity};
pub use nutrition_service::NutritionService;
pub use sessions::{FinishOutcome, ProgressTotals, SessionFlowService, SummaryListItem, SummaryService};
pub use settings_store::SettingsStore;
