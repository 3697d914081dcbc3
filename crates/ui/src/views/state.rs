use dioxus::prelude::*;

use services::{
    BuilderServiceError, CatalogServiceError, GenerationFailure, MeasurementServiceError,
    NutritionServiceError, SessionError, SettingsError, SummaryError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    NotFound,
    Invalid,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::NotFound => "That item could not be found.",
            Self::Invalid => "Please check your input and try again.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::UnknownWorkout(_) => Self::NotFound,
            SessionError::State(_) | SessionError::Tracker(_) => Self::Invalid,
            _ => Self::Unknown,
        }
    }
}

impl From<SummaryError> for ViewError {
    fn from(_: SummaryError) -> Self {
        Self::NotFound
    }
}

impl From<CatalogServiceError> for ViewError {
    fn from(_: CatalogServiceError) -> Self {
        Self::Unknown
    }
}

impl From<NutritionServiceError> for ViewError {
    fn from(err: NutritionServiceError) -> Self {
        match err {
            NutritionServiceError::UnknownFood(_) => Self::NotFound,
            _ => Self::Invalid,
        }
    }
}

impl From<BuilderServiceError> for ViewError {
    fn from(err: BuilderServiceError) -> Self {
        match err {
            BuilderServiceError::UnknownExercise(_) => Self::NotFound,
            _ => Self::Invalid,
        }
    }
}

impl From<MeasurementServiceError> for ViewError {
    fn from(_: MeasurementServiceError) -> Self {
        Self::Invalid
    }
}

impl From<SettingsError> for ViewError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::UnknownTheme(_) => Self::NotFound,
            _ => Self::Invalid,
        }
    }
}

impl From<GenerationFailure> for ViewError {
    fn from(err: GenerationFailure) -> Self {
        match err {
            GenerationFailure::InvalidParams(_) => Self::Invalid,
            _ => Self::Unknown,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
