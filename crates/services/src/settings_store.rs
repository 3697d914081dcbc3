use std::sync::{Arc, PoisonError, RwLock};

use fit_core::catalog::Catalog;
use fit_core::model::{AppSettings, AppSettingsDraft, ThemeId, ThemeOption};

use crate::error::SettingsError;

/// Application-wide settings, shared by every view.
///
/// Readers always get a snapshot; writers go through `apply_theme`, `save` or `reset`.
pub struct SettingsStore {
    catalog: Arc<Catalog>,
    current: RwLock<AppSettings>,
}

impl SettingsStore {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            current: RwLock::new(AppSettings::default()),
        }
    }

    /// Start from `settings`, checking the theme exists.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError::UnknownTheme` if the theme is not built in.
    pub fn with_settings(catalog: Arc<Catalog>, settings: AppSettings) -> Result<Self, SettingsError> {
        if catalog.theme(settings.theme()).is_none() {
            return Err(SettingsError::UnknownTheme(settings.theme().clone()));
        }
        Ok(Self {
            catalog,
            current: RwLock::new(settings),
        })
    }

    #[must_use]
    pub fn current(&self) -> AppSettings {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Active theme, falling back to the first built-in theme.
    #[must_use]
    pub fn theme(&self) -> Option<ThemeOption> {
        let settings = self.current();
        self.catalog
            .theme(settings.theme())
            .or_else(|| self.catalog.themes().first())
            .cloned()
    }

    /// # Errors
    ///
    /// Returns `SettingsError::UnknownTheme` if the theme is not built in.
    pub fn apply_theme(&self, id: &ThemeId) -> Result<ThemeOption, SettingsError> {
        let theme = self
            .catalog
            .theme(id)
            .cloned()
            .ok_or_else(|| SettingsError::UnknownTheme(id.clone()))?;
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = current.clone().with_theme(id.clone());
        tracing::info!(theme = %id, "theme applied");
        Ok(theme)
    }

    /// Validate and store new settings.
    ///
    /// # Errors
    ///
    /// Returns `SettingsError` if validation fails or the theme is not built in.
    pub fn save(&self, draft: AppSettingsDraft) -> Result<AppSettings, SettingsError> {
        let settings = draft.validate()?;
        if self.catalog.theme(settings.theme()).is_none() {
            return Err(SettingsError::UnknownTheme(settings.theme().clone()));
        }
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        tracing::info!(theme = %settings.theme(), "settings saved");
        Ok(settings)
    }

    pub fn reset(&self) -> AppSettings {
        let settings = AppSettings::default();
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = settings.clone();
        tracing::info!("settings reset to defaults");
        settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::model::WeightUnit;

    fn store() -> SettingsStore {
        SettingsStore::new(Arc::new(Catalog::builtin().unwrap()))
    }

    #[test]
    fn apply_theme_updates_snapshot() {
        let store = store();
        let id = ThemeId::new("neon-green").unwrap();
        let theme = store.apply_theme(&id).unwrap();
        assert_eq!(theme.name, "Neon Green");
        assert_eq!(store.current().theme(), &id);
        assert_eq!(store.theme().map(|t| t.id), Some(id));
    }

    #[test]
    fn unknown_theme_is_rejected_and_state_kept() {
        let store = store();
        let err = store.apply_theme(&ThemeId::new("midnight").unwrap()).unwrap_err();
        assert!(matches!(err, SettingsError::UnknownTheme(_)));
        assert_eq!(store.current().theme().as_str(), "default");
    }

    #[test]
    fn save_then_reset() {
        let store = store();
        let mut draft = store.current().to_draft();
        draft.weight_unit = WeightUnit::Kilograms;
        draft.theme = Some("golden-hour".into());
        let saved = store.save(draft).unwrap();
        assert_eq!(saved.weight_unit(), WeightUnit::Kilograms);
        assert_eq!(store.current(), saved);

        let reset = store.reset();
        assert_eq!(reset, AppSettings::default());
        assert_eq!(store.current().weight_unit(), WeightUnit::Pounds);
    }
}
