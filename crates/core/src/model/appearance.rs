use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::model::ids::ThemeId;

/// HSL triple in the `"H S% L%"` form used by CSS custom properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl(pub String);

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThemeOption {
    pub id: ThemeId,
    pub name: String,
    pub description: String,
    pub primary: Hsl,
    pub accent: Hsl,
    pub background: Hsl,
}

impl ThemeOption {
    /// CSS custom properties for this theme, ready for a `style` attribute.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let primary = &self.primary;
        let accent = &self.accent;
        let background = &self.background;
        format!(
            "--primary: {primary}; --accent: {accent}; --energy: {accent}; --background: {background}; \
             --gradient-energy: linear-gradient(135deg, hsl({accent}) 0%, hsl({accent}) 100%); \
             --gradient-hero: linear-gradient(135deg, hsl({primary}) 0%, hsl({accent}) 100%);"
        )
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum WeightUnit {
    #[default]
    Pounds,
    Kilograms,
}

impl WeightUnit {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Pounds => "lbs",
            Self::Kilograms => "kg",
        }
    }
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppSettingsError {
    #[error("invalid theme id: {0}")]
    InvalidTheme(String),
}

/// Application-wide appearance and notification preferences.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppSettings {
    theme: ThemeId,
    weight_unit: WeightUnit,
    show_difficulty_badges: bool,
    compact_mode: bool,
    animations: bool,
    workout_reminders: bool,
    achievement_alerts: bool,
}

#[derive(Clone, Debug, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppSettingsDraft {
    pub theme: Option<String>,
    pub weight_unit: WeightUnit,
    pub show_difficulty_badges: bool,
    pub compact_mode: bool,
    pub animations: bool,
    pub workout_reminders: bool,
    pub achievement_alerts: bool,
}

impl AppSettingsDraft {
    /// Validate the draft into settings. A missing or blank theme falls back to `default`.
    ///
    /// # Errors
    ///
    /// Returns `AppSettingsError::InvalidTheme` if the theme id is not a slug.
    pub fn validate(self) -> Result<AppSettings, AppSettingsError> {
        let theme = match self.theme.as_deref().map(str::trim) {
            None | Some("") => AppSettings::default_theme(),
            Some(raw) => ThemeId::new(raw).map_err(|_| AppSettingsError::InvalidTheme(raw.into()))?,
        };

        Ok(AppSettings {
            theme,
            weight_unit: self.weight_unit,
            show_difficulty_badges: self.show_difficulty_badges,
            compact_mode: self.compact_mode,
            animations: self.animations,
            workout_reminders: self.workout_reminders,
            achievement_alerts: self.achievement_alerts,
        })
    }
}

impl AppSettings {
    fn default_theme() -> ThemeId {
        ThemeId::from_static("default")
    }

    #[must_use]
    pub fn to_draft(&self) -> AppSettingsDraft {
        AppSettingsDraft {
            theme: Some(self.theme.to_string()),
            weight_unit: self.weight_unit,
            show_difficulty_badges: self.show_difficulty_badges,
            compact_mode: self.compact_mode,
            animations: self.animations,
            workout_reminders: self.workout_reminders,
            achievement_alerts: self.achievement_alerts,
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: ThemeId) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn theme(&self) -> &ThemeId {
        &self.theme
    }

    #[must_use]
    pub fn weight_unit(&self) -> WeightUnit {
        self.weight_unit
    }

    #[must_use]
    pub fn show_difficulty_badges(&self) -> bool {
        self.show_difficulty_badges
    }

    #[must_use]
    pub fn compact_mode(&self) -> bool {
        self.compact_mode
    }

    #[must_use]
    pub fn animations(&self) -> bool {
        self.animations
    }

    #[must_use]
    pub fn workout_reminders(&self) -> bool {
        self.workout_reminders
    }

    #[must_use]
    pub fn achievement_alerts(&self) -> bool {
        self.achievement_alerts
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme: Self::default_theme(),
            weight_unit: WeightUnit::Pounds,
            show_difficulty_badges: true,
            compact_mode: false,
            animations: true,
            workout_reminders: true,
            achievement_alerts: true,
        }
    }
}
