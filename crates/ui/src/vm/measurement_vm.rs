use chrono::NaiveDate;
use fit_core::model::{
    BodyMeasurement, Circumferences, MeasurementDraft, MeasurementId, MeasurementLog, Trend,
    TrendDirection,
};

use crate::views::ViewError;

#[derive(Clone, Debug, PartialEq)]
pub struct TrendVm {
    pub class: &'static str,
    pub arrow: &'static str,
    pub label: String,
}

impl TrendVm {
    fn new(trend: Trend, unit: &str) -> Self {
        let (class, arrow) = match trend.direction {
            TrendDirection::Up => ("trend-up", "↑"),
            TrendDirection::Down => ("trend-down", "↓"),
            TrendDirection::Neutral => ("trend-flat", "→"),
        };
        Self {
            class,
            arrow,
            label: format!("{:.1}{unit} ({:.1}%)", trend.value, trend.percentage),
        }
    }
}

/// Headline tile above the measurement history.
#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementTileVm {
    pub title: &'static str,
    pub value: String,
    pub trend: Option<TrendVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeasurementRowVm {
    pub id: MeasurementId,
    pub date: String,
    pub weight: String,
    pub body_fat: String,
    pub muscle_mass: String,
    pub sizes: String,
}

fn optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{v:.1}{unit}"))
}

#[must_use]
pub fn measurement_tiles(log: &MeasurementLog, unit: &str) -> Vec<MeasurementTileVm> {
    let latest = log.latest();
    let weight_unit = format!(" {unit}");
    vec![
        MeasurementTileVm {
            title: "Current weight",
            value: optional(latest.map(|entry| entry.weight), &weight_unit),
            trend: log.weight_trend().map(|t| TrendVm::new(t, &weight_unit)),
        },
        MeasurementTileVm {
            title: "Body fat",
            value: optional(latest.and_then(|entry| entry.body_fat), "%"),
            trend: log.body_fat_trend().map(|t| TrendVm::new(t, "%")),
        },
        MeasurementTileVm {
            title: "Muscle mass",
            value: optional(latest.and_then(|entry| entry.muscle_mass), &weight_unit),
            trend: log.muscle_mass_trend().map(|t| TrendVm::new(t, &weight_unit)),
        },
    ]
}

fn sizes_label(sizes: &Circumferences) -> String {
    let parts: Vec<String> = [
        ("Chest", sizes.chest),
        ("Waist", sizes.waist),
        ("Hips", sizes.hips),
        ("Arms", sizes.arms),
        ("Thighs", sizes.thighs),
        ("Neck", sizes.neck),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| format!("{label} {v}\"")))
    .collect();
    parts.join(" • ")
}

#[must_use]
pub fn measurement_rows(log: &MeasurementLog, unit: &str) -> Vec<MeasurementRowVm> {
    log.entries()
        .iter()
        .map(|entry: &BodyMeasurement| MeasurementRowVm {
            id: entry.id,
            date: entry.date.format("%b %-d, %Y").to_string(),
            weight: format!("{} {unit}", entry.weight),
            body_fat: optional(entry.body_fat, "%"),
            muscle_mass: optional(entry.muscle_mass, &format!(" {unit}")),
            sizes: sizes_label(&entry.circumferences),
        })
        .collect()
}

/// Raw text of the add-measurement form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MeasurementForm {
    pub weight: String,
    pub body_fat: String,
    pub muscle_mass: String,
    pub chest: String,
    pub waist: String,
    pub hips: String,
    pub arms: String,
    pub thighs: String,
    pub neck: String,
}

fn parse_optional(raw: &str) -> Result<Option<f64>, ViewError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed.parse().map(Some).map_err(|_| ViewError::Invalid)
}

impl MeasurementForm {
    /// Parse every field. Blank fields are left unset so the domain check
    /// can report a missing weight.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Invalid` for text that is not a number.
    pub fn to_draft(&self, date: NaiveDate) -> Result<MeasurementDraft, ViewError> {
        Ok(MeasurementDraft {
            date,
            weight: parse_optional(&self.weight)?,
            body_fat: parse_optional(&self.body_fat)?,
            muscle_mass: parse_optional(&self.muscle_mass)?,
            circumferences: Circumferences {
                chest: parse_optional(&self.chest)?,
                waist: parse_optional(&self.waist)?,
                hips: parse_optional(&self.hips)?,
                arms: parse_optional(&self.arms)?,
                thighs: parse_optional(&self.thighs)?,
                neck: parse_optional(&self.neck)?,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn log() -> MeasurementLog {
        let mut log = MeasurementLog::new();
        for (d, weight, fat) in [(13, 177.0, Some(16.1)), (20, 175.0, Some(15.2))] {
            let mut draft = MeasurementDraft::new(day(d));
            draft.weight = Some(weight);
            draft.body_fat = fat;
            draft.circumferences.waist = Some(32.0);
            log.add(&draft).unwrap();
        }
        log
    }

    #[test]
    fn tiles_show_latest_with_trend() {
        let tiles = measurement_tiles(&log(), "lbs");
        assert_eq!(tiles[0].title, "Current weight");
        assert_eq!(tiles[0].value, "175.0 lbs");
        let trend = tiles[0].trend.clone().unwrap();
        assert_eq!(trend.class, "trend-down");
        assert_eq!(trend.label, "2.0 lbs (1.1%)");
        assert_eq!(tiles[1].value, "15.2%");
        assert_eq!(tiles[2].value, "-");
        assert_eq!(tiles[2].trend, None);
    }

    #[test]
    fn rows_label_history() {
        let rows = measurement_rows(&log(), "kg");
        assert_eq!(rows[0].date, "Jan 20, 2024");
        assert_eq!(rows[0].weight, "175 kg");
        assert_eq!(rows[0].sizes, "Waist 32\"");
        assert_eq!(rows[1].body_fat, "16.1%");
    }

    #[test]
    fn form_parses_blank_as_unset() {
        let form = MeasurementForm {
            weight: " 174.5 ".into(),
            neck: "16".into(),
            ..MeasurementForm::default()
        };
        let draft = form.to_draft(day(27)).unwrap();
        assert_eq!(draft.weight, Some(174.5));
        assert_eq!(draft.body_fat, None);
        assert_eq!(draft.circumferences.neck, Some(16.0));

        assert_eq!(MeasurementForm::default().to_draft(day(27)).unwrap().weight, None);
        let bad = MeasurementForm {
            chest: "big".into(),
            ..MeasurementForm::default()
        };
        assert_eq!(bad.to_draft(day(27)), Err(ViewError::Invalid));
    }
}
