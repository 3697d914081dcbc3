use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::ids::MeasurementId;

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum MeasurementError {
    #[error("please enter your weight")]
    MissingWeight,

    #[error("{field} must be a positive number, got {value}")]
    InvalidValue { field: &'static str, value: f64 },

    #[error("measurement {0} not found")]
    UnknownEntry(MeasurementId),
}

/// Body circumferences in inches. Unset fields were not measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Circumferences {
    pub chest: Option<f64>,
    pub waist: Option<f64>,
    pub hips: Option<f64>,
    pub arms: Option<f64>,
    pub thighs: Option<f64>,
    pub neck: Option<f64>,
}

impl Circumferences {
    fn fields(&self) -> [(&'static str, Option<f64>); 6] {
        [
            ("chest", self.chest),
            ("waist", self.waist),
            ("hips", self.hips),
            ("arms", self.arms),
            ("thighs", self.thighs),
            ("neck", self.neck),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BodyMeasurement {
    pub id: MeasurementId,
    pub date: NaiveDate,
    pub weight: f64,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub circumferences: Circumferences,
}

/// Form input for a new measurement. Weight is the only required field.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasurementDraft {
    pub date: NaiveDate,
    pub weight: Option<f64>,
    pub body_fat: Option<f64>,
    pub muscle_mass: Option<f64>,
    pub circumferences: Circumferences,
}

impl MeasurementDraft {
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            weight: None,
            body_fat: None,
            muscle_mass: None,
            circumferences: Circumferences::default(),
        }
    }

    /// # Errors
    ///
    /// `MissingWeight` when weight is unset or zero; `InvalidValue` for any
    /// negative or non-finite number.
    pub fn validate(&self) -> Result<f64, MeasurementError> {
        let weight = match self.weight {
            None => return Err(MeasurementError::MissingWeight),
            Some(w) if w == 0.0 => return Err(MeasurementError::MissingWeight),
            Some(w) => w,
        };
        let optional = [("body fat", self.body_fat), ("muscle mass", self.muscle_mass)];
        std::iter::once(("weight", Some(weight)))
            .chain(optional)
            .chain(self.circumferences.fields())
            .try_for_each(|(field, value)| match value {
                Some(v) if !v.is_finite() || v < 0.0 => {
                    Err(MeasurementError::InvalidValue { field, value: v })
                }
                _ => Ok(()),
            })?;
        Ok(weight)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendDirection {
    Up,
    Down,
    Neutral,
}

/// Change between two readings. `value` and `percentage` are magnitudes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Trend {
    pub value: f64,
    pub direction: TrendDirection,
    pub percentage: f64,
}

/// Compare two readings. `None` when either is missing or zero.
#[must_use]
pub fn trend(current: Option<f64>, previous: Option<f64>) -> Option<Trend> {
    let (current, previous) = (current?, previous?);
    if current == 0.0 || previous == 0.0 {
        return None;
    }
    let change = current - previous;
    let direction = if change > 0.0 {
        TrendDirection::Up
    } else if change < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Neutral
    };
    Some(Trend {
        value: change.abs(),
        direction,
        percentage: (change / previous * 100.0).abs(),
    })
}

/// Measurement history, newest date first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeasurementLog {
    entries: Vec<BodyMeasurement>,
    next_id: u64,
}

impl MeasurementLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a measurement. A later entry for the same date sorts ahead of
    /// the earlier one.
    ///
    /// # Errors
    ///
    /// Returns the `MeasurementDraft::validate` errors.
    pub fn add(&mut self, draft: &MeasurementDraft) -> Result<&BodyMeasurement, MeasurementError> {
        let weight = draft.validate()?;
        self.next_id += 1;
        let index = self
            .entries
            .iter()
            .position(|entry| entry.date <= draft.date)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            index,
            BodyMeasurement {
                id: MeasurementId::new(self.next_id),
                date: draft.date,
                weight,
                body_fat: draft.body_fat,
                muscle_mass: draft.muscle_mass,
                circumferences: draft.circumferences,
            },
        );
        Ok(&self.entries[index])
    }

    /// # Errors
    ///
    /// Returns `MeasurementError::UnknownEntry` if no entry has this id.
    pub fn remove(&mut self, id: MeasurementId) -> Result<BodyMeasurement, MeasurementError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(MeasurementError::UnknownEntry(id))?;
        Ok(self.entries.remove(index))
    }

    #[must_use]
    pub fn entries(&self) -> &[BodyMeasurement] {
        &self.entries
    }

    #[must_use]
    pub fn latest(&self) -> Option<&BodyMeasurement> {
        self.entries.first()
    }

    #[must_use]
    pub fn previous(&self) -> Option<&BodyMeasurement> {
        self.entries.get(1)
    }

    fn compare(&self, read: impl Fn(&BodyMeasurement) -> Option<f64>) -> Option<Trend> {
        trend(
            self.latest().and_then(&read),
            self.previous().and_then(&read),
        )
    }

    #[must_use]
    pub fn weight_trend(&self) -> Option<Trend> {
        self.compare(|entry| Some(entry.weight))
    }

    #[must_use]
    pub fn body_fat_trend(&self) -> Option<Trend> {
        self.compare(|entry| entry.body_fat)
    }

    #[must_use]
    pub fn muscle_mass_trend(&self) -> Option<Trend> {
        self.compare(|entry| entry.muscle_mass)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn draft(d: u32, weight: f64, body_fat: Option<f64>) -> MeasurementDraft {
        MeasurementDraft {
            weight: Some(weight),
            body_fat,
            ..MeasurementDraft::new(day(d))
        }
    }

    #[test]
    fn weight_is_required() {
        let mut log = MeasurementLog::new();
        let blank = MeasurementDraft::new(day(1));
        assert_eq!(log.add(&blank), Err(MeasurementError::MissingWeight));

        let zero = MeasurementDraft {
            weight: Some(0.0),
            ..blank
        };
        assert_eq!(log.add(&zero), Err(MeasurementError::MissingWeight));
        assert!(log.entries().is_empty());
    }

    #[test]
    fn negative_values_are_rejected() {
        let mut bad = draft(1, 175.0, None);
        bad.circumferences.waist = Some(-1.0);
        assert_eq!(
            bad.validate(),
            Err(MeasurementError::InvalidValue {
                field: "waist",
                value: -1.0
            })
        );
        assert!(matches!(
            draft(1, f64::NAN, None).validate(),
            Err(MeasurementError::InvalidValue { field: "weight", .. })
        ));
    }

    #[test]
    fn entries_stay_newest_first() {
        let mut log = MeasurementLog::new();
        log.add(&draft(13, 177.0, Some(16.1))).unwrap();
        log.add(&draft(20, 175.0, Some(15.2))).unwrap();
        log.add(&draft(6, 178.0, None)).unwrap();

        let dates: Vec<_> = log.entries().iter().map(|entry| entry.date).collect();
        assert_eq!(dates, vec![day(20), day(13), day(6)]);
        assert_eq!(log.latest().unwrap().weight, 175.0);

        let same_day = log.add(&draft(20, 174.5, None)).unwrap().id;
        assert_eq!(log.latest().unwrap().id, same_day);
    }

    #[test]
    fn trend_between_latest_two() {
        let mut log = MeasurementLog::new();
        assert_eq!(log.weight_trend(), None);
        log.add(&draft(13, 177.0, Some(16.1))).unwrap();
        assert_eq!(log.weight_trend(), None);
        log.add(&draft(20, 175.0, None)).unwrap();

        let weight = log.weight_trend().unwrap();
        assert_eq!(weight.direction, TrendDirection::Down);
        assert!((weight.value - 2.0).abs() < 1e-9);
        assert!((weight.percentage - 2.0 / 177.0 * 100.0).abs() < 1e-9);

        // latest reading has no body fat
        assert_eq!(log.body_fat_trend(), None);
    }

    #[test]
    fn trend_directions() {
        assert_eq!(trend(Some(42.1), Some(41.3)).unwrap().direction, TrendDirection::Up);
        assert_eq!(trend(Some(16.0), Some(16.0)).unwrap().direction, TrendDirection::Neutral);
        assert_eq!(trend(Some(16.0), Some(0.0)), None);
        assert_eq!(trend(None, Some(16.0)), None);
    }

    #[test]
    fn remove_unknown_entry() {
        let mut log = MeasurementLog::new();
        let id = log.add(&draft(1, 170.0, None)).unwrap().id;
        log.remove(id).unwrap();
        assert_eq!(log.remove(id), Err(MeasurementError::UnknownEntry(id)));
    }
}
