use std::sync::Arc;

use chrono::NaiveDate;
use fit_core::model::{
    BodyMeasurement, Circumferences, MeasurementDraft, MeasurementError, MeasurementId,
    MeasurementLog,
};

use crate::error::MeasurementServiceError;
use crate::notice::{Notice, Notifier};

struct SeedRow {
    date: (i32, u32, u32),
    weight: f64,
    body_fat: f64,
    muscle_mass: f64,
    // chest, waist, hips, arms, thighs, neck
    sizes: [f64; 6],
}

const HISTORY: &[SeedRow] = &[
    SeedRow {
        date: (2024, 1, 13),
        weight: 177.0,
        body_fat: 16.1,
        muscle_mass: 41.3,
        sizes: [41.5, 33.0, 38.5, 15.0, 24.5, 16.0],
    },
    SeedRow {
        date: (2024, 1, 20),
        weight: 175.0,
        body_fat: 15.2,
        muscle_mass: 42.1,
        sizes: [42.0, 32.0, 38.0, 15.5, 24.0, 16.0],
    },
];

impl SeedRow {
    fn draft(&self) -> Option<MeasurementDraft> {
        let (y, m, d) = self.date;
        let [chest, waist, hips, arms, thighs, neck] = self.sizes.map(Some);
        Some(MeasurementDraft {
            date: NaiveDate::from_ymd_opt(y, m, d)?,
            weight: Some(self.weight),
            body_fat: Some(self.body_fat),
            muscle_mass: Some(self.muscle_mass),
            circumferences: Circumferences {
                chest,
                waist,
                hips,
                arms,
                thighs,
                neck,
            },
        })
    }
}

/// Body measurement logging with user-facing notices.
#[derive(Clone)]
pub struct MeasurementService {
    notifier: Arc<dyn Notifier>,
}

impl MeasurementService {
    #[must_use]
    pub fn new(notifier: Arc<dyn Notifier>) -> Self {
        Self { notifier }
    }

    /// A log preloaded with the sample history shown on first launch.
    ///
    /// # Errors
    ///
    /// Returns `MeasurementServiceError::Measurement` if a sample row is invalid.
    pub fn sample_log(&self) -> Result<MeasurementLog, MeasurementServiceError> {
        let mut log = MeasurementLog::new();
        for row in HISTORY {
            let draft = row.draft().ok_or(MeasurementError::MissingWeight)?;
            log.add(&draft)?;
        }
        Ok(log)
    }

    /// # Errors
    ///
    /// Returns `MeasurementServiceError::Measurement` when the weight is
    /// missing or a value is negative.
    pub fn add(
        &self,
        log: &mut MeasurementLog,
        draft: &MeasurementDraft,
    ) -> Result<BodyMeasurement, MeasurementServiceError> {
        match log.add(draft) {
            Ok(entry) => {
                let entry = entry.clone();
                tracing::info!(date = %entry.date, weight = entry.weight, "measurement recorded");
                self.notifier.notify(Notice::success(
                    "Measurement Added",
                    "Your body measurements have been recorded",
                ));
                Ok(entry)
            }
            Err(err) => {
                let notice = match &err {
                    MeasurementError::MissingWeight => {
                        Notice::error("Missing Weight", "Please enter your weight")
                    }
                    other => Notice::error("Invalid Measurement", other.to_string()),
                };
                self.notifier.notify(notice);
                Err(err.into())
            }
        }
    }

    /// # Errors
    ///
    /// Returns `MeasurementServiceError::Measurement` if the entry is not in the log.
    pub fn remove(
        &self,
        log: &mut MeasurementLog,
        id: MeasurementId,
    ) -> Result<BodyMeasurement, MeasurementServiceError> {
        Ok(log.remove(id)?)
    }
}
