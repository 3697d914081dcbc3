use chrono::{DateTime, Utc};
use std::sync::Mutex;

use fit_core::model::{SessionSummary, SummaryId, WorkoutId};

use crate::error::SummaryError;
use crate::Clock;

use super::progress::ProgressTotals;

/// Presentation-agnostic list item for a recorded session.
///
/// No pre-formatted strings; the UI formats times and units itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryListItem {
    pub id: SummaryId,
    pub workout_id: WorkoutId,
    pub workout_title: String,
    pub finished_at: DateTime<Utc>,
    pub minutes: u32,
    pub calories: u32,
    pub exercises: u32,
}

impl SummaryListItem {
    #[must_use]
    pub fn from_summary(id: SummaryId, summary: &SessionSummary) -> Self {
        Self {
            id,
            workout_id: summary.workout_id().clone(),
            workout_title: summary.workout_title().to_string(),
            finished_at: summary.finished_at(),
            minutes: summary.elapsed_minutes(),
            calories: summary.calories(),
            exercises: summary.completed_exercises(),
        }
    }
}

#[derive(Default)]
struct SummaryLog {
    rows: Vec<(SummaryId, SessionSummary)>,
    next_id: u64,
}

/// Finished sessions recorded during this run of the app.
pub struct SummaryService {
    clock: Clock,
    log: Mutex<SummaryLog>,
}

impl SummaryService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            log: Mutex::new(SummaryLog::default()),
        }
    }

    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn record(&self, summary: SessionSummary) -> SummaryId {
        let mut log = self.lock();
        log.next_id += 1;
        let id = SummaryId::new(log.next_id);
        tracing::info!(
            summary_id = %id,
            workout = %summary.workout_id(),
            minutes = summary.elapsed_minutes(),
            "session summary recorded"
        );
        log.rows.push((id, summary));
        id
    }

    /// # Errors
    ///
    /// Returns `SummaryError::NotFound` if no summary has this id.
    pub fn get(&self, id: SummaryId) -> Result<SessionSummary, SummaryError> {
        self.lock()
            .rows
            .iter()
            .find(|(row_id, _)| *row_id == id)
            .map(|(_, summary)| summary.clone())
            .ok_or(SummaryError::NotFound(id))
    }

    /// Most recent first.
    #[must_use]
    pub fn list_recent(&self, limit: usize) -> Vec<SummaryListItem> {
        self.lock()
            .rows
            .iter()
            .rev()
            .take(limit)
            .map(|(id, summary)| SummaryListItem::from_summary(*id, summary))
            .collect()
    }

    #[must_use]
    pub fn totals(&self) -> ProgressTotals {
        let log = self.lock();
        ProgressTotals::from_summaries(log.rows.iter().map(|(_, summary)| summary))
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SummaryLog> {
        self.log
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}
