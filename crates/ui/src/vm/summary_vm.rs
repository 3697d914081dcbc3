use fit_core::model::{SummaryId, WorkoutId};
use services::{ProgressTotals, SummaryListItem};

use crate::vm::time_fmt::{format_datetime, format_minutes};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SummaryCardVm {
    pub id: SummaryId,
    pub workout_id: WorkoutId,
    pub title: String,
    pub finished_at_str: String,
    pub duration_str: String,
    pub calories_str: String,
    pub exercises_str: String,
}

impl From<&SummaryListItem> for SummaryCardVm {
    fn from(item: &SummaryListItem) -> Self {
        Self {
            id: item.id,
            workout_id: item.workout_id.clone(),
            title: item.workout_title.clone(),
            finished_at_str: format_datetime(item.finished_at),
            duration_str: format_minutes(item.minutes),
            calories_str: format!("{} cal", item.calories),
            exercises_str: format!("{} exercises", item.exercises),
        }
    }
}

#[must_use]
pub fn map_summary_cards(items: &[SummaryListItem]) -> Vec<SummaryCardVm> {
    items.iter().map(SummaryCardVm::from).collect()
}

/// One tile in a stats row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatTileVm {
    pub title: &'static str,
    pub value: String,
}

/// Headline numbers for the progress page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProgressVm {
    pub tiles: Vec<StatTileVm>,
    pub is_empty: bool,
}

impl From<ProgressTotals> for ProgressVm {
    fn from(totals: ProgressTotals) -> Self {
        let tiles = vec![
            StatTileVm {
                title: "Workouts Completed",
                value: totals.workouts.to_string(),
            },
            StatTileVm {
                title: "Calories Burned",
                value: totals.calories.to_string(),
            },
            StatTileVm {
                title: "Total Minutes",
                value: totals.minutes.to_string(),
            },
            StatTileVm {
                title: "Avg. Session",
                value: format_minutes(totals.average_minutes()),
            },
        ];
        Self {
            tiles,
            is_empty: totals.workouts == 0,
        }
    }
}
