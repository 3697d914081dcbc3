use fit_core::model::SessionSummary;

/// Aggregated view of recorded sessions, useful for UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressTotals {
    pub workouts: u32,
    pub minutes: u32,
    pub calories: u32,
    pub exercises: u32,
}

impl ProgressTotals {
    pub fn from_summaries<'a>(summaries: impl IntoIterator<Item = &'a SessionSummary>) -> Self {
        summaries
            .into_iter()
            .fold(Self::default(), |acc, summary| Self {
                workouts: acc.workouts.saturating_add(1),
                minutes: acc.minutes.saturating_add(summary.elapsed_minutes()),
                calories: acc.calories.saturating_add(summary.calories()),
                exercises: acc.exercises.saturating_add(summary.completed_exercises()),
            })
    }

    /// Whole-minute average, zero when nothing has been recorded.
    #[must_use]
    pub fn average_minutes(&self) -> u32 {
        self.minutes.checked_div(self.workouts).unwrap_or(0)
    }
}
