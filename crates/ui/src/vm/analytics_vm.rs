use chrono::{DateTime, Duration, Utc};
use services::{ProgressTotals, SummaryListItem};

use crate::vm::StatTileVm;

const WEEK_DAYS: i64 = 7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayBarVm {
    pub label: String,
    pub minutes: u32,
    /// Height relative to the busiest day, 0..=100.
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MixRowVm {
    pub title: String,
    pub count: u32,
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalyticsVm {
    pub tiles: Vec<StatTileVm>,
    pub week: Vec<DayBarVm>,
    pub mix: Vec<MixRowVm>,
}

fn share(part: u32, whole: u32) -> u32 {
    (part.saturating_mul(100)).checked_div(whole).unwrap_or(0)
}

/// `5.5` hours from whole minutes.
fn hours_label(minutes: u32) -> String {
    format!("{}.{}", minutes / 60, minutes % 60 / 6)
}

/// Minutes trained on each of the last seven days, oldest first.
#[must_use]
pub fn weekly_minutes(items: &[SummaryListItem], now: DateTime<Utc>) -> Vec<DayBarVm> {
    let today = now.date_naive();
    let days: Vec<_> = (0..WEEK_DAYS)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .map(|day| {
            let minutes = items
                .iter()
                .filter(|item| item.finished_at.date_naive() == day)
                .map(|item| item.minutes)
                .sum::<u32>();
            (day, minutes)
        })
        .collect();
    let busiest = days.iter().map(|(_, minutes)| *minutes).max().unwrap_or(0);
    days.into_iter()
        .map(|(day, minutes)| DayBarVm {
            label: day.format("%a").to_string(),
            minutes,
            percent: share(minutes, busiest),
        })
        .collect()
}

/// Sessions per workout, most played first.
#[must_use]
pub fn workout_mix(items: &[SummaryListItem]) -> Vec<MixRowVm> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    for item in items {
        match counts.iter_mut().find(|(title, _)| *title == item.workout_title) {
            Some((_, count)) => *count += 1,
            None => counts.push((item.workout_title.clone(), 1)),
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    let total = u32::try_from(items.len()).unwrap_or(u32::MAX);
    counts
        .into_iter()
        .map(|(title, count)| MixRowVm {
            title,
            count,
            percent: share(count, total),
        })
        .collect()
}

#[must_use]
pub fn analytics(
    totals: ProgressTotals,
    items: &[SummaryListItem],
    now: DateTime<Utc>,
) -> AnalyticsVm {
    AnalyticsVm {
        tiles: vec![
            StatTileVm {
                title: "Total Workouts",
                value: totals.workouts.to_string(),
            },
            StatTileVm {
                title: "Calories Burned",
                value: totals.calories.to_string(),
            },
            StatTileVm {
                title: "Active Hours",
                value: hours_label(totals.minutes),
            },
            StatTileVm {
                title: "Exercises Completed",
                value: totals.exercises.to_string(),
            },
        ],
        week: weekly_minutes(items, now),
        mix: workout_mix(items),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::model::{SummaryId, WorkoutId};
    use fit_core::time::fixed_now;

    fn item(id: u64, title: &str, days_ago: i64, minutes: u32) -> SummaryListItem {
        SummaryListItem {
            id: SummaryId::new(id),
            workout_id: WorkoutId::new("full-body-beginner").unwrap(),
            workout_title: title.into(),
            finished_at: fixed_now() - Duration::days(days_ago),
            minutes,
            calories: 200,
            exercises: 5,
        }
    }

    #[test]
    fn week_is_oldest_first_and_scaled() {
        let items = vec![item(1, "A", 0, 30), item(2, "A", 0, 15), item(3, "B", 2, 15), item(4, "B", 9, 60)];
        let week = weekly_minutes(&items, fixed_now());
        assert_eq!(week.len(), 7);
        // fixed_now is a Tuesday
        assert_eq!(week[6].label, "Tue");
        assert_eq!(week[6].minutes, 45);
        assert_eq!(week[6].percent, 100);
        assert_eq!(week[4].minutes, 15);
        assert_eq!(week[4].percent, 33);
        assert_eq!(week.iter().map(|day| day.minutes).sum::<u32>(), 60);
    }

    #[test]
    fn empty_history_has_flat_week() {
        let week = weekly_minutes(&[], fixed_now());
        assert!(week.iter().all(|day| day.minutes == 0 && day.percent == 0));
        assert!(workout_mix(&[]).is_empty());
    }

    #[test]
    fn mix_orders_by_count() {
        let items = vec![item(1, "Yoga", 0, 30), item(2, "HIIT", 1, 20), item(3, "HIIT", 2, 20)];
        let mix = workout_mix(&items);
        assert_eq!(mix[0].title, "HIIT");
        assert_eq!(mix[0].count, 2);
        assert_eq!(mix[0].percent, 66);
        assert_eq!(mix[1].percent, 33);
    }

    #[test]
    fn tiles_convert_minutes_to_hours() {
        let totals = ProgressTotals {
            workouts: 3,
            minutes: 90,
            calories: 600,
            exercises: 15,
        };
        let vm = analytics(totals, &[], fixed_now());
        assert_eq!(vm.tiles[2].title, "Active Hours");
        assert_eq!(vm.tiles[2].value, "1.5");
        assert_eq!(vm.tiles[3].value, "15");
    }
}
