//! Profile and social hub content. Friends, challenges and the leaderboard
//! are built-in sample data; there is no account backend.

use chrono::{DateTime, Duration, Utc};
use services::{ProgressTotals, SummaryListItem};

use crate::vm::StatTileVm;

pub const WEEKLY_WORKOUT_GOAL: u32 = 5;
pub const WEEKLY_CALORIE_GOAL: u32 = 2500;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileForm {
    pub name: String,
    pub email: String,
    pub bio: String,
    pub current_weight: String,
    pub target_weight: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self {
            name: "Alex Johnson".into(),
            email: "alex.johnson@email.com".into(),
            bio: "Fitness enthusiast focused on strength training and building healthy habits."
                .into(),
            current_weight: "175".into(),
            target_weight: "170".into(),
        }
    }
}

impl ProfileForm {
    #[must_use]
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(char::to_uppercase)
            .take(2)
            .collect()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GoalVm {
    pub label: &'static str,
    pub progress: String,
    pub percent: u32,
}

#[must_use]
pub fn profile_tiles(totals: ProgressTotals) -> Vec<StatTileVm> {
    vec![
        StatTileVm {
            title: "Workouts",
            value: totals.workouts.to_string(),
        },
        StatTileVm {
            title: "Calories",
            value: totals.calories.to_string(),
        },
        StatTileVm {
            title: "Minutes",
            value: totals.minutes.to_string(),
        },
    ]
}

/// Weekly goals over sessions finished in the last seven days.
#[must_use]
pub fn weekly_goals(items: &[SummaryListItem], now: DateTime<Utc>) -> Vec<GoalVm> {
    let since = now - Duration::days(7);
    let recent: Vec<_> = items.iter().filter(|item| item.finished_at > since).collect();
    let workouts = u32::try_from(recent.len()).unwrap_or(u32::MAX);
    let calories: u32 = recent.iter().map(|item| item.calories).sum();
    vec![
        GoalVm {
            label: "Weekly workouts",
            progress: format!("{workouts}/{WEEKLY_WORKOUT_GOAL}"),
            percent: capped_share(workouts, WEEKLY_WORKOUT_GOAL),
        },
        GoalVm {
            label: "Weekly calories",
            progress: format!("{calories}/{WEEKLY_CALORIE_GOAL}"),
            percent: capped_share(calories, WEEKLY_CALORIE_GOAL),
        },
    ]
}

fn capped_share(value: u32, goal: u32) -> u32 {
    value.saturating_mul(100).checked_div(goal).unwrap_or(0).min(100)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FriendVm {
    pub name: &'static str,
    pub streak: u32,
    pub weekly: u32,
    pub total: u32,
    pub online: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeVm {
    pub name: &'static str,
    pub description: &'static str,
    pub target: u32,
    pub current: u32,
    pub participants: u32,
    pub joined: bool,
}

impl ChallengeVm {
    #[must_use]
    pub fn percent(&self) -> u32 {
        capped_share(self.current, self.target)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderVm {
    pub rank: usize,
    pub name: &'static str,
    pub points: u32,
    pub is_you: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SocialTab {
    Friends,
    Challenges,
    Leaderboard,
}

impl SocialTab {
    pub const ALL: [Self; 3] = [Self::Friends, Self::Challenges, Self::Leaderboard];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Friends => "Friends",
            Self::Challenges => "Challenges",
            Self::Leaderboard => "Leaderboard",
        }
    }
}

#[must_use]
pub fn friends() -> Vec<FriendVm> {
    vec![
        FriendVm { name: "Sarah Chen", streak: 12, weekly: 4, total: 89, online: true },
        FriendVm { name: "Mike Johnson", streak: 7, weekly: 3, total: 156, online: false },
        FriendVm { name: "Emma Wilson", streak: 21, weekly: 6, total: 203, online: true },
    ]
}

#[must_use]
pub fn challenges() -> Vec<ChallengeVm> {
    vec![
        ChallengeVm {
            name: "January Consistency Challenge",
            description: "Complete 20 workouts this month",
            target: 20,
            current: 12,
            participants: 847,
            joined: true,
        },
        ChallengeVm {
            name: "5K Steps Daily",
            description: "Walk 5,000 steps every day for a week",
            target: 7,
            current: 3,
            participants: 1205,
            joined: false,
        },
        ChallengeVm {
            name: "Push-up Power Week",
            description: "Do 500 push-ups in one week",
            target: 500,
            current: 280,
            participants: 623,
            joined: true,
        },
    ]
}

#[must_use]
pub fn leaderboard() -> Vec<LeaderVm> {
    [
        ("FitGuru_Alex", 2840),
        ("Emma Wilson", 2735),
        ("WorkoutWarrior", 2680),
        ("You", 2520),
        ("Sarah Chen", 2445),
    ]
    .into_iter()
    .enumerate()
    .map(|(index, (name, points))| LeaderVm {
        rank: index + 1,
        name,
        points,
        is_you: name == "You",
    })
    .collect()
}
