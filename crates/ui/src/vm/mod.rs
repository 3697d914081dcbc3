mod analytics_vm;
mod builder_vm;
mod community_vm;
mod measurement_vm;
mod nutrition_vm;
mod session_vm;
mod summary_vm;
mod time_fmt;
mod workout_vm;

pub use analytics_vm::{AnalyticsVm, DayBarVm, MixRowVm, analytics};
pub use builder_vm::{
    BuilderField, BuilderRowVm, BuilderSummaryVm, builder_rows, builder_summary, parse_entry_edit,
};
pub use community_vm::{
    ChallengeVm, FriendVm, GoalVm, LeaderVm, ProfileForm, SocialTab, challenges, friends,
    leaderboard, profile_tiles, weekly_goals,
};
pub use measurement_vm::{
    MeasurementForm, MeasurementRowVm, MeasurementTileVm, TrendVm, measurement_rows,
    measurement_tiles,
};
pub use nutrition_vm::{
    FoodRowVm, MacroRowVm, MealEntryVm, MealSectionVm, macro_rows, meal_sections, meal_title,
};
pub use session_vm::{SessionHeaderVm, SessionVm, SetRowVm};
pub use summary_vm::{ProgressVm, StatTileVm, SummaryCardVm, map_summary_cards};
pub use time_fmt::{format_date, format_datetime, format_minutes};
pub use workout_vm::{
    ALL_OPTION, ExerciseCardVm, WorkoutCardVm, difficulty_class, parse_category_option,
    parse_difficulty_option, parse_muscle_option, prescription,
};
