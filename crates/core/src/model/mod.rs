mod appearance;
mod builder;
mod exercise;
mod generated;
mod ids;
mod measurement;
mod nutrition;
mod set_record;
mod summary;
mod workout;

pub use ids::{
    BuilderEntryId, ExerciseId, FoodId, MealEntryId, MeasurementId, ParseIdError, SetId, SummaryId,
    ThemeId, WorkoutId,
};

pub use appearance::{AppSettings, AppSettingsDraft, AppSettingsError, Hsl, ThemeOption, WeightUnit};
pub use builder::{
    BuilderEntry, BuilderError, DEFAULT_BUILDER_REST_SECS, EntryEdit, WorkoutBuilder,
};
pub use exercise::{ExerciseCategory, ExerciseDefinition, ExerciseError};
pub use generated::{
    GeneratedExercise, GeneratedWorkout, GeneratedWorkoutError, GeneratorParams,
    GeneratorParamsError, MAX_GENERATED_MINUTES, MIN_GENERATED_MINUTES, slugify,
};
pub use measurement::{
    BodyMeasurement, Circumferences, MeasurementDraft, MeasurementError, MeasurementLog, Trend,
    TrendDirection, trend,
};
pub use nutrition::{
    DailyLog, FoodItem, GoalProgress, MacroTotals, MealEntry, MealKind, NutritionError,
    NutritionGoals,
};
pub use set_record::SetRecord;
pub use summary::{SessionSummary, SessionSummaryError};
pub use workout::{Difficulty, RestPlan, WorkoutDefinition, WorkoutError, WorkoutMeta};
