use fit_core::model::{
    Difficulty, ExerciseCategory, ExerciseDefinition, ExerciseId, WorkoutDefinition, WorkoutId,
};

/// Sentinel used by the filter drop-downs.
pub const ALL_OPTION: &str = "All";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkoutCardVm {
    pub id: WorkoutId,
    pub title: String,
    pub description: String,
    pub duration: String,
    pub difficulty: &'static str,
    pub difficulty_class: &'static str,
    pub category: &'static str,
    pub calories_label: String,
    pub exercises_label: String,
}

impl From<&WorkoutDefinition> for WorkoutCardVm {
    fn from(workout: &WorkoutDefinition) -> Self {
        Self {
            id: workout.id().clone(),
            title: workout.title().to_string(),
            description: workout.description().to_string(),
            duration: workout.meta().duration_label.clone(),
            difficulty: workout.difficulty().as_str(),
            difficulty_class: difficulty_class(workout.difficulty()),
            category: workout.category().as_str(),
            calories_label: format!("{} cal", workout.calories()),
            exercises_label: format!("{} exercises", workout.exercise_count()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExerciseCardVm {
    pub id: ExerciseId,
    pub name: String,
    pub category: &'static str,
    pub prescription: String,
    pub description: String,
    pub muscles: Vec<String>,
}

impl From<&ExerciseDefinition> for ExerciseCardVm {
    fn from(exercise: &ExerciseDefinition) -> Self {
        Self {
            id: exercise.id().clone(),
            name: exercise.name().to_string(),
            category: exercise.category().as_str(),
            prescription: prescription(exercise),
            description: exercise.description().to_string(),
            muscles: exercise.target_muscles().to_vec(),
        }
    }
}

/// `3 sets × 12-15 reps`
#[must_use]
pub fn prescription(exercise: &ExerciseDefinition) -> String {
    format!(
        "{} sets × {} reps",
        exercise.target_sets(),
        exercise.target_reps()
    )
}

#[must_use]
pub fn difficulty_class(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Beginner => "badge badge-beginner",
        Difficulty::Intermediate => "badge badge-intermediate",
        Difficulty::Advanced => "badge badge-advanced",
    }
}

/// Drop-down value to filter; `All` and anything unrecognised mean no filter.
#[must_use]
pub fn parse_difficulty_option(value: &str) -> Option<Difficulty> {
    value.parse().ok()
}

#[must_use]
pub fn parse_category_option(value: &str) -> Option<ExerciseCategory> {
    value.parse().ok()
}

#[must_use]
pub fn parse_muscle_option(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed != ALL_OPTION).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::catalog::Catalog;

    #[test]
    fn workout_card_labels() {
        let catalog = Catalog::builtin().unwrap();
        let workout = catalog
            .workout(&WorkoutId::new("upper-body-strength").unwrap())
            .unwrap();
        let card = WorkoutCardVm::from(workout.as_ref());
        assert_eq!(card.duration, "45 min");
        assert_eq!(card.calories_label, "320 cal");
        assert_eq!(card.exercises_label, "6 exercises");
        assert_eq!(card.difficulty_class, "badge badge-intermediate");
    }

    #[test]
    fn exercise_card_prescription() {
        let catalog = Catalog::builtin().unwrap();
        let exercise = catalog
            .exercise(&ExerciseId::new("bench-press").unwrap())
            .unwrap();
        let card = ExerciseCardVm::from(exercise);
        assert_eq!(card.prescription, "4 sets × 8-10 reps");
        assert_eq!(card.muscles, ["Chest", "Triceps", "Shoulders"]);
    }

    #[test]
    fn all_option_means_no_filter() {
        assert_eq!(parse_difficulty_option(ALL_OPTION), None);
        assert_eq!(parse_difficulty_option("advanced"), Some(Difficulty::Advanced));
        assert_eq!(parse_category_option("Cardio"), Some(ExerciseCategory::Cardio));
        assert_eq!(parse_muscle_option(ALL_OPTION), None);
        assert_eq!(parse_muscle_option("Core"), Some("Core".to_string()));
    }
}
