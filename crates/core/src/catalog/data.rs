//! Compiled-in catalogue content.

use crate::model::{
    Difficulty, ExerciseCategory, ExerciseDefinition, ExerciseError, ExerciseId, FoodId, FoodItem,
    Hsl, MacroTotals, RestPlan, ThemeId, ThemeOption, WorkoutDefinition, WorkoutId, WorkoutMeta,
};

use super::CatalogError;

use ExerciseCategory::{Cardio, Strength};

struct ExerciseRow {
    id: &'static str,
    name: &'static str,
    sets: u32,
    reps: &'static str,
    category: ExerciseCategory,
    description: &'static str,
    muscles: &'static [&'static str],
}

struct WorkoutRow {
    id: &'static str,
    title: &'static str,
    duration: &'static str,
    difficulty: Difficulty,
    calories: u32,
    category: ExerciseCategory,
    description: &'static str,
    rest_between_sets: u32,
    rest_between_exercises: u32,
    exercises: &'static [ExerciseRow],
}

impl ExerciseRow {
    fn build(&self) -> Result<ExerciseDefinition, ExerciseError> {
        ExerciseDefinition::new(
            ExerciseId::from_static(self.id),
            self.name,
            self.sets,
            self.reps,
            self.category,
            self.description,
            self.muscles.iter().map(|m| (*m).to_string()).collect(),
        )
    }
}

impl WorkoutRow {
    fn build(&self) -> Result<WorkoutDefinition, CatalogError> {
        let exercises = self
            .exercises
            .iter()
            .map(ExerciseRow::build)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(WorkoutDefinition::new(
            WorkoutId::from_static(self.id),
            self.title,
            WorkoutMeta {
                duration_label: self.duration.to_string(),
                difficulty: self.difficulty,
                category: self.category,
                description: self.description.to_string(),
            },
            self.calories,
            RestPlan {
                between_sets_secs: self.rest_between_sets,
                between_exercises_secs: self.rest_between_exercises,
            },
            exercises,
        )?)
    }
}

const WORKOUTS: &[WorkoutRow] = &[
    WorkoutRow {
        id: "upper-body-strength",
        title: "Upper Body Strength",
        duration: "45 min",
        difficulty: Difficulty::Intermediate,
        calories: 320,
        category: Strength,
        description: "Build upper body strength with compound movements and isolation exercises targeting chest, back, shoulders, and arms.",
        rest_between_sets: 90,
        rest_between_exercises: 120,
        exercises: &[
            ExerciseRow { id: "bench-press", name: "Bench Press", sets: 4, reps: "8-10", category: Strength, description: "Lie on bench, lower bar to chest, press up explosively", muscles: &["Chest", "Triceps", "Shoulders"] },
            ExerciseRow { id: "bent-over-rows", name: "Bent-Over Rows", sets: 4, reps: "8-10", category: Strength, description: "Hinge at hips, pull bar to lower chest, squeeze shoulder blades", muscles: &["Back", "Biceps", "Rear Delts"] },
            ExerciseRow { id: "overhead-press", name: "Overhead Press", sets: 3, reps: "10-12", category: Strength, description: "Press bar overhead from shoulder level, keep core tight", muscles: &["Shoulders", "Triceps", "Core"] },
            ExerciseRow { id: "pull-ups", name: "Pull-ups", sets: 3, reps: "6-12", category: Strength, description: "Hang from bar, pull body up until chin clears bar", muscles: &["Back", "Biceps", "Forearms"] },
            ExerciseRow { id: "dips", name: "Dips", sets: 3, reps: "8-15", category: Strength, description: "Lower body between parallel bars, push back up", muscles: &["Triceps", "Chest", "Shoulders"] },
            ExerciseRow { id: "bicep-curls", name: "Bicep Curls", sets: 3, reps: "12-15", category: Strength, description: "Curl dumbbells to shoulders, control the negative", muscles: &["Biceps", "Forearms"] },
        ],
    },
    WorkoutRow {
        id: "hiit-cardio-blast",
        title: "HIIT Cardio Blast",
        duration: "30 min",
        difficulty: Difficulty::Advanced,
        calories: 280,
        category: Cardio,
        description: "High-intensity interval training to maximize calorie burn and improve cardiovascular fitness.",
        rest_between_sets: 30,
        rest_between_exercises: 60,
        exercises: &[
            ExerciseRow { id: "burpees", name: "Burpees", sets: 4, reps: "30 sec", category: Cardio, description: "Drop to push-up, jump back up, jump overhead", muscles: &["Full Body", "Core", "Cardio"] },
            ExerciseRow { id: "mountain-climbers", name: "Mountain Climbers", sets: 4, reps: "45 sec", category: Cardio, description: "Plank position, alternate bringing knees to chest rapidly", muscles: &["Core", "Cardio", "Shoulders"] },
            ExerciseRow { id: "jump-squats", name: "Jump Squats", sets: 4, reps: "20", category: Cardio, description: "Squat down, explode up into jump, land softly", muscles: &["Legs", "Glutes", "Cardio"] },
            ExerciseRow { id: "high-knees", name: "High Knees", sets: 4, reps: "30 sec", category: Cardio, description: "Run in place bringing knees to waist level", muscles: &["Legs", "Core", "Cardio"] },
            ExerciseRow { id: "plank-jacks", name: "Plank Jacks", sets: 3, reps: "20", category: Cardio, description: "Plank position, jump feet apart and together", muscles: &["Core", "Shoulders", "Cardio"] },
        ],
    },
    WorkoutRow {
        id: "full-body-beginner",
        title: "Full Body Beginner",
        duration: "35 min",
        difficulty: Difficulty::Beginner,
        calories: 250,
        category: Strength,
        description: "Perfect introduction to strength training with bodyweight and basic equipment exercises.",
        rest_between_sets: 60,
        rest_between_exercises: 90,
        exercises: &[
            ExerciseRow { id: "bodyweight-squats", name: "Bodyweight Squats", sets: 3, reps: "12-15", category: Strength, description: "Feet shoulder-width apart, squat down, drive through heels", muscles: &["Legs", "Glutes", "Core"] },
            ExerciseRow { id: "push-ups", name: "Push-ups", sets: 3, reps: "8-12", category: Strength, description: "Plank position, lower chest to ground, push back up", muscles: &["Chest", "Triceps", "Shoulders"] },
            ExerciseRow { id: "walking-lunges", name: "Walking Lunges", sets: 3, reps: "10 each leg", category: Strength, description: "Step forward into lunge, alternate legs", muscles: &["Legs", "Glutes", "Core"] },
            ExerciseRow { id: "plank", name: "Plank", sets: 3, reps: "30-60 sec", category: Strength, description: "Hold straight line from head to heels", muscles: &["Core", "Shoulders", "Back"] },
            ExerciseRow { id: "glute-bridges", name: "Glute Bridges", sets: 3, reps: "15-20", category: Strength, description: "Lie on back, lift hips up, squeeze glutes", muscles: &["Glutes", "Hamstrings", "Core"] },
            ExerciseRow { id: "wall-sit", name: "Wall Sit", sets: 3, reps: "30-45 sec", category: Strength, description: "Back against wall, slide down to 90 degrees", muscles: &["Legs", "Glutes", "Core"] },
        ],
    },
    WorkoutRow {
        id: "lower-body-power",
        title: "Lower Body Power",
        duration: "40 min",
        difficulty: Difficulty::Advanced,
        calories: 300,
        category: Strength,
        description: "Explosive lower body movements to build strength and power in legs and glutes.",
        rest_between_sets: 120,
        rest_between_exercises: 150,
        exercises: &[
            ExerciseRow { id: "squats", name: "Barbell Squats", sets: 4, reps: "6-8", category: Strength, description: "Bar on upper traps, squat to parallel, drive up explosively", muscles: &["Legs", "Glutes", "Core"] },
            ExerciseRow { id: "deadlifts", name: "Romanian Deadlifts", sets: 4, reps: "8-10", category: Strength, description: "Hinge at hips, lower bar along legs, drive hips forward", muscles: &["Hamstrings", "Glutes", "Back"] },
            ExerciseRow { id: "bulgarian-split-squats", name: "Bulgarian Split Squats", sets: 3, reps: "10 each leg", category: Strength, description: "Rear foot elevated, lunge down on front leg", muscles: &["Legs", "Glutes", "Core"] },
            ExerciseRow { id: "box-jumps", name: "Box Jumps", sets: 4, reps: "8-10", category: Cardio, description: "Jump onto box, land softly, step down", muscles: &["Legs", "Glutes", "Power"] },
        ],
    },
];

const STANDALONE_EXERCISES: &[ExerciseRow] = &[
    ExerciseRow { id: "tricep-extensions", name: "Tricep Extensions", sets: 3, reps: "12-15", category: Strength, description: "Overhead dumbbell extension, lower behind head", muscles: &["Triceps"] },
    ExerciseRow { id: "lateral-raises", name: "Lateral Raises", sets: 3, reps: "12-15", category: Strength, description: "Raise dumbbells to shoulder height, control descent", muscles: &["Shoulders"] },
    ExerciseRow { id: "calf-raises", name: "Calf Raises", sets: 4, reps: "15-20", category: Strength, description: "Rise up on toes, squeeze calves at top", muscles: &["Calves"] },
];

// (id, name, calories, protein, carbs, fat) per 100g
const FOODS: &[(u64, &str, f64, f64, f64, f64)] = &[
    (1, "Chicken Breast", 165.0, 31.0, 0.0, 3.6),
    (2, "Brown Rice", 111.0, 2.6, 23.0, 0.9),
    (3, "Broccoli", 34.0, 2.8, 7.0, 0.4),
    (4, "Avocado", 160.0, 2.0, 9.0, 15.0),
    (5, "Eggs", 155.0, 13.0, 1.1, 11.0),
    (6, "Salmon", 208.0, 20.0, 0.0, 13.0),
    (7, "Oats", 389.0, 17.0, 66.0, 7.0),
    (8, "Greek Yogurt", 59.0, 10.0, 3.6, 0.4),
];

// (id, name, description, accent)
const THEMES: &[(&str, &str, &str, &str)] = &[
    ("default", "Energy Orange", "Bold and energetic with vibrant orange accents", "25 95% 58%"),
    ("electric-blue", "Electric Blue", "Modern and cool with electric blue highlights", "200 100% 50%"),
    ("neon-green", "Neon Green", "Fresh and vibrant with neon green energy", "120 100% 50%"),
    ("sunset-red", "Sunset Red", "Intense and powerful with sunset red tones", "0 100% 60%"),
    ("purple-power", "Purple Power", "Mystical and strong with deep purple accents", "270 100% 60%"),
    ("golden-hour", "Golden Hour", "Warm and motivating with golden yellow highlights", "45 100% 50%"),
];

const THEME_PRIMARY: &str = "220 50% 15%";
const THEME_BACKGROUND: &str = "220 20% 7%";

pub(super) fn workouts() -> Result<Vec<WorkoutDefinition>, CatalogError> {
    WORKOUTS.iter().map(WorkoutRow::build).collect()
}

pub(super) fn standalone_exercises() -> Result<Vec<ExerciseDefinition>, CatalogError> {
    Ok(STANDALONE_EXERCISES
        .iter()
        .map(ExerciseRow::build)
        .collect::<Result<Vec<_>, _>>()?)
}

pub(super) fn foods() -> Vec<FoodItem> {
    FOODS
        .iter()
        .map(|&(id, name, calories, protein, carbs, fat)| FoodItem {
            id: FoodId::new(id),
            name: name.to_string(),
            serving: "100g".to_string(),
            per_serving: MacroTotals {
                calories,
                protein,
                carbs,
                fat,
            },
        })
        .collect()
}

pub(super) fn themes() -> Vec<ThemeOption> {
    THEMES
        .iter()
        .map(|&(id, name, description, accent)| ThemeOption {
            id: ThemeId::from_static(id),
            name: name.to_string(),
            description: description.to_string(),
            primary: Hsl(THEME_PRIMARY.to_string()),
            accent: Hsl(accent.to_string()),
            background: Hsl(THEME_BACKGROUND.to_string()),
        })
        .collect()
}
