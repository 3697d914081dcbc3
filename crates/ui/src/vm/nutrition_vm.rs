use fit_core::model::{DailyLog, FoodId, FoodItem, MealEntryId, MealKind, NutritionGoals};

/// One macro progress bar.
#[derive(Clone, Debug, PartialEq)]
pub struct MacroRowVm {
    pub label: &'static str,
    pub amount: String,
    pub remaining: String,
    /// Whole percent of the goal, 0..=100.
    pub percent: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealEntryVm {
    pub id: MealEntryId,
    pub name: String,
    pub detail: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct MealSectionVm {
    pub meal: MealKind,
    pub title: String,
    pub calories: String,
    pub entries: Vec<MealEntryVm>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FoodRowVm {
    pub id: FoodId,
    pub name: String,
    pub headline: String,
    pub detail: String,
}

impl From<&FoodItem> for FoodRowVm {
    fn from(food: &FoodItem) -> Self {
        let macros = food.per_serving;
        Self {
            id: food.id,
            name: food.name.clone(),
            headline: format!(
                "{} cal, {}g protein per {}",
                macros.calories, macros.protein, food.serving
            ),
            detail: format!("C: {}g  F: {}g", macros.carbs, macros.fat),
        }
    }
}

/// Calories may go negative when the goal is exceeded; grams stop at zero.
#[must_use]
pub fn macro_rows(log: &DailyLog, goals: &NutritionGoals) -> Vec<MacroRowVm> {
    let totals = log.totals();
    let progress = log.progress(goals);
    vec![
        MacroRowVm {
            label: "Calories",
            amount: format!("{:.0}/{:.0}", totals.calories, goals.calories),
            remaining: format!("{:.0} remaining", goals.calories - totals.calories.round()),
            percent: whole_percent(progress.calories),
        },
        grams_row("Protein", totals.protein, goals.protein, progress.protein),
        grams_row("Carbs", totals.carbs, goals.carbs, progress.carbs),
        grams_row("Fat", totals.fat, goals.fat, progress.fat),
    ]
}

fn grams_row(label: &'static str, value: f64, goal: f64, percent: f64) -> MacroRowVm {
    MacroRowVm {
        label,
        amount: format!("{value:.0}g/{goal:.0}g"),
        remaining: format!("{:.0}g remaining", (goal - value.round()).max(0.0)),
        percent: whole_percent(percent),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_percent(percent: f64) -> u32 {
    percent.round().clamp(0.0, 100.0) as u32
}

#[must_use]
pub fn meal_sections(log: &DailyLog) -> Vec<MealSectionVm> {
    MealKind::ALL
        .into_iter()
        .map(|meal| MealSectionVm {
            meal,
            title: meal_title(meal),
            calories: format!("{:.0} cal", log.meal_totals(meal).calories),
            entries: log
                .meal_entries(meal)
                .map(|entry| MealEntryVm {
                    id: entry.id,
                    name: entry.name.clone(),
                    detail: format!("{} serving • {:.0} cal", entry.servings, entry.totals.calories),
                })
                .collect(),
        })
        .collect()
}

/// `breakfast` -> `Breakfast`
#[must_use]
pub fn meal_title(meal: MealKind) -> String {
    let name = meal.as_str();
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fit_core::catalog::Catalog;

    fn log_with(entries: &[(u64, f64, MealKind)]) -> DailyLog {
        let catalog = Catalog::builtin().unwrap();
        let mut log = DailyLog::new();
        for &(id, servings, meal) in entries {
            let food = catalog.food(FoodId::new(id)).unwrap();
            log.add(food, servings, meal).unwrap();
        }
        log
    }

    #[test]
    fn macro_rows_round_and_report_remaining() {
        let log = log_with(&[(1, 2.0, MealKind::Lunch)]);
        let rows = macro_rows(&log, &NutritionGoals::default());
        assert_eq!(rows[0].amount, "330/2000");
        assert_eq!(rows[0].remaining, "1670 remaining");
        assert_eq!(rows[1].amount, "62g/150g");
        assert_eq!(rows[1].remaining, "88g remaining");
    }

    #[test]
    fn grams_remaining_stop_at_zero() {
        let log = log_with(&[(7, 10.0, MealKind::Breakfast)]);
        let rows = macro_rows(&log, &NutritionGoals::default());
        assert_eq!(rows[0].remaining, "-1890 remaining");
        assert_eq!(rows[2].remaining, "0g remaining");
        assert_eq!(rows[2].percent, 100);
        assert_eq!(rows[1].percent, 100);
    }

    #[test]
    fn meal_sections_group_entries() {
        let log = log_with(&[(7, 1.0, MealKind::Breakfast), (5, 2.0, MealKind::Breakfast)]);
        let sections = meal_sections(&log);
        assert_eq!(sections.len(), 4);
        assert_eq!(sections[0].title, "Breakfast");
        assert_eq!(sections[0].entries.len(), 2);
        assert_eq!(sections[0].calories, "699 cal");
        assert_eq!(sections[0].entries[1].detail, "2 serving • 310 cal");
        assert!(sections[3].entries.is_empty());
    }

    #[test]
    fn food_row_labels() {
        let catalog = Catalog::builtin().unwrap();
        let row = FoodRowVm::from(catalog.food(FoodId::new(8)).unwrap());
        assert_eq!(row.headline, "59 cal, 10g protein per 100g");
        assert_eq!(row.detail, "C: 3.6g  F: 0.4g");
    }
}
