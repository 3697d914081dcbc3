use std::sync::Arc;

use fit_core::catalog::Catalog;
use fit_core::model::{DailyLog, FoodId, FoodItem, MealEntry, MealEntryId, MealKind, NutritionGoals};

use crate::error::NutritionServiceError;
use crate::notice::{Notice, Notifier};

/// Food lookup and meal logging against the built-in food list.
#[derive(Clone)]
pub struct NutritionService {
    catalog: Arc<Catalog>,
    notifier: Arc<dyn Notifier>,
    goals: NutritionGoals,
}

impl NutritionService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            catalog,
            notifier,
            goals: NutritionGoals::default(),
        }
    }

    #[must_use]
    pub fn with_goals(mut self, goals: NutritionGoals) -> Self {
        self.goals = goals;
        self
    }

    #[must_use]
    pub fn goals(&self) -> NutritionGoals {
        self.goals
    }

    #[must_use]
    pub fn search(&self, term: &str) -> Vec<FoodItem> {
        self.catalog.search_foods(term).into_iter().cloned().collect()
    }

    /// Log `servings` of a catalogue food against `meal`.
    ///
    /// # Errors
    ///
    /// Returns `NutritionServiceError::UnknownFood` for ids outside the catalogue
    /// and `NutritionServiceError::Nutrition` for non-positive servings.
    pub fn add_food(
        &self,
        log: &mut DailyLog,
        food_id: FoodId,
        servings: f64,
        meal: MealKind,
    ) -> Result<MealEntry, NutritionServiceError> {
        let food = self
            .catalog
            .food(food_id)
            .ok_or(NutritionServiceError::UnknownFood(food_id))?;
        let entry = log.add(food, servings, meal)?.clone();
        tracing::debug!(food = %food.name, servings, meal = meal.as_str(), "food logged");
        self.notifier.notify(Notice::success(
            "Food Added",
            format!("{} added to {}", food.name, meal.as_str()),
        ));
        Ok(entry)
    }

    /// # Errors
    ///
    /// Returns `NutritionServiceError::Nutrition` if the entry is not in the log.
    pub fn remove_entry(
        &self,
        log: &mut DailyLog,
        entry_id: MealEntryId,
    ) -> Result<MealEntry, NutritionServiceError> {
        Ok(log.remove(entry_id)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notice::NoticeQueue;
    use fit_core::model::NutritionError;

    fn service() -> (NutritionService, NoticeQueue) {
        let queue = NoticeQueue::new();
        let catalog = Arc::new(Catalog::builtin().unwrap());
        (NutritionService::new(catalog, Arc::new(queue.clone())), queue)
    }

    #[test]
    fn add_food_logs_entry_and_notifies() {
        let (service, queue) = service();
        let mut log = DailyLog::new();
        let entry = service
            .add_food(&mut log, FoodId::new(1), 2.0, MealKind::Lunch)
            .unwrap();
        assert_eq!(entry.totals.calories, 330.0);
        assert_eq!(log.entries().len(), 1);

        let notices = queue.drain();
        assert_eq!(notices[0].title, "Food Added");
        assert_eq!(notices[0].body, "Chicken Breast added to lunch");
    }

    #[test]
    fn rejects_unknown_food_and_bad_servings() {
        let (service, queue) = service();
        let mut log = DailyLog::new();
        assert!(matches!(
            service.add_food(&mut log, FoodId::new(42), 1.0, MealKind::Dinner),
            Err(NutritionServiceError::UnknownFood(_))
        ));
        assert!(matches!(
            service.add_food(&mut log, FoodId::new(2), 0.0, MealKind::Dinner),
            Err(NutritionServiceError::Nutrition(NutritionError::InvalidServings(_)))
        ));
        assert!(log.entries().is_empty());
        assert!(queue.is_empty());
    }
}
