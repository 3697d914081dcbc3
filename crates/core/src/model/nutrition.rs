use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul};
use thiserror::Error;

use crate::model::ids::{FoodId, MealEntryId};

#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum NutritionError {
    #[error("servings must be a positive number, got {0}")]
    InvalidServings(f64),

    #[error("meal entry {0} not found")]
    UnknownEntry(MealEntryId),
}

/// Calories and macronutrients (grams).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Add for MacroTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calories: self.calories + rhs.calories,
            protein: self.protein + rhs.protein,
            carbs: self.carbs + rhs.carbs,
            fat: self.fat + rhs.fat,
        }
    }
}

impl Mul<f64> for MacroTotals {
    type Output = Self;

    fn mul(self, servings: f64) -> Self {
        Self {
            calories: self.calories * servings,
            protein: self.protein * servings,
            carbs: self.carbs * servings,
            fat: self.fat * servings,
        }
    }
}

/// Entry in the food database; macros are per serving.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FoodItem {
    pub id: FoodId,
    pub name: String,
    pub serving: String,
    pub per_serving: MacroTotals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MealKind {
    Breakfast,
    Lunch,
    Dinner,
    Snacks,
}

impl MealKind {
    pub const ALL: [MealKind; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snacks];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snacks => "snacks",
        }
    }
}

impl fmt::Display for MealKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A food logged against a meal, with macros already scaled by servings.
#[derive(Debug, Clone, PartialEq)]
pub struct MealEntry {
    pub id: MealEntryId,
    pub food_id: FoodId,
    pub name: String,
    pub servings: f64,
    pub meal: MealKind,
    pub totals: MacroTotals,
}

/// Daily targets used for progress bars.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionGoals {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl Default for NutritionGoals {
    fn default() -> Self {
        Self {
            calories: 2000.0,
            protein: 150.0,
            carbs: 200.0,
            fat: 67.0,
        }
    }
}

/// Percent of each goal reached, capped at 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalProgress {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

fn percent_of(value: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (value / goal * 100.0).clamp(0.0, 100.0)
}

/// One day of logged meals. Entries keep insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyLog {
    entries: Vec<MealEntry>,
    next_id: u64,
}

impl DailyLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Log `servings` of `food` against `meal`.
    ///
    /// # Errors
    ///
    /// Returns `NutritionError::InvalidServings` unless servings is finite and > 0.
    pub fn add(
        &mut self,
        food: &FoodItem,
        servings: f64,
        meal: MealKind,
    ) -> Result<&MealEntry, NutritionError> {
        if !servings.is_finite() || servings <= 0.0 {
            return Err(NutritionError::InvalidServings(servings));
        }
        self.next_id += 1;
        self.entries.push(MealEntry {
            id: MealEntryId::new(self.next_id),
            food_id: food.id,
            name: food.name.clone(),
            servings,
            meal,
            totals: food.per_serving * servings,
        });
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// # Errors
    ///
    /// Returns `NutritionError::UnknownEntry` if no entry has this id.
    pub fn remove(&mut self, id: MealEntryId) -> Result<MealEntry, NutritionError> {
        let index = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or(NutritionError::UnknownEntry(id))?;
        Ok(self.entries.remove(index))
    }

    #[must_use]
    pub fn entries(&self) -> &[MealEntry] {
        &self.entries
    }

    pub fn meal_entries(&self, meal: MealKind) -> impl Iterator<Item = &MealEntry> {
        self.entries.iter().filter(move |entry| entry.meal == meal)
    }

    #[must_use]
    pub fn meal_totals(&self, meal: MealKind) -> MacroTotals {
        self.meal_entries(meal)
            .fold(MacroTotals::default(), |acc, entry| acc + entry.totals)
    }

    #[must_use]
    pub fn totals(&self) -> MacroTotals {
        self.entries
            .iter()
            .fold(MacroTotals::default(), |acc, entry| acc + entry.totals)
    }

    #[must_use]
    pub fn progress(&self, goals: &NutritionGoals) -> GoalProgress {
        let totals = self.totals();
        GoalProgress {
            calories: percent_of(totals.calories, goals.calories),
            protein: percent_of(totals.protein, goals.protein),
            carbs: percent_of(totals.carbs, goals.carbs),
            fat: percent_of(totals.fat, goals.fat),
        }
    }
}
