use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::Food;

/// Round to one decimal place.
#[inline]
pub fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// One of the five fixed daily eating occasions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
    LateSnack,
}

impl MealType {
    /// Slots in the order they appear in every day plan.
    pub const ALL: [MealType; 5] = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Snack,
        MealType::Dinner,
        MealType::LateSnack,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MealType::Breakfast => "Breakfast",
            MealType::Lunch => "Lunch",
            MealType::Snack => "Afternoon Snack",
            MealType::Dinner => "Dinner",
            MealType::LateSnack => "Evening Snack",
        }
    }

    /// Fixed time of day, `HH:MM`.
    pub fn time(self) -> &'static str {
        match self {
            MealType::Breakfast => "07:00",
            MealType::Lunch => "12:00",
            MealType::Snack => "15:00",
            MealType::Dinner => "19:00",
            MealType::LateSnack => "21:00",
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A food at a given quantity, with nutrition scaled to that quantity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub food_id: String,
    pub food: Food,
    /// Grams.
    pub quantity: u32,
    pub calories: u32,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

impl MealItem {
    /// Scale the food's per-100g values to `quantity` grams.
    ///
    /// Calories round to whole kcal, macros to one decimal.
    pub fn new(food: &Food, quantity: u32) -> Self {
        let multiplier = quantity as f64 / 100.0;
        Self {
            food_id: food.id.clone(),
            food: food.clone(),
            quantity,
            calories: (food.calories * multiplier).round() as u32,
            protein: round_tenth(food.protein * multiplier),
            carbs: round_tenth(food.carbs * multiplier),
            fat: round_tenth(food.fat * multiplier),
        }
    }

    /// Same food at a different quantity.
    pub fn with_quantity(&self, quantity: u32) -> Self {
        Self::new(&self.food, quantity)
    }
}

/// A named meal slot with its items and aggregate totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Meal {
    #[serde(rename = "type")]
    pub meal_type: MealType,
    pub name: String,
    pub time: String,
    pub items: Vec<MealItem>,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
}

impl Meal {
    /// Build a meal and compute its totals from `items`.
    pub fn new(meal_type: MealType, items: Vec<MealItem>) -> Self {
        let total_calories = items.iter().fold(0u32, |acc, i| acc.saturating_add(i.calories));
        let total_protein = round_tenth(items.iter().map(|i| i.protein).sum());
        let total_carbs = round_tenth(items.iter().map(|i| i.carbs).sum());
        let total_fat = round_tenth(items.iter().map(|i| i.fat).sum());

        Self {
            meal_type,
            name: meal_type.name().to_string(),
            time: meal_type.time().to_string(),
            items,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// A full day of meals in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayMealPlan {
    pub date: NaiveDate,
    pub meals: Vec<Meal>,
    pub total_calories: u32,
    pub total_protein: f64,
    pub total_carbs: f64,
    pub total_fat: f64,
    /// Millilitres.
    pub water_target: u32,
}

impl DayMealPlan {
    /// Build a plan and sum the meal totals into day totals.
    pub fn new(date: NaiveDate, meals: Vec<Meal>, water_target: u32) -> Self {
        let total_calories = meals
            .iter()
            .fold(0u32, |acc, m| acc.saturating_add(m.total_calories));
        let total_protein = round_tenth(meals.iter().map(|m| m.total_protein).sum());
        let total_carbs = round_tenth(meals.iter().map(|m| m.total_carbs).sum());
        let total_fat = round_tenth(meals.iter().map(|m| m.total_fat).sum());

        Self {
            date,
            meals,
            total_calories,
            total_protein,
            total_carbs,
            total_fat,
            water_target,
        }
    }

    pub fn meal(&self, meal_type: MealType) -> Option<&Meal> {
        self.meals.iter().find(|m| m.meal_type == meal_type)
    }

    /// Replace the meal in `meal.meal_type`'s slot and recompute day totals.
    pub fn with_meal(&self, meal: Meal) -> Self {
        let meals = self
            .meals
            .iter()
            .map(|m| {
                if m.meal_type == meal.meal_type {
                    meal.clone()
                } else {
                    m.clone()
                }
            })
            .collect();
        Self::new(self.date, meals, self.water_target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn chicken() -> Food {
        Food {
            id: "chicken_breast".to_string(),
            name: "Grilled Chicken Breast".to_string(),
            category: Category::Protein,
            calories: 165.0,
            protein: 31.0,
            carbs: 0.0,
            fat: 3.6,
            fiber: 0.0,
            sugar: 0.0,
            sodium: 74.0,
            serving_size: 100.0,
            substitutes: Vec::new(),
        }
    }

    #[test]
    fn test_round_tenth() {
        assert_eq!(round_tenth(1.26), 1.3);
        assert_eq!(round_tenth(1.24), 1.2);
        assert_eq!(round_tenth(0.0), 0.0);
    }

    #[test]
    fn test_meal_item_scales_per_100g() {
        let item = MealItem::new(&chicken(), 150);
        assert_eq!(item.quantity, 150);
        assert_eq!(item.calories, 248); // 247.5 rounds up
        assert_eq!(item.protein, 46.5);
        assert_eq!(item.fat, 5.4);
        assert_eq!(item.carbs, 0.0);
    }

    #[test]
    fn test_meal_totals_sum_items() {
        let items = vec![MealItem::new(&chicken(), 100), MealItem::new(&chicken(), 50)];
        let meal = Meal::new(MealType::Lunch, items);
        assert_eq!(meal.total_calories, 165 + 83);
        assert_eq!(meal.total_protein, 46.5);
        assert_eq!(meal.time, "12:00");
    }

    #[test]
    fn test_meal_type_serializes_snake_case() {
        let json = serde_json::to_string(&MealType::LateSnack).unwrap();
        assert_eq!(json, "\"late_snack\"");
    }
}
