use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::catalog::Catalog;
use crate::error::{NutritionError, Result};
use crate::models::{CalorieTarget, DayMealPlan, Food, Meal, MealItem};
use crate::planner::constants::meal_calorie_share;

/// Find a replacement for `food_id`.
///
/// Listed substitutes that exist in the catalog win, picked uniformly at
/// random. Otherwise the first other food of the same category is used.
/// Returns `None` for unknown ids or exhausted categories.
pub fn substitute_food<'a, R: Rng + ?Sized>(
    food_id: &str,
    catalog: &'a Catalog,
    rng: &mut R,
) -> Option<&'a Food> {
    let current = catalog.get_food_by_id(food_id)?;

    let substitutes: Vec<&Food> = current
        .substitutes
        .iter()
        .filter_map(|id| catalog.get_food_by_id(id))
        .collect();

    if let Some(choice) = substitutes.choose(rng) {
        debug!(from = food_id, to = %choice.id, "listed substitute");
        return Some(*choice);
    }

    let fallback = catalog
        .get_foods_by_category(current.category)
        .into_iter()
        .find(|f| f.id != current.id);
    if let Some(food) = fallback {
        debug!(from = food_id, to = %food.id, "same-category substitute");
    }
    fallback
}

/// Scale every item so the meal lands near `target_calories`.
///
/// Quantities are multiplied by `target / current` and rounded to whole
/// grams; nutrition and totals are recomputed.
pub fn adjust_meal_calories(meal: &Meal, target_calories: u32) -> Result<Meal> {
    if meal.total_calories == 0 {
        return Err(NutritionError::EmptyMeal(meal.name.clone()));
    }

    let ratio = target_calories as f64 / meal.total_calories as f64;
    let items: Vec<MealItem> = meal
        .items
        .iter()
        .map(|item| {
            let quantity = (item.quantity as f64 * ratio).round() as u32;
            item.with_quantity(quantity)
        })
        .collect();

    Ok(Meal::new(meal.meal_type, items))
}

/// Swap the item for `food_id` with `replacement`, keeping its calories.
pub fn replace_meal_item(meal: &Meal, food_id: &str, replacement: &Food) -> Result<Meal> {
    let position = meal
        .items
        .iter()
        .position(|i| i.food_id == food_id)
        .ok_or_else(|| NutritionError::FoodNotFound(food_id.to_string()))?;

    let old = &meal.items[position];
    let quantity = if old.calories > 0 {
        replacement
            .grams_for_calories(old.calories as f64)
            .round()
            .max(0.0) as u32
    } else {
        old.quantity
    };

    let mut items = meal.items.clone();
    items[position] = MealItem::new(replacement, quantity);
    Ok(Meal::new(meal.meal_type, items))
}

/// Rescale each non-empty meal to its share of the daily target.
///
/// The generator's portion caps leave most plans short of the target; this
/// closes the gap while keeping the same foods. Empty meals are kept as is.
pub fn fit_day_plan(plan: &DayMealPlan, target: &CalorieTarget) -> DayMealPlan {
    let meals = plan
        .meals
        .iter()
        .map(|meal| {
            let share = (target.daily_calories as f64 * meal_calorie_share(meal.meal_type)).round();
            adjust_meal_calories(meal, share as u32).unwrap_or_else(|_| meal.clone())
        })
        .collect();

    DayMealPlan::new(plan.date, meals, plan.water_target)
}
