use chrono::NaiveDate;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::calculator::calculate_water_intake;
use crate::catalog::Catalog;
use crate::models::{
    CalorieTarget, Category, DayMealPlan, Food, Meal, MealItem, MealType, UserProfile,
};
use crate::planner::constants::*;

/// Category members in random order.
fn shuffled_category<'a, R: Rng + ?Sized>(
    catalog: &'a Catalog,
    category: Category,
    rng: &mut R,
) -> Vec<&'a Food> {
    let mut foods = catalog.get_foods_by_category(category);
    foods.shuffle(rng);
    foods
}

/// Grams of `food` supplying `calories`, rounded and optionally capped.
fn portion_for(food: &Food, calories: f64, cap: Option<u32>) -> u32 {
    let grams = food.grams_for_calories(calories).round().max(0.0) as u32;
    match cap {
        Some(cap) => grams.min(cap),
        None => grams,
    }
}

/// Accumulates items and the calories they contribute.
struct MealBuilder {
    meal_type: MealType,
    items: Vec<MealItem>,
    calories: u32,
}

impl MealBuilder {
    fn new(meal_type: MealType) -> Self {
        Self {
            meal_type,
            items: Vec::new(),
            calories: 0,
        }
    }

    /// Add an item that counts toward the calorie budget.
    fn add(&mut self, food: &Food, quantity: u32) {
        let item = MealItem::new(food, quantity);
        self.calories = self.calories.saturating_add(item.calories);
        self.push(item);
    }

    /// Add an item outside the calorie budget.
    fn add_free(&mut self, food: &Food, quantity: u32) {
        self.push(MealItem::new(food, quantity));
    }

    fn push(&mut self, item: MealItem) {
        debug!(
            meal = ?self.meal_type,
            food = %item.food_id,
            grams = item.quantity,
            kcal = item.calories,
            "added meal item"
        );
        self.items.push(item);
    }

    fn remaining(&self, target_calories: f64) -> f64 {
        target_calories - self.calories as f64
    }

    fn build(self) -> Meal {
        Meal::new(self.meal_type, self.items)
    }
}

/// Protein, a carb (oats when available) and, if still short, a little fat.
fn breakfast<R: Rng + ?Sized>(
    builder: &mut MealBuilder,
    target: f64,
    catalog: &Catalog,
    rng: &mut R,
) {
    let proteins = shuffled_category(catalog, Category::Protein, rng);
    let carbs = shuffled_category(catalog, Category::Carb, rng);
    let fats = shuffled_category(catalog, Category::Fat, rng);

    if let Some(protein) = proteins.first() {
        builder.add(protein, portion_for(protein, target * PROTEIN_SHARE, None));
    }

    let carb = carbs
        .iter()
        .find(|f| f.id == BREAKFAST_CARB_ID)
        .or_else(|| carbs.first());
    if let Some(carb) = carb {
        let calories = builder.remaining(target) * CARB_SHARE_OF_REMAINDER;
        builder.add(carb, portion_for(carb, calories, Some(BREAKFAST_CARB_MAX_G)));
    }

    if let Some(fat) = fats.first() {
        if (builder.calories as f64) < target * BREAKFAST_FAT_THRESHOLD {
            let grams = BREAKFAST_FAT_MAX_G.min(fat.serving_size).round() as u32;
            builder.add(fat, grams);
        }
    }
}

/// Main protein, a carb side and a free portion of vegetables.
fn main_meal<R: Rng + ?Sized>(
    builder: &mut MealBuilder,
    target: f64,
    catalog: &Catalog,
    rng: &mut R,
) {
    let proteins = shuffled_category(catalog, Category::Protein, rng);
    let carbs = shuffled_category(catalog, Category::Carb, rng);
    let vegetables = shuffled_category(catalog, Category::Vegetable, rng);

    if let Some(protein) = proteins.first() {
        let grams = portion_for(protein, target * PROTEIN_SHARE, Some(MAIN_PROTEIN_MAX_G));
        builder.add(protein, grams);
    }

    if let Some(carb) = carbs.first() {
        let calories = builder.remaining(target) * CARB_SHARE_OF_REMAINDER;
        builder.add(carb, portion_for(carb, calories, Some(MAIN_CARB_MAX_G)));
    }

    if let Some(vegetable) = vegetables.first() {
        builder.add_free(vegetable, VEGETABLE_PORTION_G);
    }
}

/// A piece of fruit, topped up with light protein when well short.
fn snack<R: Rng + ?Sized>(
    builder: &mut MealBuilder,
    target: f64,
    catalog: &Catalog,
    rng: &mut R,
) {
    let proteins: Vec<&Food> = shuffled_category(catalog, Category::Protein, rng)
        .into_iter()
        .filter(|f| is_slow_protein(f))
        .collect();
    let fruits: Vec<&Food> = shuffled_category(catalog, Category::Carb, rng)
        .into_iter()
        .filter(|f| is_fruit(f))
        .collect();

    if let Some(fruit) = fruits.first() {
        builder.add(fruit, FRUIT_PORTION_G);
    }

    if let Some(protein) = proteins.first() {
        if (builder.calories as f64) < target * SNACK_PROTEIN_THRESHOLD {
            let calories = builder.remaining(target);
            builder.add(protein, portion_for(protein, calories, Some(SNACK_PROTEIN_MAX_G)));
        }
    }
}

/// A slow-digesting protein before bed.
fn late_snack<R: Rng + ?Sized>(
    builder: &mut MealBuilder,
    target: f64,
    catalog: &Catalog,
    rng: &mut R,
) {
    let proteins: Vec<&Food> = shuffled_category(catalog, Category::Protein, rng)
        .into_iter()
        .filter(|f| is_slow_protein(f))
        .collect();

    if let Some(protein) = proteins.first() {
        let grams = portion_for(protein, target, Some(LATE_SNACK_PROTEIN_MAX_G));
        builder.add(protein, grams);
    }
}

/// Build one meal aiming for `target_calories`.
///
/// Foods are drawn from shuffled category lists. A category with no
/// matching foods just leaves its line item out, so the meal can come back
/// short or empty.
pub fn generate_meal<R: Rng + ?Sized>(
    meal_type: MealType,
    target_calories: u32,
    _profile: &UserProfile,
    catalog: &Catalog,
    rng: &mut R,
) -> Meal {
    let target = target_calories as f64;
    let mut builder = MealBuilder::new(meal_type);

    match meal_type {
        MealType::Breakfast => breakfast(&mut builder, target, catalog, rng),
        MealType::Lunch | MealType::Dinner => main_meal(&mut builder, target, catalog, rng),
        MealType::Snack => snack(&mut builder, target, catalog, rng),
        MealType::LateSnack => late_snack(&mut builder, target, catalog, rng),
    }

    let meal = builder.build();
    debug!(
        meal = ?meal_type,
        target = target_calories,
        actual = meal.total_calories,
        items = meal.items.len(),
        "generated meal"
    );
    meal
}

/// Generate all five meals for `date` (today when `None`).
pub fn generate_day_meal_plan<R: Rng + ?Sized>(
    target: &CalorieTarget,
    profile: &UserProfile,
    date: Option<NaiveDate>,
    catalog: &Catalog,
    rng: &mut R,
) -> DayMealPlan {
    let date = date.unwrap_or_else(|| chrono::Local::now().date_naive());

    let meals: Vec<Meal> = MealType::ALL
        .iter()
        .map(|&meal_type| {
            let calories =
                (target.daily_calories as f64 * meal_calorie_share(meal_type)).round() as u32;
            generate_meal(meal_type, calories, profile, catalog, rng)
        })
        .collect();

    DayMealPlan::new(date, meals, calculate_water_intake(profile))
}
