use crate::models::{Food, MealType};

/// Share of the daily calories assigned to each meal slot.
pub const fn meal_calorie_share(meal_type: MealType) -> f64 {
    match meal_type {
        MealType::Breakfast => 0.25,
        MealType::Lunch => 0.35,
        MealType::Snack => 0.10,
        MealType::Dinner => 0.25,
        MealType::LateSnack => 0.05,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Portion sizing (fractions of the meal's calorie target)
// ─────────────────────────────────────────────────────────────────────────────

/// Main protein share of a breakfast, lunch or dinner.
pub const PROTEIN_SHARE: f64 = 0.4;

/// Carb share of whatever the protein left over.
pub const CARB_SHARE_OF_REMAINDER: f64 = 0.6;

/// Breakfast only adds fat while below this fraction of its target.
pub const BREAKFAST_FAT_THRESHOLD: f64 = 0.9;

/// Snack only adds protein while below this fraction of its target.
pub const SNACK_PROTEIN_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// Portion caps (grams)
// ─────────────────────────────────────────────────────────────────────────────

pub const BREAKFAST_CARB_MAX_G: u32 = 50;
pub const BREAKFAST_FAT_MAX_G: f64 = 15.0;
pub const MAIN_PROTEIN_MAX_G: u32 = 200;
pub const MAIN_CARB_MAX_G: u32 = 150;
pub const SNACK_PROTEIN_MAX_G: u32 = 150;
pub const LATE_SNACK_PROTEIN_MAX_G: u32 = 100;

/// Vegetables are added at a fixed weight, outside the calorie budget.
pub const VEGETABLE_PORTION_G: u32 = 100;
pub const FRUIT_PORTION_G: u32 = 100;

// ─────────────────────────────────────────────────────────────────────────────
// Food classes
// ─────────────────────────────────────────────────────────────────────────────

/// Preferred breakfast carb.
pub const BREAKFAST_CARB_ID: &str = "oats";

/// Slow-digesting proteins used for snacks.
pub const SLOW_PROTEIN_IDS: [&str; 2] = ["greek_yogurt", "cottage_cheese"];

const FRUIT_IDS: [&str; 1] = ["banana"];
const FRUIT_NAME_MARKERS: [&str; 2] = ["Apple", "Berry"];

pub fn is_slow_protein(food: &Food) -> bool {
    SLOW_PROTEIN_IDS.contains(&food.id.as_str())
}

/// Fruit-like carbs eligible for the afternoon snack.
pub fn is_fruit(food: &Food) -> bool {
    FRUIT_IDS.contains(&food.id.as_str())
        || FRUIT_NAME_MARKERS.iter().any(|m| food.name.contains(m))
}
