use crate::models::{ActivityLevel, Goal};

// ─────────────────────────────────────────────────────────────────────────────
// Revised Harris-Benedict coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_MALE_BASE: f64 = 88.362;
pub const BMR_MALE_WEIGHT: f64 = 13.397;
pub const BMR_MALE_HEIGHT: f64 = 4.799;
pub const BMR_MALE_AGE: f64 = 5.677;

pub const BMR_FEMALE_BASE: f64 = 447.593;
pub const BMR_FEMALE_WEIGHT: f64 = 9.247;
pub const BMR_FEMALE_HEIGHT: f64 = 3.098;
pub const BMR_FEMALE_AGE: f64 = 4.330;

// ─────────────────────────────────────────────────────────────────────────────
// Energy density
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Hydration
// ─────────────────────────────────────────────────────────────────────────────

/// Millilitres of water per kg of body weight.
pub const WATER_ML_PER_KG: f64 = 35.0;

/// Extra water for the top activity tier.
pub const WATER_VERY_ACTIVE_BONUS_ML: f64 = 500.0;

// ─────────────────────────────────────────────────────────────────────────────
// Suggestion thresholds (percent of target)
// ─────────────────────────────────────────────────────────────────────────────

pub const LOW_PROTEIN_PCT: f64 = 80.0;
pub const HIGH_CARBS_PCT: f64 = 120.0;
pub const LOW_FAT_PCT: f64 = 70.0;
pub const LOW_CALORIES_PCT: f64 = 70.0;
pub const HIGH_CALORIES_PCT: f64 = 110.0;

/// Share of total calories from each macro.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroRatios {
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
}

/// TDEE multiplier for an activity tier.
pub const fn activity_multiplier(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::Light => 1.375,
        ActivityLevel::Moderate => 1.55,
        ActivityLevel::Active => 1.725,
        ActivityLevel::VeryActive => 1.9,
    }
}

/// Calorie adjustment applied to TDEE: 20% deficit, 15% surplus, or none.
pub const fn goal_multiplier(goal: Goal) -> f64 {
    match goal {
        Goal::LoseFat => 0.8,
        Goal::GainMuscle => 1.15,
        Goal::Maintain => 1.0,
    }
}

pub const fn macro_ratios(goal: Goal) -> MacroRatios {
    match goal {
        Goal::LoseFat => MacroRatios {
            protein: 0.4,
            carbs: 0.3,
            fat: 0.3,
        },
        Goal::GainMuscle => MacroRatios {
            protein: 0.3,
            carbs: 0.4,
            fat: 0.3,
        },
        Goal::Maintain => MacroRatios {
            protein: 0.25,
            carbs: 0.45,
            fat: 0.3,
        },
    }
}
