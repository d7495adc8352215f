use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::models::{CalorieTarget, DailyIntake, Goal, UserProfile};

/// Progress toward one nutrient's daily target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientProgress {
    pub current: f64,
    pub target: f64,
    /// Percent of target reached, clamped to 0..=100.
    pub percentage: f64,
    /// Percent of target reached, unclamped.
    pub raw_percentage: f64,
    /// Amount still to eat, never negative.
    pub remaining: f64,
}

impl NutrientProgress {
    pub fn new(current: f64, target: f64) -> Self {
        if target <= 0.0 {
            return Self {
                current,
                target,
                percentage: 0.0,
                raw_percentage: 0.0,
                remaining: 0.0,
            };
        }

        let raw_percentage = current / target * 100.0;
        Self {
            current,
            target,
            percentage: raw_percentage.min(100.0),
            raw_percentage,
            remaining: (target - current).max(0.0),
        }
    }
}

/// Intake versus target for calories and the three macros.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressReport {
    pub calories: NutrientProgress,
    pub protein: NutrientProgress,
    pub carbs: NutrientProgress,
    pub fat: NutrientProgress,
}

/// Compare what was eaten today against the target.
pub fn calculate_progress(intake: &DailyIntake, target: &CalorieTarget) -> ProgressReport {
    ProgressReport {
        calories: NutrientProgress::new(intake.calories, target.daily_calories as f64),
        protein: NutrientProgress::new(intake.protein, target.protein as f64),
        carbs: NutrientProgress::new(intake.carbs, target.carbs as f64),
        fat: NutrientProgress::new(intake.fat, target.fat as f64),
    }
}

/// Advice for the rest of the day.
///
/// Every matching rule fires, in a fixed order. Over-target rules look at
/// the unclamped percentage.
pub fn suggest_adjustments(profile: &UserProfile, progress: &ProgressReport) -> Vec<String> {
    let mut suggestions = Vec::new();

    if progress.protein.raw_percentage < LOW_PROTEIN_PCT {
        suggestions.push("Add a lean protein source such as chicken, fish or eggs".to_string());
    }

    if progress.carbs.raw_percentage > HIGH_CARBS_PCT && profile.goal == Goal::LoseFat {
        suggestions.push(
            "Cut back on simple carbs and prefer complex sources like sweet potato".to_string(),
        );
    }

    if progress.fat.raw_percentage < LOW_FAT_PCT {
        suggestions.push("Include healthy fats such as avocado, nuts or olive oil".to_string());
    }

    if progress.calories.raw_percentage < LOW_CALORIES_PCT {
        suggestions.push("You are eating too little! Add more healthy meals".to_string());
    }

    if progress.calories.raw_percentage > HIGH_CALORIES_PCT {
        suggestions.push("Watch your portions. Try reducing meal sizes".to_string());
    }

    suggestions
}
