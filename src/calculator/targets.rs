use std::fmt;

use serde::{Deserialize, Serialize};

use crate::calculator::constants::*;
use crate::models::{ActivityLevel, CalorieTarget, Gender, UserProfile};

/// Basal Metabolic Rate in kcal/day (revised Harris-Benedict).
pub fn calculate_bmr(profile: &UserProfile) -> f64 {
    let weight = profile.weight;
    let height = profile.height;
    let age = profile.age as f64;

    match profile.gender {
        Gender::Male => {
            BMR_MALE_BASE + BMR_MALE_WEIGHT * weight + BMR_MALE_HEIGHT * height
                - BMR_MALE_AGE * age
        }
        Gender::Female => {
            BMR_FEMALE_BASE + BMR_FEMALE_WEIGHT * weight + BMR_FEMALE_HEIGHT * height
                - BMR_FEMALE_AGE * age
        }
    }
}

/// Total Daily Energy Expenditure: BMR scaled by activity.
pub fn calculate_tdee(profile: &UserProfile) -> f64 {
    calculate_bmr(profile) * activity_multiplier(profile.activity_level)
}

/// Daily calorie target and macro split for the profile's goal.
///
/// Each field is rounded on its own, so the three macro kcal fields need
/// not add up to `daily_calories` exactly.
pub fn calculate_calorie_target(profile: &UserProfile) -> CalorieTarget {
    let tdee = calculate_tdee(profile);
    let daily_calories = (tdee * goal_multiplier(profile.goal)).round();

    let ratios = macro_ratios(profile.goal);
    let protein_calories = daily_calories * ratios.protein;
    let carbs_calories = daily_calories * ratios.carbs;
    let fat_calories = daily_calories * ratios.fat;

    CalorieTarget {
        daily_calories: daily_calories as u32,
        protein: (protein_calories / KCAL_PER_GRAM_PROTEIN).round() as u32,
        carbs: (carbs_calories / KCAL_PER_GRAM_CARBS).round() as u32,
        fat: (fat_calories / KCAL_PER_GRAM_FAT).round() as u32,
        protein_calories: protein_calories.round() as u32,
        carbs_calories: carbs_calories.round() as u32,
        fat_calories: fat_calories.round() as u32,
    }
}

/// Daily water target in ml.
pub fn calculate_water_intake(profile: &UserProfile) -> u32 {
    let base = profile.weight * WATER_ML_PER_KG;
    let bonus = if profile.activity_level == ActivityLevel::VeryActive {
        WATER_VERY_ACTIVE_BONUS_ML
    } else {
        0.0
    };
    (base + bonus).round() as u32
}

/// Body Mass Index from weight in kg and height in cm.
pub fn calculate_bmi(weight: f64, height_cm: f64) -> f64 {
    let height_m = height_cm / 100.0;
    if height_m <= 0.0 {
        return 0.0;
    }
    weight / (height_m * height_m)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;

    fn reference_profile() -> UserProfile {
        UserProfile::default()
    }

    #[test]
    fn test_bmr_male() {
        let bmr = calculate_bmr(&reference_profile());
        assert!((bmr - 1700.057).abs() < 1e-6);
    }

    #[test]
    fn test_bmr_female() {
        let profile = UserProfile {
            age: 30,
            weight: 60.0,
            height: 165.0,
            gender: Gender::Female,
            ..UserProfile::default()
        };
        // 447.593 + 554.82 + 511.17 - 129.9
        assert!((calculate_bmr(&profile) - 1383.683).abs() < 1e-6);
    }

    #[test]
    fn test_tdee_applies_activity() {
        let tdee = calculate_tdee(&reference_profile());
        assert!((tdee - 2635.08835).abs() < 1e-4);
    }

    #[test]
    fn test_target_goal_adjustments() {
        let mut profile = reference_profile();
        assert_eq!(calculate_calorie_target(&profile).daily_calories, 2635);

        profile.goal = Goal::LoseFat;
        assert_eq!(calculate_calorie_target(&profile).daily_calories, 2108);

        profile.goal = Goal::GainMuscle;
        assert_eq!(calculate_calorie_target(&profile).daily_calories, 3030);
    }

    #[test]
    fn test_macro_kcal_rounded_independently() {
        let target = calculate_calorie_target(&reference_profile());
        assert_eq!(target.protein_calories, 659); // 658.75
        assert_eq!(target.carbs_calories, 1186); // 1185.75
        assert_eq!(target.fat_calories, 791); // 790.5
    }

    #[test]
    fn test_water_intake() {
        let mut profile = reference_profile();
        assert_eq!(calculate_water_intake(&profile), 2450);
        profile.activity_level = ActivityLevel::VeryActive;
        assert_eq!(calculate_water_intake(&profile), 2950);
    }

    #[test]
    fn test_bmi_categories() {
        let bmi = calculate_bmi(70.0, 170.0);
        assert!((bmi - 24.22).abs() < 0.01);
        assert_eq!(BmiCategory::from_bmi(bmi), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(17.0), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(27.5), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Obese);
        assert_eq!(calculate_bmi(70.0, 0.0), 0.0);
    }
}
