use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NutritionError, Result};

/// Upper bounds accepted for profile values.
pub const MAX_AGE: u32 = 120;
pub const MAX_WEIGHT_KG: f64 = 400.0;
pub const MAX_HEIGHT_CM: f64 = 260.0;

/// Biological sex used by the BMR equations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Activity tier; each maps to a fixed TDEE multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActivityLevel {
    Sedentary,
    Light,
    Moderate,
    Active,
    VeryActive,
}

impl ActivityLevel {
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::Active,
        ActivityLevel::VeryActive,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little or no exercise)",
            ActivityLevel::Light => "Light (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::VeryActive => "Very active (hard training or physical job)",
        }
    }
}

/// Nutrition goal; drives the calorie adjustment and macro split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    LoseFat,
    GainMuscle,
    Maintain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::LoseFat, Goal::GainMuscle, Goal::Maintain];

    pub fn label(self) -> &'static str {
        match self {
            Goal::LoseFat => "Lose fat",
            Goal::GainMuscle => "Gain muscle",
            Goal::Maintain => "Maintain weight",
        }
    }
}

/// Display preference only; never affects calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserMode {
    Beginner,
    Advanced,
}

impl UserMode {
    pub const ALL: [UserMode; 2] = [UserMode::Beginner, UserMode::Advanced];

    pub fn label(self) -> &'static str {
        match self {
            UserMode::Beginner => "Beginner",
            UserMode::Advanced => "Advanced",
        }
    }
}

/// Biometric input to every target calculation.
///
/// Weight is in kg, height in cm, age in whole years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub age: u32,
    pub weight: f64,
    pub height: f64,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
    pub goal: Goal,
    pub mode: UserMode,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            age: 25,
            weight: 70.0,
            height: 170.0,
            gender: Gender::Male,
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
            mode: UserMode::Beginner,
        }
    }
}

impl UserProfile {
    /// Reject profiles the formulas cannot meaningfully handle.
    ///
    /// The calculator itself assumes positive inputs; this check belongs at
    /// the boundary where profiles enter the system.
    pub fn validate(&self) -> Result<()> {
        if self.age == 0 || self.age > MAX_AGE {
            return Err(NutritionError::InvalidInput(format!(
                "Age must be between 1 and {} years",
                MAX_AGE
            )));
        }
        if !(self.weight > 0.0 && self.weight <= MAX_WEIGHT_KG) {
            return Err(NutritionError::InvalidInput(format!(
                "Weight must be between 0 and {} kg",
                MAX_WEIGHT_KG
            )));
        }
        if !(self.height > 0.0 && self.height <= MAX_HEIGHT_CM) {
            return Err(NutritionError::InvalidInput(format!(
                "Height must be between 0 and {} cm",
                MAX_HEIGHT_CM
            )));
        }
        Ok(())
    }
}

impl fmt::Display for UserProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} y, {} kg, {} cm, {}, {}, goal: {}",
            self.age,
            self.weight,
            self.height,
            self.gender.label(),
            self.activity_level.label(),
            self.goal.label()
        )
    }
}
