use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Daily calorie and macro target derived from a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalorieTarget {
    pub daily_calories: u32,
    /// Grams.
    pub protein: u32,
    /// Grams.
    pub carbs: u32,
    /// Grams.
    pub fat: u32,
    pub protein_calories: u32,
    pub carbs_calories: u32,
    pub fat_calories: u32,
}

/// Everything consumed so far today.
///
/// Sodium is in mg; macros, fiber and sugar in grams.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyIntake {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
}

/// A logged food entry; absent fields leave the running total untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IntakeUpdate {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbs: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
    pub sugar: Option<f64>,
    pub sodium: Option<f64>,
}

impl IntakeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl DailyIntake {
    /// Add a logged entry to the running totals.
    pub fn add(&mut self, update: &IntakeUpdate) {
        let fields = [
            (&mut self.calories, update.calories),
            (&mut self.protein, update.protein),
            (&mut self.carbs, update.carbs),
            (&mut self.fat, update.fat),
            (&mut self.fiber, update.fiber),
            (&mut self.sugar, update.sugar),
            (&mut self.sodium, update.sodium),
        ];
        for (total, amount) in fields {
            if let Some(amount) = amount {
                *total += amount;
            }
        }
    }
}

/// One body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightEntry {
    pub date: NaiveDate,
    /// Kilograms.
    pub weight: f64,
    /// Body fat percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_accumulates_present_fields() {
        let mut intake = DailyIntake::default();
        intake.add(&IntakeUpdate {
            calories: Some(300.0),
            protein: Some(25.0),
            ..Default::default()
        });
        intake.add(&IntakeUpdate {
            calories: Some(200.0),
            sodium: Some(150.0),
            ..Default::default()
        });

        assert_eq!(intake.calories, 500.0);
        assert_eq!(intake.protein, 25.0);
        assert_eq!(intake.sodium, 150.0);
        assert_eq!(intake.fat, 0.0);
    }

    #[test]
    fn test_empty_update() {
        assert!(IntakeUpdate::default().is_empty());
        let update = IntakeUpdate {
            fat: Some(1.0),
            ..Default::default()
        };
        assert!(!update.is_empty());
    }
}
