use std::fmt;

use serde::{Deserialize, Serialize};

/// Food group a catalog entry belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Protein,
    Carb,
    Fat,
    Vegetable,
    Fruit,
    Dairy,
    Grain,
    Seasoning,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::Protein => "Protein",
            Category::Carb => "Carb",
            Category::Fat => "Fat",
            Category::Vegetable => "Vegetable",
            Category::Fruit => "Fruit",
            Category::Dairy => "Dairy",
            Category::Grain => "Grain",
            Category::Seasoning => "Seasoning",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A catalog food with nutrition facts per 100 g.
///
/// Sodium is in mg; every other nutrient is in grams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Food {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
    pub sugar: f64,
    pub sodium: f64,
    /// Recommended serving in grams.
    pub serving_size: f64,
    #[serde(default)]
    pub substitutes: Vec<String>,
}

impl Food {
    /// Grams of this food that supply `calories` kcal.
    ///
    /// Zero-calorie foods yield zero grams rather than infinity.
    pub fn grams_for_calories(&self, calories: f64) -> f64 {
        if self.calories > 0.0 {
            calories / self.calories * 100.0
        } else {
            0.0
        }
    }
}

impl PartialEq for Food {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Food {}

impl std::hash::Hash for Food {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
