pub mod constants;
pub mod progress;
pub mod targets;

pub use constants::*;
pub use progress::{calculate_progress, suggest_adjustments, NutrientProgress, ProgressReport};
pub use targets::{
    calculate_bmi, calculate_bmr, calculate_calorie_target, calculate_tdee,
    calculate_water_intake, BmiCategory,
};
