pub mod adjust;
pub mod constants;
pub mod generator;

pub use adjust::{adjust_meal_calories, fit_day_plan, replace_meal_item, substitute_food};
pub use constants::*;
pub use generator::{generate_day_meal_plan, generate_meal};
