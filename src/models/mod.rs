pub mod food;
pub mod intake;
pub mod plan;
pub mod profile;

pub use food::{Category, Food};
pub use intake::{CalorieTarget, DailyIntake, IntakeUpdate, WeightEntry};
pub use plan::{round_tenth, DayMealPlan, Meal, MealItem, MealType};
pub use profile::{ActivityLevel, Gender, Goal, UserMode, UserProfile};
