mod manager;
mod persistence;

pub use manager::{NutritionState, NutritionStore, WeightSummary};
pub use persistence::{load_state, save_state};
