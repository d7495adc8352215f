pub mod export;
pub mod prompts;
pub mod render;

pub use export::write_plan_csv;
pub use prompts::{prompt_profile, prompt_yes_no, resolve_food};
pub use render::{
    display_food_list, display_meal_plan, display_progress, display_targets,
    display_weight_summary,
};
