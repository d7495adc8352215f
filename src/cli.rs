use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};

use crate::models::IntakeUpdate;

/// NutriPlan: calorie targets, daily meal plans and intake tracking.
#[derive(Parser, Debug)]
#[command(name = "nutri_plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the tracking state JSON file.
    #[arg(
        short,
        long,
        global = true,
        env = "NUTRI_PLAN_STATE",
        default_value = "nutrition_state.json"
    )]
    pub file: PathBuf,

    /// Treat this date (YYYY-MM-DD) as today.
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Enter or update your profile interactively.
    Profile,

    /// Show BMR, TDEE and daily calorie/macro/water targets.
    Targets,

    /// Show today's meal plan, generating one if needed.
    ///
    /// Meals are rescaled to their share of the daily target unless --raw
    /// is given.
    Plan {
        /// Discard the current plan and generate a new one.
        #[arg(long)]
        regenerate: bool,

        /// Seed for reproducible food choices.
        #[arg(long)]
        seed: Option<u64>,

        /// Keep the generated portions as they are. Portion caps leave raw
        /// plans well short of the daily target (often 50-80%).
        #[arg(long)]
        raw: bool,

        /// Also export the plan to this CSV file.
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Log food you ate (amounts are added to today's totals).
    Log(LogArgs),

    /// Show today's progress and suggestions.
    Progress,

    /// Track water intake.
    Water {
        #[command(subcommand)]
        action: WaterAction,
    },

    /// Manage favorite foods.
    Favorite {
        #[command(subcommand)]
        action: FavoriteAction,
    },

    /// Record a weigh-in for today.
    Weight {
        /// Body weight in kg.
        weight: f64,

        /// Body fat percentage.
        #[arg(long)]
        body_fat: Option<f64>,
    },

    /// Show weight trend, BMI and recent weigh-ins.
    History,

    /// Search the food catalog by name or category.
    Search {
        /// Text to look for (case-insensitive).
        query: String,
    },

    /// Suggest a substitute for a food.
    Substitute {
        /// Food id or name.
        food: String,

        /// Seed for reproducible choices.
        #[arg(long)]
        seed: Option<u64>,

        /// Swap the food in today's plan for the substitute.
        #[arg(long)]
        apply: bool,
    },

    /// Reset today's tracked values.
    Reset {
        /// Zero today's food intake.
        #[arg(long)]
        intake: bool,

        /// Zero today's water intake.
        #[arg(long)]
        water: bool,

        /// Drop the current meal plan.
        #[arg(long)]
        plan: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan {
            regenerate: false,
            seed: None,
            raw: false,
            csv: None,
        }
    }
}

#[derive(Args, Debug, Default)]
pub struct LogArgs {
    /// Calories (kcal).
    #[arg(long)]
    pub calories: Option<f64>,

    /// Protein (g).
    #[arg(long)]
    pub protein: Option<f64>,

    /// Carbohydrates (g).
    #[arg(long)]
    pub carbs: Option<f64>,

    /// Fat (g).
    #[arg(long)]
    pub fat: Option<f64>,

    /// Fiber (g).
    #[arg(long)]
    pub fiber: Option<f64>,

    /// Sugar (g).
    #[arg(long)]
    pub sugar: Option<f64>,

    /// Sodium (mg).
    #[arg(long)]
    pub sodium: Option<f64>,
}

impl From<&LogArgs> for IntakeUpdate {
    fn from(args: &LogArgs) -> Self {
        IntakeUpdate {
            calories: args.calories,
            protein: args.protein,
            carbs: args.carbs,
            fat: args.fat,
            fiber: args.fiber,
            sugar: args.sugar,
            sodium: args.sodium,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum WaterAction {
    /// Add a glass of water.
    Add {
        /// Millilitres.
        #[arg(default_value = "250")]
        ml: u32,
    },
    /// Zero today's water intake.
    Reset,
}

#[derive(Subcommand, Debug)]
pub enum FavoriteAction {
    /// Add a food (id or name) to favorites.
    Add { food: String },
    /// Remove a food from favorites.
    Remove { food: String },
    /// List favorite foods.
    List,
}
