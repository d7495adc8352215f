use std::path::Path;

use chrono::NaiveDate;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use nutri_plan_rs::calculator::{
    calculate_bmr, calculate_tdee, calculate_water_intake, suggest_adjustments,
};
use nutri_plan_rs::catalog::Catalog;
use nutri_plan_rs::cli::{Cli, Command, FavoriteAction, LogArgs, WaterAction};
use nutri_plan_rs::error::{NutritionError, Result};
use nutri_plan_rs::interface::{
    display_food_list, display_meal_plan, display_progress, display_targets,
    display_weight_summary, prompt_profile, prompt_yes_no, resolve_food, write_plan_csv,
};
use nutri_plan_rs::models::IntakeUpdate;
use nutri_plan_rs::planner::{fit_day_plan, replace_meal_item, substitute_food};
use nutri_plan_rs::state::{load_state, save_state, NutritionStore};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = cli.date.unwrap_or_else(|| chrono::Local::now().date_naive());
    let path = cli.file.as_path();
    let command = cli.command.unwrap_or_default();

    let mut store = NutritionStore::new(load_state(path)?);
    store.roll_over(today);
    let catalog = Catalog::builtin();

    match command {
        Command::Profile => cmd_profile(&mut store)?,
        Command::Targets => cmd_targets(&store),
        Command::Plan {
            regenerate,
            seed,
            raw,
            csv,
        } => cmd_plan(&mut store, catalog, today, regenerate, seed, raw, csv.as_deref())?,
        Command::Log(args) => cmd_log(&mut store, &args)?,
        Command::Progress => cmd_progress(&store),
        Command::Water { action } => cmd_water(&mut store, action),
        Command::Favorite { action } => cmd_favorite(&mut store, catalog, action)?,
        Command::Weight { weight, body_fat } => {
            store.add_weight_entry(today, weight, body_fat)?;
            println!("Recorded {:.1} kg for {}.", weight, today);
        }
        Command::History => {
            display_weight_summary(&store.weight_summary(), store.weight_history());
        }
        Command::Search { query } => {
            let results = catalog.search_foods(&query);
            display_food_list(&results, &format!("Foods matching '{}'", query));
        }
        Command::Substitute { food, seed, apply } => {
            cmd_substitute(&mut store, catalog, today, &food, seed, apply)?
        }
        Command::Reset {
            intake,
            water,
            plan,
        } => cmd_reset(&mut store, intake, water, plan),
    }

    save_state(path, store.state())?;
    Ok(())
}

/// Collect a new profile interactively.
fn cmd_profile(store: &mut NutritionStore) -> Result<()> {
    if !store.has_profile() {
        println!("No profile yet. Defaults are shown in brackets.");
    }

    let profile = prompt_profile(&store.profile())?;
    store.set_profile(profile)?;
    println!("Profile saved.");
    cmd_targets(store);
    Ok(())
}

fn cmd_targets(store: &NutritionStore) {
    let profile = store.profile();
    display_targets(
        &profile,
        &store.calorie_target(),
        calculate_bmr(&profile),
        calculate_tdee(&profile),
        calculate_water_intake(&profile),
    );
}

/// Show, regenerate, fit and export the day plan.
fn cmd_plan(
    store: &mut NutritionStore,
    catalog: &Catalog,
    today: NaiveDate,
    regenerate: bool,
    seed: Option<u64>,
    raw: bool,
    csv: Option<&Path>,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let target = store.calorie_target();

    let mut plan = if regenerate {
        store.generate_new_meal_plan(today, catalog, &mut rng).clone()
    } else {
        store.ensure_meal_plan(today, catalog, &mut rng).clone()
    };

    if !raw {
        plan = fit_day_plan(&plan, &target);
        info!(kcal = plan.total_calories, "fitted plan to target");
        store.replace_meal_plan(plan.clone());
    }

    display_meal_plan(&plan, Some(&target));

    if let Some(csv_path) = csv {
        write_plan_csv(&plan, csv_path)?;
        println!("Plan exported to {}", csv_path.display());
    }
    Ok(())
}

fn cmd_log(store: &mut NutritionStore, args: &LogArgs) -> Result<()> {
    store.log_intake(&IntakeUpdate::from(args))?;
    let intake = store.daily_intake();
    println!(
        "Logged. Today: {:.0} kcal, P {:.1} g, C {:.1} g, F {:.1} g",
        intake.calories, intake.protein, intake.carbs, intake.fat
    );
    Ok(())
}

fn cmd_progress(store: &NutritionStore) {
    let progress = store.progress();
    let suggestions = suggest_adjustments(&store.profile(), &progress);
    display_progress(&progress, &suggestions, store.water_intake(), store.water_target());
}

fn cmd_water(store: &mut NutritionStore, action: WaterAction) {
    match action {
        WaterAction::Add { ml } => {
            store.add_water(ml);
            println!("Water: {} / {} ml", store.water_intake(), store.water_target());
        }
        WaterAction::Reset => {
            store.reset_water();
            println!("Water intake reset.");
        }
    }
}

fn cmd_favorite(
    store: &mut NutritionStore,
    catalog: &Catalog,
    action: FavoriteAction,
) -> Result<()> {
    match action {
        FavoriteAction::Add { food } => {
            if let Some(food) = resolve_food(catalog, &food)? {
                store.add_favorite_food(&food.id, catalog)?;
                println!("Added {} to favorites.", food.name);
            }
        }
        FavoriteAction::Remove { food } => {
            let id = resolve_food(catalog, &food)?
                .map(|f| f.id.clone())
                .unwrap_or(food);
            if store.remove_favorite_food(&id) {
                println!("Removed {} from favorites.", id);
            } else {
                println!("{} was not a favorite.", id);
            }
        }
        FavoriteAction::List => {
            let favorites: Vec<_> = store
                .favorite_foods()
                .iter()
                .filter_map(|id| catalog.get_food_by_id(id))
                .collect();
            display_food_list(&favorites, "Favorite foods");
        }
    }
    Ok(())
}

/// Find a substitute and optionally swap it into today's plan.
fn cmd_substitute(
    store: &mut NutritionStore,
    catalog: &Catalog,
    today: NaiveDate,
    food: &str,
    seed: Option<u64>,
    apply: bool,
) -> Result<()> {
    let Some(original) = resolve_food(catalog, food)? else {
        return Ok(());
    };

    let mut rng = make_rng(seed);
    let Some(substitute) = substitute_food(&original.id, catalog, &mut rng) else {
        println!("No substitute available for {}.", original.name);
        return Ok(());
    };
    println!("Substitute for {}: {}", original.name, substitute.name);

    if !apply {
        return Ok(());
    }

    let plan = store
        .current_meal_plan()
        .filter(|p| p.date == today)
        .cloned()
        .ok_or(NutritionError::NoMealPlan)?;

    let mut updated = plan.clone();
    let mut swapped = 0;
    for meal in &plan.meals {
        if meal.items.iter().any(|i| i.food_id == original.id) {
            let meal = replace_meal_item(meal, &original.id, substitute)?;
            updated = updated.with_meal(meal);
            swapped += 1;
        }
    }

    if swapped == 0 {
        println!("{} is not in today's plan.", original.name);
        return Ok(());
    }

    if prompt_yes_no(&format!("Swap in {} meal(s)?", swapped), true)? {
        store.replace_meal_plan(updated);
        println!("Plan updated.");
    }
    Ok(())
}

fn cmd_reset(store: &mut NutritionStore, intake: bool, water: bool, plan: bool) {
    if !intake && !water && !plan {
        println!("Please specify at least one reset option:");
        println!("  --intake  Zero today's food intake");
        println!("  --water   Zero today's water intake");
        println!("  --plan    Drop the current meal plan");
        return;
    }

    if intake {
        store.reset_daily_intake();
        println!("Daily intake reset.");
    }
    if water {
        store.reset_water();
        println!("Water intake reset.");
    }
    if plan {
        store.clear_meal_plan();
        println!("Meal plan cleared.");
    }
}
