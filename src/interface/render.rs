use crate::calculator::{NutrientProgress, ProgressReport};
use crate::models::{CalorieTarget, DayMealPlan, Food, Meal, UserProfile, WeightEntry};
use crate::state::WeightSummary;

/// Width of the text progress bars.
const BAR_WIDTH: usize = 30;

fn progress_bar(percentage: f64) -> String {
    let filled = ((percentage.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

/// Display the daily calorie and macro targets.
pub fn display_targets(
    profile: &UserProfile,
    target: &CalorieTarget,
    bmr: f64,
    tdee: f64,
    water: u32,
) {
    println!();
    println!("=== Daily Targets ===");
    println!();
    println!("Profile: {}", profile);
    println!("BMR:  {:.0} kcal", bmr);
    println!("TDEE: {:.0} kcal", tdee);
    println!();
    println!("Calories: {} kcal", target.daily_calories);
    println!("Protein:  {:>4} g ({} kcal)", target.protein, target.protein_calories);
    println!("Carbs:    {:>4} g ({} kcal)", target.carbs, target.carbs_calories);
    println!("Fat:      {:>4} g ({} kcal)", target.fat, target.fat_calories);
    println!("Water:    {:>4} ml", water);
    println!();
}

fn display_meal(meal: &Meal) {
    println!(
        "{} {} - {} kcal | P {:.1}g C {:.1}g F {:.1}g",
        meal.time,
        meal.name,
        meal.total_calories,
        meal.total_protein,
        meal.total_carbs,
        meal.total_fat
    );

    if meal.items.is_empty() {
        println!("      (no foods available)");
        return;
    }

    let max_name_len = meal.items.iter().map(|i| i.food.name.len()).max().unwrap_or(10);
    for item in &meal.items {
        println!(
            "      {:<width$} {:>4} g {:>5} kcal | P {:>5.1} C {:>5.1} F {:>5.1}",
            item.food.name,
            item.quantity,
            item.calories,
            item.protein,
            item.carbs,
            item.fat,
            width = max_name_len
        );
    }
}

/// Display a full day plan with per-meal breakdowns.
pub fn display_meal_plan(plan: &DayMealPlan, target: Option<&CalorieTarget>) {
    println!();
    println!("=== Meal Plan for {} ===", plan.date.format("%A, %d %B %Y"));
    println!();

    for meal in &plan.meals {
        display_meal(meal);
        println!();
    }

    println!("--- Summary ---");
    match target {
        Some(t) => println!(
            "Total calories: {} / {} kcal",
            plan.total_calories, t.daily_calories
        ),
        None => println!("Total calories: {} kcal", plan.total_calories),
    }
    println!("Protein: {:.1} g", plan.total_protein);
    println!("Carbs:   {:.1} g", plan.total_carbs);
    println!("Fat:     {:.1} g", plan.total_fat);
    println!("Water:   {} ml", plan.water_target);
    println!();
}

fn display_nutrient(label: &str, unit: &str, progress: &NutrientProgress) {
    println!(
        "{:<9} {} {:>5.0}% {:>7.1}/{:.0} {unit} ({:.1} {unit} left)",
        label,
        progress_bar(progress.percentage),
        progress.percentage,
        progress.current,
        progress.target,
        progress.remaining,
        unit = unit
    );
}

/// Display progress bars and any suggestions.
pub fn display_progress(
    report: &ProgressReport,
    suggestions: &[String],
    water: u32,
    water_target: u32,
) {
    println!();
    println!("=== Today's Progress ===");
    println!();
    display_nutrient("Calories", "kcal", &report.calories);
    display_nutrient("Protein", "g", &report.protein);
    display_nutrient("Carbs", "g", &report.carbs);
    display_nutrient("Fat", "g", &report.fat);

    let water_pct = if water_target > 0 {
        water as f64 / water_target as f64 * 100.0
    } else {
        0.0
    };
    println!(
        "{:<9} {} {:>5.0}% {} / {} ml",
        "Water",
        progress_bar(water_pct),
        water_pct.min(100.0),
        water,
        water_target
    );

    if !suggestions.is_empty() {
        println!();
        println!("--- Suggestions ---");
        for suggestion in suggestions {
            println!("  * {}", suggestion);
        }
    }
    println!();
}

/// Display a simple list of foods with their details.
pub fn display_food_list(foods: &[&Food], title: &str) {
    if foods.is_empty() {
        println!("{}: (none)", title);
        return;
    }

    println!();
    println!("=== {} ({} items) ===", title, foods.len());
    println!();

    for food in foods {
        println!(
            "  {:<16} {:<26} {:<10} {:>4} kcal, P:{} C:{} F:{} per 100g",
            food.id,
            food.name,
            food.category.name(),
            food.calories,
            food.protein,
            food.carbs,
            food.fat
        );
    }

    println!();
}

/// Display the weight trend and recent entries.
pub fn display_weight_summary(summary: &WeightSummary, history: &[WeightEntry]) {
    println!();
    println!("=== Weight ===");
    println!();
    println!("Current: {:.1} kg", summary.current);
    println!("Initial: {:.1} kg", summary.initial);
    let sign = if summary.change > 0.0 { "+" } else { "" };
    println!("Change:  {}{:.1} kg", sign, summary.change);
    if let Some(bf) = summary.body_fat {
        println!("Body fat: {:.1}%", bf);
    }
    println!("BMI:     {:.1} ({})", summary.bmi, summary.bmi_category);

    if !history.is_empty() {
        println!();
        println!("--- Recent entries ---");
        for entry in history.iter().take(10) {
            match entry.body_fat {
                Some(bf) => println!("  {}  {:.1} kg  {:.1}% fat", entry.date, entry.weight, bf),
                None => println!("  {}  {:.1} kg", entry.date, entry.weight),
            }
        }
    }
    println!();
}
