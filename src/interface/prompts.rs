use dialoguer::{Confirm, Input, Select};

use crate::catalog::Catalog;
use crate::error::{NutritionError, Result};
use crate::models::{ActivityLevel, Food, Gender, Goal, UserMode, UserProfile};

/// Minimum Jaro-Winkler score for a "did you mean" suggestion.
const FUZZY_THRESHOLD: f64 = 0.7;

fn prompt_number(prompt: &str, default: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(default.to_string())
        .interact_text()?;

    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| NutritionError::InvalidInput(format!("Invalid number: {}", input)))?;

    if !(value.is_finite() && value > 0.0) {
        return Err(NutritionError::InvalidInput(format!(
            "{} must be positive",
            prompt
        )));
    }
    Ok(value)
}

fn prompt_age(default: u32) -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default(default.to_string())
        .interact_text()?;

    match input.trim().parse::<u32>() {
        Ok(age) if age > 0 => Ok(age),
        _ => Err(NutritionError::InvalidInput(format!("Invalid age: {}", input))),
    }
}

/// Pick one of `options` by label, starting on `current`.
fn prompt_choice<T: Copy + PartialEq>(
    prompt: &str,
    options: &[T],
    current: T,
    label: fn(T) -> &'static str,
) -> Result<T> {
    let labels: Vec<&str> = options.iter().map(|o| label(*o)).collect();
    let default = options.iter().position(|o| *o == current).unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(options[selection])
}

/// Walk the user through every profile field, defaulting to `current`.
pub fn prompt_profile(current: &UserProfile) -> Result<UserProfile> {
    let age = prompt_age(current.age)?;
    let weight = prompt_number("Weight (kg)", current.weight)?;
    let height = prompt_number("Height (cm)", current.height)?;
    let gender = prompt_choice("Sex", &Gender::ALL, current.gender, Gender::label)?;
    let activity_level = prompt_choice(
        "Activity level",
        &ActivityLevel::ALL,
        current.activity_level,
        ActivityLevel::label,
    )?;
    let goal = prompt_choice("Goal", &Goal::ALL, current.goal, Goal::label)?;
    let mode = prompt_choice("Mode", &UserMode::ALL, current.mode, UserMode::label)?;

    let profile = UserProfile {
        age,
        weight,
        height,
        gender,
        activity_level,
        goal,
        mode,
    };
    profile.validate()?;
    Ok(profile)
}

/// Resolve user input to a catalog food.
///
/// Exact ids and names (case-insensitive) resolve directly; otherwise the
/// closest fuzzy matches are offered. Returns `None` if the user declines.
pub fn resolve_food<'a>(catalog: &'a Catalog, input: &str) -> Result<Option<&'a Food>> {
    let input = input.trim();

    if let Some(food) = catalog.get_food_by_id(input) {
        return Ok(Some(food));
    }
    let exact = catalog
        .foods()
        .iter()
        .find(|f| f.name.to_lowercase() == input.to_lowercase());
    if let Some(food) = exact {
        return Ok(Some(food));
    }

    let candidates = catalog.fuzzy_matches(input, FUZZY_THRESHOLD);

    if candidates.is_empty() {
        println!("No matching food found for '{}'", input);
        return Ok(None);
    }

    if candidates.len() == 1 {
        let food = candidates[0].0;
        let confirm = Confirm::new()
            .with_prompt(format!("Did you mean '{}'?", food.name))
            .default(true)
            .interact()?;
        return Ok(confirm.then_some(food));
    }

    let options: Vec<&Food> = candidates.iter().take(5).map(|(f, _)| *f).collect();
    let mut labels: Vec<String> = options.iter().map(|f| f.name.clone()).collect();
    labels.push("None of these".to_string());

    let selection = Select::new()
        .with_prompt("Which did you mean?")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
