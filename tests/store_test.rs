use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

use nutri_plan_rs::catalog::Catalog;
use nutri_plan_rs::models::{ActivityLevel, Goal, IntakeUpdate, MealType, UserProfile};
use nutri_plan_rs::planner::{replace_meal_item, substitute_food};
use nutri_plan_rs::state::{load_state, save_state, NutritionState, NutritionStore};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, d).unwrap()
}

#[test]
fn test_store_survives_save_and_load() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(21);

    let mut store = NutritionStore::new(load_state(&path).unwrap());
    store.roll_over(day(1));
    store
        .set_profile(UserProfile {
            activity_level: ActivityLevel::VeryActive,
            goal: Goal::GainMuscle,
            ..UserProfile::default()
        })
        .unwrap();
    store
        .log_intake(&IntakeUpdate {
            calories: Some(520.0),
            protein: Some(35.0),
            ..Default::default()
        })
        .unwrap();
    store.add_water(750);
    store.add_favorite_food("salmon", catalog).unwrap();
    store.add_weight_entry(day(1), 70.4, Some(16.5)).unwrap();
    let plan = store.ensure_meal_plan(day(1), catalog, &mut rng).clone();
    save_state(&path, store.state()).unwrap();

    let reloaded = NutritionStore::new(load_state(&path).unwrap());
    assert_eq!(reloaded.state(), store.state());
    assert_eq!(reloaded.water_target(), 2950);
    assert_eq!(reloaded.current_meal_plan(), Some(&plan));
    assert_eq!(reloaded.favorite_foods(), ["salmon"]);
}

#[test]
fn test_next_day_keeps_history_but_clears_intake() {
    let mut store = NutritionStore::new(NutritionState::default());
    let mut rng = StdRng::seed_from_u64(8);

    store.roll_over(day(1));
    store.add_water(500);
    store.add_weight_entry(day(1), 71.0, None).unwrap();
    store.ensure_meal_plan(day(1), Catalog::builtin(), &mut rng);

    assert!(store.roll_over(day(2)));
    assert_eq!(store.water_intake(), 0);
    assert_eq!(store.weight_history().len(), 1);

    let plan = store.ensure_meal_plan(day(2), Catalog::builtin(), &mut rng);
    assert_eq!(plan.date, day(2));
}

#[test]
fn test_apply_substitute_to_plan() {
    let catalog = Catalog::builtin();
    let mut store = NutritionStore::new(NutritionState::default());
    let mut rng = StdRng::seed_from_u64(13);
    let plan = store.ensure_meal_plan(day(3), catalog, &mut rng).clone();

    let late = plan.meal(MealType::LateSnack).unwrap();
    let original = &late.items[0];
    let sub = substitute_food(&original.food_id, catalog, &mut rng).unwrap();
    let swapped = replace_meal_item(late, &original.food_id, sub).unwrap();
    store.replace_meal_plan(plan.with_meal(swapped));

    let updated = store.current_meal_plan().unwrap();
    let item = &updated.meal(MealType::LateSnack).unwrap().items[0];
    assert_eq!(item.food_id, sub.id);
    assert!((item.calories as i64 - original.calories as i64).abs() <= 2);
    assert_eq!(updated.meal(MealType::Lunch), plan.meal(MealType::Lunch));
}

#[test]
fn test_corrupt_state_file_is_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("state.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(load_state(&path).is_err());
}
