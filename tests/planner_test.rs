use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;

use nutri_plan_rs::calculator::calculate_calorie_target;
use nutri_plan_rs::catalog::Catalog;
use nutri_plan_rs::models::{Category, Food, Goal, MealType, UserProfile};
use nutri_plan_rs::planner::{
    fit_day_plan, generate_day_meal_plan, generate_meal, substitute_food,
};

fn date() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2025, 6, 1)
}

fn catalog_without(category: Category) -> Catalog {
    let foods: Vec<Food> = Catalog::builtin()
        .foods()
        .iter()
        .filter(|f| f.category != category)
        .cloned()
        .collect();
    Catalog::new(foods)
}

#[test]
fn test_plan_has_five_meals_in_order() {
    let profile = UserProfile::default();
    let target = calculate_calorie_target(&profile);

    for seed in 0..10 {
        let mut rng = StdRng::seed_from_u64(seed);
        let plan = generate_day_meal_plan(&target, &profile, date(), Catalog::builtin(), &mut rng);

        let types: Vec<MealType> = plan.meals.iter().map(|m| m.meal_type).collect();
        assert_eq!(types, MealType::ALL.to_vec());

        let times: Vec<&str> = plan.meals.iter().map(|m| m.time.as_str()).collect();
        assert_eq!(times, ["07:00", "12:00", "15:00", "19:00", "21:00"]);

        assert_eq!(plan.water_target, 2450);
        assert_eq!(
            plan.total_calories,
            plan.meals.iter().map(|m| m.total_calories).sum::<u32>()
        );
    }
}

#[test]
fn test_every_item_comes_from_catalog() {
    let profile = UserProfile::default();
    let target = calculate_calorie_target(&profile);
    let catalog = Catalog::builtin();
    let mut rng = StdRng::seed_from_u64(11);
    let plan = generate_day_meal_plan(&target, &profile, date(), catalog, &mut rng);

    for meal in &plan.meals {
        assert!(!meal.items.is_empty(), "{} is empty", meal.name);
        for item in &meal.items {
            assert!(catalog.get_food_by_id(&item.food_id).is_some());
            assert!(item.quantity > 0);
        }
    }
}

#[test]
fn test_fitted_plan_within_twenty_percent() {
    for goal in Goal::ALL {
        let profile = UserProfile {
            goal,
            ..UserProfile::default()
        };
        let target = calculate_calorie_target(&profile);

        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let plan =
                generate_day_meal_plan(&target, &profile, date(), Catalog::builtin(), &mut rng);
            let fitted = fit_day_plan(&plan, &target);

            let ratio = fitted.total_calories as f64 / target.daily_calories as f64;
            assert!(
                (0.8..=1.2).contains(&ratio),
                "{:?} seed {}: {} of {} kcal",
                goal,
                seed,
                fitted.total_calories,
                target.daily_calories
            );
            assert_eq!(fitted.date, plan.date);
            assert_eq!(fitted.meals.len(), 5);
        }
    }
}

#[test]
fn test_chicken_substitute() {
    let catalog = Catalog::builtin();
    let listed = ["turkey_breast", "white_fish", "tofu_firm"];

    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        match substitute_food("chicken_breast", catalog, &mut rng) {
            Some(food) => {
                assert!(listed.contains(&food.id.as_str()) || food.category == Category::Protein);
                assert_ne!(food.id, "chicken_breast");
            }
            None => panic!("protein category has other foods"),
        }
    }
}

#[test]
fn test_missing_carbs_leave_line_out() {
    let catalog = catalog_without(Category::Carb);
    let mut rng = StdRng::seed_from_u64(2);
    let meal = generate_meal(
        MealType::Breakfast,
        659,
        &UserProfile::default(),
        &catalog,
        &mut rng,
    );

    assert!(!meal.items.is_empty());
    assert!(meal.items.iter().all(|i| i.food.category != Category::Carb));

    // no fruit means the snack is protein only
    let snack = generate_meal(MealType::Snack, 264, &UserProfile::default(), &catalog, &mut rng);
    assert_eq!(snack.items.len(), 1);
    assert_eq!(snack.items[0].food_id, "greek_yogurt");
}

#[test]
fn test_missing_proteins_empty_late_snack() {
    let catalog = catalog_without(Category::Protein);
    let mut rng = StdRng::seed_from_u64(4);
    let meal = generate_meal(
        MealType::LateSnack,
        132,
        &UserProfile::default(),
        &catalog,
        &mut rng,
    );
    assert!(meal.is_empty());

    let profile = UserProfile::default();
    let target = calculate_calorie_target(&profile);
    let plan = generate_day_meal_plan(&target, &profile, date(), &catalog, &mut rng);
    let fitted = fit_day_plan(&plan, &target);
    assert!(fitted.meal(MealType::LateSnack).is_some_and(|m| m.is_empty()));
}
