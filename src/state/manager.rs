use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::calculator::{
    calculate_bmi, calculate_calorie_target, calculate_progress, calculate_water_intake,
    BmiCategory, ProgressReport,
};
use crate::catalog::Catalog;
use crate::error::{NutritionError, Result};
use crate::models::{
    CalorieTarget, DailyIntake, DayMealPlan, IntakeUpdate, UserProfile, WeightEntry,
};
use crate::planner::generate_day_meal_plan;

/// Everything persisted between runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutritionState {
    pub profile: Option<UserProfile>,
    pub daily_intake: DailyIntake,
    /// Millilitres drunk today.
    pub water_intake: u32,
    pub favorite_foods: Vec<String>,
    /// Newest first.
    pub weight_history: Vec<WeightEntry>,
    pub last_reset_date: Option<NaiveDate>,
    pub current_meal_plan: Option<DayMealPlan>,
}

/// Weight trend over the recorded history.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightSummary {
    pub current: f64,
    pub initial: f64,
    pub change: f64,
    pub body_fat: Option<f64>,
    pub bmi: f64,
    pub bmi_category: BmiCategory,
}

/// Owns the tracking state and applies every user action to it.
pub struct NutritionStore {
    state: NutritionState,
}

impl NutritionStore {
    pub fn new(state: NutritionState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &NutritionState {
        &self.state
    }

    /// Start a new day: clear intake and water if `today` is later than
    /// the last reset. Earlier dates leave the tracked day untouched.
    /// Returns whether a reset happened.
    pub fn roll_over(&mut self, today: NaiveDate) -> bool {
        if self.state.last_reset_date.is_some_and(|last| today <= last) {
            return false;
        }

        info!(%today, "new day, resetting daily intake and water");
        self.state.daily_intake = DailyIntake::default();
        self.state.water_intake = 0;
        self.state.last_reset_date = Some(today);
        true
    }

    /// Saved profile, or the default one when none was set.
    pub fn profile(&self) -> UserProfile {
        self.state.profile.clone().unwrap_or_default()
    }

    pub fn has_profile(&self) -> bool {
        self.state.profile.is_some()
    }

    /// Replace the profile. The current meal plan is dropped so the next
    /// request regenerates it for the new targets.
    pub fn set_profile(&mut self, profile: UserProfile) -> Result<()> {
        profile.validate()?;
        self.state.profile = Some(profile);
        self.state.current_meal_plan = None;
        Ok(())
    }

    pub fn calorie_target(&self) -> CalorieTarget {
        calculate_calorie_target(&self.profile())
    }

    pub fn progress(&self) -> ProgressReport {
        calculate_progress(&self.state.daily_intake, &self.calorie_target())
    }

    pub fn daily_intake(&self) -> &DailyIntake {
        &self.state.daily_intake
    }

    /// Add a food entry to today's intake.
    pub fn log_intake(&mut self, update: &IntakeUpdate) -> Result<()> {
        if update.is_empty() {
            return Err(NutritionError::InvalidInput(
                "Nothing to log: give at least one nutrient".to_string(),
            ));
        }
        let values = [
            update.calories,
            update.protein,
            update.carbs,
            update.fat,
            update.fiber,
            update.sugar,
            update.sodium,
        ];
        if values.iter().flatten().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(NutritionError::InvalidInput(
                "Logged amounts must be non-negative".to_string(),
            ));
        }

        self.state.daily_intake.add(update);
        debug!(calories = self.state.daily_intake.calories, "logged intake");
        Ok(())
    }

    pub fn reset_daily_intake(&mut self) {
        self.state.daily_intake = DailyIntake::default();
    }

    pub fn current_meal_plan(&self) -> Option<&DayMealPlan> {
        self.state.current_meal_plan.as_ref()
    }

    /// Generate a fresh plan for `date`, replacing the current one.
    pub fn generate_new_meal_plan<R: Rng + ?Sized>(
        &mut self,
        date: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> &DayMealPlan {
        let plan = self.build_meal_plan(date, catalog, rng);
        self.state.current_meal_plan.insert(plan)
    }

    /// Current plan for `date`, generating one if missing or stale.
    pub fn ensure_meal_plan<R: Rng + ?Sized>(
        &mut self,
        date: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> &DayMealPlan {
        let plan = match self.state.current_meal_plan.take() {
            Some(plan) if plan.date == date => plan,
            _ => self.build_meal_plan(date, catalog, rng),
        };
        self.state.current_meal_plan.insert(plan)
    }

    fn build_meal_plan<R: Rng + ?Sized>(
        &self,
        date: NaiveDate,
        catalog: &Catalog,
        rng: &mut R,
    ) -> DayMealPlan {
        let profile = self.profile();
        let target = calculate_calorie_target(&profile);
        let plan = generate_day_meal_plan(&target, &profile, Some(date), catalog, rng);
        info!(%date, kcal = plan.total_calories, "generated meal plan");
        plan
    }

    /// Store an edited plan as the current one.
    pub fn replace_meal_plan(&mut self, plan: DayMealPlan) {
        self.state.current_meal_plan = Some(plan);
    }

    pub fn clear_meal_plan(&mut self) {
        self.state.current_meal_plan = None;
    }

    pub fn water_intake(&self) -> u32 {
        self.state.water_intake
    }

    pub fn water_target(&self) -> u32 {
        calculate_water_intake(&self.profile())
    }

    pub fn add_water(&mut self, ml: u32) {
        self.state.water_intake = self.state.water_intake.saturating_add(ml);
    }

    pub fn reset_water(&mut self) {
        self.state.water_intake = 0;
    }

    pub fn favorite_foods(&self) -> &[String] {
        &self.state.favorite_foods
    }

    /// Mark a catalog food as favorite; re-adding moves it to the end.
    pub fn add_favorite_food(&mut self, food_id: &str, catalog: &Catalog) -> Result<()> {
        if catalog.get_food_by_id(food_id).is_none() {
            return Err(NutritionError::FoodNotFound(food_id.to_string()));
        }
        self.state.favorite_foods.retain(|id| id != food_id);
        self.state.favorite_foods.push(food_id.to_string());
        Ok(())
    }

    /// Returns whether the food was a favorite.
    pub fn remove_favorite_food(&mut self, food_id: &str) -> bool {
        let before = self.state.favorite_foods.len();
        self.state.favorite_foods.retain(|id| id != food_id);
        self.state.favorite_foods.len() != before
    }

    pub fn weight_history(&self) -> &[WeightEntry] {
        &self.state.weight_history
    }

    /// Record a weigh-in. One entry per date; the latest write wins.
    pub fn add_weight_entry(
        &mut self,
        date: NaiveDate,
        weight: f64,
        body_fat: Option<f64>,
    ) -> Result<()> {
        if !(weight.is_finite() && weight > 0.0) {
            return Err(NutritionError::InvalidInput(
                "Weight must be a positive number of kg".to_string(),
            ));
        }
        if let Some(bf) = body_fat {
            if !(0.0..100.0).contains(&bf) {
                return Err(NutritionError::InvalidInput(
                    "Body fat must be a percentage between 0 and 100".to_string(),
                ));
            }
        }

        let history = &mut self.state.weight_history;
        history.retain(|entry| entry.date != date);
        history.push(WeightEntry {
            date,
            weight,
            body_fat,
        });
        history.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(())
    }

    /// Current and initial weight, change, and BMI at the current weight.
    pub fn weight_summary(&self) -> WeightSummary {
        let profile = self.profile();
        let history = &self.state.weight_history;

        let current = history.first().map(|e| e.weight).unwrap_or(profile.weight);
        let initial = if history.len() > 1 {
            history.last().map(|e| e.weight).unwrap_or(current)
        } else {
            current
        };
        let bmi = calculate_bmi(current, profile.height);

        WeightSummary {
            current,
            initial,
            change: current - initial,
            body_fat: history.first().and_then(|e| e.body_fat),
            bmi,
            bmi_category: BmiCategory::from_bmi(bmi),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Goal;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_roll_over_resets_daily_values_once() {
        let mut store = NutritionStore::new(NutritionState::default());
        store.roll_over(day(1));
        store.add_water(500);
        store
            .log_intake(&IntakeUpdate {
                calories: Some(400.0),
                ..Default::default()
            })
            .unwrap();

        assert!(!store.roll_over(day(1)));
        assert_eq!(store.water_intake(), 500);

        assert!(store.roll_over(day(2)));
        assert_eq!(store.water_intake(), 0);
        assert_eq!(store.daily_intake().calories, 0.0);
    }

    #[test]
    fn test_roll_over_ignores_earlier_dates() {
        let mut store = NutritionStore::new(NutritionState::default());
        store.roll_over(day(10));
        store.add_water(1000);
        store
            .log_intake(&IntakeUpdate {
                calories: Some(1500.0),
                ..Default::default()
            })
            .unwrap();

        assert!(!store.roll_over(day(9)));
        assert!(!store.roll_over(day(10)));
        assert_eq!(store.water_intake(), 1000);
        assert_eq!(store.daily_intake().calories, 1500.0);
        assert_eq!(store.state().last_reset_date, Some(day(10)));

        assert!(store.roll_over(day(11)));
        assert_eq!(store.water_intake(), 0);
    }

    #[test]
    fn test_set_profile_clears_plan() {
        let mut store = NutritionStore::new(NutritionState::default());
        let mut rng = StdRng::seed_from_u64(5);
        store.generate_new_meal_plan(day(1), Catalog::builtin(), &mut rng);
        assert!(store.current_meal_plan().is_some());

        let profile = UserProfile {
            goal: Goal::LoseFat,
            ..UserProfile::default()
        };
        store.set_profile(profile).unwrap();
        assert!(store.current_meal_plan().is_none());
        assert_eq!(store.calorie_target().daily_calories, 2108);
    }

    #[test]
    fn test_set_profile_rejects_invalid() {
        let mut store = NutritionStore::new(NutritionState::default());
        let profile = UserProfile {
            weight: 0.0,
            ..UserProfile::default()
        };
        assert!(store.set_profile(profile).is_err());
        assert!(!store.has_profile());
    }

    #[test]
    fn test_ensure_meal_plan_regenerates_for_new_date() {
        let mut store = NutritionStore::new(NutritionState::default());
        let mut rng = StdRng::seed_from_u64(9);

        let first = store.ensure_meal_plan(day(1), Catalog::builtin(), &mut rng).clone();
        let again = store.ensure_meal_plan(day(1), Catalog::builtin(), &mut rng).clone();
        assert_eq!(first, again);

        let next = store.ensure_meal_plan(day(2), Catalog::builtin(), &mut rng);
        assert_eq!(next.date, day(2));
    }

    #[test]
    fn test_log_intake_rejects_bad_values() {
        let mut store = NutritionStore::new(NutritionState::default());
        assert!(store.log_intake(&IntakeUpdate::default()).is_err());
        let negative = IntakeUpdate {
            protein: Some(-5.0),
            ..Default::default()
        };
        assert!(store.log_intake(&negative).is_err());
    }

    #[test]
    fn test_favorites_dedupe_and_move_to_end() {
        let mut store = NutritionStore::new(NutritionState::default());
        let catalog = Catalog::builtin();
        store.add_favorite_food("oats", catalog).unwrap();
        store.add_favorite_food("salmon", catalog).unwrap();
        store.add_favorite_food("oats", catalog).unwrap();
        assert_eq!(store.favorite_foods(), ["salmon", "oats"]);

        assert!(store.add_favorite_food("pizza", catalog).is_err());
        assert!(store.remove_favorite_food("salmon"));
        assert!(!store.remove_favorite_food("salmon"));
        assert_eq!(store.favorite_foods(), ["oats"]);
    }

    #[test]
    fn test_weight_history_newest_first_one_per_day() {
        let mut store = NutritionStore::new(NutritionState::default());
        store.add_weight_entry(day(1), 72.0, None).unwrap();
        store.add_weight_entry(day(3), 71.0, Some(18.0)).unwrap();
        store.add_weight_entry(day(2), 71.5, None).unwrap();
        store.add_weight_entry(day(3), 70.8, Some(17.9)).unwrap();

        let dates: Vec<NaiveDate> = store.weight_history().iter().map(|e| e.date).collect();
        assert_eq!(dates, vec![day(3), day(2), day(1)]);
        assert_eq!(store.weight_history()[0].weight, 70.8);

        let summary = store.weight_summary();
        assert_eq!(summary.current, 70.8);
        assert_eq!(summary.initial, 72.0);
        assert!((summary.change + 1.2).abs() < 1e-9);
        assert_eq!(summary.body_fat, Some(17.9));
    }

    #[test]
    fn test_weight_summary_without_history_uses_profile() {
        let store = NutritionStore::new(NutritionState::default());
        let summary = store.weight_summary();
        assert_eq!(summary.current, 70.0);
        assert_eq!(summary.change, 0.0);
        assert_eq!(summary.bmi_category, BmiCategory::Normal);
    }

    #[test]
    fn test_add_weight_entry_rejects_invalid() {
        let mut store = NutritionStore::new(NutritionState::default());
        assert!(store.add_weight_entry(day(1), -1.0, None).is_err());
        assert!(store.add_weight_entry(day(1), 70.0, Some(120.0)).is_err());
        assert!(store.weight_history().is_empty());
    }
}
