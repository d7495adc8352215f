use std::path::Path;

use crate::error::Result;
use crate::models::DayMealPlan;

/// Write one row per meal item to a CSV file.
///
/// Meals without items still get a row so every slot appears in the export.
pub fn write_plan_csv(plan: &DayMealPlan, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date", "time", "meal", "food_id", "food", "grams", "kcal", "protein_g", "carbs_g",
        "fat_g",
    ])?;

    let date = plan.date.to_string();
    for meal in &plan.meals {
        if meal.items.is_empty() {
            wtr.write_record([
                date.as_str(),
                meal.time.as_str(),
                meal.name.as_str(),
                "",
                "",
                "0",
                "0",
                "0.0",
                "0.0",
                "0.0",
            ])?;
            continue;
        }

        for item in &meal.items {
            wtr.write_record([
                date.clone(),
                meal.time.clone(),
                meal.name.clone(),
                item.food_id.clone(),
                item.food.name.clone(),
                item.quantity.to_string(),
                item.calories.to_string(),
                format!("{:.1}", item.protein),
                format!("{:.1}", item.carbs),
                format!("{:.1}", item.fat),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::{Meal, MealItem, MealType};
    use chrono::NaiveDate;

    #[test]
    fn test_write_plan_csv() {
        let oats = Catalog::builtin().get_food_by_id("oats").unwrap();
        let meals = MealType::ALL
            .iter()
            .map(|&t| {
                if t == MealType::Breakfast {
                    Meal::new(t, vec![MealItem::new(oats, 50)])
                } else {
                    Meal::new(t, Vec::new())
                }
            })
            .collect();
        let plan = DayMealPlan::new(NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(), meals, 2450);

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("plan.csv");
        write_plan_csv(&plan, &path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 6); // header + 1 item + 4 empty slots
        assert!(lines[0].starts_with("date,time,meal"));
        assert_eq!(lines[1], "2025-05-01,07:00,Breakfast,oats,Rolled Oats,50,195,8.5,33.0,3.5");
    }
}
