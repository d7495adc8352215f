use crate::models::{Category, Food};

/// Build a catalog entry. Arguments after `category` are per 100 g.
#[allow(clippy::too_many_arguments)]
fn food(
    id: &str,
    name: &str,
    category: Category,
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
    fiber: f64,
    sugar: f64,
    sodium: f64,
    serving_size: f64,
    substitutes: &[&str],
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        category,
        calories,
        protein,
        carbs,
        fat,
        fiber,
        sugar,
        sodium,
        serving_size,
        substitutes: substitutes.iter().map(|s| s.to_string()).collect(),
    }
}

/// The shipped food table.
///
/// Several substitute ids (turkey_breast, quinoa, ...) name foods that are
/// not in the table; lookups skip them.
#[rustfmt::skip]
pub fn builtin_foods() -> Vec<Food> {
    use Category::*;

    vec![
        // Proteins
        food(
            "chicken_breast",
            "Grilled Chicken Breast",
            Protein,
            165.0, 31.0, 0.0, 3.6, 0.0, 0.0, 74.0, 100.0,
            &["turkey_breast", "white_fish", "tofu_firm"],
        ),
        food(
            "salmon",
            "Grilled Salmon",
            Protein,
            208.0, 25.0, 0.0, 12.0, 0.0, 0.0, 59.0, 100.0,
            &["tuna", "sardines", "mackerel"],
        ),
        food(
            "eggs",
            "Whole Eggs",
            Protein,
            155.0, 13.0, 1.1, 11.0, 0.0, 1.1, 124.0, 100.0,
            &["egg_whites", "cottage_cheese"],
        ),
        food(
            "greek_yogurt",
            "Plain Greek Yogurt",
            Protein,
            59.0, 10.0, 3.6, 0.4, 0.0, 3.6, 36.0, 100.0,
            &["cottage_cheese", "protein_powder"],
        ),
        // Carbohydrates
        food(
            "brown_rice",
            "Brown Rice",
            Carb,
            111.0, 2.6, 22.0, 0.9, 1.8, 0.4, 5.0, 100.0,
            &["quinoa", "sweet_potato", "oats"],
        ),
        food(
            "sweet_potato",
            "Sweet Potato",
            Carb,
            86.0, 1.6, 20.0, 0.1, 3.0, 4.2, 6.0, 100.0,
            &["brown_rice", "quinoa", "oats"],
        ),
        food(
            "oats",
            "Rolled Oats",
            Carb,
            389.0, 16.9, 66.0, 6.9, 10.6, 1.0, 2.0, 40.0,
            &["quinoa", "brown_rice", "whole_wheat"],
        ),
        food(
            "banana",
            "Banana",
            Carb,
            89.0, 1.1, 23.0, 0.3, 2.6, 12.0, 1.0, 100.0,
            &["apple", "berries", "dates"],
        ),
        // Healthy fats
        food(
            "avocado",
            "Avocado",
            Fat,
            160.0, 2.0, 9.0, 15.0, 7.0, 0.7, 7.0, 100.0,
            &["olive_oil", "nuts", "seeds"],
        ),
        food(
            "almonds",
            "Almonds",
            Fat,
            579.0, 21.0, 22.0, 50.0, 12.0, 4.0, 1.0, 30.0,
            &["walnuts", "cashews", "peanuts"],
        ),
        food(
            "olive_oil",
            "Extra Virgin Olive Oil",
            Fat,
            884.0, 0.0, 0.0, 100.0, 0.0, 0.0, 2.0, 15.0,
            &["coconut_oil", "avocado_oil"],
        ),
        // Vegetables
        food(
            "broccoli",
            "Broccoli",
            Vegetable,
            34.0, 2.8, 7.0, 0.4, 2.6, 1.5, 33.0, 100.0,
            &["cauliflower", "spinach", "kale"],
        ),
        food(
            "spinach",
            "Spinach",
            Vegetable,
            23.0, 2.9, 3.6, 0.4, 2.2, 0.4, 79.0, 100.0,
            &["kale", "arugula", "lettuce"],
        ),
        food(
            "tomato",
            "Tomato",
            Vegetable,
            18.0, 0.9, 3.9, 0.2, 1.2, 2.6, 5.0, 100.0,
            &["bell_pepper", "cucumber", "carrot"],
        ),
    ]
}
