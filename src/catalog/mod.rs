mod data;

use std::sync::LazyLock;

use strsim::jaro_winkler;

use crate::models::{Category, Food};

pub use data::builtin_foods;

static BUILTIN: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(builtin_foods()));

/// A read-only table of foods.
///
/// Order is significant: "first match" lookups follow insertion order.
#[derive(Debug, Clone)]
pub struct Catalog {
    foods: Vec<Food>,
}

impl Catalog {
    pub fn new(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// The shipped catalog, built once per process.
    pub fn builtin() -> &'static Catalog {
        &BUILTIN
    }

    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    pub fn get_food_by_id(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|f| f.id == id)
    }

    /// Foods in `category`, in catalog order.
    pub fn get_foods_by_category(&self, category: Category) -> Vec<&Food> {
        self.foods.iter().filter(|f| f.category == category).collect()
    }

    /// Case-insensitive substring match on name or category.
    pub fn search_foods(&self, query: &str) -> Vec<&Food> {
        let query = query.to_lowercase();
        self.foods
            .iter()
            .filter(|f| {
                f.name.to_lowercase().contains(&query)
                    || f.category.name().to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Foods whose id or name is close to `query`, best first.
    ///
    /// Scores are Jaro-Winkler similarities; only scores above `threshold`
    /// are kept.
    pub fn fuzzy_matches(&self, query: &str, threshold: f64) -> Vec<(&Food, f64)> {
        let query = query.to_lowercase();
        let mut candidates: Vec<(&Food, f64)> = self
            .foods
            .iter()
            .map(|f| {
                let by_name = jaro_winkler(&f.name.to_lowercase(), &query);
                let by_id = jaro_winkler(&f.id, &query);
                (f, by_name.max(by_id))
            })
            .filter(|(_, score)| *score > threshold)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        candidates
    }
}

/// Look up a food in the shipped catalog.
pub fn get_food_by_id(id: &str) -> Option<&'static Food> {
    Catalog::builtin().get_food_by_id(id)
}

/// Foods of one category in the shipped catalog.
pub fn get_foods_by_category(category: Category) -> Vec<&'static Food> {
    Catalog::builtin().get_foods_by_category(category)
}

/// Search the shipped catalog by name or category.
pub fn search_foods(query: &str) -> Vec<&'static Food> {
    Catalog::builtin().search_foods(query)
}
