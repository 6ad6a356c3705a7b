//! Demo-data seeding
//!
//! Populates the log with 7 days of synthetic entries so the progress views
//! have something to show on a fresh start. The generator takes an explicit
//! RNG seed so tests and demos get reproducible fixtures.

use chrono::{Duration, Local};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::types::{FoodEntry, Nutrition};

/// Reference foods with per-serving nutrition used for synthetic entries
const BASE_FOODS: &[(&str, Nutrition)] = &[
    ("Chicken Breast", nutrition(165.0, 31.0, 0.0, 3.6, 0.0)),
    ("Brown Rice", nutrition(111.0, 2.6, 23.0, 0.9, 1.8)),
    ("Broccoli", nutrition(34.0, 2.8, 7.0, 0.4, 2.6)),
    ("Salmon", nutrition(208.0, 20.0, 0.0, 12.0, 0.0)),
    ("Sweet Potato", nutrition(86.0, 1.6, 20.0, 0.1, 3.0)),
    ("Greek Yogurt", nutrition(100.0, 17.0, 6.0, 0.0, 0.0)),
    ("Almonds", nutrition(164.0, 6.0, 6.0, 14.0, 3.5)),
    ("Banana", nutrition(89.0, 1.1, 23.0, 0.3, 2.6)),
    ("Eggs", nutrition(155.0, 13.0, 1.1, 11.0, 0.0)),
    ("Oatmeal", nutrition(154.0, 5.3, 27.0, 2.6, 4.0)),
    ("Avocado", nutrition(160.0, 2.0, 9.0, 15.0, 7.0)),
    ("Quinoa", nutrition(120.0, 4.4, 22.0, 1.9, 2.8)),
];

const fn nutrition(calories: f64, protein: f64, carbs: f64, fat: f64, fiber: f64) -> Nutrition {
    Nutrition {
        calories,
        protein,
        carbs,
        fat,
        fiber,
    }
}

/// Deterministic generator for demo entries
pub struct DemoSeeder {
    rng: StdRng,
}

impl DemoSeeder {
    /// Create a seeder with an explicit RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a seeder from OS entropy
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Generate 3-6 entries per day for the past 7 days, oldest first
    pub fn generate(&mut self) -> Vec<FoodEntry> {
        let now = Local::now();
        let mut entries = Vec::new();

        for days_ago in (1..=7).rev() {
            let when = now - Duration::days(days_ago);
            let num_entries = self.rng.gen_range(3..=6);

            for _ in 0..num_entries {
                let (name, per_serving) = BASE_FOODS[self.rng.gen_range(0..BASE_FOODS.len())];
                let quantity = self.rng.gen_range(1..=3) as f64;

                // Half the entries are weighed, the rest counted by items
                let grams = if self.rng.gen_bool(0.5) {
                    self.rng.gen_range(50..=200) as f64
                } else {
                    0.0
                };
                let quantity_items = if grams > 0.0 { 0.0 } else { quantity };

                let scaled = Nutrition {
                    calories: per_serving.calories * quantity,
                    protein: per_serving.protein * quantity,
                    carbs: per_serving.carbs * quantity,
                    fat: per_serving.fat * quantity,
                    fiber: per_serving.fiber * quantity,
                };

                entries.push(FoodEntry::at(
                    name,
                    grams,
                    quantity_items,
                    format!("{} {}", quantity as u32, name.to_lowercase()),
                    scaled,
                    when,
                ));
            }
        }

        entries
    }
}
