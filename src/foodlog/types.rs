//! Core data types for the food log
//!
//! This module defines the fundamental types used throughout the logging layer:
//! - `Nutrition`: macro/calorie values for one logged quantity
//! - `FoodEntry`: a single logged food item
//! - `DailyAggregate`: derived per-day totals (never stored)

use chrono::{DateTime, Datelike, Local};
use serde::{Deserialize, Serialize};

/// Nutrition values for a logged quantity of food
///
/// All fields are totals for the quantity that was logged,
/// not per-100g reference values.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Nutrition {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fat: f64,
    pub fiber: f64,
}

impl Nutrition {
    /// All-zero nutrition, used as the estimation fallback
    pub fn zero() -> Self {
        Self::default()
    }

    /// Add another nutrition value field-by-field
    pub fn add(&mut self, other: &Nutrition) {
        self.calories += other.calories;
        self.protein += other.protein;
        self.carbs += other.carbs;
        self.fat += other.fat;
        self.fiber += other.fiber;
    }

    /// True when every field is a finite, non-negative number
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fat, self.fiber]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// A single logged food item
///
/// Entries are immutable after creation; all log mutation is
/// append/remove/clear.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FoodEntry {
    /// Canonical name extracted by the parser
    pub food_name: String,
    /// Weight-based quantity in grams (0 when counted by items)
    pub grams: f64,
    /// Discrete-unit quantity (0 when weighed)
    pub quantity_items: f64,
    /// Original user utterance that produced this entry
    pub raw_input: String,
    /// Estimated nutrition for the total logged quantity
    pub nutrition: Nutrition,
    /// Calendar date of the entry, YYYY-MM-DD
    pub date: String,
    /// Creation time, RFC 3339
    pub timestamp: String,
}

impl FoodEntry {
    /// Create an entry stamped with the current local time
    pub fn new(
        food_name: impl Into<String>,
        grams: f64,
        quantity_items: f64,
        raw_input: impl Into<String>,
        nutrition: Nutrition,
    ) -> Self {
        Self::at(food_name, grams, quantity_items, raw_input, nutrition, Local::now())
    }

    /// Create an entry stamped with a specific time (seeding, tests)
    pub fn at(
        food_name: impl Into<String>,
        grams: f64,
        quantity_items: f64,
        raw_input: impl Into<String>,
        nutrition: Nutrition,
        when: DateTime<Local>,
    ) -> Self {
        Self {
            food_name: food_name.into(),
            grams,
            quantity_items,
            raw_input: raw_input.into(),
            nutrition,
            date: when.format("%Y-%m-%d").to_string(),
            timestamp: when.to_rfc3339(),
        }
    }
}

/// Derived per-day totals over the log
///
/// Computed on demand by the progress aggregator; never stored.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DailyAggregate {
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Weekday name ("Monday", ...)
    pub day_name: String,
    /// Sum of nutrition over entries on this date
    pub totals: Nutrition,
    /// Number of entries on this date
    pub food_count: usize,
}

impl DailyAggregate {
    /// Aggregate a day's entries
    pub fn from_entries(date: chrono::NaiveDate, entries: &[&FoodEntry]) -> Self {
        let mut totals = Nutrition::zero();
        for entry in entries {
            totals.add(&entry.nutrition);
        }

        Self {
            date: date.format("%Y-%m-%d").to_string(),
            day_name: weekday_name(date),
            totals,
            food_count: entries.len(),
        }
    }
}

fn weekday_name(date: chrono::NaiveDate) -> String {
    match date.weekday() {
        chrono::Weekday::Mon => "Monday",
        chrono::Weekday::Tue => "Tuesday",
        chrono::Weekday::Wed => "Wednesday",
        chrono::Weekday::Thu => "Thursday",
        chrono::Weekday::Fri => "Friday",
        chrono::Weekday::Sat => "Saturday",
        chrono::Weekday::Sun => "Sunday",
    }
    .to_string()
}
