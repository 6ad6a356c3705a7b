//! In-memory food log and aggregation
//!
//! The log is an ordered, append-only-with-deletion collection of
//! [`FoodEntry`] values owned by a single [`FoodLog`] service object.
//! Progress views (daily totals, weekly averages, streaks) are derived on
//! demand and never stored.

pub mod error;
pub mod journal;
pub mod progress;
pub mod seed;
pub mod types;

pub use error::{FoodLogError, FoodLogResult};
pub use journal::FoodLog;
pub use progress::{ProgressAggregator, WeekAverages, WeekSummary, WINDOW_DAYS};
pub use seed::DemoSeeder;
pub use types::{DailyAggregate, FoodEntry, Nutrition};
