//! Data transfer objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};

use crate::foodlog::{DailyAggregate, Nutrition, WeekAverages};
use crate::llm::ParsedFood;

// ============================================
// ADD FOOD DTOs
// ============================================

/// Free-text food input
#[derive(Debug, Deserialize)]
pub struct AddFoodRequest {
    /// The raw user utterance, e.g. "200g chicken breast and 1 banana"
    #[serde(default)]
    pub input: String,
}

/// Result of an add-food request
///
/// `success: false` with an empty `foods` list means the input held no
/// food items; extraction itself succeeded.
#[derive(Debug, Serialize)]
pub struct AddFoodResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// The extracted items, in parse order
    pub foods: Vec<ParsedFood>,
    /// Log size after the operation
    pub total_items: usize,
    /// Running totals over the whole log
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<Nutrition>,
}

// ============================================
// DELETE FOOD DTOs
// ============================================

/// Positional deletion request
#[derive(Debug, Deserialize)]
pub struct DeleteFoodRequest {
    /// 0-based index in log order; may be absent or negative (both rejected)
    pub index: Option<i64>,
}

/// Result of a delete-food request
#[derive(Debug, Serialize)]
pub struct DeleteFoodResponse {
    pub success: bool,
    pub message: String,
    pub totals: Nutrition,
    pub total_items: usize,
}

// ============================================
// PROGRESS / TOTALS DTOs
// ============================================

/// 7-day progress view
#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub success: bool,
    /// One aggregate per day, oldest first
    pub week_data: Vec<DailyAggregate>,
    pub averages: WeekAverages,
    /// Consecutive days with entries, counted back from yesterday
    pub streak: usize,
    pub total_days: usize,
}

/// Running totals over the whole log
#[derive(Debug, Serialize)]
pub struct TotalsResponse {
    pub success: bool,
    pub totals: Nutrition,
}

/// Result of clearing the log
#[derive(Debug, Serialize)]
pub struct ClearResponse {
    pub success: bool,
    pub message: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Full health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
}
