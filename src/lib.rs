//! # Nosh
//!
//! Food-logging backend: free-text descriptions of eaten food go through a
//! chat-completion model to extract structured food items and estimate their
//! nutrition, entries land in an in-memory log, and aggregate/progress views
//! are served over HTTP.
//!
//! ## Pipeline
//!
//! raw text -> [`llm::FoodParser`] -> items -> [`llm::NutritionEstimator`]
//! (one call per item, concurrent) -> [`foodlog::FoodLog`] -> totals and
//! [`foodlog::ProgressAggregator`] views.
//!
//! ## Modules
//!
//! - [`llm`]: chat-completion client, food parser, nutrition estimator
//! - [`foodlog`]: in-memory log, progress aggregation, demo seeding
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML + environment configuration
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use nosh::api::{serve, ApiConfig, AppState};
//! use nosh::foodlog::FoodLog;
//! use nosh::llm::{FoodParser, LlmClient, LlmConfig, NutritionEstimator};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = Arc::new(LlmClient::new(LlmConfig::default())?);
//!     let state = AppState::new(
//!         Arc::new(FoodLog::new()),
//!         Arc::new(FoodParser::new(model.clone())),
//!         Arc::new(NutritionEstimator::new(model)),
//!         ApiConfig::default(),
//!     );
//!     serve(state, &ApiConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod foodlog;
pub mod llm;

// Re-export top-level types for convenience
pub use foodlog::{
    DailyAggregate, DemoSeeder, FoodEntry, FoodLog, FoodLogError, FoodLogResult, Nutrition,
    ProgressAggregator, WeekAverages, WeekSummary,
};

pub use llm::{
    ChatModel, CompletionParams, FoodParser, LlmClient, LlmConfig, LlmError, NutritionEstimator,
    ParseError, ParsedFood,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError};
