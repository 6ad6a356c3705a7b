//! Application state
//!
//! Shared state accessible by all API handlers, wrapped in Arc for
//! thread-safe sharing across async tasks. The food log is an explicit
//! service object owned here - never ambient global state.

use crate::foodlog::FoodLog;
use crate::llm::{FoodParser, NutritionEstimator};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// The in-memory food log
    pub log: Arc<FoodLog>,
    /// Free-text food input parser
    pub parser: Arc<FoodParser>,
    /// Per-item nutrition estimator
    pub estimator: Arc<NutritionEstimator>,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    pub fn new(
        log: Arc<FoodLog>,
        parser: Arc<FoodParser>,
        estimator: Arc<NutritionEstimator>,
        config: ApiConfig,
    ) -> Self {
        Self {
            log,
            parser,
            estimator,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

/// API server configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            request_timeout_secs: 30,
        }
    }
}

impl ApiConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Default::default()
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
