//! Health routes
//!
//! Health check endpoints for monitoring and orchestration probes.
//!
//! - GET /health/live - liveness probe (process is alive)
//! - GET /health/ready - readiness probe (ready to serve traffic)
//! - GET /health - full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::HealthResponse;
use crate::api::state::AppState;

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Returns 200 once the log is reachable. The LLM service is deliberately
/// not probed here: a degraded model still serves reads and zero-fallback
/// writes.
pub async fn readiness(State(state): State<Arc<AppState>>) -> StatusCode {
    let _ = state.log.len().await;
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
