//! Progress and totals routes
//!
//! - GET /api/progress - 7-day window: daily totals, averages, streak
//! - GET /api/totals - running totals over the whole log

use axum::{extract::State, Json};
use chrono::Local;
use std::sync::Arc;

use crate::api::dto::{ProgressResponse, TotalsResponse};
use crate::api::state::AppState;
use crate::foodlog::ProgressAggregator;

/// GET /api/progress
pub async fn get_progress(State(state): State<Arc<AppState>>) -> Json<ProgressResponse> {
    let today = Local::now().date_naive();
    let summary = ProgressAggregator::new(&state.log).week_summary(today).await;

    let total_days = summary.days.len();

    Json(ProgressResponse {
        success: true,
        week_data: summary.days,
        averages: summary.averages,
        streak: summary.streak,
        total_days,
    })
}

/// GET /api/totals
pub async fn get_totals(State(state): State<Arc<AppState>>) -> Json<TotalsResponse> {
    Json(TotalsResponse {
        success: true,
        totals: state.log.totals().await,
    })
}
