//! Food log routes
//!
//! - POST /api/add_food - parse input, estimate nutrition, append entries
//! - POST /api/delete_food - remove an entry by log position
//! - POST /api/clear - empty the log

use axum::{extract::State, http::StatusCode, Json};
use futures_util::future::join_all;
use std::sync::Arc;

use crate::api::dto::{
    AddFoodRequest, AddFoodResponse, ClearResponse, DeleteFoodRequest, DeleteFoodResponse,
};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::foodlog::FoodEntry;

/// POST /api/add_food
///
/// Runs the full pipeline: parse the utterance into food items, estimate
/// nutrition for each item concurrently, then append fully-resolved entries
/// in parse order. Zero extracted foods is a client-visible non-error.
pub async fn add_food(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AddFoodRequest>,
) -> ApiResult<(StatusCode, Json<AddFoodResponse>)> {
    let input = req.input.trim();
    if input.is_empty() {
        return Err(ApiError::EmptyInput);
    }

    tracing::info!(input = %input, "Received food input");

    let foods = state.parser.parse(input).await?;

    if foods.is_empty() {
        tracing::info!(input = %input, "No food items extracted");
        return Ok((
            StatusCode::BAD_REQUEST,
            Json(AddFoodResponse {
                success: false,
                message: Some(
                    "No food items extracted. Please enter actual food or drinks.".to_string(),
                ),
                foods: Vec::new(),
                total_items: state.log.len().await,
                totals: None,
            }),
        ));
    }

    // Estimates for different items are independent; run them concurrently.
    // Each entry appends only after its own estimate has resolved.
    let estimates = join_all(foods.iter().map(|food| {
        state
            .estimator
            .estimate(&food.food_name, food.grams, food.quantity_items)
    }))
    .await;

    for (food, nutrition) in foods.iter().zip(estimates) {
        state
            .log
            .append(FoodEntry::new(
                food.food_name.clone(),
                food.grams,
                food.quantity_items,
                input,
                nutrition,
            ))
            .await;
    }

    let totals = state.log.totals().await;
    let total_items = state.log.len().await;

    tracing::info!(
        foods = foods.len(),
        total_items,
        calories = totals.calories,
        "Logged food items"
    );

    Ok((
        StatusCode::OK,
        Json(AddFoodResponse {
            success: true,
            message: None,
            foods,
            total_items,
            totals: Some(totals),
        }),
    ))
}

/// POST /api/delete_food
///
/// Removes the entry at the given 0-based log position.
pub async fn delete_food(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DeleteFoodRequest>,
) -> ApiResult<Json<DeleteFoodResponse>> {
    let index = match req.index {
        Some(i) if i >= 0 => i as usize,
        _ => return Err(ApiError::InvalidIndex(None)),
    };

    let removed = state
        .log
        .delete_at(index)
        .await
        .map_err(|e| ApiError::InvalidIndex(Some(e)))?;

    tracing::info!(index, food = %removed.food_name, "Deleted food entry");

    Ok(Json(DeleteFoodResponse {
        success: true,
        message: "Food deleted".to_string(),
        totals: state.log.totals().await,
        total_items: state.log.len().await,
    }))
}

/// POST /api/clear
///
/// Empties the log unconditionally.
pub async fn clear_log(State(state): State<Arc<AppState>>) -> Json<ClearResponse> {
    state.log.clear().await;
    tracing::info!("Food log cleared");

    Json(ClearResponse {
        success: true,
        message: "Food log cleared".to_string(),
    })
}
