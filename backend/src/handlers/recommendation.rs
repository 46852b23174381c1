//! HTTP handlers for crop recommendation endpoints

use axum::{
    extract::{rejection::JsonRejection, rejection::QueryRejection, Query, State},
    Json,
};

use crate::error::AppResult;
use crate::services::planner::{RecommendationInput, RecommendationQuery, RecommendationResponse};
use crate::AppState;

/// Recommend crops for a location sent as a JSON body
pub async fn create_recommendations(
    State(state): State<AppState>,
    payload: Result<Json<RecommendationInput>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(input) = payload?;
    let response = state.planner().recommend(input).await?;
    Ok(Json(response))
}

/// Recommend crops for a location sent as query parameters
pub async fn get_recommendations(
    State(state): State<AppState>,
    query: Result<Query<RecommendationQuery>, QueryRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Query(query) = query?;
    let response = state.planner().recommend(query.into()).await?;
    Ok(Json(response))
}
