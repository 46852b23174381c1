//! HTTP handlers for the last-known-location cache

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{area_from_value, validate_location_value};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::services::location_cache::CachedLocation;
use crate::AppState;

/// Input for storing a client's location
#[derive(Debug, Deserialize)]
pub struct StoreLocationInput {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub area: Option<Value>,
}

/// Cached location as returned to clients
#[derive(Debug, Serialize)]
pub struct LocationView {
    pub client_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    pub updated_at: DateTime<Utc>,
}

impl LocationView {
    fn new(client_id: Uuid, cached: CachedLocation) -> Self {
        Self {
            client_id,
            latitude: cached.location.latitude,
            longitude: cached.location.longitude,
            area: cached.area,
            updated_at: cached.updated_at,
        }
    }
}

/// Store or replace a client's last known location
pub async fn store_location(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
    payload: Result<Json<StoreLocationInput>, JsonRejection>,
) -> AppResult<Json<LocationView>> {
    let Path(client_id) = path?;
    let Json(input) = payload?;

    let location = validate_location_value(input.latitude.as_ref(), input.longitude.as_ref())?;
    let area = input.area.as_ref().and_then(area_from_value);

    let cached = state.location_cache.put(client_id, location, area).await;
    tracing::debug!(%client_id, "Stored client location");
    Ok(Json(LocationView::new(client_id, cached)))
}

/// Fetch a client's last known location
pub async fn get_location(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<LocationView>> {
    let Path(client_id) = path?;
    let cached = state
        .location_cache
        .get(client_id)
        .await
        .ok_or_else(|| AppError::NotFound("Cached location".to_string()))?;
    Ok(Json(LocationView::new(client_id, cached)))
}

/// Forget a client's last known location
pub async fn delete_location(
    State(state): State<AppState>,
    path: Result<Path<Uuid>, PathRejection>,
) -> AppResult<StatusCode> {
    let Path(client_id) = path?;
    if !state.location_cache.remove(client_id).await {
        return Err(AppError::NotFound("Cached location".to_string()));
    }
    Ok(StatusCode::NO_CONTENT)
}
