//! HTTP handlers for the crop catalogue

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::services::planner::CropInfo;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct LanguageQuery {
    pub language: Option<String>,
}

/// List the crops the planner can recommend
pub async fn list_crops(
    State(state): State<AppState>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> AppResult<Json<Vec<CropInfo>>> {
    let Query(query) = query?;
    let service = state.planner();
    let language = service.resolve_language(query.language.as_deref())?;
    Ok(Json(service.crops(language)))
}
