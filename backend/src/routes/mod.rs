//! Route definitions for the Farm Planner

use axum::{
    routing::{get, put},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/recommendations",
            get(handlers::get_recommendations).post(handlers::create_recommendations),
        )
        .route("/crops", get(handlers::list_crops))
        .nest("/locations", location_routes())
}

/// Last-known-location routes
fn location_routes() -> Router<AppState> {
    Router::new().route(
        "/:client_id",
        put(handlers::store_location)
            .get(handlers::get_location)
            .delete(handlers::delete_location),
    )
}
