//! Farm Planner - Backend Server
//!
//! HTTP binding for the crop recommendation core used by the farm-planner
//! feature of the farmer portal.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod services;

pub use config::Config;

use services::{LocationCache, PlannerService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub location_cache: Arc<LocationCache>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let location_cache = Arc::new(LocationCache::from_config(&config.cache));
        Self {
            config: Arc::new(config),
            location_cache,
        }
    }

    /// Planner service bound to this state's config and cache
    pub fn planner(&self) -> PlannerService {
        PlannerService::new(self.config.planner.clone(), self.location_cache.clone())
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .nest("/api/v1", routes::api_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "Farm Planner API v1.0"
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
