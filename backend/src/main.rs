//! Farm Planner - Backend Server
//!
//! Serves ranked crop recommendations for a farm location to the
//! English, Hindi, and Kannada farmer portal.

use std::net::SocketAddr;

use farm_planner_backend::{create_app, AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_planner_backend=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Farm Planner Server");
    tracing::info!("Environment: {}", config.environment);
    tracing::info!(
        default_limit = config.planner.default_limit,
        max_limit = config.planner.max_limit,
        cache_ttl_seconds = config.cache.ttl_seconds,
        cache_max_entries = config.cache.max_entries,
        "Planner configured"
    );

    let host: std::net::IpAddr = config.server.host.parse()?;
    let addr = SocketAddr::new(host, config.server.port);

    // Create application state
    let state = AppState::new(config);

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
