//! Configuration management for the Farm Planner
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with FARM_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;
use shared::Language;

/// Largest TTL a `chrono::Duration` can hold
pub const MAX_CACHE_TTL_SECONDS: i64 = i64::MAX / 1000;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Recommendation defaults
    pub planner: PlannerConfig,

    /// Last-known-location cache
    pub cache: CacheConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PlannerConfig {
    /// Recommendations returned when a request has no limit
    pub default_limit: i64,

    /// Larger requested limits are capped to this
    pub max_limit: i64,

    /// Language used when a request does not name one
    pub default_language: Language,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CacheConfig {
    /// Seconds a cached location stays valid, 0 disables expiry
    pub ttl_seconds: i64,

    /// Maximum number of remembered clients, 0 disables the cache
    pub max_entries: usize,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("FARM_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("planner.default_limit", 3)?
            .set_default("planner.max_limit", 6)?
            .set_default("planner.default_language", "english")?
            .set_default("cache.ttl_seconds", 2_592_000)?
            .set_default("cache.max_entries", 10_000)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (FARM_ prefix)
            .add_source(
                Environment::with_prefix("FARM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the planner cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.planner.default_limit < 0 {
            return Err(ConfigError::Message(format!(
                "planner.default_limit must not be negative (got {})",
                self.planner.default_limit
            )));
        }
        if self.planner.max_limit < 0 {
            return Err(ConfigError::Message(format!(
                "planner.max_limit must not be negative (got {})",
                self.planner.max_limit
            )));
        }
        if !(0..=MAX_CACHE_TTL_SECONDS).contains(&self.cache.ttl_seconds) {
            return Err(ConfigError::Message(format!(
                "cache.ttl_seconds must be between 0 and {} (got {})",
                MAX_CACHE_TTL_SECONDS, self.cache.ttl_seconds
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            planner: PlannerConfig::default(),
            cache: CacheConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            default_limit: shared::DEFAULT_LIMIT,
            max_limit: 6,
            default_language: Language::English,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_seconds: 2_592_000,
            max_entries: 10_000,
        }
    }
}
