//! Planner service: resolves request input and runs the recommendation core

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use shared::{
    area_from_value, localize, localized_crop_name, recommend, validate_location_value,
    water_requirement, CropRecommendation, Language, Location, WaterRequirement,
    DEFAULT_CANDIDATES,
};
use uuid::Uuid;

use crate::config::PlannerConfig;
use crate::error::{AppError, AppResult};
use crate::services::location_cache::{CachedLocation, LocationCache};

/// Recommendation request body.
///
/// Coordinates and area are kept untyped so that strings, nulls, and other
/// browser quirks reach validation instead of failing deserialization.
#[derive(Debug, Default, Deserialize)]
pub struct RecommendationInput {
    pub latitude: Option<Value>,
    pub longitude: Option<Value>,
    pub area: Option<Value>,
    pub limit: Option<i64>,
    pub language: Option<String>,
    pub client_id: Option<Uuid>,
}

/// Query-string form of [`RecommendationInput`]
#[derive(Debug, Deserialize)]
pub struct RecommendationQuery {
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub area: Option<String>,
    pub limit: Option<i64>,
    pub language: Option<String>,
    pub client_id: Option<Uuid>,
}

impl From<RecommendationQuery> for RecommendationInput {
    fn from(query: RecommendationQuery) -> Self {
        Self {
            latitude: query.latitude.map(Value::String),
            longitude: query.longitude.map(Value::String),
            area: query.area.map(Value::String),
            limit: query.limit,
            language: query.language,
            client_id: query.client_id,
        }
    }
}

/// Where the location used for scoring came from
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LocationSource {
    Request,
    Cache,
}

/// Successful recommendation response
#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub recommendations: Vec<CropRecommendation>,
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    pub language: Language,
    pub source: LocationSource,
    pub generated_at: DateTime<Utc>,
}

/// Candidate catalogue entry
#[derive(Debug, Serialize)]
pub struct CropInfo {
    pub name: &'static str,
    pub base_confidence: u8,
    pub water_requirement: WaterRequirement,
    pub localized_name: String,
}

/// Planner service wrapping the stateless core with request defaults and
/// the location cache
#[derive(Clone)]
pub struct PlannerService {
    config: PlannerConfig,
    cache: Arc<LocationCache>,
}

impl PlannerService {
    pub fn new(config: PlannerConfig, cache: Arc<LocationCache>) -> Self {
        Self { config, cache }
    }

    /// Resolve a requested language name or code, falling back to the default
    pub fn resolve_language(&self, requested: Option<&str>) -> AppResult<Language> {
        match requested {
            None => Ok(self.config.default_language),
            Some(value) => Language::parse(value).ok_or_else(|| AppError::Validation {
                field: "language".to_string(),
                message: format!("Unsupported language: {}", value),
                message_hi: format!("असमर्थित भाषा: {}", value),
                message_kn: format!("ಬೆಂಬಲವಿಲ್ಲದ ಭಾಷೆ: {}", value),
            }),
        }
    }

    /// Default when absent, capped at the configured maximum. Negative values
    /// pass through so the ranker can reject them.
    pub fn resolve_limit(&self, requested: Option<i64>) -> i64 {
        requested
            .map(|limit| limit.min(self.config.max_limit))
            .unwrap_or(self.config.default_limit)
    }

    /// Produce ranked crop recommendations for a request
    pub async fn recommend(&self, input: RecommendationInput) -> AppResult<RecommendationResponse> {
        let language = self.resolve_language(input.language.as_deref())?;
        let limit = self.resolve_limit(input.limit);
        let requested_area = input.area.as_ref().and_then(area_from_value);

        if input.area.is_some() && requested_area.is_none() {
            tracing::warn!(area = ?input.area, "Ignoring unusable farm area");
        }

        // Read-on-start: only when the caller sent no coordinates at all
        let cached = match (&input.latitude, &input.longitude, input.client_id) {
            (None, None, Some(client_id)) => {
                let cached = self.cache.get(client_id).await;
                tracing::debug!(%client_id, hit = cached.is_some(), "Location cache lookup");
                cached
            }
            _ => None,
        };

        let (location, area, source) = match cached {
            Some(CachedLocation { location, area, .. }) => {
                (location, requested_area.or(area), LocationSource::Cache)
            }
            None => (
                validate_location_value(input.latitude.as_ref(), input.longitude.as_ref())?,
                requested_area,
                LocationSource::Request,
            ),
        };

        let recommendations: Vec<CropRecommendation> =
            recommend(&location, DEFAULT_CANDIDATES, limit)?
                .into_iter()
                .map(|rec| localize(rec, language))
                .collect();

        // Write-on-change
        if let (LocationSource::Request, Some(client_id)) = (source, input.client_id) {
            self.cache.put(client_id, location, area).await;
        }

        tracing::info!(
            latitude = location.latitude,
            longitude = location.longitude,
            area = ?area,
            limit,
            source = ?source,
            top = recommendations.first().map(|r| r.crop_name.as_str()).unwrap_or("none"),
            "Generated crop recommendations"
        );

        Ok(RecommendationResponse {
            recommendations,
            location,
            area,
            language,
            source,
            generated_at: Utc::now(),
        })
    }

    /// List the candidate table in the requested language
    pub fn crops(&self, language: Language) -> Vec<CropInfo> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| CropInfo {
                name: candidate.name,
                base_confidence: candidate.base_confidence,
                water_requirement: water_requirement(candidate.name),
                localized_name: localized_crop_name(candidate.name, language),
            })
            .collect()
    }
}
