//! WebAssembly module for the Farm Planner
//!
//! Provides client-side computation for:
//! - Crop recommendations straight from the browser's geolocation fix
//! - Suitability labels for confidence values
//! - Offline location validation

use serde::Serialize;
use wasm_bindgen::prelude::*;

// Re-export shared types for use in JavaScript
pub use shared::models::*;
pub use shared::types::*;
pub use shared::validation::*;

/// Payload returned by [`recommend_crops`], mirroring the HTTP response
#[derive(Serialize)]
struct ClientRecommendations {
    recommendations: Vec<CropRecommendation>,
    location: Location,
}

/// Initialize the WASM module
#[wasm_bindgen(start)]
pub fn init() {
    web_sys::console::debug_1(&JsValue::from_str("farm planner core loaded"));
}

fn to_option(value: f64) -> Option<f64> {
    (!value.is_nan()).then_some(value)
}

/// English when absent; unknown names are an error, as over HTTP
fn resolve_language(language: Option<&str>) -> Result<Language, String> {
    match language {
        None => Ok(Language::default()),
        Some(value) => {
            Language::parse(value).ok_or_else(|| format!("Unsupported language: {}", value))
        }
    }
}

/// Rank crops for a location and return the result as JSON.
///
/// Pass `NaN` for a coordinate the browser could not provide; it is reported
/// as a missing coordinate. `language` accepts names or codes (`hi`, `kannada`)
/// and defaults to English; anything else is rejected.
#[wasm_bindgen]
pub fn recommend_crops(
    latitude: f64,
    longitude: f64,
    limit: i32,
    language: Option<String>,
) -> Result<String, JsValue> {
    let language = resolve_language(language.as_deref()).map_err(|e| JsValue::from_str(&e))?;
    let location = validate_location(to_option(latitude), to_option(longitude))
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    let recommendations = shared::recommend(&location, DEFAULT_CANDIDATES, i64::from(limit))
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .into_iter()
        .map(|rec| shared::localize(rec, language))
        .collect();

    serde_json::to_string(&ClientRecommendations {
        recommendations,
        location,
    })
    .map_err(|e| JsValue::from_str(&format!("Failed to encode recommendations: {}", e)))
}

/// Deterministic location hash in [0, 100)
#[wasm_bindgen]
pub fn crop_location_hash(latitude: f64, longitude: f64) -> f64 {
    shared::location_hash(&Location::new(latitude, longitude))
}

/// Soil suitability label for a confidence value
#[wasm_bindgen]
pub fn classify_soil_suitability(confidence: u8) -> String {
    shared::soil_suitability(confidence).to_string()
}

/// Seasonal fit label for a confidence value
#[wasm_bindgen]
pub fn classify_seasonal_fit(confidence: u8) -> String {
    shared::seasonal_fit(confidence).to_string()
}

/// Water requirement label for a crop name
#[wasm_bindgen]
pub fn water_requirement_for(crop_name: &str) -> String {
    shared::water_requirement(crop_name).to_string()
}

/// Check coordinates before calling the planner
#[wasm_bindgen(js_name = isValidLocation)]
pub fn is_valid_location_js(latitude: f64, longitude: f64) -> bool {
    is_valid_location(latitude, longitude)
}
