//! Validation utilities for the Farm Planner
//!
//! Coordinates arrive from browsers, query strings, and JSON bodies, so they
//! are normalised to `Option<f64>` before the range checks run.

use serde_json::Value;

use crate::error::PlannerError;
use crate::types::{Location, LATITUDE_RANGE, LONGITUDE_RANGE};

// ============================================================================
// Untyped Input
// ============================================================================

/// Extract a coordinate from an untyped JSON value.
///
/// Numbers and numeric strings are accepted. Anything else (null, booleans,
/// arrays, objects, unparsable strings, NaN) counts as missing.
pub fn coordinate_from_value(value: &Value) -> Option<f64> {
    let coordinate = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => coordinate_from_str(s),
        _ => None,
    };
    coordinate.filter(|v| !v.is_nan())
}

/// Extract a coordinate from a query-string value
pub fn coordinate_from_str(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

// ============================================================================
// Location Validation
// ============================================================================

fn check_coordinate(
    field: &'static str,
    value: Option<f64>,
    (min, max): (f64, f64),
) -> Result<f64, PlannerError> {
    let value = match value {
        Some(v) if !v.is_nan() => v,
        _ => return Err(PlannerError::MissingCoordinate { field }),
    };
    if value < min || value > max {
        return Err(PlannerError::OutOfRange { field, value });
    }
    Ok(value)
}

/// Validate a latitude/longitude pair.
///
/// Missing or NaN values fail with `MissingCoordinate`; values outside
/// [-90, 90] / [-180, 180] fail with `OutOfRange`. Latitude is checked first.
pub fn validate_location(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<Location, PlannerError> {
    let latitude = check_coordinate("latitude", latitude, LATITUDE_RANGE)?;
    let longitude = check_coordinate("longitude", longitude, LONGITUDE_RANGE)?;
    Ok(Location::new(latitude, longitude))
}

/// Validate coordinates taken straight from a JSON body
pub fn validate_location_value(
    latitude: Option<&Value>,
    longitude: Option<&Value>,
) -> Result<Location, PlannerError> {
    validate_location(
        latitude.and_then(coordinate_from_value),
        longitude.and_then(coordinate_from_value),
    )
}

/// Extract a farm area from untyped input.
///
/// Area is informational only; anything that is not a finite, non-negative
/// number is dropped rather than rejected.
pub fn area_from_value(value: &Value) -> Option<f64> {
    coordinate_from_value(value).filter(|a| a.is_finite() && *a >= 0.0)
}

/// Check if coordinates form a valid location
pub fn is_valid_location(latitude: f64, longitude: f64) -> bool {
    validate_location(Some(latitude), Some(longitude)).is_ok()
}
