//! Error taxonomy for the crop recommendation core

use thiserror::Error;

/// Input validation failures raised by the planner.
///
/// All variants are local and recoverable by the caller (re-prompt for a
/// location, clamp the limit). None of them are worth retrying.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Missing coordinate: {field}")]
    MissingCoordinate { field: &'static str },

    #[error("Coordinate out of range: {field} = {value}")]
    OutOfRange { field: &'static str, value: f64 },

    #[error("Invalid limit: {0}")]
    InvalidLimit(i64),
}

impl PlannerError {
    /// Stable machine-readable code used in API responses
    pub fn code(&self) -> &'static str {
        match self {
            PlannerError::MissingCoordinate { .. } => "MISSING_COORDINATE",
            PlannerError::OutOfRange { .. } => "OUT_OF_RANGE",
            PlannerError::InvalidLimit(_) => "INVALID_LIMIT",
        }
    }

    /// Name of the offending input field
    pub fn field(&self) -> &'static str {
        match self {
            PlannerError::MissingCoordinate { field } => field,
            PlannerError::OutOfRange { field, .. } => field,
            PlannerError::InvalidLimit(_) => "limit",
        }
    }
}
