//! Error handling for the Farm Planner
//!
//! Provides consistent error responses in English, Hindi, and Kannada

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use shared::PlannerError;
use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Planner input errors
    #[error(transparent)]
    Planner(#[from] PlannerError),

    #[error("Validation error: {message}")]
    Validation {
        field: String,
        message: String,
        message_hi: String,
        message_kn: String,
    },

    // Request decoding errors
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Resource not found: {0}")]
    NotFound(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

/// Error response structure
///
/// `error` is always the English message so simple clients can show it as is.
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub message_hi: String,
    pub message_kn: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

fn planner_error_body(err: &PlannerError) -> ErrorResponse {
    let (error, message_hi, message_kn) = match err {
        PlannerError::MissingCoordinate { field } => (
            format!("Both latitude and longitude are required ({} is missing)", field),
            "अक्षांश और देशांतर दोनों आवश्यक हैं".to_string(),
            "ಅಕ್ಷಾಂಶ ಮತ್ತು ರೇಖಾಂಶ ಎರಡೂ ಅಗತ್ಯವಿದೆ".to_string(),
        ),
        PlannerError::OutOfRange { field, value } => (
            format!("{} {} is out of range", field, value),
            format!("{} {} मान्य सीमा से बाहर है", field, value),
            format!("{} {} ಮಾನ್ಯ ವ್ಯಾಪ್ತಿಯ ಹೊರಗಿದೆ", field, value),
        ),
        PlannerError::InvalidLimit(limit) => (
            format!("Limit must not be negative (got {})", limit),
            format!("सीमा ऋणात्मक नहीं हो सकती ({})", limit),
            format!("ಮಿತಿ ಋಣಾತ್ಮಕವಾಗಿರಬಾರದು ({})", limit),
        ),
    };

    ErrorResponse {
        error,
        code: err.code().to_string(),
        message_hi,
        message_kn,
        field: Some(err.field().to_string()),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            AppError::Planner(err) => (StatusCode::BAD_REQUEST, planner_error_body(err)),
            AppError::Validation {
                field,
                message,
                message_hi,
                message_kn,
            } => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: message.clone(),
                    code: "VALIDATION_ERROR".to_string(),
                    message_hi: message_hi.clone(),
                    message_kn: message_kn.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: msg.clone(),
                    code: "BAD_REQUEST".to_string(),
                    message_hi: format!("अनुरोध अमान्य है: {}", msg),
                    message_kn: format!("ವಿನಂತಿ ಅಮಾನ್ಯವಾಗಿದೆ: {}", msg),
                    field: None,
                },
            ),
            AppError::NotFound(resource) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: format!("{} not found", resource),
                    code: "NOT_FOUND".to_string(),
                    message_hi: format!("{} नहीं मिला", resource),
                    message_kn: format!("{} ಕಂಡುಬಂದಿಲ್ಲ", resource),
                    field: None,
                },
            ),
        };

        // Log the error for debugging
        tracing::warn!("Request failed: {:?}", self);

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
