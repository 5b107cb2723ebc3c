//! Error handling for the Farm Weather Advisory Platform
//!
//! Provides consistent JSON error responses

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const LOCATION_NOT_FOUND_MESSAGE: &str =
    "City or country not recognized. Please edit your profile information with a valid location.";

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    // Weather provider errors
    #[error("{}", LOCATION_NOT_FOUND_MESSAGE)]
    LocationNotFound,

    #[error("Weather API error: {status}")]
    WeatherApi { status: u16 },

    #[error("External service error: {0}")]
    ExternalService(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    // Internal errors
    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Internal server error")]
    InternalError(#[from] anyhow::Error),
}

impl AppError {
    /// Build a validation error for `field`
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        // The request URL carries the API key
        let err = err.without_url();
        if err.is_timeout() {
            AppError::ExternalService("Weather API request timed out".to_string())
        } else if err.is_decode() {
            AppError::ExternalService(format!("Failed to parse weather response: {}", err))
        } else {
            AppError::ExternalService(format!("Weather API request failed: {}", err))
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl AppError {
    fn status_and_detail(&self) -> (StatusCode, ErrorDetail) {
        match self {
            AppError::Validation { field, message } => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "VALIDATION_ERROR".to_string(),
                    message: message.clone(),
                    field: Some(field.clone()),
                },
            ),
            AppError::InvalidBody(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorDetail {
                    code: "INVALID_BODY".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::LocationNotFound => (
                StatusCode::NOT_FOUND,
                ErrorDetail {
                    code: "LOCATION_NOT_FOUND".to_string(),
                    message: LOCATION_NOT_FOUND_MESSAGE.to_string(),
                    field: Some("city".to_string()),
                },
            ),
            AppError::WeatherApi { status } => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "WEATHER_API_ERROR".to_string(),
                    message: format!("Weather API error: {}", status),
                    field: None,
                },
            ),
            AppError::ExternalService(msg) => (
                StatusCode::BAD_GATEWAY,
                ErrorDetail {
                    code: "EXTERNAL_SERVICE_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::Configuration(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrorDetail {
                    code: "CONFIGURATION_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: msg.clone(),
                    field: None,
                },
            ),
            AppError::InternalError(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrorDetail {
                    code: "INTERNAL_ERROR".to_string(),
                    message: "An internal server error occurred".to_string(),
                    field: None,
                },
            ),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_detail) = self.status_and_detail();

        // Client mistakes are not worth an error-level log line
        if status.is_client_error() {
            tracing::warn!("Request rejected: {}", self);
        } else {
            tracing::error!("Error: {:?}", self);
        }

        (status, Json(ErrorResponse { error: error_detail })).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
