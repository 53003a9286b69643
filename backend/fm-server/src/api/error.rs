//! REST API error types
//!
//! Every error renders as `{"error": "<message>"}` with the matching status.
//! Authentication and authorization failures never leak their reason to the
//! client; the reason is logged instead.

use fm_auth::{AuthError, AuthFailure};
use fm_core::CoreError;
use fm_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";
pub const FORBIDDEN_MESSAGE: &str = "Forbidden";
const INTERNAL_MESSAGE: &str = "Internal server error";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: String,
    /// Offending request field, for validation errors only
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No identity could be resolved (401)
    #[error("Unauthorized: {reason} {location}")]
    Unauthorized {
        reason: String,
        location: ErrorLocation,
    },

    /// Identity lacks membership or role on the account (403)
    #[error("Forbidden: {reason} {location}")]
    Forbidden {
        reason: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Validation error (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Bad request (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Request body exceeds the configured limit (413)
    #[error("Payload too large: {message} {location}")]
    PayloadTooLarge {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, not returned.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Internal { .. } => log::error!("{}", self),
            ApiError::Unauthorized { .. } | ApiError::Forbidden { .. } => log::warn!("{}", self),
            _ => log::debug!("{}", self),
        }

        let body = match self {
            ApiError::Unauthorized { .. } => ApiErrorResponse {
                error: UNAUTHORIZED_MESSAGE.to_string(),
                field: None,
            },
            ApiError::Forbidden { .. } => ApiErrorResponse {
                error: FORBIDDEN_MESSAGE.to_string(),
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorResponse {
                error: INTERNAL_MESSAGE.to_string(),
                field: None,
            },
            ApiError::Validation { message, field, .. } => ApiErrorResponse {
                error: message,
                field,
            },
            ApiError::NotFound { message, .. }
            | ApiError::BadRequest { message, .. }
            | ApiError::PayloadTooLarge { message, .. } => {
                ApiErrorResponse {
                    error: message,
                    field: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// Map authorization outcomes onto 401 / 403 / 500
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e.status_class() {
            AuthFailure::Unauthenticated => ApiError::Unauthorized {
                reason: e.to_string(),
                location,
            },
            AuthFailure::Forbidden => ApiError::Forbidden {
                reason: e.to_string(),
                location,
            },
            AuthFailure::Internal => ApiError::Internal {
                message: e.to_string(),
                location,
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        // Don't expose internal database details to clients
        ApiError::Internal {
            message: format!("Database operation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::Error> for ApiError {
    #[track_caller]
    fn from(e: sqlx::Error) -> Self {
        ApiError::Internal {
            message: format!("Database operation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert UUID parse errors to API errors
impl From<uuid::Error> for ApiError {
    #[track_caller]
    fn from(e: uuid::Error) -> Self {
        ApiError::Validation {
            message: format!("Invalid UUID format: {}", e),
            field: None,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidRole { value, .. } => ApiError::Validation {
                message: format!("Invalid role '{}'", value),
                field: Some("role".to_string()),
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
