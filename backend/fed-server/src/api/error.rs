//! REST API error types
//!
//! Every failure leaves the server as `{"error": {"code", "message", "field"?}}`
//! with a status derived from the variant.

use fed_auth::AuthError;
use fed_core::CoreError;
use fed_identity::IdentityError;

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub error: ApiErrorBody,
}

#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "UNAUTHORIZED", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    /// First invalid request field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body is not valid JSON for the endpoint (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
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

    /// Missing, invalid or rejected credential (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Resource not found (404)
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// Binding owned by another identity, or email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Operation refused by an identity rule (400)
    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    /// Too many attempts (429)
    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    /// Provider has no credentials configured (501)
    #[error("Not configured: {message} {location}")]
    NotConfigured {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest { .. }
            | ApiError::Validation { .. }
            | ApiError::Rejected { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            ApiError::NotConfigured { .. } => StatusCode::NOT_IMPLEMENTED,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest { .. } => "BAD_REQUEST",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::Unauthorized { .. } => "UNAUTHORIZED",
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Conflict { .. } => "CONFLICT",
            ApiError::Rejected { .. } => "REJECTED",
            ApiError::RateLimited { .. } => "RATE_LIMITED",
            ApiError::NotConfigured { .. } => "NOT_CONFIGURED",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let code = self.code().to_string();
        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::BadRequest { message, .. }
            | ApiError::Unauthorized { message, .. }
            | ApiError::NotFound { message, .. }
            | ApiError::Conflict { message, .. }
            | ApiError::Rejected { message, .. }
            | ApiError::RateLimited { message, .. }
            | ApiError::NotConfigured { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        (
            status,
            Json(ApiErrorResponse {
                error: ApiErrorBody {
                    code,
                    message,
                    field,
                },
            }),
        )
            .into_response()
    }
}

/// Convert identity workflow errors to API errors
impl From<IdentityError> for ApiError {
    #[track_caller]
    fn from(e: IdentityError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            IdentityError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location,
            },
            IdentityError::Auth { message, .. } => ApiError::Unauthorized { message, location },
            IdentityError::Conflict { message, .. } => ApiError::Conflict { message, location },
            IdentityError::NotFound { message, .. } => ApiError::NotFound { message, location },
            IdentityError::Rejected { message, .. } => ApiError::Rejected { message, location },
            IdentityError::RateLimited { message, .. } => {
                ApiError::RateLimited { message, location }
            }
            IdentityError::NotConfigured { provider, .. } => ApiError::NotConfigured {
                message: format!("{} sign-in is not configured", provider.display_name()),
                location,
            },
            IdentityError::Store { ref source, .. } => {
                // Don't expose store details to clients
                log::error!("Identity store error: {}", source);
                ApiError::Internal {
                    message: "Identity store operation failed".to_string(),
                    location,
                }
            }
            IdentityError::Internal { message, .. } => ApiError::Internal { message, location },
        }
    }
}

/// Convert session validation errors to API errors
impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        ApiError::from(IdentityError::from(e))
    }
}

/// Convert unknown provider names and other core rule violations
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::from(IdentityError::from(e))
    }
}

/// Convert body extraction failures (malformed JSON, wrong content type)
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest {
            message: rejection.body_text(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
