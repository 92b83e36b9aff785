use fed_auth::AuthError;
use fed_core::{CoreError, ProviderKind};
use fed_db::DbError;
use fed_providers::ProviderError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failure taxonomy shared by the resolver, the linker and the workflows.
///
/// `message` is safe to show to a client. Upstream provider text and store
/// details are logged at conversion time and never copied into it.
#[derive(Error, Debug)]
pub enum IdentityError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Authentication failed: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rejected: {message} {location}")]
    Rejected {
        message: String,
        location: ErrorLocation,
    },

    #[error("Rate limited: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider {provider} is not configured {location}")]
    NotConfigured {
        provider: ProviderKind,
        location: ErrorLocation,
    },

    #[error("Identity store error: {source} {location}")]
    Store {
        #[source]
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl IdentityError {
    #[track_caller]
    pub fn validation(message: impl Into<String>, field: &str) -> Self {
        Self::Validation {
            message: message.into(),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Stable machine-readable code for the error body
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::Auth { .. } => "UNAUTHORIZED",
            Self::Conflict { .. } => "CONFLICT",
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Rejected { .. } => "REJECTED",
            Self::RateLimited { .. } => "RATE_LIMITED",
            Self::NotConfigured { .. } => "NOT_CONFIGURED",
            Self::Store { .. } => "STORE_ERROR",
            Self::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<DbError> for IdentityError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match source {
            DbError::DuplicateBinding { kind, .. } => {
                log::warn!("Binding conflict: {}", source);
                Self::Conflict {
                    message: format!(
                        "this {} account is already linked to another user",
                        kind.display_name()
                    ),
                    location,
                }
            }
            source => Self::Store { source, location },
        }
    }
}

impl From<CoreError> for IdentityError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            CoreError::Validation { message, field, .. } => Self::Validation {
                message,
                field,
                location,
            },
            CoreError::UnknownProvider { value, .. } => Self::Validation {
                message: format!("unsupported provider '{value}'"),
                field: Some("provider".to_string()),
                location,
            },
            CoreError::ProviderNotLinked { kind, .. } => Self::NotFound {
                message: format!("{} is not linked to this account", kind.display_name()),
                location,
            },
            CoreError::LastBinding { .. } => Self::Rejected {
                message: "cannot remove the last sign-in method".to_string(),
                location,
            },
        }
    }
}

impl From<ProviderError> for IdentityError {
    #[track_caller]
    fn from(e: ProviderError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        log::warn!("Provider failure: {}", e);

        match e {
            ProviderError::CodeExchange { provider, .. } => Self::Validation {
                message: format!("{} authorization code was rejected", provider.display_name()),
                field: Some("code".to_string()),
                location,
            },
            ProviderError::Http { provider, .. }
            | ProviderError::ProfileFetch { provider, .. }
            | ProviderError::Parse { provider, .. } => Self::Internal {
                message: format!("failed to retrieve the {} profile", provider.display_name()),
                location,
            },
            ProviderError::MissingEmail { provider, .. } => Self::Validation {
                message: format!("{} account has no email address", provider.display_name()),
                field: Some("email".to_string()),
                location,
            },
            ProviderError::MissingCodeVerifier { .. } => Self::Validation {
                message: "code_verifier is required".to_string(),
                field: Some("code_verifier".to_string()),
                location,
            },
            ProviderError::InvalidCredentials { .. } => Self::Auth {
                message: "invalid email or password".to_string(),
                location,
            },
            ProviderError::AccountDisabled { .. } => Self::Auth {
                message: "account disabled".to_string(),
                location,
            },
            ProviderError::TooManyAttempts { .. } => Self::RateLimited {
                message: "too many attempts, try again later".to_string(),
                location,
            },
            ProviderError::EmailExists { .. } => Self::Conflict {
                message: "email is already registered".to_string(),
                location,
            },
            ProviderError::WeakPassword { .. } => Self::Validation {
                message: "password is too weak".to_string(),
                field: Some("password".to_string()),
                location,
            },
            ProviderError::NotConfigured { provider, .. } => {
                Self::NotConfigured { provider, location }
            }
            ProviderError::InvalidProfile { source, .. } => Self::from(source),
        }
    }
}

impl From<AuthError> for IdentityError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match e {
            AuthError::RateLimitExceeded { .. } => Self::RateLimited {
                message: "too many login attempts, try again later".to_string(),
                location,
            },
            AuthError::Expired { .. } => Self::Auth {
                message: "session expired".to_string(),
                location,
            },
            AuthError::MissingHeader { .. } | AuthError::InvalidScheme { .. } => Self::Auth {
                message: "bearer session token required".to_string(),
                location,
            },
            e if e.is_client_error() => Self::Auth {
                message: "invalid session token".to_string(),
                location,
            },
            e => {
                log::error!("Session signing failed: {}", e);
                Self::Internal {
                    message: "failed to issue session".to_string(),
                    location,
                }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, IdentityError>;
