use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Session token signature is invalid {location}")]
    BadSignature { location: ErrorLocation },

    #[error("Malformed session token: {message} {location}")]
    MalformedToken {
        message: String,
        location: ErrorLocation,
    },

    #[error("Session token expired {location}")]
    Expired { location: ErrorLocation },

    #[error("Missing authorization header {location}")]
    MissingHeader { location: ErrorLocation },

    #[error("Invalid authorization scheme: expected 'Bearer' {location}")]
    InvalidScheme { location: ErrorLocation },

    #[error("Session signing key is not configured {location}")]
    MissingSecret { location: ErrorLocation },

    #[error("Session signing failed: {source} {location}")]
    Signing {
        #[source]
        source: jsonwebtoken::errors::Error,
        location: ErrorLocation,
    },

    #[error("Rate limit exceeded: {limit} attempts per {window_secs}s {location}")]
    RateLimitExceeded {
        limit: u32,
        window_secs: u64,
        location: ErrorLocation,
    },
}

impl AuthError {
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::BadSignature { .. } => "BAD_SIGNATURE",
            Self::MalformedToken { .. } => "MALFORMED_TOKEN",
            Self::Expired { .. } => "TOKEN_EXPIRED",
            Self::MissingHeader { .. } => "MISSING_AUTH_HEADER",
            Self::InvalidScheme { .. } => "INVALID_AUTH_SCHEME",
            Self::MissingSecret { .. } => "MISSING_SECRET",
            Self::Signing { .. } => "SIGNING_FAILED",
            Self::RateLimitExceeded { .. } => "RATE_LIMIT_EXCEEDED",
        }
    }

    /// Whether the failure came from the caller's credential rather than
    /// from the server's own key material.
    pub fn is_client_error(&self) -> bool {
        !matches!(self, Self::MissingSecret { .. } | Self::Signing { .. })
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
