use fed_core::{CoreError, ProviderKind};

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from talking to an identity provider.
///
/// `message` fields may carry upstream text; they are for logs only and are
/// never shown to clients.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("HTTP request to {provider} failed: {message} {location}")]
    Http {
        provider: ProviderKind,
        message: String,
        #[source]
        source: reqwest::Error,
        location: ErrorLocation,
    },

    #[error("{provider} rejected the authorization code: {message} {location}")]
    CodeExchange {
        provider: ProviderKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} profile request failed: {message} {location}")]
    ProfileFetch {
        provider: ProviderKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("Unexpected {provider} response: {message} {location}")]
    Parse {
        provider: ProviderKind,
        message: String,
        location: ErrorLocation,
    },

    #[error("{provider} account has no usable email {location}")]
    MissingEmail {
        provider: ProviderKind,
        location: ErrorLocation,
    },

    #[error("{provider} requires a PKCE code_verifier {location}")]
    MissingCodeVerifier {
        provider: ProviderKind,
        location: ErrorLocation,
    },

    #[error("Invalid email or password {location}")]
    InvalidCredentials { location: ErrorLocation },

    #[error("Too many failed attempts, try again later {location}")]
    TooManyAttempts { location: ErrorLocation },

    #[error("Account is disabled {location}")]
    AccountDisabled { location: ErrorLocation },

    #[error("Email is already registered {location}")]
    EmailExists { location: ErrorLocation },

    #[error("Password rejected by the auth service: {message} {location}")]
    WeakPassword {
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider {provider} is not configured {location}")]
    NotConfigured {
        provider: ProviderKind,
        location: ErrorLocation,
    },

    #[error("Invalid provider data: {source} {location}")]
    InvalidProfile {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ProviderError {
    #[track_caller]
    pub fn http(provider: ProviderKind, source: reqwest::Error) -> Self {
        Self::Http {
            provider,
            message: source.to_string(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn parse(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn code_exchange(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::CodeExchange {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn profile_fetch(provider: ProviderKind, message: impl Into<String>) -> Self {
        Self::ProfileFetch {
            provider,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_configured(provider: ProviderKind) -> Self {
        Self::NotConfigured {
            provider,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for ProviderError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::InvalidProfile {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ProviderError>;
