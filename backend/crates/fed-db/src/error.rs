use fed_core::{ErrorLocation, ProviderKind};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored identity document for {uid} is unreadable: {message} {location}")]
    Decode {
        uid: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity {uid} changed since version {expected} {location}")]
    VersionConflict {
        uid: String,
        expected: i64,
        location: ErrorLocation,
    },

    #[error("{kind} account {provider_uid} is already bound to another identity {location}")]
    DuplicateBinding {
        kind: ProviderKind,
        provider_uid: String,
        location: ErrorLocation,
    },

    #[error("Store operation '{operation}' timed out after {timeout_ms}ms {location}")]
    Timeout {
        operation: &'static str,
        timeout_ms: u128,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    #[track_caller]
    fn from(source: sqlx::migrate::MigrateError) -> Self {
        Self::Migration {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
