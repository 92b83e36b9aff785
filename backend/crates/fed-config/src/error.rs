use std::panic::Location;
use std::path::{Path, PathBuf};

use error_location::ErrorLocation;
use thiserror::Error;

/// Startup configuration failures. `section` names the TOML table the bad
/// value came from (`server`, `auth`, `providers`, ...).
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid [{section}] config: {message} {location}")]
    Invalid {
        section: &'static str,
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Cannot parse {path}: {source} {location}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn invalid(section: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            section,
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn toml(path: &Path, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.to_path_buf(),
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Table the failure belongs to, when it is a validation failure
    pub fn section(&self) -> Option<&'static str> {
        match self {
            Self::Invalid { section, .. } => Some(section),
            Self::Io { .. } | Self::Toml { .. } => None,
        }
    }
}

pub type ConfigErrorResult<T> = std::result::Result<T, ConfigError>;
