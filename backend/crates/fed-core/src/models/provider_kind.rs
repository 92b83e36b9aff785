use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Sign-in method an identity can carry bindings for.
///
/// Variant order is the precedence used when listing linked providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    /// Email and password, verified by the password backend
    Password,
    Google,
    Github,
    Twitter,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 4] = [Self::Password, Self::Google, Self::Github, Self::Twitter];

    pub const OAUTH: [ProviderKind; 3] = [Self::Google, Self::Github, Self::Twitter];

    /// Short name used in storage and derived UIDs
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google",
            Self::Github => "github",
            Self::Twitter => "twitter",
        }
    }

    /// Identifier reported to clients in provider listings
    pub fn provider_id(&self) -> &'static str {
        match self {
            Self::Password => "password",
            Self::Google => "google.com",
            Self::Github => "github.com",
            Self::Twitter => "twitter.com",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Password => "Email",
            Self::Google => "Google",
            Self::Github => "GitHub",
            Self::Twitter => "Twitter",
        }
    }

    pub fn is_oauth(&self) -> bool {
        !matches!(self, Self::Password)
    }
}

impl FromStr for ProviderKind {
    type Err = CoreError;

    /// Accepts both the short name and the client-facing provider id.
    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "password" | "email" => Ok(Self::Password),
            "google" | "google.com" => Ok(Self::Google),
            "github" | "github.com" => Ok(Self::Github),
            "twitter" | "twitter.com" => Ok(Self::Twitter),
            _ => Err(CoreError::UnknownProvider {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
