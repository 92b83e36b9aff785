use crate::{ApiError, ApiResult};

use fed_core::ProviderKind;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /api/link-account`
#[derive(Deserialize)]
pub struct LinkAccountRequest {
    /// `password`, `google`, `github`, `twitter` (or the `*.com` ids)
    #[serde(default)]
    pub provider: String,

    /// Password for `password`, authorization code otherwise
    #[serde(default)]
    pub credential: String,

    #[serde(default)]
    pub redirect_uri: Option<String>,

    #[serde(default)]
    pub code_verifier: Option<String>,
}

impl LinkAccountRequest {
    /// Validates the body and returns the provider it names
    #[track_caller]
    pub fn validate(&self) -> ApiResult<ProviderKind> {
        let kind = parse_provider(&self.provider)?;

        if self.credential.is_empty() {
            return Err(ApiError::Validation {
                message: "credential is required".to_string(),
                field: Some("credential".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if kind.is_oauth() && self.redirect_uri.as_deref().is_none_or(|u| u.trim().is_empty()) {
            return Err(ApiError::Validation {
                message: "redirect_uri is required for OAuth providers".to_string(),
                field: Some("redirect_uri".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(kind)
    }
}

/// Parses a provider name from a request body, naming the field on failure
#[track_caller]
pub fn parse_provider(provider: &str) -> ApiResult<ProviderKind> {
    if provider.trim().is_empty() {
        return Err(ApiError::Validation {
            message: "provider is required".to_string(),
            field: Some("provider".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    Ok(provider.parse()?)
}
