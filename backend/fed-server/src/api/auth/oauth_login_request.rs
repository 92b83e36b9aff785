use crate::{ApiError, ApiResult};

use fed_identity::OAuthCallback;

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /api/auth/{provider}`
#[derive(Deserialize)]
pub struct OAuthLoginRequest {
    /// Authorization code from the provider redirect (required)
    #[serde(default)]
    pub code: String,

    /// Redirect URI used to obtain the code (required)
    #[serde(default)]
    pub redirect_uri: String,

    /// Link the provider to this existing identity instead of signing in
    #[serde(default, rename = "linkUID")]
    pub link_uid: Option<String>,

    /// PKCE verifier (Twitter)
    #[serde(default)]
    pub code_verifier: Option<String>,
}

impl OAuthLoginRequest {
    #[track_caller]
    pub fn into_callback(self) -> ApiResult<OAuthCallback> {
        if self.code.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "code is required".to_string(),
                field: Some("code".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }
        if self.redirect_uri.trim().is_empty() {
            return Err(ApiError::Validation {
                message: "redirect_uri is required".to_string(),
                field: Some("redirect_uri".to_string()),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(OAuthCallback::new(self.code, self.redirect_uri)
            .with_code_verifier(self.code_verifier)
            .with_link_uid(self.link_uid))
    }
}
