use crate::{ApiError, ApiResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::Deserialize;

/// Body of `POST /api/login` and `POST /api/signup`
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,

    /// Sent over TLS and checked by the backing auth service only
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    /// Reports the first missing field
    #[track_caller]
    pub fn validate(&self) -> ApiResult<()> {
        let missing = if self.email.trim().is_empty() {
            Some("email")
        } else if self.password.is_empty() {
            Some("password")
        } else {
            None
        };

        match missing {
            Some(field) => Err(ApiError::Validation {
                message: format!("{field} is required"),
                field: Some(field.to_string()),
                location: ErrorLocation::from(Location::caller()),
            }),
            None => Ok(()),
        }
    }
}
