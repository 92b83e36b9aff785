use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Session token claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Identity uid
    pub uid: String,
    pub email: String,
    /// Issued at timestamp (Unix)
    pub iat: i64,
    /// Expiration timestamp (Unix)
    pub exp: i64,
}

impl SessionClaims {
    /// Validate claims after signature verification
    #[track_caller]
    pub fn validate(&self) -> AuthErrorResult<()> {
        if self.uid.trim().is_empty() {
            return Err(AuthError::MalformedToken {
                message: "uid cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.email.trim().is_empty() {
            return Err(AuthError::MalformedToken {
                message: "email cannot be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.iat > self.exp {
            return Err(AuthError::MalformedToken {
                message: "issued after expiry".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(())
    }
}
