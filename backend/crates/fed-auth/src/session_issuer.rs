use crate::{AuthError, Result as AuthErrorResult, SessionClaims};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};

/// Session lifetime when none is configured (24 hours)
pub const DEFAULT_SESSION_TTL_SECS: i64 = 24 * 60 * 60;

/// Mints HS256 session tokens. Holds only key material; no store access.
pub struct SessionIssuer {
    encoding_key: EncodingKey,
    ttl_secs: i64,
}

impl SessionIssuer {
    /// Fails when `secret` is empty so an unsigned or trivially forgeable
    /// token can never be produced.
    #[track_caller]
    pub fn new(secret: &[u8], ttl_secs: i64) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret),
            ttl_secs,
        })
    }

    pub fn ttl_secs(&self) -> i64 {
        self.ttl_secs
    }

    /// Builds `{uid, email, iat=now, exp=now+ttl}` and signs it.
    #[track_caller]
    pub fn mint(&self, uid: &str, email: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        self.sign(&SessionClaims {
            uid: uid.to_string(),
            email: email.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        })
    }

    /// Signs caller-supplied claims as-is
    #[track_caller]
    pub fn sign(&self, claims: &SessionClaims) -> AuthErrorResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|source| {
            AuthError::Signing {
                source,
                location: ErrorLocation::from(Location::caller()),
            }
        })
    }
}
