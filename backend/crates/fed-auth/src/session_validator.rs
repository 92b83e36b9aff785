use crate::{AuthError, AuthenticatedPrincipal, Result as AuthErrorResult, SessionClaims};

use std::panic::Location;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use error_location::ErrorLocation;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

const BEARER_PREFIX: &str = "Bearer ";

/// Verifies session tokens minted by [`crate::SessionIssuer`] with the same
/// secret. Pure computation: no I/O, no caching.
pub struct SessionValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl SessionValidator {
    /// `leeway_secs` is the tolerated clock skew when checking `exp`.
    #[track_caller]
    pub fn new(secret: &[u8], leeway_secs: u64) -> AuthErrorResult<Self> {
        if secret.is_empty() {
            return Err(AuthError::MissingSecret {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = leeway_secs;
        validation.set_required_spec_claims(&["exp"]);

        Ok(Self {
            decoding_key: DecodingKey::from_secret(secret),
            validation,
        })
    }

    /// Validate a compact token and return the principal it names
    #[track_caller]
    pub fn validate(&self, token: &str) -> AuthErrorResult<AuthenticatedPrincipal> {
        let caller = Location::caller();
        check_structure(token, caller)?;

        let token_data =
            decode::<SessionClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::Expired {
                        location: ErrorLocation::from(caller),
                    },
                    // Header and payload decoded above, so a base64 failure
                    // here can only be the signature segment.
                    ErrorKind::InvalidSignature
                    | ErrorKind::InvalidAlgorithm
                    | ErrorKind::Base64(_) => AuthError::BadSignature {
                        location: ErrorLocation::from(caller),
                    },
                    _ => AuthError::MalformedToken {
                        message: e.to_string(),
                        location: ErrorLocation::from(caller),
                    },
                }
            })?;

        token_data.claims.validate()?;

        Ok(AuthenticatedPrincipal::from_claims(token_data.claims))
    }

    /// Validate the value of an `Authorization` header
    #[track_caller]
    pub fn validate_bearer(&self, header: Option<&str>) -> AuthErrorResult<AuthenticatedPrincipal> {
        let header = header.ok_or_else(|| AuthError::MissingHeader {
            location: ErrorLocation::from(Location::caller()),
        })?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::InvalidScheme {
                location: ErrorLocation::from(Location::caller()),
            })?;

        self.validate(token)
    }
}

/// Three dot-separated segments with base64url header and payload.
fn check_structure(token: &str, caller: &'static Location<'static>) -> AuthErrorResult<()> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(AuthError::MalformedToken {
            message: format!("expected 3 segments, found {}", segments.len()),
            location: ErrorLocation::from(caller),
        });
    }

    for (name, segment) in [("header", segments[0]), ("payload", segments[1])] {
        URL_SAFE_NO_PAD
            .decode(segment)
            .map_err(|e| AuthError::MalformedToken {
                message: format!("{name} is not base64url: {e}"),
                location: ErrorLocation::from(caller),
            })?;
    }

    Ok(())
}
