//! Axum extractors for session authentication

use crate::{ApiError, AppState};

use fed_auth::AuthenticatedPrincipal;

use std::convert::Infallible;
use std::future::Future;

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

/// Caller established from the `Authorization: Bearer <session token>`
/// header. Handlers that take this reject unauthenticated requests with 401.
pub struct Principal(pub AuthenticatedPrincipal);

fn authorization_header(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
}

impl FromRequestParts<AppState> for Principal {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let principal = state
                .validator
                .validate_bearer(authorization_header(parts))
                .map_err(|e| {
                    log::debug!("Session rejected: {}", e.error_code());
                    ApiError::from(e)
                })?;

            Ok(Principal(principal))
        }
    }
}

/// `Option<Principal>`: a missing or unusable token yields `None`, so
/// endpoints that only sometimes need a caller can decide for themselves.
impl OptionalFromRequestParts<AppState> for Principal {
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Option<Self>, Self::Rejection>> + Send {
        async move {
            let Some(header) = authorization_header(parts) else {
                return Ok(None);
            };

            match state.validator.validate_bearer(Some(header)) {
                Ok(principal) => Ok(Some(Principal(principal))),
                Err(e) => {
                    log::debug!("Ignoring unusable session token: {}", e.error_code());
                    Ok(None)
                }
            }
        }
    }
}
