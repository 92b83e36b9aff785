use crate::SessionClaims;

/// Caller identity established by a valid session token.
///
/// Handlers receive this as an ordinary parameter; nothing about the caller
/// is looked up from ambient request state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedPrincipal {
    pub uid: String,
    pub email: String,
    pub expires_at: i64,
}

impl AuthenticatedPrincipal {
    pub fn from_claims(claims: SessionClaims) -> Self {
        Self {
            uid: claims.uid,
            email: claims.email,
            expires_at: claims.exp,
        }
    }
}
