//! Identity resolution, account linking and the login / signup / link
//! workflows that tie providers, the identity store and sessions together.

pub mod account_linker;
pub mod error;
pub mod federation_service;
pub mod identity_resolver;
pub mod oauth_callback;
pub mod password_policy;
pub mod provider_detail;
pub mod session_grant;

pub use account_linker::{AccountLinker, DEFAULT_MAX_WRITE_ATTEMPTS};
pub use error::{IdentityError, Result};
pub use federation_service::FederationService;
pub use identity_resolver::{IdentityResolver, Resolution, ResolvedBy};
pub use oauth_callback::OAuthCallback;
pub use password_policy::check_password_strength;
pub use provider_detail::{ProviderDetail, UserProfileView};
pub use session_grant::SessionGrant;

#[cfg(test)]
mod tests;
