//! Credential Provider Adapters.
//!
//! Two seams: [`OAuthProvider`] (authorization code to verified profile) and
//! [`PasswordVerifier`] (email + password checked by the backing auth
//! service). Concrete HTTP clients for Google, GitHub, Twitter and an
//! Identity Toolkit compatible password backend live alongside them.

pub mod access_token;
pub mod error;
pub mod github_oauth_client;
pub mod google_oauth_client;
pub mod http_client;
pub mod identity_toolkit_client;
pub mod oauth_credentials;
pub mod oauth_provider;
pub mod password_verifier;
pub mod provider_profile;
pub mod provider_registry;
pub mod twitter_oauth_client;

pub use access_token::ProviderAccessToken;
pub use error::{ProviderError, Result};
pub use github_oauth_client::{GitHubEmail, GitHubOAuthClient};
pub use google_oauth_client::GoogleOAuthClient;
pub use identity_toolkit_client::IdentityToolkitClient;
pub use oauth_credentials::OAuthCredentials;
pub use oauth_provider::OAuthProvider;
pub use password_verifier::{PasswordAccount, PasswordVerifier};
pub use provider_profile::ProviderProfile;
pub use provider_registry::ProviderRegistry;
pub use twitter_oauth_client::TwitterOAuthClient;
