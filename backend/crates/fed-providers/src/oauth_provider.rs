use crate::{ProviderAccessToken, ProviderProfile, Result as ProviderErrorResult};

use fed_core::ProviderKind;

use async_trait::async_trait;

/// OAuth 2.0 authorization-code provider.
#[async_trait]
pub trait OAuthProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    /// Exchange an authorization code for an access token.
    /// `code_verifier` is the PKCE verifier when the flow used one.
    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        code_verifier: Option<&str>,
    ) -> ProviderErrorResult<ProviderAccessToken>;

    async fn fetch_profile(
        &self,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<ProviderProfile>;
}
