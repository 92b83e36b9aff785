//! Google OAuth 2.0 client.
//!
//! Code exchange against the token endpoint, then the v2 userinfo endpoint
//! for the account id and email. Google reports whether it has verified the
//! email, and that flag is passed through unchanged.

use crate::http_client::{build_client, error_body};
use crate::{
    OAuthCredentials, OAuthProvider, ProviderAccessToken, ProviderError, ProviderProfile,
    Result as ProviderErrorResult,
};

use fed_core::ProviderKind;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://www.googleapis.com/oauth2/v2/userinfo";

#[derive(Debug, Deserialize)]
struct GoogleTokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
pub struct GoogleUserInfo {
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub verified_email: bool,
    pub name: Option<String>,
    pub picture: Option<String>,
}

impl From<GoogleUserInfo> for ProviderProfile {
    fn from(info: GoogleUserInfo) -> Self {
        Self {
            provider_user_id: info.id,
            email: info.email,
            display_name: info.name,
            avatar_url: info.picture,
            email_verified: info.verified_email,
        }
    }
}

pub struct GoogleOAuthClient {
    credentials: OAuthCredentials,
    token_url: String,
    userinfo_url: String,
    http_client: reqwest::Client,
}

impl GoogleOAuthClient {
    pub fn new(credentials: OAuthCredentials) -> ProviderErrorResult<Self> {
        Ok(Self {
            credentials,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
            http_client: build_client(ProviderKind::Google)?,
        })
    }

    /// Point both endpoints at `base_url` (`/token`, `/userinfo`)
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.token_url = format!("{base_url}/token");
        self.userinfo_url = format!("{base_url}/userinfo");
        self
    }
}

#[async_trait]
impl OAuthProvider for GoogleOAuthClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Google
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        _code_verifier: Option<&str>,
    ) -> ProviderErrorResult<ProviderAccessToken> {
        debug!("Exchanging Google authorization code");

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("code", code),
                ("grant_type", "authorization_code"),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Google, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::code_exchange(
                ProviderKind::Google,
                error_body(response).await,
            ));
        }

        let token: GoogleTokenResponse = response.json().await.map_err(|e| {
            ProviderError::parse(ProviderKind::Google, format!("token response: {e}"))
        })?;

        Ok(ProviderAccessToken::new(token.access_token))
    }

    async fn fetch_profile(
        &self,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<ProviderProfile> {
        debug!("Fetching Google user info");

        let response = self
            .http_client
            .get(&self.userinfo_url)
            .bearer_auth(token.expose())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Google, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::profile_fetch(
                ProviderKind::Google,
                error_body(response).await,
            ));
        }

        let info: GoogleUserInfo = response.json().await.map_err(|e| {
            ProviderError::parse(ProviderKind::Google, format!("userinfo response: {e}"))
        })?;

        Ok(info.into())
    }
}
