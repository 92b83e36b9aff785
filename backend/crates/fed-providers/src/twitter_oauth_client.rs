//! Twitter (X) OAuth 2.0 client with PKCE.
//!
//! The token endpoint takes HTTP Basic client authentication plus the
//! caller's `code_verifier`. Profile and email come from `/2/users/me`; the
//! email lookup is a separate, best-effort request because it needs an
//! elevated scope. Twitter gives no verification guarantee for the address,
//! so profiles are always reported with an unverified email.

use crate::http_client::{build_client, error_body};
use crate::{
    OAuthCredentials, OAuthProvider, ProviderAccessToken, ProviderError, ProviderProfile,
    Result as ProviderErrorResult,
};

use fed_core::ProviderKind;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use serde::Deserialize;

const TWITTER_API_URL: &str = "https://api.twitter.com";
const PROFILE_FIELDS: &str = "id,username,name,profile_image_url";
const EMAIL_FIELDS: &str = "id,username,email";

#[derive(Debug, Deserialize)]
struct TwitterTokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct TwitterEnvelope<T> {
    data: T,
}

#[derive(Debug, Deserialize)]
pub struct TwitterUser {
    pub id: String,
    pub username: String,
    pub name: Option<String>,
    pub profile_image_url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TwitterEmail {
    email: Option<String>,
}

pub struct TwitterOAuthClient {
    credentials: OAuthCredentials,
    api_url: String,
    http_client: reqwest::Client,
}

impl TwitterOAuthClient {
    pub fn new(credentials: OAuthCredentials) -> ProviderErrorResult<Self> {
        Ok(Self {
            credentials,
            api_url: TWITTER_API_URL.to_string(),
            http_client: build_client(ProviderKind::Twitter)?,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_url = base_url.trim_end_matches('/').to_string();
        self
    }

    fn users_me(&self, fields: &str, token: &ProviderAccessToken) -> reqwest::RequestBuilder {
        self.http_client
            .get(format!("{}/2/users/me", self.api_url))
            .query(&[("user.fields", fields)])
            .header("Accept", "application/json")
            .bearer_auth(token.expose())
    }

    async fn fetch_email(&self, token: &ProviderAccessToken) -> Option<String> {
        let response = match self.users_me(EMAIL_FIELDS, token).send().await {
            Ok(response) if response.status().is_success() => response,
            Ok(response) => {
                warn!(
                    "Twitter email lookup refused: {}",
                    error_body(response).await
                );
                return None;
            }
            Err(e) => {
                warn!("Twitter email lookup failed: {}", e);
                return None;
            }
        };

        match response.json::<TwitterEnvelope<TwitterEmail>>().await {
            Ok(envelope) => envelope.data.email,
            Err(e) => {
                warn!("Twitter email lookup returned unexpected body: {}", e);
                None
            }
        }
    }
}

#[async_trait]
impl OAuthProvider for TwitterOAuthClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Twitter
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        code_verifier: Option<&str>,
    ) -> ProviderErrorResult<ProviderAccessToken> {
        let code_verifier = code_verifier
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingCodeVerifier {
                provider: ProviderKind::Twitter,
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Exchanging Twitter authorization code");

        let response = self
            .http_client
            .post(format!("{}/2/oauth2/token", self.api_url))
            .basic_auth(
                &self.credentials.client_id,
                Some(&self.credentials.client_secret),
            )
            .header("Accept", "application/json")
            .form(&[
                ("grant_type", "authorization_code"),
                ("code", code),
                ("redirect_uri", redirect_uri),
                ("client_id", self.credentials.client_id.as_str()),
                ("code_verifier", code_verifier),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Twitter, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::code_exchange(
                ProviderKind::Twitter,
                error_body(response).await,
            ));
        }

        let token: TwitterTokenResponse = response.json().await.map_err(|e| {
            ProviderError::parse(ProviderKind::Twitter, format!("token response: {e}"))
        })?;

        Ok(ProviderAccessToken::new(token.access_token))
    }

    async fn fetch_profile(
        &self,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<ProviderProfile> {
        debug!("Fetching Twitter user");

        let response = self
            .users_me(PROFILE_FIELDS, token)
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Twitter, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::profile_fetch(
                ProviderKind::Twitter,
                error_body(response).await,
            ));
        }

        let user = response
            .json::<TwitterEnvelope<TwitterUser>>()
            .await
            .map_err(|e| ProviderError::parse(ProviderKind::Twitter, format!("users/me: {e}")))?
            .data;

        let email = self.fetch_email(token).await;

        Ok(ProviderProfile {
            provider_user_id: user.id,
            email,
            display_name: user.name.or(Some(user.username)),
            avatar_url: user.profile_image_url,
            email_verified: false,
        })
    }
}
