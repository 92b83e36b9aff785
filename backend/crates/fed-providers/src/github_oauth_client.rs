//! GitHub OAuth client.
//!
//! GitHub answers a bad code with HTTP 200 and an `error` body, so the token
//! response is checked for that shape before parsing the token. The email
//! comes from `/user/emails` (primary and verified first, then primary,
//! then the first listed) because `/user` only exposes a public address.

use crate::http_client::{build_client, error_body};
use crate::{
    OAuthCredentials, OAuthProvider, ProviderAccessToken, ProviderError, ProviderProfile,
    Result as ProviderErrorResult,
};

use fed_core::ProviderKind;

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;

const GITHUB_TOKEN_URL: &str = "https://github.com/login/oauth/access_token";
const GITHUB_API_URL: &str = "https://api.github.com";
const GITHUB_API_VERSION: &str = "2022-11-28";

#[derive(Debug, Deserialize)]
struct GitHubTokenResponse {
    access_token: Option<String>,
    error: Option<String>,
    error_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GitHubUser {
    pub id: i64,
    pub login: String,
    pub name: Option<String>,
    pub email: Option<String>,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GitHubEmail {
    pub email: String,
    #[serde(default)]
    pub primary: bool,
    #[serde(default)]
    pub verified: bool,
}

impl GitHubEmail {
    /// Primary+verified, then primary, then whatever is listed first
    pub fn choose(emails: &[GitHubEmail]) -> Option<&GitHubEmail> {
        emails
            .iter()
            .find(|e| e.primary && e.verified)
            .or_else(|| emails.iter().find(|e| e.primary))
            .or_else(|| emails.first())
    }
}

pub struct GitHubOAuthClient {
    credentials: OAuthCredentials,
    token_url: String,
    api_url: String,
    http_client: reqwest::Client,
}

impl GitHubOAuthClient {
    pub fn new(credentials: OAuthCredentials) -> ProviderErrorResult<Self> {
        Ok(Self {
            credentials,
            token_url: GITHUB_TOKEN_URL.to_string(),
            api_url: GITHUB_API_URL.to_string(),
            http_client: build_client(ProviderKind::Github)?,
        })
    }

    /// Serve the token endpoint at `{base_url}/login/oauth/access_token` and
    /// the REST API at `base_url`
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        let base_url = base_url.trim_end_matches('/');
        self.token_url = format!("{base_url}/login/oauth/access_token");
        self.api_url = base_url.to_string();
        self
    }

    async fn api_get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<T> {
        let response = self
            .http_client
            .get(format!("{}{}", self.api_url, path))
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(token.expose())
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Github, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::profile_fetch(
                ProviderKind::Github,
                format!("{path}: {}", error_body(response).await),
            ));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::parse(ProviderKind::Github, format!("{path}: {e}")))
    }
}

#[async_trait]
impl OAuthProvider for GitHubOAuthClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Github
    }

    async fn exchange_code(
        &self,
        code: &str,
        redirect_uri: &str,
        _code_verifier: Option<&str>,
    ) -> ProviderErrorResult<ProviderAccessToken> {
        debug!("Exchanging GitHub authorization code");

        let response = self
            .http_client
            .post(&self.token_url)
            .header("Accept", "application/json")
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", redirect_uri),
            ])
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Github, e))?;

        if !response.status().is_success() {
            return Err(ProviderError::code_exchange(
                ProviderKind::Github,
                error_body(response).await,
            ));
        }

        let token: GitHubTokenResponse = response.json().await.map_err(|e| {
            ProviderError::parse(ProviderKind::Github, format!("token response: {e}"))
        })?;

        if let Some(error) = token.error {
            return Err(ProviderError::code_exchange(
                ProviderKind::Github,
                token.error_description.unwrap_or(error),
            ));
        }

        token
            .access_token
            .filter(|t| !t.is_empty())
            .map(ProviderAccessToken::new)
            .ok_or_else(|| {
                ProviderError::parse(ProviderKind::Github, "token response has no access_token")
            })
    }

    async fn fetch_profile(
        &self,
        token: &ProviderAccessToken,
    ) -> ProviderErrorResult<ProviderProfile> {
        debug!("Fetching GitHub user and emails");

        let user: GitHubUser = self.api_get("/user", token).await?;
        let emails: Vec<GitHubEmail> = self.api_get("/user/emails", token).await?;

        let (email, email_verified) = match GitHubEmail::choose(&emails) {
            Some(chosen) => (Some(chosen.email.clone()), chosen.verified),
            None => (user.email.clone(), false),
        };

        Ok(ProviderProfile {
            provider_user_id: user.id.to_string(),
            email,
            display_name: user.name.or(Some(user.login)),
            avatar_url: user.avatar_url,
            email_verified,
        })
    }
}
