//! Password backend speaking the Identity Toolkit REST protocol
//! (`accounts:signInWithPassword`, `accounts:signUp`).
//!
//! Upstream failures arrive as `{"error":{"message":"CODE : detail"}}`; the
//! code is mapped onto [`ProviderError`] variants and the raw text only ever
//! reaches the log.

use crate::http_client::build_client;
use crate::{PasswordAccount, PasswordVerifier, ProviderError, Result as ProviderErrorResult};

use fed_core::ProviderKind;

use std::panic::Location;

use async_trait::async_trait;
use error_location::ErrorLocation;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CredentialRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AccountResponse {
    local_id: String,
    email: String,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

pub struct IdentityToolkitClient {
    api_key: String,
    base_url: String,
    http_client: reqwest::Client,
}

impl IdentityToolkitClient {
    pub fn new(api_key: impl Into<String>) -> ProviderErrorResult<Self> {
        Ok(Self {
            api_key: api_key.into(),
            base_url: IDENTITY_TOOLKIT_URL.to_string(),
            http_client: build_client(ProviderKind::Password)?,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    async fn call(
        &self,
        operation: &str,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount> {
        let response = self
            .http_client
            .post(format!("{}/accounts:{}", self.base_url, operation))
            .query(&[("key", self.api_key.as_str())])
            .json(&CredentialRequest {
                email,
                password,
                return_secure_token: true,
            })
            .send()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Password, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ProviderError::http(ProviderKind::Password, e))?;

        if !status.is_success() {
            let code = serde_json::from_str::<ErrorEnvelope>(&body)
                .map(|e| e.error.message)
                .unwrap_or_else(|_| format!("HTTP {status}"));
            warn!("Password backend {} failed: {}", operation, code);
            return Err(map_error_code(&code));
        }

        let account: AccountResponse = serde_json::from_str(&body).map_err(|e| {
            ProviderError::parse(ProviderKind::Password, format!("{operation} response: {e}"))
        })?;

        Ok(PasswordAccount {
            uid: account.local_id,
            email: account.email,
        })
    }
}

/// Map an upstream error code (`"CODE"` or `"CODE : detail"`) onto our taxonomy.
#[track_caller]
pub fn map_error_code(message: &str) -> ProviderError {
    let location = ErrorLocation::from(Location::caller());
    let code = message.split(':').next().unwrap_or_default().trim();

    match code {
        "TOO_MANY_ATTEMPTS_TRY_LATER" => ProviderError::TooManyAttempts { location },
        "USER_DISABLED" => ProviderError::AccountDisabled { location },
        "EMAIL_EXISTS" => ProviderError::EmailExists { location },
        "WEAK_PASSWORD" => ProviderError::WeakPassword {
            message: message.to_string(),
            location,
        },
        _ => ProviderError::InvalidCredentials { location },
    }
}

#[async_trait]
impl PasswordVerifier for IdentityToolkitClient {
    async fn verify_password(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount> {
        debug!("Verifying password for {}", email);
        self.call("signInWithPassword", email, password).await
    }

    async fn create_account(
        &self,
        email: &str,
        password: &str,
    ) -> ProviderErrorResult<PasswordAccount> {
        debug!("Creating password account for {}", email);
        self.call("signUp", email, password).await
    }
}
