use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

/// OAuth client registration. Both fields set enables the provider; both
/// empty disables it.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct OAuthClientConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    /// Override for the provider's endpoints (staging, tests)
    pub base_url: Option<String>,
}

impl OAuthClientConfig {
    pub fn is_configured(&self) -> bool {
        is_set(&self.client_id) && is_set(&self.client_secret)
    }

    fn validate(&self, name: &str) -> ConfigErrorResult<()> {
        if is_set(&self.client_id) != is_set(&self.client_secret) {
            return Err(ConfigError::invalid("providers", format!(
                "providers.{name} needs both client_id and client_secret, or neither"
            )));
        }
        Ok(())
    }
}

impl std::fmt::Debug for OAuthClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthClientConfig")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &self.client_secret.as_ref().map(|_| "[REDACTED]"),
            )
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Backing password service (Identity Toolkit REST protocol)
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct PasswordBackendConfig {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

impl PasswordBackendConfig {
    pub fn is_configured(&self) -> bool {
        is_set(&self.api_key)
    }
}

impl std::fmt::Debug for PasswordBackendConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PasswordBackendConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    pub google: OAuthClientConfig,
    pub github: OAuthClientConfig,
    pub twitter: OAuthClientConfig,
    pub password: PasswordBackendConfig,
}

impl ProvidersConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.google.validate("google")?;
        self.github.validate("github")?;
        self.twitter.validate("twitter")?;

        if !self.password.is_configured() && is_set(&self.password.base_url) {
            return Err(ConfigError::invalid(
                "providers",
                "providers.password.base_url is set but api_key is missing",
            ));
        }

        Ok(())
    }

    /// Names of enabled providers, for the startup summary
    pub fn enabled(&self) -> Vec<&'static str> {
        [
            ("password", self.password.is_configured()),
            ("google", self.google.is_configured()),
            ("github", self.github.is_configured()),
            ("twitter", self.twitter.is_configured()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}
