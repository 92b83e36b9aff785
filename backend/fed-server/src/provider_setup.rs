//! Builds the provider registry from the `[providers]` config section.
//! A provider without credentials is simply left out, so its routes
//! answer 501.

use crate::error::Result as ServerErrorResult;

use fed_config::{OAuthClientConfig, ProvidersConfig};
use fed_providers::{
    GitHubOAuthClient, GoogleOAuthClient, IdentityToolkitClient, OAuthCredentials,
    ProviderRegistry, TwitterOAuthClient,
};

use std::sync::Arc;

use log::info;

pub fn build_registry(config: &ProvidersConfig) -> ServerErrorResult<ProviderRegistry> {
    let mut registry = ProviderRegistry::new();

    if let Some(credentials) = credentials(&config.google) {
        let mut client = GoogleOAuthClient::new(credentials)?;
        if let Some(base_url) = &config.google.base_url {
            client = client.with_base_url(base_url);
        }
        registry = registry.with_oauth(Arc::new(client));
    }

    if let Some(credentials) = credentials(&config.github) {
        let mut client = GitHubOAuthClient::new(credentials)?;
        if let Some(base_url) = &config.github.base_url {
            client = client.with_base_url(base_url);
        }
        registry = registry.with_oauth(Arc::new(client));
    }

    if let Some(credentials) = credentials(&config.twitter) {
        let mut client = TwitterOAuthClient::new(credentials)?;
        if let Some(base_url) = &config.twitter.base_url {
            client = client.with_base_url(base_url);
        }
        registry = registry.with_oauth(Arc::new(client));
    }

    if let Some(api_key) = config
        .password
        .api_key
        .as_deref()
        .filter(|_| config.password.is_configured())
    {
        let mut client = IdentityToolkitClient::new(api_key.trim())?;
        if let Some(base_url) = &config.password.base_url {
            client = client.with_base_url(base_url);
        }
        registry = registry.with_password(Arc::new(client));
    }

    info!(
        "Sign-in providers enabled: {:?}",
        registry.configured_kinds()
    );

    Ok(registry)
}

fn credentials(config: &OAuthClientConfig) -> Option<OAuthCredentials> {
    if !config.is_configured() {
        return None;
    }

    match (&config.client_id, &config.client_secret) {
        (Some(id), Some(secret)) => Some(OAuthCredentials::new(id.trim(), secret.trim())),
        _ => None,
    }
}
