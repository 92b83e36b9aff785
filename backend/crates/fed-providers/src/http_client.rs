use crate::{ProviderError, Result as ProviderErrorResult};

use fed_core::ProviderKind;

use std::time::Duration;

use reqwest::Client;

/// Request timeout for every provider call
pub const PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

pub fn user_agent() -> String {
    format!("fed-server/{}", env!("CARGO_PKG_VERSION"))
}

/// Shared reqwest client with the service User-Agent and a request timeout.
/// GitHub rejects API calls without a User-Agent.
pub fn build_client(provider: ProviderKind) -> ProviderErrorResult<Client> {
    Client::builder()
        .user_agent(user_agent())
        .timeout(PROVIDER_TIMEOUT)
        .build()
        .map_err(|e| ProviderError::http(provider, e))
}

/// Drain a non-success response into a loggable message.
pub async fn error_body(response: reqwest::Response) -> String {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let body: String = body.chars().take(512).collect();
    format!("HTTP {status}: {body}")
}
