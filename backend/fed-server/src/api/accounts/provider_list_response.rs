use fed_core::ProviderKind;

use serde::Serialize;

/// Linked providers as client-facing ids (`password`, `google.com`, ...)
#[derive(Debug, Serialize)]
pub struct ProviderListResponse {
    pub providers: Vec<String>,
}

impl From<Vec<ProviderKind>> for ProviderListResponse {
    fn from(kinds: Vec<ProviderKind>) -> Self {
        Self {
            providers: kinds
                .into_iter()
                .map(|kind| kind.provider_id().to_string())
                .collect(),
        }
    }
}
