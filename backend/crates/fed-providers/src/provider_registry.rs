use crate::{OAuthProvider, PasswordVerifier, ProviderError, Result as ProviderErrorResult};

use fed_core::ProviderKind;

use std::collections::HashMap;
use std::sync::Arc;

/// Configured adapters, built once at startup and handed to the workflows.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    oauth: HashMap<ProviderKind, Arc<dyn OAuthProvider>>,
    password: Option<Arc<dyn PasswordVerifier>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an OAuth adapter under its own kind
    pub fn with_oauth(mut self, provider: Arc<dyn OAuthProvider>) -> Self {
        self.oauth.insert(provider.kind(), provider);
        self
    }

    pub fn with_password(mut self, verifier: Arc<dyn PasswordVerifier>) -> Self {
        self.password = Some(verifier);
        self
    }

    #[track_caller]
    pub fn oauth(&self, kind: ProviderKind) -> ProviderErrorResult<Arc<dyn OAuthProvider>> {
        self.oauth
            .get(&kind)
            .cloned()
            .ok_or_else(|| ProviderError::not_configured(kind))
    }

    #[track_caller]
    pub fn password(&self) -> ProviderErrorResult<Arc<dyn PasswordVerifier>> {
        self.password
            .clone()
            .ok_or_else(|| ProviderError::not_configured(ProviderKind::Password))
    }

    /// Kinds that have an adapter, in precedence order
    pub fn configured_kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| match kind {
                ProviderKind::Password => self.password.is_some(),
                other => self.oauth.contains_key(other),
            })
            .collect()
    }
}
