use serde::{Deserialize, Serialize};

/// One sign-in method attached to an identity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProviderBinding {
    /// Stable account id issued by the provider (or the password backend)
    pub provider_uid: String,
    /// Normalized email the provider reported for the account
    pub email: String,
}

impl ProviderBinding {
    pub fn new(provider_uid: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            provider_uid: provider_uid.into(),
            email: email.into(),
        }
    }
}
