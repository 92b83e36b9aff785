//! Persisted JSON shape of an identity.
//!
//! Field names and entry layouts are kept compatible with documents written
//! by earlier deployments: password bindings live under `email` with the
//! address first, OAuth bindings list the provider uid first.

use crate::{Identity, ProviderBinding, ProviderBindings, ProviderKind};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    pub email_address: String,
    #[serde(rename = "userUID")]
    pub user_uid: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderEntry {
    #[serde(rename = "userUID")]
    pub user_uid: String,
    pub email_address: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityDocument {
    #[serde(default)]
    pub user_name: String,
    #[serde(default)]
    pub user_color: String,
    pub uid: String,
    #[serde(default)]
    pub email: Vec<EmailEntry>,
    #[serde(default)]
    pub google: Vec<ProviderEntry>,
    #[serde(default)]
    pub github: Vec<ProviderEntry>,
    #[serde(default)]
    pub twitter: Vec<ProviderEntry>,
}

impl IdentityDocument {
    /// Rebuilds the in-memory identity. A blank stored colour falls back to
    /// `default_color`.
    pub fn into_identity(self, version: i64, default_color: &str) -> Identity {
        let oauth = |entries: Vec<ProviderEntry>| -> Vec<ProviderBinding> {
            entries
                .into_iter()
                .map(|e| ProviderBinding::new(e.user_uid, e.email_address))
                .collect()
        };

        let user_color = if self.user_color.trim().is_empty() {
            default_color.to_string()
        } else {
            self.user_color
        };

        Identity {
            uid: self.uid,
            user_name: self.user_name,
            user_color,
            bindings: ProviderBindings {
                password: self
                    .email
                    .into_iter()
                    .map(|e| ProviderBinding::new(e.user_uid, e.email_address))
                    .collect(),
                google: oauth(self.google),
                github: oauth(self.github),
                twitter: oauth(self.twitter),
            },
            version,
        }
    }
}

impl From<&Identity> for IdentityDocument {
    fn from(identity: &Identity) -> Self {
        let oauth = |kind: ProviderKind| -> Vec<ProviderEntry> {
            identity
                .bindings
                .get(kind)
                .iter()
                .map(|b| ProviderEntry {
                    user_uid: b.provider_uid.clone(),
                    email_address: b.email.clone(),
                })
                .collect()
        };

        Self {
            user_name: identity.user_name.clone(),
            user_color: identity.user_color.clone(),
            uid: identity.uid.clone(),
            email: identity
                .bindings
                .password
                .iter()
                .map(|b| EmailEntry {
                    email_address: b.email.clone(),
                    user_uid: b.provider_uid.clone(),
                })
                .collect(),
            google: oauth(ProviderKind::Google),
            github: oauth(ProviderKind::Github),
            twitter: oauth(ProviderKind::Twitter),
        }
    }
}
