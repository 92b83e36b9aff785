//! Account facts a provider has vouched for.

use crate::{CoreError, ProviderKind, Result as CoreErrorResult, normalize_email};

use std::panic::Location;

use error_location::ErrorLocation;

/// Result of a successful credential exchange with a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedProfile {
    pub kind: ProviderKind,
    pub provider_uid: String,
    /// Lowercased, trimmed
    pub email: String,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    /// Whether the provider asserted ownership of `email`.
    /// Only verified emails may merge into an existing identity.
    pub email_verified: bool,
}

impl VerifiedProfile {
    #[track_caller]
    pub fn new(
        kind: ProviderKind,
        provider_uid: impl Into<String>,
        email: &str,
        email_verified: bool,
    ) -> CoreErrorResult<Self> {
        let provider_uid = provider_uid.into();
        if provider_uid.trim().is_empty() {
            return Err(CoreError::Validation {
                message: format!("{} account id is empty", kind.display_name()),
                field: None,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(Self {
            kind,
            provider_uid,
            email: normalize_email(email)?,
            display_name: None,
            avatar_url: None,
            email_verified,
        })
    }

    pub fn with_display_name(mut self, display_name: Option<String>) -> Self {
        self.display_name = display_name.filter(|n| !n.trim().is_empty());
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: Option<String>) -> Self {
        self.avatar_url = avatar_url.filter(|u| !u.trim().is_empty());
        self
    }

    /// UID a brand-new identity for this account would receive.
    ///
    /// Password accounts reuse the backend's id; OAuth accounts get
    /// `<kind>_<provider uid>` so ids from different providers never collide.
    pub fn candidate_uid(&self) -> String {
        match self.kind {
            ProviderKind::Password => self.provider_uid.clone(),
            kind => format!("{}_{}", kind.as_str(), self.provider_uid),
        }
    }
}
