use crate::{ProviderError, Result as ProviderErrorResult};

use fed_core::{ProviderKind, VerifiedProfile};

use std::panic::Location;

use error_location::ErrorLocation;

/// Profile as reported by a provider, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderProfile {
    pub provider_user_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub email_verified: bool,
}

impl ProviderProfile {
    /// Normalize into a [`VerifiedProfile`]; an account without an email
    /// cannot be federated.
    #[track_caller]
    pub fn into_verified(self, kind: ProviderKind) -> ProviderErrorResult<VerifiedProfile> {
        let email = self
            .email
            .filter(|e| !e.trim().is_empty())
            .ok_or_else(|| ProviderError::MissingEmail {
                provider: kind,
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(
            VerifiedProfile::new(kind, self.provider_user_id, &email, self.email_verified)?
                .with_display_name(self.display_name)
                .with_avatar_url(self.avatar_url),
        )
    }
}
