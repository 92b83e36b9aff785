//! Identity Resolver: every way of finding the identity behind a request.

use crate::{IdentityError, Result as IdentityErrorResult};

use fed_core::{DEFAULT_USER_COLOR, Identity, ProviderKind, VerifiedProfile, normalize_email};
use fed_db::IdentityStore;

use std::sync::Arc;

use log::debug;

/// Which lookup produced a [`Resolution`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedBy {
    Uid,
    ProviderUid,
    Email,
    /// Nothing matched; the identity is new and unsaved
    Created,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub identity: Identity,
    pub resolved_by: ResolvedBy,
}

#[derive(Clone)]
pub struct IdentityResolver {
    store: Arc<dyn IdentityStore>,
    default_color: String,
}

impl IdentityResolver {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self {
            store,
            default_color: DEFAULT_USER_COLOR.to_string(),
        }
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn default_color(&self) -> &str {
        &self.default_color
    }

    pub async fn resolve_by_uid(&self, uid: &str) -> IdentityErrorResult<Identity> {
        self.store
            .find_by_uid(uid)
            .await?
            .ok_or_else(|| IdentityError::not_found(format!("identity {uid} not found")))
    }

    pub async fn resolve_by_provider_uid(
        &self,
        kind: ProviderKind,
        provider_uid: &str,
    ) -> IdentityErrorResult<Identity> {
        self.store
            .find_by_provider_uid(kind, provider_uid)
            .await?
            .ok_or_else(|| {
                IdentityError::not_found(format!("no identity for {kind} account {provider_uid}"))
            })
    }

    /// First identity holding `email`, probing kinds in precedence order
    pub async fn resolve_by_email(&self, email: &str) -> IdentityErrorResult<Identity> {
        self.find_by_email(email)
            .await?
            .ok_or_else(|| IdentityError::not_found(format!("no identity for {email}")))
    }

    /// Like [`Self::resolve_by_email`] but absence is not an error
    pub async fn find_by_email(&self, email: &str) -> IdentityErrorResult<Option<Identity>> {
        let email = normalize_email(email)?;

        for kind in ProviderKind::ALL {
            if let Some(identity) = self.store.find_by_email(kind, &email).await? {
                debug!("Email {} resolved to {} via {}", email, identity.uid, kind);
                return Ok(Some(identity));
            }
        }

        Ok(None)
    }

    /// Stored identity, or a fresh unsaved one carrying `uid`
    pub async fn resolve_or_default(&self, uid: &str) -> IdentityErrorResult<Identity> {
        Ok(self
            .store
            .find_by_uid(uid)
            .await?
            .unwrap_or_else(|| Identity::new(uid, self.default_color.as_str())))
    }

    /// Lookup chain for a sign-in: candidate uid, then provider uid, then
    /// email, then a new identity under the candidate uid.
    ///
    /// An email match only merges when the provider verified the address.
    /// An unverified address that already belongs to someone is a conflict:
    /// the caller has to sign in with the existing method and link instead.
    pub async fn resolve_for_profile(
        &self,
        profile: &VerifiedProfile,
    ) -> IdentityErrorResult<Resolution> {
        let candidate_uid = profile.candidate_uid();

        if let Some(identity) = self.store.find_by_uid(&candidate_uid).await? {
            return Ok(Resolution {
                identity,
                resolved_by: ResolvedBy::Uid,
            });
        }

        if let Some(identity) = self
            .store
            .find_by_provider_uid(profile.kind, &profile.provider_uid)
            .await?
        {
            return Ok(Resolution {
                identity,
                resolved_by: ResolvedBy::ProviderUid,
            });
        }

        if let Some(identity) = self.find_by_email(&profile.email).await? {
            if !profile.email_verified {
                log::warn!(
                    "Unverified {} email {} matches identity {}; refusing to merge",
                    profile.kind,
                    profile.email,
                    identity.uid
                );
                return Err(IdentityError::conflict(
                    "an account with this email already exists; sign in with it and link this provider",
                ));
            }

            return Ok(Resolution {
                identity,
                resolved_by: ResolvedBy::Email,
            });
        }

        Ok(Resolution {
            identity: Identity::new(candidate_uid, self.default_color.as_str()),
            resolved_by: ResolvedBy::Created,
        })
    }
}
