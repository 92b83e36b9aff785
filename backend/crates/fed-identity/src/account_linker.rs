//! Account Linker: every mutation of an identity goes through here.
//!
//! Mutations are read-modify-write against a versioned document. A write
//! that loses a race gets `VersionConflict` from the store; the linker then
//! re-reads and re-applies the same mutation, up to `max_write_attempts`.

use crate::{IdentityError, Result as IdentityErrorResult};

use fed_core::{
    DEFAULT_USER_COLOR, Identity, ProviderKind, VerifiedProfile, validate_color,
    validate_user_name,
};
use fed_db::{DbError, IdentityStore};

use std::sync::Arc;

use log::{debug, info, warn};

/// Attempts per mutation before a version conflict is surfaced
pub const DEFAULT_MAX_WRITE_ATTEMPTS: u32 = 3;

/// What to do when the identity being mutated does not exist
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WhenMissing {
    Fail,
    Create,
}

#[derive(Clone)]
pub struct AccountLinker {
    store: Arc<dyn IdentityStore>,
    default_color: String,
    max_write_attempts: u32,
}

impl AccountLinker {
    pub fn new(store: Arc<dyn IdentityStore>) -> Self {
        Self {
            store,
            default_color: DEFAULT_USER_COLOR.to_string(),
            max_write_attempts: DEFAULT_MAX_WRITE_ATTEMPTS,
        }
    }

    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    pub fn with_max_write_attempts(mut self, attempts: u32) -> Self {
        self.max_write_attempts = attempts.max(1);
        self
    }

    /// Pure, idempotent merge of one binding; nothing is persisted.
    pub fn add_binding(
        identity: &Identity,
        kind: ProviderKind,
        provider_uid: &str,
        email: &str,
    ) -> Identity {
        let mut merged = identity.clone();
        merged.add_binding(kind, provider_uid, email);
        merged
    }

    /// Attach a verified provider account to an existing identity.
    ///
    /// Fails with `NotFound` when the target does not exist and `Conflict`
    /// when the provider account, or its email under any kind, is bound to
    /// a different identity.
    pub async fn link_provider(
        &self,
        target_uid: &str,
        profile: &VerifiedProfile,
    ) -> IdentityErrorResult<Identity> {
        let kind = profile.kind;

        if self.store.find_by_uid(target_uid).await?.is_none() {
            return Err(IdentityError::not_found(format!("identity {target_uid} not found")));
        }

        if let Some(owner) = self
            .store
            .find_by_provider_uid(kind, &profile.provider_uid)
            .await?
        {
            if owner.uid != target_uid {
                warn!(
                    "{} account {} already belongs to {}, not linking to {}",
                    kind, profile.provider_uid, owner.uid, target_uid
                );
                return Err(IdentityError::conflict(format!(
                    "this {} account is already linked to another user",
                    kind.display_name()
                )));
            }
        }

        for bound_kind in ProviderKind::ALL {
            let Some(owner) = self.store.find_by_email(bound_kind, &profile.email).await? else {
                continue;
            };
            if owner.uid != target_uid {
                warn!(
                    "Email {} is bound to {} via {}, not linking {} to {}",
                    profile.email, owner.uid, bound_kind, kind, target_uid
                );
                return Err(IdentityError::conflict(
                    "this email is already linked to another user",
                ));
            }
        }

        let linked = self
            .read_modify_write(target_uid, "link_provider", WhenMissing::Fail, |identity| {
                Ok(identity.add_binding(kind, &profile.provider_uid, &profile.email))
            })
            .await?;

        info!("Linked {} ({}) to {}", kind, profile.email, target_uid);
        Ok(linked)
    }

    /// Add the profile's binding to `uid`, creating the identity if needed.
    ///
    /// Used on sign-in after resolution; profile fields are never touched.
    pub async fn merge_profile(
        &self,
        uid: &str,
        profile: &VerifiedProfile,
    ) -> IdentityErrorResult<Identity> {
        self.read_modify_write(uid, "merge_profile", WhenMissing::Create, |identity| {
            Ok(identity.add_binding(profile.kind, &profile.provider_uid, &profile.email))
        })
        .await
    }

    /// Remove every binding of `kind`. The last sign-in method stays.
    pub async fn unlink_provider(
        &self,
        uid: &str,
        kind: ProviderKind,
    ) -> IdentityErrorResult<Identity> {
        let unlinked = self
            .read_modify_write(uid, "unlink_provider", WhenMissing::Fail, |identity| {
                let removed = identity.remove_kind(kind)?;
                debug!("Removing {} {} binding(s) from {}", removed, kind, identity.uid);
                Ok(true)
            })
            .await?;

        info!("Unlinked {} from {}", kind, uid);
        Ok(unlinked)
    }

    /// Overwrite `userName` and `userColor`, creating a profile-only
    /// document when the identity has never been stored.
    pub async fn update_profile(
        &self,
        uid: &str,
        user_name: &str,
        user_color: &str,
    ) -> IdentityErrorResult<Identity> {
        let user_name = validate_user_name(user_name)?;
        let user_color = validate_color(user_color)?;

        self.read_modify_write(uid, "update_profile", WhenMissing::Create, |identity| {
            identity.set_profile(&user_name, &user_color)?;
            Ok(true)
        })
        .await
    }

    async fn read_modify_write<F>(
        &self,
        uid: &str,
        operation: &'static str,
        when_missing: WhenMissing,
        mut mutate: F,
    ) -> IdentityErrorResult<Identity>
    where
        F: FnMut(&mut Identity) -> IdentityErrorResult<bool> + Send,
    {
        let mut attempt = 0;

        loop {
            attempt += 1;

            let mut identity = match self.store.find_by_uid(uid).await? {
                Some(identity) => identity,
                None if when_missing == WhenMissing::Create => {
                    Identity::new(uid, self.default_color.as_str())
                }
                None => {
                    return Err(IdentityError::not_found(format!("identity {uid} not found")));
                }
            };

            let changed = mutate(&mut identity)?;
            if !changed && identity.is_persisted() {
                return Ok(identity);
            }

            match self.store.save(&identity).await {
                Ok(saved) => {
                    if attempt > 1 {
                        info!("{} on {} succeeded after {} attempts", operation, uid, attempt);
                    }
                    return Ok(saved);
                }
                Err(DbError::VersionConflict { .. }) if attempt < self.max_write_attempts => {
                    debug!(
                        "{} on {} lost a write race (attempt {}), retrying",
                        operation, uid, attempt
                    );
                }
                Err(e) => {
                    warn!("{} on {} failed after {} attempts: {}", operation, uid, attempt, e);
                    return Err(e.into());
                }
            }
        }
    }
}
