//! Identity - the unified record behind every sign-in method a person uses.
//!
//! Merge rules live here so every caller (login, signup, explicit linking)
//! applies them the same way:
//!
//! - a binding is unique per kind by provider uid *and* by email; adding one
//!   that matches either field changes nothing
//! - profile fields are only touched by [`Identity::set_profile`]
//! - removing bindings may never leave the identity without a sign-in method

use crate::{
    CoreError, ProviderBinding, ProviderKind, Result as CoreErrorResult, validate_color,
    validate_user_name,
};

use std::panic::Location;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Per-kind binding lists, each kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderBindings {
    pub password: Vec<ProviderBinding>,
    pub google: Vec<ProviderBinding>,
    pub github: Vec<ProviderBinding>,
    pub twitter: Vec<ProviderBinding>,
}

impl ProviderBindings {
    pub fn get(&self, kind: ProviderKind) -> &[ProviderBinding] {
        match kind {
            ProviderKind::Password => &self.password,
            ProviderKind::Google => &self.google,
            ProviderKind::Github => &self.github,
            ProviderKind::Twitter => &self.twitter,
        }
    }

    fn get_mut(&mut self, kind: ProviderKind) -> &mut Vec<ProviderBinding> {
        match kind {
            ProviderKind::Password => &mut self.password,
            ProviderKind::Google => &mut self.google,
            ProviderKind::Github => &mut self.github,
            ProviderKind::Twitter => &mut self.twitter,
        }
    }

    pub fn len(&self) -> usize {
        ProviderKind::ALL.iter().map(|k| self.get(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All bindings paired with their kind, in precedence order
    pub fn iter(&self) -> impl Iterator<Item = (ProviderKind, &ProviderBinding)> {
        ProviderKind::ALL
            .into_iter()
            .flat_map(move |kind| self.get(kind).iter().map(move |b| (kind, b)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub uid: String,
    pub user_name: String,
    pub user_color: String,
    pub bindings: ProviderBindings,
    /// Store revision; 0 until the identity is first persisted
    pub version: i64,
}

impl Identity {
    /// Fresh, unsaved identity with empty profile fields and no bindings
    pub fn new(uid: impl Into<String>, default_color: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            user_name: String::new(),
            user_color: default_color.into(),
            bindings: ProviderBindings::default(),
            version: 0,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.version > 0
    }

    pub fn has_kind(&self, kind: ProviderKind) -> bool {
        !self.bindings.get(kind).is_empty()
    }

    /// Kinds with at least one binding, in precedence order
    pub fn linked_kinds(&self) -> Vec<ProviderKind> {
        ProviderKind::ALL
            .into_iter()
            .filter(|kind| self.has_kind(*kind))
            .collect()
    }

    /// First binding of `kind`, used when a single email per provider is shown
    pub fn primary_binding(&self, kind: ProviderKind) -> Option<&ProviderBinding> {
        self.bindings.get(kind).first()
    }

    /// First email across all kinds in precedence order
    pub fn primary_email(&self) -> Option<&str> {
        self.bindings.iter().map(|(_, b)| b.email.as_str()).next()
    }

    pub fn contains_provider_uid(&self, kind: ProviderKind, provider_uid: &str) -> bool {
        self.bindings
            .get(kind)
            .iter()
            .any(|b| b.provider_uid == provider_uid)
    }

    /// Idempotent merge of one binding. Returns `true` when the binding was
    /// appended, `false` when an entry already matched on provider uid or email.
    pub fn add_binding(&mut self, kind: ProviderKind, provider_uid: &str, email: &str) -> bool {
        let list = self.bindings.get_mut(kind);
        if list
            .iter()
            .any(|b| b.provider_uid == provider_uid || b.email == email)
        {
            return false;
        }

        list.push(ProviderBinding::new(provider_uid, email));
        true
    }

    /// Removes every binding of `kind`, returning how many were removed.
    #[track_caller]
    pub fn remove_kind(&mut self, kind: ProviderKind) -> CoreErrorResult<usize> {
        let removing = self.bindings.get(kind).len();
        if removing == 0 {
            return Err(CoreError::ProviderNotLinked {
                kind,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if self.bindings.len() == removing {
            return Err(CoreError::LastBinding {
                location: ErrorLocation::from(Location::caller()),
            });
        }

        self.bindings.get_mut(kind).clear();
        Ok(removing)
    }

    /// Explicit profile update; the only way `user_name`/`user_color` change.
    #[track_caller]
    pub fn set_profile(&mut self, user_name: &str, user_color: &str) -> CoreErrorResult<()> {
        let user_name = validate_user_name(user_name)?;
        let user_color = validate_color(user_color)?;

        self.user_name = user_name;
        self.user_color = user_color;
        Ok(())
    }
}
