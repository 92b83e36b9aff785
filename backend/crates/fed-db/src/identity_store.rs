//! Identity Store Adapter seam.
//!
//! Everything above the store talks to this trait; the SQLite repository is
//! the production implementation and tests wrap it to inject interleavings.

use crate::Result as DbErrorResult;

use fed_core::{Identity, ProviderKind};

use async_trait::async_trait;

#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<Identity>>;

    /// Identity holding a `kind` binding with this provider uid
    async fn find_by_provider_uid(
        &self,
        kind: ProviderKind,
        provider_uid: &str,
    ) -> DbErrorResult<Option<Identity>>;

    /// Earliest-created identity holding a `kind` binding with this email
    async fn find_by_email(
        &self,
        kind: ProviderKind,
        email: &str,
    ) -> DbErrorResult<Option<Identity>>;

    /// Conditional write of the whole document.
    ///
    /// `identity.version` must equal the stored version (0 for a new
    /// identity), otherwise [`crate::DbError::VersionConflict`] is returned
    /// and nothing is written. Returns the identity with its new version.
    async fn save(&self, identity: &Identity) -> DbErrorResult<Identity>;

    /// Removes an identity and its bindings. Returns whether one existed.
    async fn delete_identity(&self, uid: &str) -> DbErrorResult<bool>;

    /// Cheap round trip used by readiness checks
    async fn ping(&self) -> DbErrorResult<()>;
}
