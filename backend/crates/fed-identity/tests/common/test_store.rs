use fed_core::{Identity, ProviderKind};
use fed_db::{DbError, IdentityRepository, IdentityStore, Result as DbErrorResult};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// In-memory SQLite identity store with migrations applied
pub async fn create_test_store() -> Arc<IdentityRepository> {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    fed_db::MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Arc::new(IdentityRepository::new(pool))
}

/// Store that lets another writer slip in before the first N saves,
/// so the caller's save always loses the race on those attempts.
pub struct InterleavingStore {
    inner: Arc<IdentityRepository>,
    interleave_remaining: AtomicUsize,
    pub saves: AtomicUsize,
}

impl InterleavingStore {
    pub fn new(inner: Arc<IdentityRepository>, interleavings: usize) -> Self {
        Self {
            inner,
            interleave_remaining: AtomicUsize::new(interleavings),
            saves: AtomicUsize::new(0),
        }
    }

    async fn competing_write(&self, uid: &str) -> DbErrorResult<()> {
        let Some(mut current) = self.inner.find_by_uid(uid).await? else {
            return Ok(());
        };
        let n = self.saves.load(Ordering::SeqCst);
        current.add_binding(
            ProviderKind::Twitter,
            &format!("tw-{n}"),
            &format!("rival{n}@x.com"),
        );
        self.inner.save(&current).await.map(|_| ())
    }
}

#[async_trait]
impl IdentityStore for InterleavingStore {
    async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_uid(uid).await
    }

    async fn find_by_provider_uid(
        &self,
        kind: ProviderKind,
        provider_uid: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_provider_uid(kind, provider_uid).await
    }

    async fn find_by_email(
        &self,
        kind: ProviderKind,
        email: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_email(kind, email).await
    }

    async fn save(&self, identity: &Identity) -> DbErrorResult<Identity> {
        self.saves.fetch_add(1, Ordering::SeqCst);
        let interleave = self
            .interleave_remaining
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if interleave {
            self.competing_write(&identity.uid).await?;
        }
        self.inner.save(identity).await
    }

    async fn delete_identity(&self, uid: &str) -> DbErrorResult<bool> {
        self.inner.delete_identity(uid).await
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.inner.ping().await
    }
}

/// Store whose writes fail once `fail_saves` is set; reads pass through
pub struct FlakyWriteStore {
    inner: Arc<IdentityRepository>,
    pub fail_saves: AtomicBool,
}

impl FlakyWriteStore {
    pub fn new(inner: Arc<IdentityRepository>) -> Self {
        Self {
            inner,
            fail_saves: AtomicBool::new(false),
        }
    }
}

#[async_trait]
impl IdentityStore for FlakyWriteStore {
    async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_uid(uid).await
    }

    async fn find_by_provider_uid(
        &self,
        kind: ProviderKind,
        provider_uid: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_provider_uid(kind, provider_uid).await
    }

    async fn find_by_email(
        &self,
        kind: ProviderKind,
        email: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.inner.find_by_email(kind, email).await
    }

    async fn save(&self, identity: &Identity) -> DbErrorResult<Identity> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(DbError::Timeout {
                operation: "save",
                timeout_ms: 5,
                location: error_location_here(),
            });
        }
        self.inner.save(identity).await
    }

    async fn delete_identity(&self, uid: &str) -> DbErrorResult<bool> {
        self.inner.delete_identity(uid).await
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.inner.ping().await
    }
}

#[track_caller]
fn error_location_here() -> fed_core::ErrorLocation {
    fed_core::ErrorLocation::from(std::panic::Location::caller())
}
