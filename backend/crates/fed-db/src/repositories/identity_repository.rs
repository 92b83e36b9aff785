//! SQLite-backed identity store.
//!
//! Each identity is a single JSON document in `identities`, with a
//! monotonically increasing `version`. `identity_bindings` mirrors the
//! bindings inside the document so provider-uid and email lookups are index
//! hits. Both tables are written in one transaction, and the document write
//! is conditional on the version the caller read.

use crate::{DbError, IdentityStore, Result as DbErrorResult};

use fed_core::{DEFAULT_USER_COLOR, Identity, IdentityDocument, ProviderKind};

use std::future::Future;
use std::panic::Location;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use error_location::ErrorLocation;
use log::debug;
use sqlx::SqlitePool;

const DEFAULT_OPERATION_TIMEOUT: Duration = Duration::from_secs(5);

pub struct IdentityRepository {
    pool: SqlitePool,
    operation_timeout: Duration,
    default_color: String,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            operation_timeout: DEFAULT_OPERATION_TIMEOUT,
            default_color: DEFAULT_USER_COLOR.to_string(),
        }
    }

    /// Deadline applied to every store call
    pub fn with_operation_timeout(mut self, timeout: Duration) -> Self {
        self.operation_timeout = timeout;
        self
    }

    /// Colour used when a stored document has none
    pub fn with_default_color(mut self, color: impl Into<String>) -> Self {
        self.default_color = color.into();
        self
    }

    /// Run `fut` under the operation timeout. `location` is the store
    /// method that started it and is what a `Timeout` reports.
    async fn with_deadline<T, F>(
        &self,
        operation: &'static str,
        location: &'static Location<'static>,
        fut: F,
    ) -> DbErrorResult<T>
    where
        F: Future<Output = DbErrorResult<T>>,
    {
        match tokio::time::timeout(self.operation_timeout, fut).await {
            Ok(result) => result,
            Err(_) => Err(DbError::Timeout {
                operation,
                timeout_ms: self.operation_timeout.as_millis(),
                location: ErrorLocation::from(location),
            }),
        }
    }

    fn decode(&self, uid: String, document: &str, version: i64) -> DbErrorResult<Identity> {
        let parsed: IdentityDocument =
            serde_json::from_str(document).map_err(|e| DbError::Decode {
                uid: uid.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        if parsed.uid != uid {
            return Err(DbError::Decode {
                message: format!("document uid '{}' does not match row", parsed.uid),
                uid,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        Ok(parsed.into_identity(version, &self.default_color))
    }

    fn decode_row(&self, row: Option<(String, String, i64)>) -> DbErrorResult<Option<Identity>> {
        row.map(|(uid, document, version)| self.decode(uid, &document, version))
            .transpose()
    }

    async fn save_inner(&self, identity: &Identity) -> DbErrorResult<Identity> {
        let document = serde_json::to_string(&IdentityDocument::from(identity)).map_err(|e| {
            DbError::Decode {
                uid: identity.uid.clone(),
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        let now = Utc::now().timestamp();
        let next_version = identity.version + 1;

        let mut tx = self.pool.begin().await?;

        let written = if identity.version == 0 {
            sqlx::query(
                r#"
                    INSERT INTO identities (uid, document, version, created_at, updated_at)
                    VALUES (?, ?, 1, ?, ?)
                    ON CONFLICT(uid) DO NOTHING
                "#,
            )
            .bind(&identity.uid)
            .bind(&document)
            .bind(now)
            .bind(now)
            .execute(&mut *tx)
            .await?
            .rows_affected()
        } else {
            sqlx::query(
                r#"
                    UPDATE identities
                    SET document = ?, version = ?, updated_at = ?
                    WHERE uid = ? AND version = ?
                "#,
            )
            .bind(&document)
            .bind(next_version)
            .bind(now)
            .bind(&identity.uid)
            .bind(identity.version)
            .execute(&mut *tx)
            .await?
            .rows_affected()
        };

        if written == 0 {
            return Err(DbError::VersionConflict {
                uid: identity.uid.clone(),
                expected: identity.version,
                location: ErrorLocation::from(Location::caller()),
            });
        }

        sqlx::query("DELETE FROM identity_bindings WHERE uid = ?")
            .bind(&identity.uid)
            .execute(&mut *tx)
            .await?;

        for kind in ProviderKind::ALL {
            for (position, binding) in identity.bindings.get(kind).iter().enumerate() {
                let inserted = sqlx::query(
                    r#"
                        INSERT INTO identity_bindings (uid, kind, provider_uid, email, position)
                        VALUES (?, ?, ?, ?, ?)
                    "#,
                )
                .bind(&identity.uid)
                .bind(kind.as_str())
                .bind(&binding.provider_uid)
                .bind(&binding.email)
                .bind(position as i64)
                .execute(&mut *tx)
                .await;

                match inserted {
                    Ok(_) => {}
                    Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                        return Err(DbError::DuplicateBinding {
                            kind,
                            provider_uid: binding.provider_uid.clone(),
                            location: ErrorLocation::from(Location::caller()),
                        });
                    }
                    Err(e) => return Err(e.into()),
                }
            }
        }

        tx.commit().await?;

        debug!(
            "Saved identity {} at version {} ({} bindings)",
            identity.uid,
            next_version,
            identity.bindings.len()
        );

        let mut saved = identity.clone();
        saved.version = next_version;
        Ok(saved)
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_uid(&self, uid: &str) -> DbErrorResult<Option<Identity>> {
        self.with_deadline("find_by_uid", Location::caller(), async {
            let row: Option<(String, String, i64)> =
                sqlx::query_as("SELECT uid, document, version FROM identities WHERE uid = ?")
                    .bind(uid)
                    .fetch_optional(&self.pool)
                    .await?;

            self.decode_row(row)
        })
        .await
    }

    async fn find_by_provider_uid(
        &self,
        kind: ProviderKind,
        provider_uid: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.with_deadline("find_by_provider_uid", Location::caller(), async {
            let row: Option<(String, String, i64)> = sqlx::query_as(
                r#"
                    SELECT i.uid, i.document, i.version
                    FROM identity_bindings b
                    JOIN identities i ON i.uid = b.uid
                    WHERE b.kind = ? AND b.provider_uid = ?
                    LIMIT 1
                "#,
            )
            .bind(kind.as_str())
            .bind(provider_uid)
            .fetch_optional(&self.pool)
            .await?;

            self.decode_row(row)
        })
        .await
    }

    async fn find_by_email(
        &self,
        kind: ProviderKind,
        email: &str,
    ) -> DbErrorResult<Option<Identity>> {
        self.with_deadline("find_by_email", Location::caller(), async {
            let row: Option<(String, String, i64)> = sqlx::query_as(
                r#"
                    SELECT i.uid, i.document, i.version
                    FROM identity_bindings b
                    JOIN identities i ON i.uid = b.uid
                    WHERE b.kind = ? AND b.email = ?
                    ORDER BY i.created_at ASC, i.uid ASC
                    LIMIT 1
                "#,
            )
            .bind(kind.as_str())
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;

            self.decode_row(row)
        })
        .await
    }

    async fn save(&self, identity: &Identity) -> DbErrorResult<Identity> {
        self.with_deadline("save", Location::caller(), self.save_inner(identity))
            .await
    }

    async fn delete_identity(&self, uid: &str) -> DbErrorResult<bool> {
        self.with_deadline("delete_identity", Location::caller(), async {
            let mut tx = self.pool.begin().await?;

            sqlx::query("DELETE FROM identity_bindings WHERE uid = ?")
                .bind(uid)
                .execute(&mut *tx)
                .await?;

            let deleted = sqlx::query("DELETE FROM identities WHERE uid = ?")
                .bind(uid)
                .execute(&mut *tx)
                .await?
                .rows_affected();

            tx.commit().await?;
            Ok(deleted > 0)
        })
        .await
    }

    async fn ping(&self) -> DbErrorResult<()> {
        self.with_deadline("ping", Location::caller(), async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }
}
