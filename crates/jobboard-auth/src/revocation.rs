//! Revoked-token bookkeeping.
//!
//! Tokens are stored by `hex(sha256(token))` alongside their own expiry so the
//! list can drop entries once the token would have expired anyway. Every
//! lookup and insert sweeps first.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use sha2::{Digest, Sha256};
use sqlx::PgPool;
use tokio::sync::Mutex;
use tracing::{debug, instrument};

use jobboard_core::AuthError;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        AuthError::Store(err.to_string())
    }
}

/// Key-value storage behind a [`RevocationList`].
///
/// Implementations must make `put` and `sweep` atomic with respect to each
/// other; callers never read-modify-write.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    async fn put(&self, token_hash: &str, expires_at: i64) -> Result<(), StoreError>;

    async fn get(&self, token_hash: &str) -> Result<Option<i64>, StoreError>;

    /// Removes entries with `expires_at < now`, returning how many went.
    async fn sweep(&self, now: i64) -> Result<u64, StoreError>;
}

#[derive(Debug, Default)]
pub struct MemoryRevocationStore {
    entries: Mutex<HashMap<String, i64>>,
}

impl MemoryRevocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn put(&self, token_hash: &str, expires_at: i64) -> Result<(), StoreError> {
        self.entries
            .lock()
            .await
            .insert(token_hash.to_string(), expires_at);
        Ok(())
    }

    async fn get(&self, token_hash: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.entries.lock().await.get(token_hash).copied())
    }

    async fn sweep(&self, now: i64) -> Result<u64, StoreError> {
        let mut entries = self.entries.lock().await;
        let before = entries.len();
        entries.retain(|_, expires_at| *expires_at >= now);
        Ok((before - entries.len()) as u64)
    }
}

/// Backed by the `revoked_tokens` table.
#[derive(Debug, Clone)]
pub struct PgRevocationStore {
    db: PgPool,
}

impl PgRevocationStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevocationStore for PgRevocationStore {
    async fn put(&self, token_hash: &str, expires_at: i64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO revoked_tokens (token_hash, expires_at)
            VALUES ($1, $2)
            ON CONFLICT (token_hash) DO UPDATE SET expires_at = EXCLUDED.expires_at
            "#,
        )
        .bind(token_hash)
        .bind(expires_at)
        .execute(&self.db)
        .await?;

        Ok(())
    }

    async fn get(&self, token_hash: &str) -> Result<Option<i64>, StoreError> {
        let expires_at = sqlx::query_scalar::<_, i64>(
            "SELECT expires_at FROM revoked_tokens WHERE token_hash = $1",
        )
        .bind(token_hash)
        .fetch_optional(&self.db)
        .await?;

        Ok(expires_at)
    }

    async fn sweep(&self, now: i64) -> Result<u64, StoreError> {
        let result = sqlx::query("DELETE FROM revoked_tokens WHERE expires_at < $1")
            .bind(now)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected())
    }
}

pub fn token_hash(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// The revocation list used by the rest of the application.
#[derive(Clone)]
pub struct RevocationList {
    store: Arc<dyn RevocationStore>,
}

impl std::fmt::Debug for RevocationList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevocationList").finish_non_exhaustive()
    }
}

impl RevocationList {
    pub fn new(store: Arc<dyn RevocationStore>) -> Self {
        Self { store }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryRevocationStore::new()))
    }

    pub fn postgres(db: PgPool) -> Self {
        Self::new(Arc::new(PgRevocationStore::new(db)))
    }

    #[instrument(skip(self, token))]
    pub async fn revoke(&self, token: &str, expires_at: i64) -> Result<(), StoreError> {
        self.revoke_at(token, expires_at, Utc::now().timestamp())
            .await
    }

    pub async fn revoke_at(&self, token: &str, expires_at: i64, now: i64) -> Result<(), StoreError> {
        self.purge(now).await?;
        self.store.put(&token_hash(token), expires_at).await
    }

    pub async fn is_revoked(&self, token: &str) -> Result<bool, StoreError> {
        self.is_revoked_at(token, Utc::now().timestamp()).await
    }

    pub async fn is_revoked_at(&self, token: &str, now: i64) -> Result<bool, StoreError> {
        self.purge(now).await?;
        Ok(self.store.get(&token_hash(token)).await?.is_some())
    }

    async fn purge(&self, now: i64) -> Result<(), StoreError> {
        let removed = self.store.sweep(now).await?;
        if removed > 0 {
            debug!(removed, "Purged expired revocations");
        }
        Ok(())
    }
}
