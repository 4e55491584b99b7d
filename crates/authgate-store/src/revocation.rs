//! Token revocation registry trait and its in-memory implementation.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use moka::future::Cache;
use tracing::debug;

use authgate_core::result::AppResult;

/// Registry of revoked token IDs.
///
/// Entries only need to outlive the token they revoke; once the token's
/// `exp` has passed the decoder rejects it anyway, so backends may expire
/// entries at or after that point.
#[async_trait]
pub trait RevocationRegistry: Send + Sync {
    /// Mark a token ID as revoked. Idempotent.
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> AppResult<()>;

    /// Check whether a token ID has been revoked.
    async fn is_revoked(&self, jti: &str) -> AppResult<bool>;
}

/// In-memory revocation registry backed by a moka cache.
///
/// The cache TTL is set to the longest-lived token TTL so revocation
/// entries survive as long as the tokens they block.
#[derive(Debug, Clone)]
pub struct MemoryRevocationRegistry {
    revoked: Cache<String, DateTime<Utc>>,
}

impl MemoryRevocationRegistry {
    /// Create a registry whose entries live at least `retention` long.
    pub fn new(retention: Duration) -> Self {
        let revoked = Cache::builder()
            .max_capacity(100_000)
            .time_to_live(retention)
            .build();
        Self { revoked }
    }
}

#[async_trait]
impl RevocationRegistry for MemoryRevocationRegistry {
    async fn revoke(&self, jti: &str, expires_at: DateTime<Utc>) -> AppResult<()> {
        self.revoked.insert(jti.to_string(), expires_at).await;
        debug!(jti, %expires_at, "Token revoked");
        Ok(())
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        // An entry whose recorded expiry has passed blocks nothing: the
        // token it revoked is already dead.
        match self.revoked.get(jti).await {
            Some(expires_at) => Ok(expires_at > Utc::now()),
            None => Ok(false),
        }
    }
}
