//! Cache service trait and error types.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// The cached slice of a short link: enough to redirect without touching
/// the record store.
///
/// `expires_at` travels with the URL so the read-time expiry check works on
/// cache hits too; a hit is never trusted to be live just because the cache
/// still holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedLink {
    pub original_url: String,
    pub expires_at: DateTime<Utc>,
}

/// Trait for caching short link lookups.
///
/// Implementations must be thread-safe. Callers treat every error as a cache
/// miss and fall through to the record store; a broken cache may slow the
/// service down but never breaks a redirect.
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves the cached snapshot for a short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(link))` on cache hit
    /// - `Ok(None)` on cache miss
    ///
    /// # Errors
    ///
    /// Backend or decoding failures. Callers degrade these to misses.
    async fn get_link(&self, short_code: &str) -> CacheResult<Option<CachedLink>>;

    /// Stores a snapshot under a short code with the given TTL.
    ///
    /// The caller picks the TTL; the redirect path caps it at the link's
    /// remaining lifetime so dead entries age out with their link.
    ///
    /// # Errors
    ///
    /// Backend failures. Callers log and move on.
    async fn set_link(
        &self,
        short_code: &str,
        link: &CachedLink,
        ttl_seconds: u64,
    ) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    ///
    /// Used by health check endpoints to report cache status.
    async fn health_check(&self) -> bool;
}
