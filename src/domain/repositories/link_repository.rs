//! Repository trait for short link data access.

use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// A link together with its full click history.
///
/// Both halves come from one consistent snapshot of the record, so
/// `link.click_count == clicks.len()` holds in every value handed out.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub link: ShortLink,
    /// Insertion-ordered, oldest first.
    pub clicks: Vec<Click>,
}

/// Storage contract for short links and their click history.
///
/// Records are keyed by short code and never deleted; expiry is the caller's
/// read-time concern, so lookups return expired records like any other. The
/// two write operations carry the contract's atomicity requirements:
/// [`insert`](LinkRepository::insert) is a conditional insert-if-absent and
/// [`record_click`](LinkRepository::record_click) must not lose updates under
/// concurrent calls for the same code.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - in-process,
///   backs the test suite
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new link if and only if its code is free.
    ///
    /// The existence check and the insert are one atomic step: two concurrent
    /// inserts for the same code cannot both succeed, and an occupied code
    /// conflicts regardless of whether its link has expired (codes are never
    /// recycled).
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Finds a link by its short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortLink))` if found, expired or not
    /// - `Ok(None)` if the code was never created
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Atomically increments the click counter and appends one click event.
    ///
    /// Concurrent calls for the same code must all land: N calls leave the
    /// counter exactly N higher with N appended events, in some order,
    /// never overwriting one another.
    ///
    /// # Returns
    ///
    /// The click count after this increment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn record_click(&self, code: &str, click: Click) -> Result<i64, AppError>;

    /// Fetches a link together with its full click history.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkStats))` if found, expired or not
    /// - `Ok(None)` if the code was never created
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError>;

    /// Returns true when the backing store answers a trivial probe.
    async fn health_check(&self) -> bool;
}
