//! Click statistics service.

use std::sync::Arc;

use crate::domain::repositories::{LinkRepository, LinkStats};
use crate::error::AppError;

/// Service for retrieving a link's statistics.
///
/// Pure read with no side effects. Expiry never hides anything here: an
/// expired link's history stays fully inspectable, only redirection stops.
pub struct StatsService {
    repository: Arc<dyn LinkRepository>,
}

impl StatsService {
    /// Creates a new statistics service.
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Retrieves a link together with its full click history.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_stats(&self, code: &str) -> Result<LinkStats, AppError> {
        self.repository
            .find_stats(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found"))
    }
}
