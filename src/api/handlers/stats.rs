//! Handler for link statistics endpoint.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns statistics for a short link.
///
/// # Endpoint
///
/// `GET /shorturls/{shortcode}`
///
/// # Response
///
/// ```json
/// {
///   "originalUrl": "https://example.com",
///   "shortCode": "abc1234",
///   "createdAt": "2026-08-22T12:34:05Z",
///   "expiresAt": "2026-08-22T13:04:05Z",
///   "clickCount": 2,
///   "clicks": [
///     {
///       "timestamp": "2026-08-22T12:35:11Z",
///       "referrer": "https://news.ycombinator.com",
///       "location": "Berlin, DE"
///     },
///     {
///       "timestamp": "2026-08-22T12:36:42Z",
///       "referrer": "Direct",
///       "location": "Unknown"
///     }
///   ]
/// }
/// ```
///
/// Expired links keep answering here; expiry only blocks redirection.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.stats_service.get_stats(&code).await?;

    Ok(Json(StatsResponse::from(stats)))
}
