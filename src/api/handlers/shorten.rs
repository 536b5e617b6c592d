//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a shortened URL.
///
/// # Endpoint
///
/// `POST /shorturls`
///
/// # Request Body
///
/// ```json
/// {
///   "url": "https://example.com/some/long/path",
///   "validity": 60,          // optional, minutes, default 30
///   "shortcode": "my-link"   // optional, generated when absent
/// }
/// ```
///
/// # Response
///
/// `201 Created`
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/my-link",
///   "expiresAt": "2026-08-22T13:04:05Z"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request when the URL is missing or invalid, the validity
/// is not a positive number, the custom code is malformed, or the custom
/// code is already taken.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_short_link(payload.url, payload.validity, payload.shortcode)
        .await?;

    let response = ShortenResponse {
        short_url: state.link_service.short_url(&link.short_code),
        expires_at: link.expires_at,
    };

    Ok((StatusCode::CREATED, Json(response)))
}
