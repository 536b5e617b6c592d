//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
};
use std::net::SocketAddr;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::extract_client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{shortcode}`
///
/// # Request Flow
///
/// 1. Derive the client IP (peer address, or forwarding headers when the
///    service is configured as running behind a proxy)
/// 2. Resolve the code and record the click
/// 3. Return `302 Found` with the original URL in `Location`
///
/// The original URL is emitted exactly as it was stored; no normalization
/// happens on the way out.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
/// Returns 410 Gone if the link has expired.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<impl IntoResponse, AppError> {
    let client_ip = extract_client_ip(&headers, addr, state.behind_proxy);

    let referrer = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let original_url = state
        .redirect_service
        .resolve_and_record(&code, client_ip, referrer)
        .await?;

    Ok((StatusCode::FOUND, [(header::LOCATION, original_url)]))
}
