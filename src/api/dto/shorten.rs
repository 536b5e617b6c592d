//! DTOs for the link shortening endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to shorten a URL.
///
/// Every field is optional at the deserialization layer so that a missing
/// `url` surfaces as a validation message instead of a decode failure; the
/// service revalidates everything it is handed.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten (must be valid HTTP/HTTPS).
    #[validate(required(message = "Original URL is required."))]
    pub url: Option<String>,

    /// Lifetime in minutes. Defaults to 30 when absent.
    #[validate(range(min = 1, message = "Validity must be a positive number of minutes."))]
    pub validity: Option<i64>,

    /// Custom short code. Generated when absent.
    pub shortcode: Option<String>,
}

/// Response for a successfully created short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortenResponse {
    pub short_url: String,
    pub expires_at: DateTime<Utc>,
}
