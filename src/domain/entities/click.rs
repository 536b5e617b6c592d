//! Click entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// Recorded referrer when the request carried none.
pub const REFERRER_DIRECT: &str = "Direct";

/// Recorded location when geolocation resolved nothing.
pub const LOCATION_UNKNOWN: &str = "Unknown";

/// A click event recorded when a short link is visited.
///
/// The fields are final wire values: absent request data has already been
/// collapsed to the `"Direct"` / `"Unknown"` sentinels, so a stored click
/// never carries an empty referrer or location.
#[derive(Debug, Clone)]
pub struct Click {
    pub clicked_at: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl Click {
    /// Builds a click from raw request metadata, applying the sentinels.
    ///
    /// Empty or whitespace-only referrers count as absent, matching how
    /// browsers send `Referer` when a privacy policy strips it.
    pub fn new(
        clicked_at: DateTime<Utc>,
        referrer: Option<String>,
        location: Option<String>,
    ) -> Self {
        Self {
            clicked_at,
            referrer: referrer
                .filter(|r| !r.trim().is_empty())
                .unwrap_or_else(|| REFERRER_DIRECT.to_string()),
            location: location
                .filter(|l| !l.trim().is_empty())
                .unwrap_or_else(|| LOCATION_UNKNOWN.to_string()),
        }
    }
}
