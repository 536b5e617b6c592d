//! DTOs for click event data.

use crate::domain::entities::Click;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Individual click event information.
///
/// No optional fields: absent referrer/location data was already collapsed
/// to the `"Direct"` / `"Unknown"` sentinels when the click was recorded.
#[derive(Debug, Serialize)]
pub struct ClickInfo {
    pub timestamp: DateTime<Utc>,
    pub referrer: String,
    pub location: String,
}

impl From<Click> for ClickInfo {
    fn from(click: Click) -> Self {
        Self {
            timestamp: click.clicked_at,
            referrer: click.referrer,
            location: click.location,
        }
    }
}
