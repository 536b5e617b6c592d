//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::clicks::ClickInfo;
use crate::domain::repositories::LinkStats;

/// Statistics for a specific short link.
///
/// Carries the link's metadata, its total click count, and every recorded
/// click in insertion order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub original_url: String,
    pub short_code: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: i64,
    pub clicks: Vec<ClickInfo>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            original_url: stats.link.original_url,
            short_code: stats.link.short_code,
            created_at: stats.link.created_at,
            expires_at: stats.link.expires_at,
            click_count: stats.link.click_count,
            clicks: stats.clicks.into_iter().map(ClickInfo::from).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Click, ShortLink};

    #[test]
    fn test_stats_response_shape() {
        let now = Utc::now();
        let stats = LinkStats {
            link: ShortLink {
                short_code: "abc1234".to_string(),
                original_url: "https://example.com".to_string(),
                created_at: now,
                expires_at: now + chrono::Duration::minutes(30),
                click_count: 1,
            },
            clicks: vec![Click::new(now, None, None)],
        };

        let json = serde_json::to_value(StatsResponse::from(stats)).unwrap();

        assert_eq!(json["originalUrl"], "https://example.com");
        assert_eq!(json["shortCode"], "abc1234");
        assert_eq!(json["clickCount"], 1);
        assert!(json.get("createdAt").is_some());
        assert!(json.get("expiresAt").is_some());
        assert_eq!(json["clicks"][0]["referrer"], "Direct");
        assert_eq!(json["clicks"][0]["location"], "Unknown");
        assert!(json["clicks"][0].get("timestamp").is_some());
    }
}
