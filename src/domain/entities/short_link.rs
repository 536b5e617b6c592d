//! Short link entity representing one code-to-URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL with its lifecycle metadata.
///
/// Everything except `click_count` is immutable after creation; the counter
/// and the click history only ever grow. Expired links are kept (never
/// deleted), so their stats stay queryable.
#[derive(Debug, Clone)]
pub struct ShortLink {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub click_count: i64,
}

impl ShortLink {
    /// Returns true once the validity window has passed.
    ///
    /// The comparison is strict: a hit at exactly `expires_at` still counts
    /// as live.
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }
}

/// Input data for creating a new short link.
///
/// `created_at` and `expires_at` are both derived from the same observed
/// "now" by the shortening service, so `expires_at - created_at` is exactly
/// the requested validity.
#[derive(Debug, Clone)]
pub struct NewShortLink {
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn link_expiring_at(expires_at: DateTime<Utc>) -> ShortLink {
        ShortLink {
            short_code: "abc1234".to_string(),
            original_url: "https://example.com".to_string(),
            created_at: Utc::now(),
            expires_at,
            click_count: 0,
        }
    }

    #[test]
    fn test_fresh_link_is_not_expired() {
        let link = link_expiring_at(Utc::now() + Duration::minutes(30));
        assert!(!link.is_expired());
    }

    #[test]
    fn test_past_expiry_is_expired() {
        let link = link_expiring_at(Utc::now() - Duration::seconds(1));
        assert!(link.is_expired());
    }

    #[test]
    fn test_expiry_in_far_future() {
        let link = link_expiring_at(Utc::now() + Duration::days(365));
        assert!(!link.is_expired());
        assert_eq!(link.click_count, 0);
    }
}
