//! In-memory implementation of the link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::domain::entities::{Click, NewShortLink, ShortLink};
use crate::domain::repositories::{LinkRepository, LinkStats};
use crate::error::AppError;

/// DashMap-backed store, one entry per short code.
///
/// DashMap's sharded locks supply the contract's two atomic operations:
/// `entry()` holds the shard write lock across the vacancy check and the
/// insert, and `get_mut()` holds it across the increment and the append.
/// Backs the test suite and serves as the reference implementation of the
/// repository contract; nothing here expires or evicts, since expiry is the
/// caller's read-time concern.
#[derive(Debug, Default)]
pub struct MemoryLinkRepository {
    records: DashMap<String, StoredLink>,
}

#[derive(Debug)]
struct StoredLink {
    link: ShortLink,
    clicks: Vec<Click>,
}

impl MemoryLinkRepository {
    /// Creates an empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn insert(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        let link = ShortLink {
            short_code: new_link.short_code,
            original_url: new_link.original_url,
            created_at: new_link.created_at,
            expires_at: new_link.expires_at,
            click_count: 0,
        };

        match self.records.entry(link.short_code.clone()) {
            // Occupied means taken for good; expired entries are not reused.
            Entry::Occupied(_) => Err(AppError::conflict("Shortcode already exists.")),
            Entry::Vacant(slot) => {
                slot.insert(StoredLink {
                    link: link.clone(),
                    clicks: Vec::new(),
                });
                Ok(link)
            }
        }
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.records.get(code).map(|entry| entry.link.clone()))
    }

    async fn record_click(&self, code: &str, click: Click) -> Result<i64, AppError> {
        match self.records.get_mut(code) {
            Some(mut entry) => {
                entry.link.click_count += 1;
                entry.clicks.push(click);
                Ok(entry.link.click_count)
            }
            None => Err(AppError::not_found("Shortcode not found")),
        }
    }

    async fn find_stats(&self, code: &str) -> Result<Option<LinkStats>, AppError> {
        Ok(self.records.get(code).map(|entry| LinkStats {
            link: entry.link.clone(),
            clicks: entry.clicks.clone(),
        }))
    }

    async fn health_check(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn new_link(code: &str) -> NewShortLink {
        let now = Utc::now();
        NewShortLink {
            short_code: code.to_string(),
            original_url: "https://example.com".to_string(),
            created_at: now,
            expires_at: now + Duration::minutes(30),
        }
    }

    fn expired_link(code: &str) -> NewShortLink {
        let now = Utc::now();
        NewShortLink {
            short_code: code.to_string(),
            original_url: "https://example.com/old".to_string(),
            created_at: now - Duration::minutes(60),
            expires_at: now - Duration::minutes(30),
        }
    }

    fn sample_click() -> Click {
        Click::new(Utc::now(), Some("https://google.com".to_string()), None)
    }

    #[tokio::test]
    async fn insert_and_find() {
        let repo = MemoryLinkRepository::new();

        let link = repo.insert(new_link("abc1234")).await.unwrap();
        assert_eq!(link.click_count, 0);

        let found = repo.find_by_code("abc1234").await.unwrap().unwrap();
        assert_eq!(found.original_url, "https://example.com");
    }

    #[tokio::test]
    async fn find_unknown_code() {
        let repo = MemoryLinkRepository::new();

        let result = repo.find_by_code("nope").await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn insert_conflict() {
        let repo = MemoryLinkRepository::new();

        repo.insert(new_link("abc1234")).await.unwrap();

        let err = repo.insert(new_link("abc1234")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn expired_code_still_conflicts() {
        let repo = MemoryLinkRepository::new();

        repo.insert(expired_link("abc1234")).await.unwrap();

        // Codes are never recycled, expired or not.
        let err = repo.insert(new_link("abc1234")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn expired_records_stay_visible() {
        let repo = MemoryLinkRepository::new();

        repo.insert(expired_link("old1234")).await.unwrap();

        let found = repo.find_by_code("old1234").await.unwrap().unwrap();
        assert!(found.is_expired());

        let stats = repo.find_stats("old1234").await.unwrap();
        assert!(stats.is_some());
    }

    #[tokio::test]
    async fn record_click_increments_and_appends() {
        let repo = MemoryLinkRepository::new();

        repo.insert(new_link("abc1234")).await.unwrap();

        let count = repo.record_click("abc1234", sample_click()).await.unwrap();
        assert_eq!(count, 1);

        let count = repo.record_click("abc1234", sample_click()).await.unwrap();
        assert_eq!(count, 2);

        let stats = repo.find_stats("abc1234").await.unwrap().unwrap();
        assert_eq!(stats.link.click_count, 2);
        assert_eq!(stats.clicks.len(), 2);
        assert_eq!(stats.clicks[0].referrer, "https://google.com");
    }

    #[tokio::test]
    async fn record_click_unknown_code() {
        let repo = MemoryLinkRepository::new();

        let err = repo
            .record_click("nope", sample_click())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn clicks_keep_insertion_order() {
        let repo = MemoryLinkRepository::new();

        repo.insert(new_link("abc1234")).await.unwrap();

        for i in 0..5 {
            let click = Click::new(Utc::now(), Some(format!("https://ref{i}.example")), None);
            repo.record_click("abc1234", click).await.unwrap();
        }

        let stats = repo.find_stats("abc1234").await.unwrap().unwrap();
        let referrers: Vec<_> = stats.clicks.iter().map(|c| c.referrer.as_str()).collect();
        assert_eq!(
            referrers,
            vec![
                "https://ref0.example",
                "https://ref1.example",
                "https://ref2.example",
                "https://ref3.example",
                "https://ref4.example"
            ]
        );
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_clicks_all_counted() {
        let repo = Arc::new(MemoryLinkRepository::new());
        repo.insert(new_link("race123")).await.unwrap();

        let mut handles = vec![];
        for _ in 0..50 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                repo.record_click("race123", sample_click()).await.unwrap();
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let stats = repo.find_stats("race123").await.unwrap().unwrap();
        assert_eq!(stats.link.click_count, 50);
        assert_eq!(stats.clicks.len(), 50);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 8)]
    async fn concurrent_inserts_one_winner() {
        let repo = Arc::new(MemoryLinkRepository::new());

        let mut handles = vec![];
        for i in 0..20 {
            let repo = Arc::clone(&repo);
            handles.push(tokio::spawn(async move {
                let now = Utc::now();
                let attempt = NewShortLink {
                    short_code: "same123".to_string(),
                    original_url: format!("https://example{i}.com"),
                    created_at: now,
                    expires_at: now + Duration::minutes(30),
                };
                repo.insert(attempt).await.is_ok()
            }));
        }

        let mut winners = 0;
        for handle in handles {
            if handle.await.unwrap() {
                winners += 1;
            }
        }

        assert_eq!(winners, 1);
    }
}
