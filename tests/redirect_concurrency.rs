mod common;

use linkcut::AppError;
use linkcut::domain::repositories::LinkRepository;
use std::collections::HashSet;
use std::net::IpAddr;
use std::sync::Arc;

fn client_ip() -> IpAddr {
    "203.0.113.9".parse().unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_redirects_all_counted() {
    let (state, repository) = common::create_test_state();

    common::seed_link(&repository, "hot1234", "https://example.com/target").await;

    let mut handles = vec![];
    for i in 0..50 {
        let service = Arc::clone(&state.redirect_service);
        handles.push(tokio::spawn(async move {
            service
                .resolve_and_record(
                    "hot1234",
                    client_ip(),
                    Some(format!("https://ref.example/{i}")),
                )
                .await
                .unwrap()
        }));
    }

    for handle in handles {
        let url = handle.await.unwrap();
        assert_eq!(url, "https://example.com/target");
    }

    // Every visit landed: the counter and the click log agree.
    let stats = repository.find_stats("hot1234").await.unwrap().unwrap();
    assert_eq!(stats.link.click_count, 50);
    assert_eq!(stats.clicks.len(), 50);

    let referrers: HashSet<&str> = stats.clicks.iter().map(|c| c.referrer.as_str()).collect();
    assert_eq!(referrers.len(), 50);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_creates_single_winner() {
    let (state, repository) = common::create_test_state();

    let mut handles = vec![];
    for i in 0..20 {
        let service = Arc::clone(&state.link_service);
        handles.push(tokio::spawn(async move {
            service
                .create_short_link(
                    Some(format!("https://example{i}.com")),
                    None,
                    Some("grabme1".to_string()),
                )
                .await
        }));
    }

    let mut winners = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(link) => {
                assert_eq!(link.short_code, "grabme1");
                winners += 1;
            }
            Err(AppError::Conflict(message)) => {
                assert_eq!(message, "Shortcode already exists.");
                conflicts += 1;
            }
            Err(other) => panic!("unexpected error: {other}"),
        }
    }

    assert_eq!(winners, 1);
    assert_eq!(conflicts, 19);

    let stored = repository.find_by_code("grabme1").await.unwrap().unwrap();
    assert!(stored.original_url.starts_with("https://example"));
}
