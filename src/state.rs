//! Shared application state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService, StatsService};
use crate::config::Config;
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::cache::CacheService;
use crate::infrastructure::geoip::GeoIpService;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every field is an `Arc` or a `Copy` flag. The raw
/// repository and cache handles ride along for the health endpoint; request
/// handling goes through the services.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    pub stats_service: Arc<StatsService>,
    pub repository: Arc<dyn LinkRepository>,
    pub cache: Arc<dyn CacheService>,
    /// When true, client IPs are read from forwarding headers.
    pub behind_proxy: bool,
}

impl AppState {
    /// Wires the services over the given backends.
    pub fn new(
        config: &Config,
        repository: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        geoip: Arc<dyn GeoIpService>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            repository.clone(),
            config.base_url.clone(),
            config.default_validity_minutes,
        ));
        let redirect_service = Arc::new(RedirectService::new(
            repository.clone(),
            cache.clone(),
            geoip,
            config.cache_ttl_seconds,
        ));
        let stats_service = Arc::new(StatsService::new(repository.clone()));

        Self {
            link_service,
            redirect_service,
            stats_service,
            repository,
            cache,
            behind_proxy: config.behind_proxy,
        }
    }
}
