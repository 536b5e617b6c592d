//! Redirect resolution and click recording service.

use std::net::IpAddr;
use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::infrastructure::cache::{CacheService, CachedLink};
use crate::infrastructure::geoip::GeoIpService;
use chrono::{DateTime, Utc};
use metrics::counter;
use tracing::{debug, warn};

/// Service behind the hot redirect path.
///
/// Resolves a short code to its original URL, enforces expiry, and records
/// one click per successful resolution. The cache only shortens the lookup;
/// every cache outcome other than a hit falls back to the record store, so a
/// broken cache degrades latency, never correctness.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
    cache: Arc<dyn CacheService>,
    geoip: Arc<dyn GeoIpService>,
    cache_ttl_seconds: u64,
}

impl RedirectService {
    /// Creates a new redirect service.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        cache: Arc<dyn CacheService>,
        geoip: Arc<dyn GeoIpService>,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            repository,
            cache,
            geoip,
            cache_ttl_seconds,
        }
    }

    /// Resolves a code and records the click.
    ///
    /// # Request Flow
    ///
    /// 1. Check cache, falling back to the record store on miss or error
    /// 2. Enforce expiry (strictly after `expires_at`; expired visits record
    ///    nothing)
    /// 3. Derive the click's location from `client_ip` and its referrer from
    ///    the request, collapsing absent data to the sentinels
    /// 4. Atomically increment the counter and append the click, then return
    ///    the original URL for the caller to redirect to
    ///
    /// The click is recorded before returning, so a stats read issued right
    /// after the redirect already sees it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never created.
    /// Returns [`AppError::Gone`] if the link has expired.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve_and_record(
        &self,
        code: &str,
        client_ip: IpAddr,
        referrer: Option<String>,
    ) -> Result<String, AppError> {
        let link = self.resolve(code).await.inspect_err(|e| {
            if matches!(e, AppError::NotFound(_)) {
                counter!("redirects_missing_total").increment(1);
            }
        })?;

        let now = Utc::now();
        if now > link.expires_at {
            counter!("redirects_expired_total").increment(1);
            return Err(AppError::gone("Short URL has expired"));
        }

        let location = self.geoip.lookup(client_ip).map(|loc| loc.to_string());
        let click = Click::new(now, referrer, location);

        let click_count = self.repository.record_click(code, click).await?;
        debug!(code, click_count, "click recorded");
        counter!("redirects_total").increment(1);

        Ok(link.original_url)
    }

    /// Looks up the redirect snapshot, preferring the cache.
    ///
    /// Cache errors are logged and treated as misses. A store hit schedules
    /// an asynchronous cache fill so the next visit is cheaper.
    async fn resolve(&self, code: &str) -> Result<CachedLink, AppError> {
        match self.cache.get_link(code).await {
            Ok(Some(cached)) => {
                debug!(code, "cache hit");
                return Ok(cached);
            }
            Ok(None) => debug!(code, "cache miss"),
            Err(e) => warn!(code, error = %e, "cache read failed, falling back to store"),
        }

        let link = self
            .repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Shortcode not found"))?;

        let snapshot = CachedLink {
            original_url: link.original_url,
            expires_at: link.expires_at,
        };
        self.spawn_cache_fill(code, &snapshot);

        Ok(snapshot)
    }

    /// Writes the snapshot to the cache without blocking the redirect.
    fn spawn_cache_fill(&self, code: &str, snapshot: &CachedLink) {
        let Some(ttl) = fill_ttl(snapshot.expires_at, Utc::now(), self.cache_ttl_seconds) else {
            return;
        };

        let cache = self.cache.clone();
        let code = code.to_string();
        let snapshot = snapshot.clone();
        tokio::spawn(async move {
            if let Err(e) = cache.set_link(&code, &snapshot, ttl).await {
                warn!(code, error = %e, "cache write failed");
            }
        });
    }
}

/// TTL for a cache entry: the configured cap, shortened to the link's
/// remaining lifetime so entries age out with their link. `None` means the
/// link is already expired and must not be cached.
fn fill_ttl(expires_at: DateTime<Utc>, now: DateTime<Utc>, cap_seconds: u64) -> Option<u64> {
    let remaining = (expires_at - now).num_seconds();
    if remaining <= 0 {
        return None;
    }

    Some((remaining as u64).min(cap_seconds))
}
