//! Caching layer for geocoding lookups.
//!
//! Travellers search from the same handful of neighbourhoods over and over.
//! Caching successful lookups keeps the geocoder's rate limit for new
//! queries. Failures and empty answers are never cached, so a transient
//! provider outage does not stick.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::trace;

use crate::geocode::{GeocodeError, GeocodeHit, Geocoder};

/// Cached geocoder answer.
type HitsEntry = Arc<Vec<GeocodeHit>>;

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(10 * 60),
            max_capacity: 1000,
        }
    }
}

/// Normalize a query into a cache key: trimmed, lowercased, single-spaced.
fn cache_key(query: &str) -> String {
    query
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Geocoder with caching.
///
/// Wraps any `Geocoder` and caches non-empty successful answers.
pub struct CachedGeocoder<G> {
    inner: G,
    cache: MokaCache<String, HitsEntry>,
}

impl<G: Geocoder> CachedGeocoder<G> {
    /// Create a new cached geocoder.
    pub fn new(inner: G, config: &CacheConfig) -> Self {
        let cache = MokaCache::builder()
            .time_to_live(config.ttl)
            .max_capacity(config.max_capacity)
            .build();

        Self { inner, cache }
    }

    /// Access the underlying geocoder for operations that bypass cache.
    pub fn inner(&self) -> &G {
        &self.inner
    }

    /// Get cache statistics (for monitoring).
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Invalidate all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }
}

impl<G> Geocoder for CachedGeocoder<G>
where
    G: Geocoder + Sync,
{
    async fn geocode(&self, query: &str) -> Result<Vec<GeocodeHit>, GeocodeError> {
        let key = cache_key(query);

        if let Some(cached) = self.cache.get(&key).await {
            trace!(query, "geocode cache hit");
            return Ok(cached.as_ref().clone());
        }

        let hits = self.inner.geocode(query).await?;

        if !hits.is_empty() {
            self.cache.insert(key, Arc::new(hits.clone())).await;
        }

        Ok(hits)
    }
}
