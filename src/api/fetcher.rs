//! Fetch-or-populate adapter
//!
//! Cache-aside reads for network-backed resources: the response cache is
//! consulted first and filled from the network on a miss.

use bytes::Bytes;
use reqwest::Client;
use tracing::debug;

use crate::cache::{CacheStats, ExpiringCache};
use crate::error::{PokedexError, Result};

// == Resolution Result ==
/// Where a resolved payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Cache,
    Network,
}

/// A resolved response body and its origin.
#[derive(Debug, Clone)]
pub struct Resolved {
    pub body: Bytes,
    pub origin: Origin,
}

// == Cached Fetcher ==
/// Resolves URLs through the response cache.
///
/// Keys are the full request URL. Only complete bodies of successful
/// responses are cached; failures leave the cache untouched.
#[derive(Debug)]
pub struct CachedFetcher {
    http: Client,
    cache: ExpiringCache,
}

impl CachedFetcher {
    // == Constructor ==
    /// Wraps an HTTP client and the cache it fills.
    pub fn new(http: Client, cache: ExpiringCache) -> Self {
        Self { http, cache }
    }

    // == Resolve ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// Cached bytes are returned as-is with no freshness check.
    pub async fn resolve(&self, url: &str) -> Result<Resolved> {
        if let Some(body) = self.cache.get(url).await {
            debug!(url, "Cache hit");
            return Ok(Resolved {
                body,
                origin: Origin::Cache,
            });
        }

        debug!(url, "Cache miss");
        let body = self.fetch(url).await?;
        Ok(Resolved {
            body,
            origin: Origin::Network,
        })
    }

    /// Fetches `url` from the network even if cached, replacing the entry.
    pub async fn refresh(&self, url: &str) -> Result<Bytes> {
        self.fetch(url).await
    }

    async fn fetch(&self, url: &str) -> Result<Bytes> {
        debug!(url, "Requesting");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::Upstream {
                url: url.to_string(),
                status,
            });
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;
        debug!(url, bytes = body.len(), "Added to cache");
        Ok(body)
    }

    // == Accessors ==
    /// The response cache this fetcher reads and fills.
    pub fn cache(&self) -> &ExpiringCache {
        &self.cache
    }

    /// Snapshot of the response cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    /// Stops the cache sweep.
    pub async fn shutdown(&mut self) {
        self.cache.shutdown().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn fetcher() -> CachedFetcher {
        CachedFetcher::new(Client::new(), ExpiringCache::new(Duration::from_secs(60)))
    }

    #[tokio::test]
    async fn test_resolve_prefers_cache() {
        let fetcher = fetcher();
        // Nothing listens here; a network attempt would fail
        let url = "http://127.0.0.1:9/location-area/";
        fetcher.cache().add(url, "cached-body").await;

        let resolved = fetcher.resolve(url).await.unwrap();

        assert_eq!(resolved.origin, Origin::Cache);
        assert_eq!(resolved.body, Bytes::from("cached-body"));
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_cached() {
        let fetcher = fetcher();
        let url = "http://127.0.0.1:9/pokemon/pikachu";

        let result = fetcher.resolve(url).await;

        assert!(matches!(result, Err(PokedexError::Transport(_))));
        assert!(fetcher.cache().get(url).await.is_none());
    }
}
