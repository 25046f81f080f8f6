//! PokeAPI client
//!
//! The four operations the command loop uses: paging through location
//! areas, exploring an area, and looking up a pokemon. All of them read
//! through the same `CachedFetcher`.

use reqwest::Client;
use tracing::{debug, warn};

use crate::api::cursor::PaginationCursor;
use crate::api::fetcher::{CachedFetcher, Origin};
use crate::cache::{CacheStats, ExpiringCache};
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{
    decode_area_page, decode_encounters, decode_pokemon, AreaPage, PokemonDetails,
};

// == PokeAPI Client ==
/// Client for the location-area and pokemon resources.
#[derive(Debug)]
pub struct PokeApiClient {
    fetcher: CachedFetcher,
    cursor: PaginationCursor,
    area_base_url: String,
    pokemon_base_url: String,
}

impl PokeApiClient {
    // == Constructors ==
    /// Creates a client with its own HTTP client and response cache.
    ///
    /// Starts the cache sweep, so this must run inside a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.http_timeout()).build()?;
        let cache = ExpiringCache::new(config.cache_interval());
        Ok(Self::with_parts(config, http, cache))
    }

    /// Creates a client around an existing HTTP client and cache.
    pub fn with_parts(config: &Config, http: Client, cache: ExpiringCache) -> Self {
        let area_base_url = config.location_area_url();
        Self {
            fetcher: CachedFetcher::new(http, cache),
            cursor: PaginationCursor::new(area_base_url.clone()),
            area_base_url,
            pokemon_base_url: config.pokemon_url(),
        }
    }

    // == Listing ==
    /// Fetches the next page of location areas.
    pub async fn list_forward(&mut self) -> Result<AreaPage> {
        let url = self.cursor.forward_url().to_string();
        self.list_page(&url).await
    }

    /// Fetches the previous page of location areas.
    ///
    /// With no previous cursor this is the first page again.
    pub async fn list_backward(&mut self) -> Result<AreaPage> {
        let url = self.cursor.backward_url().to_string();
        self.list_page(&url).await
    }

    async fn list_page(&mut self, url: &str) -> Result<AreaPage> {
        let page = self.fetch_decoded(url, decode_area_page).await?;

        // Cursors come from whatever bytes were decoded, cached or fresh
        self.cursor.update(page.next, page.previous);

        Ok(AreaPage {
            areas: page.results.into_iter().map(|area| area.name).collect(),
            has_next: self.cursor.has_next(),
            has_previous: self.cursor.has_previous(),
        })
    }

    // == Explore ==
    /// Lists the pokemon that can be encountered in `area`.
    pub async fn explore(&self, area: &str) -> Result<Vec<String>> {
        let url = format!("{}{}", self.area_base_url, area);
        self.fetch_decoded(&url, decode_encounters).await
    }

    // == Detail ==
    /// Looks up a single pokemon.
    ///
    /// An upstream 404 becomes `PokedexError::PokemonNotFound`.
    pub async fn get_detail(&self, name: &str) -> Result<PokemonDetails> {
        let url = format!("{}{}", self.pokemon_base_url, name);
        match self.fetch_decoded(&url, decode_pokemon).await {
            Err(e) if e.is_not_found() => Err(PokedexError::PokemonNotFound(name.to_string())),
            other => other,
        }
    }

    /// Resolves `url` and decodes it.
    ///
    /// A cached payload that fails to decode is fetched once more from the
    /// network, which also replaces the bad entry. A fresh payload that fails
    /// to decode is an error.
    async fn fetch_decoded<T>(&self, url: &str, decode: fn(&[u8]) -> Result<T>) -> Result<T> {
        let resolved = self.fetcher.resolve(url).await?;
        match decode(&resolved.body) {
            Ok(value) => Ok(value),
            Err(e) if resolved.origin == Origin::Cache => {
                warn!(url, error = %e, "Cached payload failed to decode, refetching");
                let body = self.fetcher.refresh(url).await?;
                decode(&body)
            }
            Err(e) => {
                debug!(url, error = %e, "Payload failed to decode");
                Err(e)
            }
        }
    }

    // == Accessors ==
    /// Current listing cursor.
    pub fn cursor(&self) -> &PaginationCursor {
        &self.cursor
    }

    /// The response cache behind every lookup.
    pub fn cache(&self) -> &ExpiringCache {
        self.fetcher.cache()
    }

    /// Snapshot of the response cache counters.
    pub async fn cache_stats(&self) -> CacheStats {
        self.fetcher.cache_stats().await
    }

    /// Stops background work owned by the client.
    pub async fn shutdown(&mut self) {
        self.fetcher.shutdown().await;
    }
}
