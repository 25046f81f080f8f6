//! Configuration Module
//!
//! Handles loading client configuration from environment variables, with
//! command-line flags taking precedence.

use std::env;
use std::time::Duration;

use crate::cache::DEFAULT_SWEEP_INTERVAL_SECS;

/// Default PokeAPI root.
pub const DEFAULT_API_URL: &str = "https://pokeapi.co/api/v2/";

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root; resource paths are joined onto it
    pub api_url: String,
    /// Background cache sweep interval in seconds
    pub cache_interval: u64,
    /// HTTP request timeout in seconds
    pub http_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEDEX_API_URL` - API root (default: https://pokeapi.co/api/v2/)
    /// - `POKEDEX_CACHE_INTERVAL` - Cache sweep interval in seconds (default: 300)
    /// - `POKEDEX_HTTP_TIMEOUT` - Request timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("POKEDEX_API_URL").unwrap_or(defaults.api_url),
            cache_interval: env::var("POKEDEX_CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_interval),
            http_timeout: env::var("POKEDEX_HTTP_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.http_timeout),
        }
    }

    /// Creates a Config pointing at a different API root, other values default.
    pub fn with_api_url(api_url: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            ..Self::default()
        }
    }

    /// Listing and area-detail resource base, always ending in `/`.
    pub fn location_area_url(&self) -> String {
        format!("{}location-area/", self.root())
    }

    /// Pokemon detail resource base, always ending in `/`.
    pub fn pokemon_url(&self) -> String {
        format!("{}pokemon/", self.root())
    }

    pub fn cache_interval(&self) -> Duration {
        Duration::from_secs(self.cache_interval)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    fn root(&self) -> String {
        if self.api_url.ends_with('/') {
            self.api_url.clone()
        } else {
            format!("{}/", self.api_url)
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            cache_interval: DEFAULT_SWEEP_INTERVAL_SECS,
            http_timeout: 10,
        }
    }
}
