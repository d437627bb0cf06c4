//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;
use std::time::Duration;

use crate::cache::{ExpiryPolicy, DEFAULT_TTL_SECS};

/// Default PokeAPI root
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default number of location areas per `map` page
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// API root, without trailing slash
    pub base_url: String,
    /// Cache TTL in seconds, also the reaper interval
    pub cache_ttl: u64,
    /// Location areas per page
    pub page_size: u32,
    /// Treat expired-but-unswept cache entries as misses
    pub reject_stale: bool,
    /// Optional HTTP request timeout in seconds; requests block indefinitely when unset
    pub http_timeout: Option<u64>,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - API root (default: https://pokeapi.co/api/v2)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 60)
    /// - `PAGE_SIZE` - Location areas per page (default: 20)
    /// - `CACHE_REJECT_STALE` - `true`/`1` to hide expired entries (default: false)
    /// - `HTTP_TIMEOUT_SECS` - Request timeout in seconds (default: none)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.base_url),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|ttl| *ttl > 0)
                .unwrap_or(defaults.cache_ttl),
            page_size: env::var("PAGE_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size| *size > 0)
                .unwrap_or(defaults.page_size),
            reject_stale: env::var("CACHE_REJECT_STALE")
                .ok()
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.reject_stale),
            http_timeout: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn expiry_policy(&self) -> ExpiryPolicy {
        ExpiryPolicy::from_reject_stale(self.reject_stale)
    }

    pub fn http_timeout(&self) -> Option<Duration> {
        self.http_timeout.map(Duration::from_secs)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: DEFAULT_TTL_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            reject_stale: false,
            http_timeout: None,
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
