//! HTTP client for the PokeAPI.

use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{CacheError, CommandError, Result};

/// Client for the location-area and pokemon endpoints.
///
/// URLs built here are also the cache keys, so the same resource always maps
/// to the same key.
#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    page_size: u32,
}

impl PokeApiClient {
    /// Creates a client with no request timeout.
    pub fn new(base_url: impl Into<String>, page_size: u32) -> Self {
        Self::with_client(Client::new(), base_url, page_size)
    }

    /// Creates a client around an existing `reqwest::Client`.
    pub fn with_client(http: Client, base_url: impl Into<String>, page_size: u32) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            page_size,
        }
    }

    /// Creates a client from configuration, applying the optional timeout.
    pub fn from_config(config: &Config) -> std::result::Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.http_timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(
            builder.build()?,
            config.base_url.clone(),
            config.page_size,
        ))
    }

    // == Base URL ==
    /// Returns the API root, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // == URL Builders ==
    /// First page of the location-area listing.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/location-area?offset=0&limit={}",
            self.base_url, self.page_size
        )
    }

    /// Detail URL for one location area.
    pub fn location_area_url(&self, area: &str) -> Result<String> {
        self.resource_url("location-area", area)
    }

    /// Detail URL for one pokemon.
    pub fn pokemon_url(&self, name: &str) -> Result<String> {
        self.resource_url("pokemon", name)
    }

    /// Appends `resource/name` to the base path.
    ///
    /// `name` always stays a single path segment: `/`, `?`, `#` and `%` are
    /// percent-encoded, and the dot segments are rejected since they would
    /// be collapsed away.
    fn resource_url(&self, resource: &str, name: &str) -> Result<String> {
        if matches!(name, "" | "." | "..") {
            return Err(CommandError::InvalidArgument(name.to_string()));
        }

        let mut url = parse_url(&self.base_url)?;
        url.path_segments_mut()
            .map_err(|()| CommandError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(resource)
            .push(name);
        Ok(url.into())
    }

    // == Fetch ==
    /// Issues a GET and returns the raw body.
    ///
    /// Any status above 299 is an error.
    pub async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        info!("GET {}", url);
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| CommandError::Network {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() > 299 {
            return Err(CommandError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| CommandError::Network {
                url: url.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }

    // == Fetch Cached ==
    /// Decodes the resource at `url`, reading through `cache`.
    ///
    /// The cache key is `url` in its parsed, serialized form, which is the
    /// exact URL requested. On a hit the network is skipped. On a miss the
    /// body is fetched, decoded, and only then stored. A duplicate-key
    /// rejection from the cache is logged and ignored since the data is
    /// already cached.
    pub async fn fetch_cached<T: DeserializeOwned>(&self, cache: &Cache, url: &str) -> Result<T> {
        let resolved = parse_url(url)?;
        let url = resolved.as_str();

        if let Some(body) = cache.get(url).await {
            debug!(url, "Cache hit");
            return decode(url, &body);
        }

        debug!(url, "Cache miss");
        let body = self.fetch(url).await?;
        let value = decode(url, &body)?;

        match cache.add(url, body).await {
            Ok(()) => debug!(url, "Stored response in cache"),
            Err(CacheError::AlreadyExists(key)) => {
                debug!(%key, "Response already cached, keeping existing entry")
            }
        }
        Ok(value)
    }
}

fn parse_url(url: &str) -> Result<Url> {
    Url::parse(url).map_err(|err| CommandError::InvalidUrl(format!("{} ({})", url, err)))
}

fn decode<T: DeserializeOwned>(url: &str, body: &[u8]) -> Result<T> {
    serde_json::from_slice(body).map_err(|source| CommandError::Decode {
        url: url.to_string(),
        source,
    })
}
