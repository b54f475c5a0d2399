//! PokeAPI Client
//!
//! Typed fetch operations against PokeAPI, with the TTL response cache
//! sitting between this client and the network. Every fetch consults the
//! cache first, keyed by the full request URL, and only successful
//! response bodies are inserted.

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::cache::TtlCache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationArea, LocationAreaPage, Pokemon};

// == PokeAPI Client ==
/// HTTP client for the PokeAPI endpoints the REPL uses.
///
/// Owns the response cache; repeated fetches of the same resource within
/// the cache interval are served from memory.
#[derive(Debug)]
pub struct PokeApiClient {
    /// Underlying HTTP client
    http: Client,
    /// Response cache keyed by full request URL
    cache: TtlCache,
    /// API base URL, no trailing slash
    base_url: String,
}

impl PokeApiClient {
    // == Constructor ==
    /// Creates a client from configuration.
    ///
    /// Starts the cache's reclamation task, so this must be called
    /// within a Tokio runtime.
    ///
    /// # Errors
    /// Returns [`PokedexError::InvalidInterval`] when the configured
    /// cache interval is zero.
    pub fn new(config: &Config) -> Result<Self> {
        let cache = TtlCache::new(Duration::from_secs(config.cache_interval))?;

        Ok(Self {
            http: Client::new(),
            cache,
            base_url: config.api_base_url.clone(),
        })
    }

    // == URL Construction ==
    /// URL of the first page of the location-area listing.
    pub fn first_location_page_url(&self) -> String {
        format!("{}/location-area/", self.base_url)
    }

    fn location_area_url(&self, area: &str) -> String {
        format!("{}/location-area/{}", self.base_url, area)
    }

    fn pokemon_url(&self, name: &str) -> String {
        format!("{}/pokemon/{}", self.base_url, name)
    }

    // == Fetch Operations ==
    /// Fetches one page of the location-area listing.
    ///
    /// `url` is a full page URL: either
    /// [`first_location_page_url`](Self::first_location_page_url) or a
    /// `next`/`previous` cursor from an earlier page.
    pub async fn fetch_location_page(&self, url: &str) -> Result<LocationAreaPage> {
        let body = self.cached_get(url).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the detail of a single location area by name.
    pub async fn fetch_location_area(&self, area: &str) -> Result<LocationArea> {
        let body = self.cached_get(&self.location_area_url(area)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Fetches the detail of a single pokemon by name.
    pub async fn fetch_pokemon(&self, name: &str) -> Result<Pokemon> {
        let body = self.cached_get(&self.pokemon_url(name)).await?;
        Ok(serde_json::from_slice(&body)?)
    }

    // == Cached Get ==
    /// Returns the response body for `url`, from cache when possible.
    ///
    /// On a miss the request goes out, a non-success status becomes
    /// [`PokedexError::UnexpectedStatus`], and the raw body is cached
    /// before being returned. Failed fetches leave no cache entry.
    async fn cached_get(&self, url: &str) -> Result<Vec<u8>> {
        if let Some(body) = self.cache.get(url).await {
            debug!(%url, "cache hit");
            return Ok(body);
        }

        debug!(%url, "cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(PokedexError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?.to_vec();
        self.cache.add(url, body.clone()).await;

        Ok(body)
    }
}
