//! Configuration Module
//!
//! Handles loading and managing REPL configuration from environment variables.

use std::env;

/// Default base URL of the PokeAPI v2 REST endpoints.
pub const DEFAULT_API_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// REPL configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Response cache interval in seconds; entries older than this are
    /// reclaimed, and the reclamation task ticks at the same period
    pub cache_interval: u64,
    /// Base URL for API requests (no trailing slash)
    pub api_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_INTERVAL` - Cache interval in seconds (default: 60)
    /// - `API_BASE_URL` - API base URL (default: the public PokeAPI v2)
    pub fn from_env() -> Self {
        Self {
            cache_interval: env::var("CACHE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            api_base_url: env::var("API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_interval: 60,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}
