//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_TTL_SECS;

/// Default creature catalog endpoint
pub const DEFAULT_POKEMON_API: &str = "https://pokeapi.co/api/v2/pokemon";
/// Default character catalog endpoint
pub const DEFAULT_STARWARS_API: &str = "https://swapi.dev/api/people";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the creature catalog
    pub pokemon_api: String,
    /// Base URL of the character catalog
    pub starwars_api: String,
    /// Player cache TTL in seconds
    pub cache_ttl: u64,
    /// HTTP server port
    pub server_port: u16,
    /// Outbound request timeout in seconds
    pub request_timeout: u64,
    /// Verbose logging
    pub debug: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEMON_API` - Creature catalog base URL
    /// - `ALT_STARWARS_API` - Character catalog base URL
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 86400)
    /// - `SERVER_PORT` - HTTP server port (default: 5000)
    /// - `REQUEST_TIMEOUT` - Outbound timeout in seconds (default: 10)
    /// - `DEBUG` - `true` or `1` for debug logging (default: false)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            pokemon_api: env::var("POKEMON_API").unwrap_or(defaults.pokemon_api),
            starwars_api: env::var("ALT_STARWARS_API").unwrap_or(defaults.starwars_api),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout),
            debug: env::var("DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.debug),
        }
    }

    /// Default tracing filter when `RUST_LOG` is not set.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "random_teams=debug,tower_http=debug"
        } else {
            "random_teams=info,tower_http=info"
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokemon_api: DEFAULT_POKEMON_API.to_string(),
            starwars_api: DEFAULT_STARWARS_API.to_string(),
            cache_ttl: DEFAULT_TTL_SECS,
            server_port: 5000,
            request_timeout: 10,
            debug: false,
        }
    }
}
