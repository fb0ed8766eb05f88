//! Response DTOs for the team service API
//!
//! Defines the structure of outgoing HTTP response bodies other than `Team`.

use serde::Serialize;

use crate::cache::CacheStats;

/// Cache counters for one catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CacheStatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses, expired reads included
    pub misses: u64,
    /// Number of entries evicted on read after their TTL elapsed
    pub expired: u64,
    /// Stored entries, stale ones not yet read included
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for CacheStatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hits: stats.hits,
            misses: stats.misses,
            expired: stats.expired,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Provider state for one catalog.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    /// Known population size of the catalog
    pub total: u32,
    /// Cache counters
    pub cache: CacheStatsResponse,
    /// Upstream fetches that failed and were served as misses
    pub fetch_failures: u64,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Creature catalog
    pub pokemon: CatalogStats,
    /// Character catalog
    pub starwars: CatalogStats,
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
