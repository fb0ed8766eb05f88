//! Cache Entry Module
//!
//! Pairs a cached player with the instant it was written.

use chrono::{DateTime, Duration, Utc};

use crate::models::Player;

// == Cache Entry ==
/// A single cached player with its write timestamp.
#[derive(Debug, Clone)]
pub(crate) struct CacheEntry {
    /// The stored player
    pub(crate) player: Player,
    /// Write timestamp (UTC)
    pub(crate) written_at: DateTime<Utc>,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new entry stamped with the current time.
    pub(crate) fn new(player: Player) -> Self {
        Self {
            player,
            written_at: Utc::now(),
        }
    }

    // == Age ==
    /// Time elapsed since the entry was written.
    pub(crate) fn age(&self) -> Duration {
        Utc::now() - self.written_at
    }

    // == Is Expired ==
    /// Checks if the entry has outlived `ttl`.
    ///
    /// Boundary condition: an entry whose age equals the TTL exactly is still
    /// fresh. It expires only once the age is strictly greater.
    pub(crate) fn is_expired(&self, ttl: Duration) -> bool {
        self.age() > ttl
    }
}
