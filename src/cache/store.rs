//! Expiring Cache Module
//!
//! Player cache keyed by catalog id, with read-time TTL expiration.

use std::collections::HashMap;

use chrono::Duration;

use crate::cache::entry::CacheEntry;
use crate::cache::CacheStats;
use crate::models::Player;

// == Expiring Cache ==
/// Maps catalog ids to players, each entry valid for `ttl` after it was written.
///
/// Expired entries are not swept. They stay stored until a `get` finds them,
/// so `size()` counts stored slots rather than live entries.
#[derive(Debug)]
pub struct ExpiringCache {
    /// Id to entry storage
    entries: HashMap<u32, CacheEntry>,
    /// Maximum age of a fresh entry
    ttl: Duration,
    /// Lookup statistics
    stats: CacheStats,
}

impl ExpiringCache {
    // == Constructor ==
    /// Creates an empty cache whose entries live for `ttl_secs` seconds.
    pub fn new(ttl_secs: u64) -> Self {
        let ttl = i64::try_from(ttl_secs)
            .ok()
            .and_then(Duration::try_seconds)
            .unwrap_or(Duration::MAX);

        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == TTL ==
    /// Returns the configured time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Get ==
    /// Returns the player cached under `id` if it is still fresh.
    ///
    /// A lookup that finds an expired entry removes it.
    pub fn get(&mut self, id: u32) -> Option<Player> {
        let expired = match self.entries.get(&id) {
            Some(entry) => entry.is_expired(self.ttl),
            None => {
                self.stats.record_miss();
                return None;
            }
        };

        if expired {
            self.entries.remove(&id);
            self.stats.record_expired();
            return None;
        }

        self.stats.record_hit();
        self.entries.get(&id).map(|entry| entry.player.clone())
    }

    // == Put ==
    /// Stores `player` under `id`, replacing any previous entry and resetting
    /// its timestamp.
    ///
    /// Always succeeds; there is no capacity limit.
    pub fn put(&mut self, id: u32, player: Player) -> bool {
        self.entries.insert(id, CacheEntry::new(player));
        true
    }

    // == Size ==
    /// Returns the number of stored entries, expired-but-unread ones included.
    pub fn size(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    /// Backdates the entry for `id`, as if it had been written `age` ago.
    #[cfg(test)]
    pub(crate) fn age_entry(&mut self, id: u32, age: Duration) {
        if let Some(entry) = self.entries.get_mut(&id) {
            entry.written_at = chrono::Utc::now() - age;
        }
    }
}
