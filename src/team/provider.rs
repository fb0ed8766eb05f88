//! Player Provider
//!
//! Cache-aware player lookup in front of a `PlayerSource`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, ExpiringCache};
use crate::error::FetchError;
use crate::models::Player;
use crate::source::PlayerSource;

// == Player Provider ==
/// Resolves catalog ids to players, serving fresh cache entries first.
///
/// The cache is shared behind `Arc<RwLock<>>` and is passed in by the caller,
/// so one cache can be inspected by other components.
pub struct PlayerProvider {
    /// Upstream catalog
    source: Arc<dyn PlayerSource>,
    /// Shared player cache
    cache: Arc<RwLock<ExpiringCache>>,
    /// Catalog population size, read once at construction
    total: u32,
    /// Upstream fetches that failed and were reported as misses
    fetch_failures: AtomicU64,
}

impl PlayerProvider {
    // == Constructor ==
    /// Creates a provider, asking the source for its population size once.
    pub async fn new(
        source: Arc<dyn PlayerSource>,
        cache: Arc<RwLock<ExpiringCache>>,
    ) -> Result<Self, FetchError> {
        let total = source.fetch_total_count().await?;
        info!("{} catalog holds {} entities", source.name(), total);

        Ok(Self {
            source,
            cache,
            total,
            fetch_failures: AtomicU64::new(0),
        })
    }

    // == Name ==
    /// Catalog name of the underlying source.
    pub fn name(&self) -> &'static str {
        self.source.name()
    }

    // == Total ==
    /// Population size established at construction.
    pub fn total(&self) -> u32 {
        self.total
    }

    // == Resolve ==
    /// Returns the player for `id`.
    ///
    /// On a cache miss the source is queried once and a successful result is
    /// cached. A failed fetch is logged, counted in `fetch_failures`, and
    /// reported as `None`.
    pub async fn resolve(&self, id: u32) -> Option<Player> {
        // Write lock: a lookup may evict an expired entry
        let cached = self.cache.write().await.get(id);
        if let Some(player) = cached {
            debug!("{} CACHE HIT - ID: {}", self.name(), id);
            return Some(player);
        }

        debug!("{} CACHE MISS - ID: {}", self.name(), id);
        match self.source.fetch_by_id(id).await {
            Ok(player) => {
                if !self.cache.write().await.put(id, player.clone()) {
                    warn!("{} failed to cache player {}", self.name(), id);
                }
                Some(player)
            }
            Err(e) => {
                self.fetch_failures.fetch_add(1, Ordering::Relaxed);
                warn!("{} fetch failed for id {}: {}", self.name(), id, e);
                None
            }
        }
    }

    // == Fetch Failures ==
    /// Number of fetch failures swallowed by `resolve`.
    pub fn fetch_failures(&self) -> u64 {
        self.fetch_failures.load(Ordering::Relaxed)
    }

    // == Cache Size ==
    /// Stored entries in the shared cache.
    pub async fn cache_size(&self) -> usize {
        self.cache.read().await.size()
    }

    // == Cache Stats ==
    /// Statistics of the shared cache.
    pub async fn cache_stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }
}
