//! Cache Module
//!
//! Provides the in-memory player cache with lazy TTL expiration.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use stats::CacheStats;
pub use store::ExpiringCache;

// == Public Constants ==
/// Default entry lifetime in seconds (one day)
pub const DEFAULT_TTL_SECS: u64 = 86_400;
