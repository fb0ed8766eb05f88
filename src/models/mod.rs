//! Domain models and response DTOs for the team service
//!
//! `Player`, `TeamComposition` and `Team` are the domain values; the
//! `responses` module holds the bodies of the auxiliary endpoints.

pub mod player;
pub mod responses;
pub mod team;

// Re-export commonly used types
pub use player::{Player, UNKNOWN_MEASURE};
pub use responses::{
    CacheStatsResponse, CatalogStats, ErrorResponse, HealthResponse, StatsResponse,
};
pub use team::{Team, TeamComposition};
