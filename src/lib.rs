//! Random Teams - A small HTTP service assembling random sports teams
//!
//! Players are drawn from external catalogs, normalized, and cached with a
//! TTL before being split into goalie, defence and offence.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod source;
pub mod team;

pub use api::AppState;
pub use config::Config;
