//! API Module
//!
//! HTTP handlers and routing for the team service REST API.
//!
//! # Endpoints
//! - `GET /random_pokemon_team` - Random team from the creature catalog
//! - `GET /random_starwars_team` - Random team from the character catalog
//! - `GET /stats` - Cache and upstream counters
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
