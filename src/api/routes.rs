//! API Routes
//!
//! Configures the Axum router with all team service endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    health_handler, random_pokemon_team_handler, random_starwars_team_handler, stats_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /random_pokemon_team` - Team drawn from the creature catalog
/// - `GET /random_starwars_team` - Team drawn from the character catalog
/// - `GET /stats` - Cache and upstream counters
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/random_pokemon_team", get(random_pokemon_team_handler))
        .route("/random_starwars_team", get(random_starwars_team_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
