//! API Handlers
//!
//! HTTP request handlers for each team service endpoint.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::info;

use crate::cache::ExpiringCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{CatalogStats, HealthResponse, StatsResponse, Team};
use crate::source::{PlayerSource, PokemonSource, StarwarsSource};
use crate::team::{PlayerProvider, TeamAssembler};

/// Application state shared across all handlers.
///
/// One assembler per catalog, each with its own provider and cache.
#[derive(Clone)]
pub struct AppState {
    /// Creature catalog teams
    pub pokemon: Arc<TeamAssembler>,
    /// Character catalog teams
    pub starwars: Arc<TeamAssembler>,
}

impl AppState {
    /// Creates a new AppState from ready assemblers.
    pub fn new(pokemon: TeamAssembler, starwars: TeamAssembler) -> Self {
        Self {
            pokemon: Arc::new(pokemon),
            starwars: Arc::new(starwars),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the shared HTTP client, one cache per catalog, and the
    /// providers. Fails if a catalog cannot report its population size.
    pub async fn from_config(config: &Config) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .context("Failed to build HTTP client")?;

        let pokemon = build_assembler(
            Arc::new(PokemonSource::new(client.clone(), &config.pokemon_api)),
            config.cache_ttl,
        )
        .await?;
        let starwars = build_assembler(
            Arc::new(StarwarsSource::new(client, &config.starwars_api)),
            config.cache_ttl,
        )
        .await?;

        Ok(Self::new(pokemon, starwars))
    }
}

async fn build_assembler(
    source: Arc<dyn PlayerSource>,
    cache_ttl: u64,
) -> anyhow::Result<TeamAssembler> {
    let name = source.name();
    let cache = Arc::new(RwLock::new(ExpiringCache::new(cache_ttl)));
    let provider = PlayerProvider::new(source, cache)
        .await
        .with_context(|| format!("Failed to read {} catalog size", name))?;

    info!("{} provider ready (cache ttl {}s)", name, cache_ttl);
    Ok(TeamAssembler::new(Arc::new(provider)))
}

/// Handler for GET /random_pokemon_team
pub async fn random_pokemon_team_handler(State(state): State<AppState>) -> Result<Json<Team>> {
    let team = state.pokemon.get_random_team().await?;
    Ok(Json(team))
}

/// Handler for GET /random_starwars_team
pub async fn random_starwars_team_handler(State(state): State<AppState>) -> Result<Json<Team>> {
    let team = state.starwars.get_random_team().await?;
    Ok(Json(team))
}

/// Handler for GET /stats
///
/// Returns cache and upstream counters for both catalogs.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(StatsResponse {
        pokemon: catalog_stats(state.pokemon.provider()).await,
        starwars: catalog_stats(state.starwars.provider()).await,
    })
}

async fn catalog_stats(provider: &PlayerProvider) -> CatalogStats {
    CatalogStats {
        total: provider.total(),
        cache: provider.cache_stats().await.into(),
        fetch_failures: provider.fetch_failures(),
    }
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
