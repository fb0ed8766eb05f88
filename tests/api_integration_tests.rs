//! Integration Tests for API Endpoints
//!
//! Tests full request/response cycle for each endpoint, with catalogs
//! replaced by in-memory sources.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use random_teams::{
    api::create_router,
    cache::ExpiringCache,
    error::FetchError,
    models::Player,
    source::PlayerSource,
    team::{PlayerProvider, TeamAssembler},
    AppState,
};
use serde_json::Value;
use tokio::sync::RwLock;
use tower::ServiceExt;

// == Helper Types ==

struct FixedSource {
    players: HashMap<u32, Player>,
    total: u32,
}

#[async_trait]
impl PlayerSource for FixedSource {
    fn name(&self) -> &'static str {
        "fixed"
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Player, FetchError> {
        self.players
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchError::Malformed(format!("no entity {}", id)))
    }

    async fn fetch_total_count(&self) -> Result<u32, FetchError> {
        Ok(self.total)
    }
}

// == Helper Functions ==

fn fixed_players() -> HashMap<u32, Player> {
    HashMap::from([
        (1, Player::new("Bulbasaur", 6.9, 70.0)),
        (2, Player::new("Ivysaur", 13.0, 100.0)),
        (3, Player::new("Venusaur", 100.0, 200.0)),
        (4, Player::new("Charmander", 8.5, 60.0)),
        (5, Player::new("Charmeleon", 19.0, 110.0)),
    ])
}

async fn assembler(players: HashMap<u32, Player>, total: u32) -> TeamAssembler {
    let source = Arc::new(FixedSource { players, total });
    let cache = Arc::new(RwLock::new(ExpiringCache::new(300)));
    let provider = PlayerProvider::new(source, cache).await.unwrap();
    TeamAssembler::new(Arc::new(provider))
}

async fn create_test_app() -> Router {
    let state = AppState::new(
        assembler(fixed_players(), 5).await,
        assembler(fixed_players(), 5).await,
    );
    create_router(state)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn player_names(json: &Value) -> Vec<String> {
    json.as_array()
        .unwrap()
        .iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

// == Team Endpoint Tests ==

#[tokio::test]
async fn test_random_pokemon_team_shape() {
    let app = create_test_app().await;

    let (status, json) = get(app, "/random_pokemon_team").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["team_composition"]["size"], 5);
    assert_eq!(json["team_composition"]["goalies"], 1);
    assert_eq!(json["players"].as_array().unwrap().len(), 5);
    assert_eq!(json["defence"].as_array().unwrap().len(), 2);
    assert_eq!(json["offence"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_random_team_roles() {
    let app = create_test_app().await;

    let (status, json) = get(app, "/random_starwars_team").await;
    assert_eq!(status, StatusCode::OK);

    // The whole catalog is drawn, so roles are fixed whatever the order
    assert_eq!(json["goalie"]["name"], "Venusaur");
    assert_eq!(player_names(&json["offence"]), vec!["Bulbasaur", "Charmander"]);
    assert_eq!(player_names(&json["defence"]), vec!["Ivysaur", "Charmeleon"]);

    let mut players = player_names(&json["players"]);
    players.sort();
    assert_eq!(
        players,
        vec!["Bulbasaur", "Charmander", "Charmeleon", "Ivysaur", "Venusaur"]
    );
}

#[tokio::test]
async fn test_missing_player_returns_bad_gateway() {
    let mut players = fixed_players();
    players.remove(&3);
    let state = AppState::new(
        assembler(players, 5).await,
        assembler(fixed_players(), 5).await,
    );
    let app = create_router(state);

    let (status, json) = get(app, "/random_pokemon_team").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(json["error"].as_str().unwrap().contains('3'));
}

#[tokio::test]
async fn test_small_catalog_returns_error() {
    let state = AppState::new(
        assembler(fixed_players(), 4).await,
        assembler(fixed_players(), 5).await,
    );
    let app = create_router(state);

    let (status, json) = get(app, "/random_pokemon_team").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(json["error"].as_str().unwrap().contains("population of 4"));
}

// == Stats Endpoint Tests ==

#[tokio::test]
async fn test_stats_reflect_cache_usage() {
    let app = create_test_app().await;

    get(app.clone(), "/random_pokemon_team").await;
    get(app.clone(), "/random_pokemon_team").await;
    let (status, json) = get(app, "/stats").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["pokemon"]["total"], 5);
    assert_eq!(json["pokemon"]["cache"]["misses"], 5);
    assert_eq!(json["pokemon"]["cache"]["hits"], 5);
    assert_eq!(json["pokemon"]["cache"]["total_entries"], 5);
    assert_eq!(json["pokemon"]["fetch_failures"], 0);
    assert_eq!(json["starwars"]["cache"]["total_entries"], 0);
}

// == Health Endpoint Tests ==

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app().await;

    let (status, json) = get(app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
