//! Creature catalog source (PokéAPI).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{entity_url, fetch_json, PlayerSource};
use crate::error::FetchError;
use crate::models::Player;

/// Number of creatures in the catalog. The API is not asked for it.
pub const POKEMON_TOTAL: u32 = 1025;

// == Raw Entity ==
/// Creature as returned by the API. Weight is in hectograms, height in
/// decimetres.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEntity {
    pub name: String,
    pub weight: f64,
    pub height: f64,
}

impl PokemonEntity {
    /// Converts to a player in kilograms and centimetres.
    pub fn into_player(self) -> Player {
        Player::new(self.name, self.weight / 10.0, self.height * 10.0)
    }
}

// == Pokemon Source ==
/// Fetches creatures from `{base_url}/{id}`.
#[derive(Debug, Clone)]
pub struct PokemonSource {
    client: Client,
    base_url: String,
}

impl PokemonSource {
    // == Constructor ==
    /// Creates a source reading creatures below `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PlayerSource for PokemonSource {
    fn name(&self) -> &'static str {
        "pokemon"
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Player, FetchError> {
        let url = entity_url(&self.base_url, id);
        let entity: PokemonEntity = fetch_json(&self.client, &url).await?;
        Ok(entity.into_player())
    }

    async fn fetch_total_count(&self) -> Result<u32, FetchError> {
        Ok(POKEMON_TOTAL)
    }
}
