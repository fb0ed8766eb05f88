//! Character catalog source (SWAPI).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::{entity_url, fetch_json, PlayerSource};
use crate::error::FetchError;
use crate::models::{Player, UNKNOWN_MEASURE};

const UNKNOWN: &str = "unknown";

// == Raw Entity ==
/// Character as returned by the API. Every field is text, and any of them
/// may be `"unknown"`.
#[derive(Debug, Clone, Deserialize)]
pub struct StarwarsEntity {
    pub name: String,
    pub mass: String,
    pub height: String,
}

impl StarwarsEntity {
    /// Converts to a player. Unknown measures become `-1`, an unknown name
    /// becomes `"-1"`.
    pub fn into_player(self) -> Result<Player, FetchError> {
        let weight_kg = parse_measure("mass", &self.mass)?;
        let height_cm = parse_measure("height", &self.height)?;
        let name = if self.name == UNKNOWN {
            "-1".to_string()
        } else {
            self.name
        };

        Ok(Player::new(name, weight_kg, height_cm))
    }
}

/// Parses a measure such as `"1,358"`, mapping `"unknown"` to the sentinel.
fn parse_measure(field: &str, raw: &str) -> Result<f64, FetchError> {
    if raw == UNKNOWN {
        return Ok(UNKNOWN_MEASURE);
    }

    raw.replace(',', "")
        .trim()
        .parse::<f64>()
        .map_err(|_| FetchError::Malformed(format!("{} is not a number: {:?}", field, raw)))
}

/// Body of the collection endpoint; only the count is read.
#[derive(Debug, Clone, Deserialize)]
pub struct StarwarsCount {
    pub count: u32,
}

// == Starwars Source ==
/// Fetches characters from `{base_url}/{id}`; the population size comes from
/// `{base_url}`.
#[derive(Debug, Clone)]
pub struct StarwarsSource {
    client: Client,
    base_url: String,
}

impl StarwarsSource {
    // == Constructor ==
    /// Creates a source reading characters below `base_url`.
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PlayerSource for StarwarsSource {
    fn name(&self) -> &'static str {
        "starwars"
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Player, FetchError> {
        let url = entity_url(&self.base_url, id);
        let entity: StarwarsEntity = fetch_json(&self.client, &url).await?;
        entity.into_player()
    }

    async fn fetch_total_count(&self) -> Result<u32, FetchError> {
        let body: StarwarsCount = fetch_json(&self.client, &self.base_url).await?;
        Ok(body.count)
    }
}
