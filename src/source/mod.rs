//! Player Sources
//!
//! External catalogs that players are drawn from. Each source fetches a raw
//! entity by id and normalizes it into a `Player`.
//!
//! # Sources
//! - `PokemonSource`: creature catalog, fixed population size
//! - `StarwarsSource`: character catalog, population size read from the API

mod pokemon;
mod starwars;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::FetchError;
use crate::models::Player;

pub use pokemon::{PokemonEntity, PokemonSource, POKEMON_TOTAL};
pub use starwars::{StarwarsCount, StarwarsEntity, StarwarsSource};

// == Player Source ==
/// A catalog that can be sampled for players.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    /// Catalog name used in logs
    fn name(&self) -> &'static str;

    /// Fetches the entity with `id` and normalizes it.
    async fn fetch_by_id(&self, id: u32) -> Result<Player, FetchError>;

    /// Returns how many entities the catalog holds. Ids run from 1 to this value.
    async fn fetch_total_count(&self) -> Result<u32, FetchError>;
}

/// Issues a GET to `url` and decodes the JSON body.
///
/// Non-success statuses are returned as `FetchError::Http`.
pub(crate) async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, FetchError> {
    debug!("API CALL - {}", url);

    let body = client
        .get(url)
        .send()
        .await?
        .error_for_status()?
        .json::<T>()
        .await?;

    Ok(body)
}

/// Joins a catalog base URL and an entity id.
pub(crate) fn entity_url(base_url: &str, id: u32) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), id)
}
