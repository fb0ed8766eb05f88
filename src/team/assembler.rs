//! Team Assembler
//!
//! Samples ids from a catalog, resolves them through a `PlayerProvider` and
//! partitions the result into a `Team`.

use std::sync::Arc;

use futures::future::join_all;
use tracing::debug;

use crate::error::{Result, TeamError};
use crate::models::{Team, TeamComposition};
use crate::team::selection::{build_team, sample_ids};
use crate::team::PlayerProvider;

// == Team Assembler ==
/// Builds random teams from one catalog.
pub struct TeamAssembler {
    provider: Arc<PlayerProvider>,
    composition: TeamComposition,
}

impl TeamAssembler {
    // == Constructor ==
    /// Creates an assembler using the default 1/2/2 composition.
    pub fn new(provider: Arc<PlayerProvider>) -> Self {
        Self {
            provider,
            composition: TeamComposition::default(),
        }
    }

    // == With Composition ==
    /// Creates an assembler with a custom composition, rejecting shapes the
    /// partition cannot fill.
    pub fn with_composition(
        provider: Arc<PlayerProvider>,
        composition: TeamComposition,
    ) -> Result<Self> {
        composition.validate()?;
        Ok(Self {
            provider,
            composition,
        })
    }

    // == Accessors ==
    /// Provider players are resolved through.
    pub fn provider(&self) -> &PlayerProvider {
        &self.provider
    }

    /// Shape of the teams this assembler builds.
    pub fn composition(&self) -> TeamComposition {
        self.composition
    }

    // == Random Team ==
    /// Samples `composition.size` distinct ids and assembles a team from them.
    pub async fn get_random_team(&self) -> Result<Team> {
        let cache_size = self.provider.cache_size().await;
        debug!("{} cache size - {}", self.provider.name(), cache_size);

        // ThreadRng is !Send, keep it out of scope across awaits
        let ids = {
            let mut rng = rand::thread_rng();
            sample_ids(&mut rng, self.provider.total(), self.composition.size)?
        };

        self.assemble(&ids).await
    }

    // == Assemble ==
    /// Resolves `ids` and builds a team, keeping `ids` order as draw order.
    ///
    /// Ids are resolved concurrently. If any id resolves to nothing the whole
    /// assembly fails with `PlayerUnavailable`.
    pub async fn assemble(&self, ids: &[u32]) -> Result<Team> {
        let resolved = join_all(ids.iter().map(|&id| self.provider.resolve(id))).await;

        let players = ids
            .iter()
            .zip(resolved)
            .map(|(&id, player)| player.ok_or(TeamError::PlayerUnavailable(id)))
            .collect::<Result<Vec<_>>>()?;

        build_team(self.composition, players)
    }
}
