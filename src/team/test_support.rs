//! In-memory `PlayerSource` for unit tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::error::FetchError;
use crate::models::Player;
use crate::source::PlayerSource;

/// Players with ids `1..=count`, each heavier and taller than the last.
pub(crate) fn stub_players(count: u32) -> HashMap<u32, Player> {
    (1..=count)
        .map(|id| {
            let player = Player::new(
                format!("player{}", id),
                50.0 + id as f64,
                150.0 + id as f64,
            );
            (id, player)
        })
        .collect()
}

/// Serves players from a map. Unknown ids fail like an upstream 404.
pub(crate) struct StubSource {
    players: HashMap<u32, Player>,
    total: Option<u32>,
    fetch_calls: AtomicUsize,
}

impl StubSource {
    pub(crate) fn new(players: HashMap<u32, Player>) -> Self {
        let total = Some(players.len() as u32);
        Self {
            players,
            total,
            fetch_calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_total(mut self, total: u32) -> Self {
        self.total = Some(total);
        self
    }

    pub(crate) fn failing_total(mut self) -> Self {
        self.total = None;
        self
    }

    pub(crate) fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PlayerSource for StubSource {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn fetch_by_id(&self, id: u32) -> Result<Player, FetchError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.players
            .get(&id)
            .cloned()
            .ok_or_else(|| FetchError::Malformed(format!("no entity {}", id)))
    }

    async fn fetch_total_count(&self) -> Result<u32, FetchError> {
        self.total
            .ok_or_else(|| FetchError::Malformed("count missing".to_string()))
    }
}
