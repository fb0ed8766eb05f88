//! Team Selection
//!
//! Sampling, goalie ranking and role partition. Everything after sampling is
//! a pure function of the sampled players and their draw order.

use std::cmp::Ordering;

use rand::seq::index;
use rand::Rng;

use crate::error::{Result, TeamError};
use crate::models::{Player, Team, TeamComposition};

// == Sampling ==
/// Draws `count` distinct ids uniformly from `1..=total`, in draw order.
pub fn sample_ids<R: Rng + ?Sized>(rng: &mut R, total: u32, count: usize) -> Result<Vec<u32>> {
    if count > total as usize {
        return Err(TeamError::SamplingPrecondition {
            requested: count,
            total,
        });
    }

    Ok(index::sample(rng, total as usize, count)
        .into_iter()
        .map(|i| i as u32 + 1)
        .collect())
}

// == Goalie Ranking ==
/// True if `candidate` should replace `best` as goalie: strictly taller, or
/// the same height and strictly lighter.
fn outranks_as_goalie(candidate: &Player, best: &Player) -> bool {
    candidate.height_cm > best.height_cm
        || (candidate.height_cm == best.height_cm && candidate.weight_kg < best.weight_kg)
}

/// Returns the position of the goalie in `players`.
///
/// Single left-to-right scan; on a full tie the first player seen keeps the
/// spot. `None` only for an empty slice.
pub fn select_goalie(players: &[Player]) -> Option<usize> {
    let mut best: Option<usize> = None;

    for (i, candidate) in players.iter().enumerate() {
        match best {
            Some(b) if !outranks_as_goalie(candidate, &players[b]) => {}
            _ => best = Some(i),
        }
    }

    best
}

/// Ascending by weight, then height. Numerically equal values, `-0.0` and
/// `0.0` included, compare equal so the stable sort keeps draw order.
fn by_weight_then_height(a: &Player, b: &Player) -> Ordering {
    a.weight_kg
        .partial_cmp(&b.weight_kg)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.height_cm
                .partial_cmp(&b.height_cm)
                .unwrap_or(Ordering::Equal)
        })
}

// == Partition ==
/// Builds a team from players in draw order.
///
/// The goalie is removed by position; the rest is stable-sorted by
/// `(weight_kg, height_cm)`. The heaviest `defence` players form the
/// defence and the lightest `offence` players the offence, both ascending.
pub fn build_team(composition: TeamComposition, players: Vec<Player>) -> Result<Team> {
    composition.validate()?;

    if players.len() != composition.size {
        return Err(TeamError::Internal(format!(
            "expected {} players, got {}",
            composition.size,
            players.len()
        )));
    }

    let goalie_index = select_goalie(&players)
        .ok_or_else(|| TeamError::Internal("no players to pick a goalie from".to_string()))?;

    let mut rest = players.clone();
    let goalie = rest.remove(goalie_index);
    rest.sort_by(by_weight_then_height);

    let offence = rest[..composition.offence].to_vec();
    let defence = rest[rest.len() - composition.defence..].to_vec();

    Ok(Team {
        team_composition: composition,
        players,
        goalie,
        defence,
        offence,
    })
}
