//! Team Models
//!
//! Roster shape configuration and the assembled team returned to clients.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TeamError};
use crate::models::Player;

// == Team Composition ==
/// Number of players per role in a team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamComposition {
    /// Total roster size
    pub size: usize,
    /// Number of goalies
    pub goalies: usize,
    /// Number of defence players
    pub defence: usize,
    /// Number of offence players
    pub offence: usize,
}

impl Default for TeamComposition {
    fn default() -> Self {
        Self {
            size: 5,
            goalies: 1,
            defence: 2,
            offence: 2,
        }
    }
}

impl TeamComposition {
    // == Validate ==
    /// Checks the composition can be filled by the team assembler.
    ///
    /// A team has exactly one goalie slot, and the role counts must add up
    /// to the roster size.
    pub fn validate(&self) -> Result<()> {
        if self.goalies != 1 {
            return Err(TeamError::InvalidComposition(format!(
                "expected exactly 1 goalie, got {}",
                self.goalies
            )));
        }

        let roles = self.goalies + self.defence + self.offence;
        if roles != self.size {
            return Err(TeamError::InvalidComposition(format!(
                "goalies + defence + offence = {} does not match size {}",
                roles, self.size
            )));
        }

        Ok(())
    }
}

// == Team ==
/// A randomly assembled team.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    /// Shape the team was built with
    pub team_composition: TeamComposition,
    /// Every sampled player, in draw order
    pub players: Vec<Player>,
    /// Tallest player, lightest on height ties
    pub goalie: Player,
    /// Heaviest remaining players, ascending
    pub defence: Vec<Player>,
    /// Lightest remaining players, ascending
    pub offence: Vec<Player>,
}
