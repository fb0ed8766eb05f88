//! Team Module
//!
//! Cache-aware player resolution and the random team assembly built on it.

mod assembler;
mod provider;
mod selection;

#[cfg(test)]
pub(crate) mod test_support;

pub use assembler::TeamAssembler;
pub use provider::PlayerProvider;
pub use selection::{build_team, sample_ids, select_goalie};
