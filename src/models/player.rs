//! Player Model
//!
//! The normalized shape every catalog entity is converted into.

use serde::{Deserialize, Serialize};

/// Weight or height reported as unknown by a catalog.
pub const UNKNOWN_MEASURE: f64 = -1.0;

// == Player ==
/// A catalog entity normalized to metric units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Display name
    pub name: String,
    /// Weight in kilograms, or `UNKNOWN_MEASURE`
    pub weight_kg: f64,
    /// Height in centimetres, or `UNKNOWN_MEASURE`
    pub height_cm: f64,
}

impl Player {
    /// Creates a new Player
    pub fn new(name: impl Into<String>, weight_kg: f64, height_cm: f64) -> Self {
        Self {
            name: name.into(),
            weight_kg,
            height_cm,
        }
    }
}
