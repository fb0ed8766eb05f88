//! Error types for the team service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Fetch Error Enum ==
/// Failure while fetching or normalizing an entity from a catalog.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport failure or non-success status from the catalog
    #[error("Upstream request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Payload could not be converted into a player
    #[error("Malformed upstream payload: {0}")]
    Malformed(String),
}

// == Team Error Enum ==
/// Errors surfaced by team assembly.
#[derive(Error, Debug)]
pub enum TeamError {
    /// More distinct ids requested than the catalog holds
    #[error("Cannot sample {requested} distinct players from a population of {total}")]
    SamplingPrecondition { requested: usize, total: u32 },

    /// Composition the partition step cannot fill
    #[error("Invalid team composition: {0}")]
    InvalidComposition(String),

    /// A sampled id could not be resolved to a player
    #[error("Player {0} is unavailable")]
    PlayerUnavailable(u32),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for TeamError {
    fn into_response(self) -> Response {
        let status = match &self {
            TeamError::PlayerUnavailable(_) => StatusCode::BAD_GATEWAY,
            TeamError::SamplingPrecondition { .. }
            | TeamError::InvalidComposition(_)
            | TeamError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for team assembly.
pub type Result<T> = std::result::Result<T, TeamError>;
