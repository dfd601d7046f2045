//! Snapshot and resume of a game session.
//!
//! A checkpoint lets a presentation layer that gets torn down (a window
//! closed, an activity recreated) pick the session up where it left off.
//! Checkpoints are plain byte blobs; storing them is the caller's job.

use crate::core::StateHistory;
use crate::game::{describe, GameState, Round};
use crate::stats::{RoundOutcome, Scoreboard};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use stillwater::validation::Validation;
use uuid::Uuid;

pub mod error;

pub use error::CheckpointError;

/// Version identifier for checkpoint format
pub const CHECKPOINT_VERSION: u32 = 1;

/// Serializable snapshot of a game.
///
/// Holds neither the RNG nor the presenter; both are supplied again when
/// resuming through [`GameBuilder::resume`](crate::builder::GameBuilder::resume).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Checkpoint {
    /// Checkpoint format version
    pub version: u32,

    /// Unique checkpoint identifier
    pub id: Uuid,

    /// When checkpoint was created
    pub timestamp: DateTime<Utc>,

    /// State the game was in
    pub state: GameState,

    /// Round in play
    pub round: Round,

    /// Transitions of the current round
    pub history: StateHistory<GameState>,

    /// Results of finished rounds
    pub scoreboard: Scoreboard,

    /// Outcome of the most recently finished round
    pub last_outcome: Option<RoundOutcome>,
}

impl Checkpoint {
    pub(crate) fn capture(
        state: GameState,
        round: Round,
        history: StateHistory<GameState>,
        scoreboard: Scoreboard,
        last_outcome: Option<RoundOutcome>,
    ) -> Self {
        Self {
            version: CHECKPOINT_VERSION,
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            state,
            round,
            history,
            scoreboard,
            last_outcome,
        }
    }

    /// Check the version and that the round fits the recorded state.
    pub fn validate(&self) -> Result<(), CheckpointError> {
        if self.version != CHECKPOINT_VERSION {
            return Err(CheckpointError::UnsupportedVersion {
                found: self.version,
                supported: CHECKPOINT_VERSION,
            });
        }

        match self.round.validate_for(self.state) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(violations) => {
                Err(CheckpointError::ValidationFailed(describe(&violations)))
            }
        }
    }

    /// Serialize checkpoint to JSON.
    pub fn to_json(&self) -> Result<String, CheckpointError> {
        serde_json::to_string(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize and validate a JSON checkpoint.
    pub fn from_json(json: &str) -> Result<Self, CheckpointError> {
        let checkpoint: Self = serde_json::from_str(json)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }

    /// Compact binary encoding.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CheckpointError> {
        bincode::serialize(self).map_err(|e| CheckpointError::SerializationFailed(e.to_string()))
    }

    /// Deserialize and validate a binary checkpoint.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CheckpointError> {
        let checkpoint: Self = bincode::deserialize(bytes)
            .map_err(|e| CheckpointError::DeserializationFailed(e.to_string()))?;
        checkpoint.validate()?;
        Ok(checkpoint)
    }
}
