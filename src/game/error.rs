//! Errors surfaced by the game state machine.

use crate::game::door::{DoorIndex, DOOR_COUNT};
use crate::game::round::Reveal;
use crate::game::state::GameState;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Inbound operation a caller attempted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    SelectDoor,
    Advance,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectDoor => f.write_str("select a door"),
            Self::Advance => f.write_str("advance"),
        }
    }
}

/// Contract violations by the caller.
///
/// The presentation layer is expected to disable controls that would
/// trigger these, so seeing one means the caller is out of sync.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("door index {index} is out of range (expected 0..{})", DOOR_COUNT)]
    InvalidInput { index: usize },

    #[error("cannot {operation} in state {state:?}: {reason}")]
    InvalidTransition {
        operation: Operation,
        state: GameState,
        reason: &'static str,
    },
}

/// Broken round invariant.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoundViolation {
    #[error("{door} hides the prize but was eliminated")]
    EliminatedPrize { door: DoorIndex },

    #[error("{door} was the first choice but was eliminated")]
    EliminatedFirstChoice { door: DoorIndex },

    #[error("{door} was eliminated before any door was chosen")]
    EliminatedWithoutChoice { door: DoorIndex },

    #[error("a door is selected but no first choice was recorded")]
    SelectionWithoutFirstChoice,

    #[error("{door} is already eliminated in state {state:?}")]
    EliminatedTooEarly { state: GameState, door: DoorIndex },

    #[error("reveal is {reveal:?}, which state {state:?} does not allow")]
    RevealOutOfStep { state: GameState, reveal: Reveal },

    #[error("the selection differs from the first choice in state {state:?}")]
    SelectionChangedEarly { state: GameState },

    #[error("state {state:?} requires {requirement}")]
    MissingForState {
        state: GameState,
        requirement: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_input_names_the_index() {
        let err = GameError::InvalidInput { index: 5 };
        assert_eq!(err.to_string(), "door index 5 is out of range (expected 0..3)");
    }

    #[test]
    fn invalid_transition_names_operation_and_state() {
        let err = GameError::InvalidTransition {
            operation: Operation::Advance,
            state: GameState::SelectFirstDoor,
            reason: "a door must be selected first",
        };
        assert_eq!(
            err.to_string(),
            "cannot advance in state SelectFirstDoor: a door must be selected first"
        );
    }

    #[test]
    fn violation_messages_use_door_numbers() {
        let err = RoundViolation::EliminatedPrize {
            door: DoorIndex::ALL[0],
        };
        assert_eq!(err.to_string(), "door 1 hides the prize but was eliminated");
    }
}
