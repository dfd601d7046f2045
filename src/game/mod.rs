//! The Monty Hall game state machine.
//!
//! A round runs through a fixed cycle of [`GameState`]s:
//!
//! ```text
//! Begin -> SelectFirstDoor -> EliminateDoor -> AskSwitchDoor
//!       -> ShowFinalSelection -> ShowResults -> Restart -> Begin ...
//! ```
//!
//! [`Game`] owns the active [`Round`], validates every inbound call
//! against the [`TransitionTable`] and reports what happened as
//! [`GameEvent`]s. Randomness is injected so runs can be replayed.

mod door;
mod elimination;
mod error;
mod event;
mod machine;
mod round;
mod state;
mod transition;

pub use door::{DoorIndex, DOOR_COUNT};
pub use elimination::{candidates, choose_eliminated};
pub use error::{GameError, Operation, RoundViolation};
pub use event::{ContinueLabel, Controls, GameEvent, InstructionKey, TextParam};
pub use machine::{AnimationAck, Game};
pub use round::{Generation, Reveal, Round};
pub use state::GameState;
pub use transition::{Rule, TransitionTable};

pub(crate) use round::describe;
