//! Core state machine types.
//!
//! This module holds the game-agnostic vocabulary:
//! - State definitions via the `State` trait and `cyclic_state_enum!`
//! - Guard predicates for transition control
//! - Immutable history tracking
//!
//! Nothing in here touches randomness or emits events.

mod guard;
mod history;
#[macro_use]
mod macros;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use state::State;
