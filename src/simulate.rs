//! Headless play for checking the odds.
//!
//! Drives a [`Game`] through complete rounds the same way a presentation
//! layer would, including acknowledging the reveal animation, and lets a
//! [`Strategy`] make the stay-or-switch decision.

use crate::game::{DoorIndex, Game, GameError, GameState, Operation};
use crate::presenter::Presenter;
use crate::stats::{RoundOutcome, Scoreboard};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// What the player does when offered to switch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Keep the first pick.
    Stay,
    /// Take the other closed door.
    Switch,
    /// Flip a fair coin.
    Random,
}

impl Strategy {
    pub const ALL: [Strategy; 3] = [Self::Stay, Self::Switch, Self::Random];

    fn wants_switch<R: Rng + ?Sized>(self, rng: &mut R) -> bool {
        match self {
            Self::Stay => false,
            Self::Switch => true,
            Self::Random => rng.random_bool(0.5),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stay => f.write_str("stay"),
            Self::Switch => f.write_str("switch"),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Play one full round and leave the game at the start of the next.
///
/// A round already in progress is abandoned first. The first pick is
/// drawn uniformly from the game's own random source.
pub fn play_round<R: Rng, P: Presenter>(
    game: &mut Game<R, P>,
    strategy: Strategy,
) -> Result<RoundOutcome, GameError> {
    if game.state() != GameState::SelectFirstDoor {
        game.init_round();
    }

    let first = DoorIndex::random(game.rng_mut());
    game.select_door(first.get())?;
    game.advance()?;
    game.on_animation_complete(game.generation());
    game.advance()?;

    let switch = strategy.wants_switch(game.rng_mut());
    let round = game.round();
    let pick = if switch {
        round.switch_target()
    } else {
        round.first_choice()
    }
    .ok_or(GameError::InvalidTransition {
        operation: Operation::SelectDoor,
        state: game.state(),
        reason: "no door left to pick",
    })?;

    game.select_door(pick.get())?;
    game.advance()?;
    game.advance()?;

    let outcome = game.last_outcome().copied().ok_or(GameError::InvalidTransition {
        operation: Operation::Advance,
        state: game.state(),
        reason: "round finished without an outcome",
    })?;

    game.advance()?;
    Ok(outcome)
}

/// Play `rounds` rounds with `strategy` and tally only those rounds.
pub fn simulate<R: Rng, P: Presenter>(
    game: &mut Game<R, P>,
    strategy: Strategy,
    rounds: u64,
) -> Result<Scoreboard, GameError> {
    let mut scoreboard = Scoreboard::new();
    for _ in 0..rounds {
        let outcome = play_round(game, strategy)?;
        scoreboard.record(&outcome);
    }
    log::debug!(
        "{rounds} rounds with strategy {strategy}: {} won",
        scoreboard.total().won
    );
    Ok(scoreboard)
}
