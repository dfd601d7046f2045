//! Win/loss bookkeeping across rounds.
//!
//! Rounds are split by whether the player kept the first pick or switched
//! to the other closed door, which is what the puzzle is about.

use crate::game::{DoorIndex, Generation, Round};
use serde::{Deserialize, Serialize};

/// How one finished round went.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub generation: Generation,
    pub first_choice: DoorIndex,
    pub final_choice: DoorIndex,
    pub prize: DoorIndex,
    pub won: bool,
}

impl RoundOutcome {
    /// Outcome of a round that reached its final selection.
    pub fn of(round: &Round) -> Option<Self> {
        let final_choice = round.selected()?;
        Some(Self {
            generation: round.generation(),
            first_choice: round.first_choice()?,
            final_choice,
            prize: round.prize(),
            won: final_choice == round.prize(),
        })
    }

    /// Whether the final pick differs from the first.
    pub fn switched(&self) -> bool {
        self.first_choice != self.final_choice
    }
}

/// Played and won counts for one kind of decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    /// Rounds finished
    pub played: u64,
    /// Rounds won
    pub won: u64,
}

impl Tally {
    fn record(&mut self, won: bool) {
        self.played += 1;
        if won {
            self.won += 1;
        }
    }

    /// Rounds lost.
    pub fn lost(&self) -> u64 {
        self.played - self.won
    }

    /// Share of won rounds, `None` before the first round.
    pub fn win_rate(&self) -> Option<f64> {
        (self.played > 0).then(|| self.won as f64 / self.played as f64)
    }
}

/// Running stay/switch statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    stay: Tally,
    switch: Tally,
}

impl Scoreboard {
    /// Create an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count a finished round under the decision it was played with.
    pub fn record(&mut self, outcome: &RoundOutcome) {
        if outcome.switched() {
            self.switch.record(outcome.won);
        } else {
            self.stay.record(outcome.won);
        }
    }

    /// Rounds where the player kept the first pick.
    pub fn stay(&self) -> Tally {
        self.stay
    }

    /// Rounds where the player switched.
    pub fn switch(&self) -> Tally {
        self.switch
    }

    /// All rounds regardless of decision.
    pub fn total(&self) -> Tally {
        Tally {
            played: self.stay.played + self.switch.played,
            won: self.stay.won + self.switch.won,
        }
    }
}
