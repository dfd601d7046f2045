//! State transition history tracking.
//!
//! Records which transitions a machine took during one pass of its cycle.
//! Recording returns a new history and leaves the old one untouched.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single state transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// The round (cycle pass) the transition belongs to
    pub generation: u64,
}

impl<S: State> StateTransition<S> {
    /// Create a transition stamped with the current time.
    pub fn now(from: S, to: S, generation: u64) -> Self {
        Self {
            from,
            to,
            timestamp: Utc::now(),
            generation,
        }
    }
}

/// Ordered history of state transitions.
///
/// # Example
///
/// ```rust
/// use montyhall::core::{StateHistory, StateTransition};
/// use montyhall::game::GameState;
///
/// let history = StateHistory::new();
/// let history = history.record(StateTransition::now(
///     GameState::Begin,
///     GameState::SelectFirstDoor,
///     1,
/// ));
/// let history = history.record(StateTransition::now(
///     GameState::SelectFirstDoor,
///     GameState::EliminateDoor,
///     1,
/// ));
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3);
/// assert_eq!(path[2], &GameState::EliminateDoor);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each
    /// transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Time elapsed between the first and last recorded transition.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.first()?, self.transitions.last()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Check if no transitions were recorded.
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    /// Get all transitions in the order they were recorded.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::GameState;

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<GameState> = StateHistory::new();
        assert!(history.is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();

        let new_history = history.record(StateTransition::now(
            GameState::Begin,
            GameState::SelectFirstDoor,
            1,
        ));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(StateTransition::now(
                GameState::AskSwitchDoor,
                GameState::ShowFinalSelection,
                4,
            ))
            .record(StateTransition::now(
                GameState::ShowFinalSelection,
                GameState::ShowResults,
                4,
            ));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &GameState::AskSwitchDoor,
                &GameState::ShowFinalSelection,
                &GameState::ShowResults,
            ]
        );
        assert_eq!(history.last().map(|t| t.generation), Some(4));
    }

    #[test]
    fn duration_spans_first_to_last() {
        let start = Utc::now();
        let history = StateHistory::new()
            .record(StateTransition {
                from: GameState::Begin,
                to: GameState::SelectFirstDoor,
                timestamp: start,
                generation: 1,
            })
            .record(StateTransition {
                from: GameState::SelectFirstDoor,
                to: GameState::EliminateDoor,
                timestamp: start + chrono::Duration::milliseconds(1500),
                generation: 1,
            });

        assert_eq!(history.duration(), Some(Duration::from_millis(1500)));
    }

    #[test]
    fn history_roundtrips_through_json() {
        let history = StateHistory::new().record(StateTransition::now(
            GameState::ShowResults,
            GameState::Restart,
            9,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<GameState> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.transitions().len(), 1);
        assert_eq!(back.transitions()[0].to, GameState::Restart);
        assert_eq!(back.transitions()[0].generation, 9);
    }
}
