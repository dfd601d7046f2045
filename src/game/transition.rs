//! Transition table of the puzzle.
//!
//! Every state has exactly one `Advance` rule leading to the next state in
//! the cycle; the two selection states additionally have a `SelectDoor`
//! rule. Both tables are built with exhaustive matches so a new state
//! cannot be added without deciding its rules.

use crate::core::Guard;
use crate::game::error::{GameError, Operation};
use crate::game::round::{Reveal, Round};
use crate::game::state::GameState;

const NO_SELECTION_HERE: &str =
    "doors can only be picked while choosing a first door or deciding whether to switch";

/// One edge of the state graph.
#[derive(Debug)]
pub struct Rule {
    pub from: GameState,
    pub to: GameState,
    pub operation: Operation,
    pub guard: Option<Guard<Round>>,
}

impl Rule {
    fn new(from: GameState, to: GameState, operation: Operation) -> Self {
        Self {
            from,
            to,
            operation,
            guard: None,
        }
    }

    fn when<F>(mut self, description: &'static str, predicate: F) -> Self
    where
        F: Fn(&Round) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(description, predicate));
        self
    }

    /// Check if this rule can fire from `current` with `round` (pure).
    pub fn can_execute(&self, current: GameState, round: &Round) -> bool {
        if current != self.from {
            return false;
        }
        self.guard.as_ref().map_or(true, |g| g.check(round))
    }

    /// The refusing guard's description, if any guard refuses.
    fn blocked_by(&self, round: &Round) -> Option<&'static str> {
        self.guard
            .as_ref()
            .filter(|g| !g.check(round))
            .map(Guard::description)
    }
}

/// All legal transitions of the game.
#[derive(Debug)]
pub struct TransitionTable {
    rules: Vec<Rule>,
}

impl TransitionTable {
    /// The fixed Monty Hall flow.
    pub fn standard() -> Self {
        let mut rules = Vec::new();
        for &state in GameState::ALL {
            rules.push(advance_rule(state));
            rules.extend(select_rule(state));
        }
        Self { rules }
    }

    /// Every rule in the table.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// The rule for `operation` in `from`, if the table has one.
    pub fn rule(&self, from: GameState, operation: Operation) -> Option<&Rule> {
        self.rules
            .iter()
            .find(|r| r.from == from && r.operation == operation)
    }

    /// Target state of `operation` from `from`, or why it is refused.
    pub fn resolve(
        &self,
        from: GameState,
        operation: Operation,
        round: &Round,
    ) -> Result<GameState, GameError> {
        let refuse = |reason| GameError::InvalidTransition {
            operation,
            state: from,
            reason,
        };

        let rule = self
            .rule(from, operation)
            .ok_or_else(|| refuse(NO_SELECTION_HERE))?;

        match rule.blocked_by(round) {
            Some(reason) => Err(refuse(reason)),
            None => Ok(rule.to),
        }
    }
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

fn advance_rule(state: GameState) -> Rule {
    let rule = Rule::new(state, state.next(), Operation::Advance);
    match state {
        GameState::Begin
        | GameState::ShowFinalSelection
        | GameState::ShowResults
        | GameState::Restart => rule,
        GameState::SelectFirstDoor => rule.when("a door must be selected first", |round| {
            round.first_choice().is_some()
        }),
        GameState::EliminateDoor => rule.when(
            "the elimination animation has not completed",
            |round| round.reveal() == Reveal::Complete,
        ),
        GameState::AskSwitchDoor => {
            rule.when("pick a door to stay or switch instead", |_| false)
        }
    }
}

fn select_rule(state: GameState) -> Option<Rule> {
    match state {
        GameState::SelectFirstDoor => Some(Rule::new(
            state,
            GameState::SelectFirstDoor,
            Operation::SelectDoor,
        )),
        GameState::AskSwitchDoor => Some(Rule::new(
            state,
            GameState::ShowFinalSelection,
            Operation::SelectDoor,
        )),
        GameState::Begin
        | GameState::EliminateDoor
        | GameState::ShowFinalSelection
        | GameState::ShowResults
        | GameState::Restart => None,
    }
}
