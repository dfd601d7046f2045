//! The game state machine.

use crate::checkpoint::{Checkpoint, CheckpointError};
use crate::core::{State, StateHistory, StateTransition};
use crate::game::door::{DoorIndex, DOOR_COUNT};
use crate::game::error::{GameError, Operation};
use crate::game::event::{ContinueLabel, Controls, GameEvent, InstructionKey};
use crate::game::round::{describe, Generation, Reveal, Round};
use crate::game::state::GameState;
use crate::game::transition::TransitionTable;
use crate::presenter::Presenter;
use crate::stats::{RoundOutcome, Scoreboard};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stillwater::validation::Validation;

/// Answer to an animation-completion callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AnimationAck {
    /// The reveal gate is open; `advance` may move on.
    Accepted,
    /// The callback belongs to an earlier round and was ignored.
    Stale,
    /// The current round was not waiting for an animation; ignored.
    Unexpected,
}

/// Single source of truth for the puzzle.
///
/// All mutation happens synchronously inside [`select_door`],
/// [`advance`], [`on_animation_complete`] and [`init_round`]; every
/// visible consequence is handed to the presenter as a [`GameEvent`].
///
/// ```rust
/// use montyhall::game::{AnimationAck, Game, GameState};
///
/// let mut game = Game::seeded(7, ());
/// assert_eq!(game.state(), GameState::SelectFirstDoor);
///
/// game.select_door(1).unwrap();
/// game.advance().unwrap();
/// assert_eq!(game.state(), GameState::EliminateDoor);
///
/// assert_eq!(game.on_animation_complete(game.generation()), AnimationAck::Accepted);
/// game.advance().unwrap();
/// game.select_door(1).unwrap();
/// assert_eq!(game.state(), GameState::ShowFinalSelection);
/// ```
///
/// [`select_door`]: Game::select_door
/// [`advance`]: Game::advance
/// [`on_animation_complete`]: Game::on_animation_complete
/// [`init_round`]: Game::init_round
pub struct Game<R, P> {
    rng: R,
    presenter: P,
    table: TransitionTable,
    state: GameState,
    round: Round,
    history: StateHistory<GameState>,
    scoreboard: Scoreboard,
    last_outcome: Option<RoundOutcome>,
}

impl<P: Presenter> Game<StdRng, P> {
    /// Game driven by a seeded standard RNG.
    pub fn seeded(seed: u64, presenter: P) -> Self {
        Self::new(StdRng::seed_from_u64(seed), presenter)
    }
}

impl<R: Rng, P: Presenter> Game<R, P> {
    /// Create a game and start its first round.
    pub fn new(rng: R, presenter: P) -> Self {
        let mut game = Self::unstarted(rng, presenter);
        game.init_round();
        game
    }

    /// Game waiting in `Begin` with no round dealt yet.
    ///
    /// The round data is a placeholder of generation zero until the first
    /// `advance` deals a real one.
    pub(crate) fn unstarted(rng: R, presenter: P) -> Self {
        Self {
            rng,
            presenter,
            table: TransitionTable::standard(),
            state: GameState::Begin,
            round: Round::with_prize(Generation::default(), DoorIndex::ALL[0]),
            history: StateHistory::new(),
            scoreboard: Scoreboard::new(),
            last_outcome: None,
        }
    }

    /// Rebuild a game from a validated checkpoint.
    pub(crate) fn restore(
        rng: R,
        presenter: P,
        checkpoint: Checkpoint,
    ) -> Result<Self, CheckpointError> {
        checkpoint.validate()?;

        let mut game = Self {
            rng,
            presenter,
            table: TransitionTable::standard(),
            state: checkpoint.state,
            round: checkpoint.round,
            history: checkpoint.history,
            scoreboard: checkpoint.scoreboard,
            last_outcome: checkpoint.last_outcome,
        };

        let generation = game.round.generation();
        log::debug!(
            "round {generation} resumed in {} from checkpoint {}",
            game.state.name(),
            checkpoint.id
        );
        game.emit(GameEvent::Resumed {
            state: game.state,
            generation,
        });

        // The old presentation layer never finished the reveal; replay it.
        if game.state == GameState::EliminateDoor && game.round.reveal() == Reveal::Pending {
            if let Some(index) = game.round.eliminated() {
                game.emit(GameEvent::DoorEliminated { index, generation });
            }
        }

        Ok(game)
    }

    /// Discard the current round and deal a new one.
    ///
    /// Safe to call at any time, including while a reveal animation is in
    /// flight: the new round gets a new generation, so a late callback for
    /// the old one is ignored.
    pub fn init_round(&mut self) {
        if self.round.reveal() == Reveal::Pending {
            log::debug!(
                "abandoning in-flight reveal of round {}",
                self.round.generation()
            );
        }

        let generation = self.round.generation().next();
        self.state = GameState::Begin;
        self.round = Round::new(generation, &mut self.rng);
        self.history = StateHistory::new();

        log::debug!("round {generation} reset");
        log::trace!(
            "round {generation} hides the prize behind {}",
            self.round.prize()
        );

        self.emit(GameEvent::RoundReset {
            door_count: DOOR_COUNT,
            generation,
        });
        self.emit(GameEvent::instruction(InstructionKey::Begin));
        self.emit(GameEvent::ControlsChanged(Controls::choosing()));

        self.move_to(GameState::SelectFirstDoor);
    }

    /// Pick a door.
    ///
    /// While choosing the first door the pick is only recorded; the player
    /// confirms it with [`advance`](Game::advance). While deciding whether
    /// to switch, any door is accepted (picking the current one means
    /// staying) and the machine moves straight to the final selection.
    pub fn select_door(&mut self, index: usize) -> Result<(), GameError> {
        let door = DoorIndex::new(index)?;
        let to = self
            .table
            .resolve(self.state, Operation::SelectDoor, &self.round)?;

        log::debug!(
            "round {}: {door} picked in {}",
            self.round.generation(),
            self.state.name()
        );

        match self.state {
            GameState::SelectFirstDoor => {
                self.round.pick_first(door);
                self.emit(GameEvent::instruction_with_door(
                    InstructionKey::SelectFirstDoor,
                    "selectedDoorIndex",
                    door,
                ));
                self.emit(GameEvent::ControlsChanged(Controls::confirm(
                    ContinueLabel::Continue,
                )));
            }
            GameState::AskSwitchDoor => self.round.pick_final(door),
            // refused by the table above
            GameState::Begin
            | GameState::EliminateDoor
            | GameState::ShowFinalSelection
            | GameState::ShowResults
            | GameState::Restart => {}
        }

        if to != self.state {
            self.enter(to, Operation::SelectDoor)?;
        }
        Ok(())
    }

    /// Move to the next state of the cycle. Returns the state reached.
    pub fn advance(&mut self) -> Result<GameState, GameError> {
        let to = self
            .table
            .resolve(self.state, Operation::Advance, &self.round)?;
        self.enter(to, Operation::Advance)?;
        Ok(self.state)
    }

    /// Report that the elimination reveal for `generation` finished.
    ///
    /// Signals for another round, or arriving when no reveal is pending,
    /// change nothing.
    pub fn on_animation_complete(&mut self, generation: Generation) -> AnimationAck {
        let current = self.round.generation();
        if generation != current {
            log::warn!("ignoring reveal completion for round {generation}, now in round {current}");
            return AnimationAck::Stale;
        }

        if self.state != GameState::EliminateDoor || !self.round.complete_reveal() {
            log::warn!(
                "round {generation} was not awaiting a reveal in {}",
                self.state.name()
            );
            return AnimationAck::Unexpected;
        }

        log::debug!("round {generation}: reveal complete");
        if let Some(door) = self.round.eliminated() {
            self.emit(GameEvent::instruction_with_door(
                InstructionKey::EliminateDoor,
                "index",
                door,
            ));
        }
        AnimationAck::Accepted
    }

    /// Whether [`advance`](Game::advance) would currently succeed.
    pub fn is_ready_to_advance(&self) -> bool {
        self.table
            .rule(self.state, Operation::Advance)
            .is_some_and(|rule| rule.can_execute(self.state, &self.round))
    }

    /// Get the current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Data of the round in play.
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Id of the round in play; pass it back to
    /// [`on_animation_complete`](Game::on_animation_complete).
    pub fn generation(&self) -> Generation {
        self.round.generation()
    }

    /// Door hiding the prize. Presentation layers should not show it
    /// before `ShowResults`.
    pub fn prize_door(&self) -> DoorIndex {
        self.round.prize()
    }

    /// The player's current pick.
    pub fn selected_door(&self) -> Option<DoorIndex> {
        self.round.selected()
    }

    /// The door the host opened, once `EliminateDoor` was entered.
    pub fn eliminated_door(&self) -> Option<DoorIndex> {
        self.round.eliminated()
    }

    /// Transitions taken in the current round.
    pub fn history(&self) -> &StateHistory<GameState> {
        &self.history
    }

    /// Stay/switch results of every finished round.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// Outcome of the most recently finished round.
    pub fn last_outcome(&self) -> Option<&RoundOutcome> {
        self.last_outcome.as_ref()
    }

    /// Get the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Get the presenter mutably, e.g. to drain an [`EventLog`](crate::presenter::EventLog).
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Consume the game, returning its presenter.
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    pub(crate) fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Snapshot of the session.
    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint::capture(
            self.state,
            self.round.clone(),
            self.history.clone(),
            self.scoreboard,
            self.last_outcome,
        )
    }

    fn enter(&mut self, to: GameState, operation: Operation) -> Result<(), GameError> {
        match to {
            // Both ends of the wrap deal a fresh round.
            GameState::Begin | GameState::SelectFirstDoor => self.init_round(),
            GameState::EliminateDoor => {
                let index = self
                    .round
                    .eliminate(&mut self.rng)
                    .ok_or_else(|| self.refusal(operation, "a door must be selected first"))?;
                self.check_round(to);
                self.move_to(to);
                self.emit(GameEvent::ControlsChanged(Controls::locked()));
                self.emit(GameEvent::DoorEliminated {
                    index,
                    generation: self.round.generation(),
                });
            }
            GameState::AskSwitchDoor => {
                self.move_to(to);
                if let Some(eliminated) = self.round.eliminated() {
                    self.emit(GameEvent::ControlsChanged(Controls::switching(eliminated)));
                }
            }
            GameState::ShowFinalSelection => {
                let selected = self.selection(operation)?;
                self.check_round(to);
                self.move_to(to);
                self.emit(GameEvent::FinalSelectionShown { selected });
                self.emit(GameEvent::instruction_with_door(
                    InstructionKey::ShowFinalSelection,
                    "selectedDoorIndex",
                    selected,
                ));
                self.emit(GameEvent::ControlsChanged(Controls::confirm(
                    ContinueLabel::Continue,
                )));
            }
            GameState::ShowResults => {
                let selected = self.selection(operation)?;
                self.move_to(to);
                self.emit(GameEvent::ResultsRevealed {
                    prize: self.round.prize(),
                    selected,
                });
                self.emit(GameEvent::ControlsChanged(Controls::locked()));
            }
            GameState::Restart => {
                let outcome = RoundOutcome::of(&self.round)
                    .ok_or_else(|| self.refusal(operation, "no door has been selected"))?;
                self.move_to(to);
                self.scoreboard.record(&outcome);
                self.last_outcome = Some(outcome);

                log::debug!(
                    "round {} {} ({})",
                    outcome.generation,
                    if outcome.won { "won" } else { "lost" },
                    if outcome.switched() { "switched" } else { "stayed" }
                );

                self.emit(GameEvent::Verdict { won: outcome.won });
                self.emit(GameEvent::instruction(if outcome.won {
                    InstructionKey::Win
                } else {
                    InstructionKey::Lose
                }));
                self.emit(GameEvent::ControlsChanged(Controls::confirm(
                    ContinueLabel::Restart,
                )));
            }
        }
        Ok(())
    }

    fn move_to(&mut self, to: GameState) {
        let from = self.state;
        let generation = self.round.generation();
        self.history = self
            .history
            .record(StateTransition::now(from, to, generation.get()));
        self.state = to;
        log::debug!("round {generation}: {} -> {}", from.name(), to.name());
    }

    fn selection(&self, operation: Operation) -> Result<DoorIndex, GameError> {
        self.round
            .selected()
            .ok_or_else(|| self.refusal(operation, "no door has been selected"))
    }

    fn refusal(&self, operation: Operation, reason: &'static str) -> GameError {
        GameError::InvalidTransition {
            operation,
            state: self.state,
            reason,
        }
    }

    fn check_round(&self, state: GameState) {
        if let Validation::Failure(violations) = self.round.validate_for(state) {
            log::error!(
                "round {} is inconsistent entering {}: {}",
                self.round.generation(),
                state.name(),
                describe(&violations)
            );
        }
    }

    fn emit(&mut self, event: GameEvent) {
        self.presenter.present(event);
    }
}
