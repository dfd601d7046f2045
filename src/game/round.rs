//! Per-round puzzle data.

use crate::game::door::DoorIndex;
use crate::game::elimination::choose_eliminated;
use crate::game::error::RoundViolation;
use crate::game::state::GameState;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Monotonically increasing round id.
///
/// Asynchronous completion signals carry the generation they were issued
/// for; a signal from an older generation is discarded.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Generation(u64);

impl Generation {
    /// Wrap a raw round id.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw round id.
    pub fn get(self) -> u64 {
        self.0
    }

    /// Id of the following round.
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Progress of the elimination reveal animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reveal {
    /// No door has been eliminated yet.
    #[default]
    NotStarted,
    /// Waiting for the presentation layer to finish the animation.
    Pending,
    /// Animation finished; the machine may move on.
    Complete,
}

/// Mutable data of one play-through.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    generation: Generation,
    prize: DoorIndex,
    first_choice: Option<DoorIndex>,
    selected: Option<DoorIndex>,
    eliminated: Option<DoorIndex>,
    reveal: Reveal,
}

impl Round {
    /// Start a round with the prize behind a uniformly drawn door.
    pub fn new<R: Rng + ?Sized>(generation: Generation, rng: &mut R) -> Self {
        Self::with_prize(generation, DoorIndex::random(rng))
    }

    /// Start a round with a known prize door.
    pub fn with_prize(generation: Generation, prize: DoorIndex) -> Self {
        Self {
            generation,
            prize,
            first_choice: None,
            selected: None,
            eliminated: None,
            reveal: Reveal::NotStarted,
        }
    }

    /// Id distinguishing this round from earlier ones.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Door hiding the prize.
    pub fn prize(&self) -> DoorIndex {
        self.prize
    }

    /// The pick made before elimination.
    pub fn first_choice(&self) -> Option<DoorIndex> {
        self.first_choice
    }

    /// The current pick; after the switch decision this is the final one.
    pub fn selected(&self) -> Option<DoorIndex> {
        self.selected
    }

    /// Door opened by the host.
    pub fn eliminated(&self) -> Option<DoorIndex> {
        self.eliminated
    }

    /// Progress of the elimination reveal.
    pub fn reveal(&self) -> Reveal {
        self.reveal
    }

    /// The door that is neither the first choice nor eliminated.
    pub fn switch_target(&self) -> Option<DoorIndex> {
        let (first, eliminated) = (self.first_choice?, self.eliminated?);
        DoorIndex::ALL
            .into_iter()
            .find(|door| *door != first && *door != eliminated)
    }

    /// Whether the final pick differs from the first one.
    pub fn switched(&self) -> Option<bool> {
        Some(self.selected? != self.first_choice?)
    }

    /// Whether the current pick hides the prize.
    pub fn won(&self) -> Option<bool> {
        self.selected.map(|door| door == self.prize)
    }

    pub(crate) fn pick_first(&mut self, door: DoorIndex) {
        self.first_choice = Some(door);
        self.selected = Some(door);
    }

    pub(crate) fn pick_final(&mut self, door: DoorIndex) {
        self.selected = Some(door);
    }

    /// Apply the elimination rule and start the reveal.
    ///
    /// Returns `None` when no first choice has been made.
    pub(crate) fn eliminate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<DoorIndex> {
        let door = choose_eliminated(self.prize, self.first_choice?, rng)?;
        self.eliminated = Some(door);
        self.reveal = Reveal::Pending;
        Some(door)
    }

    /// Open the gate after the reveal animation. Returns `false` when no
    /// reveal was pending.
    pub(crate) fn complete_reveal(&mut self) -> bool {
        if self.reveal == Reveal::Pending {
            self.reveal = Reveal::Complete;
            true
        } else {
            false
        }
    }

    /// Check the round invariants, collecting every violation.
    pub fn validate(&self) -> Validation<(), NonEmptyVec<RoundViolation>> {
        let mut checks: Vec<Validation<(), NonEmptyVec<RoundViolation>>> = Vec::new();

        if let Some(door) = self.eliminated {
            checks.push(if door == self.prize {
                Validation::fail(RoundViolation::EliminatedPrize { door })
            } else {
                Validation::success(())
            });

            checks.push(match self.first_choice {
                None => Validation::fail(RoundViolation::EliminatedWithoutChoice { door }),
                Some(first) if first == door => {
                    Validation::fail(RoundViolation::EliminatedFirstChoice { door })
                }
                Some(_) => Validation::success(()),
            });
        }

        checks.push(if self.selected.is_some() && self.first_choice.is_none() {
            Validation::fail(RoundViolation::SelectionWithoutFirstChoice)
        } else {
            Validation::success(())
        });

        Validation::all_vec(checks).map(|_| ())
    }

    /// Check the invariants plus what `state` expects of the round: the
    /// elimination and reveal progress, and whether the pick may have changed.
    pub fn validate_for(&self, state: GameState) -> Validation<(), NonEmptyVec<RoundViolation>> {
        let mut checks = vec![self.validate()];
        let mut flag = |violation: RoundViolation| checks.push(Validation::fail(violation));

        let dealt = matches!(state, GameState::Begin | GameState::SelectFirstDoor);
        let decided = matches!(
            state,
            GameState::ShowFinalSelection | GameState::ShowResults | GameState::Restart
        );

        let reveal_fits = match state {
            GameState::Begin | GameState::SelectFirstDoor => self.reveal == Reveal::NotStarted,
            GameState::EliminateDoor => self.reveal != Reveal::NotStarted,
            GameState::AskSwitchDoor
            | GameState::ShowFinalSelection
            | GameState::ShowResults
            | GameState::Restart => self.reveal == Reveal::Complete,
        };
        if !reveal_fits {
            flag(RoundViolation::RevealOutOfStep {
                state,
                reveal: self.reveal,
            });
        }

        match self.eliminated {
            Some(door) if dealt => flag(RoundViolation::EliminatedTooEarly { state, door }),
            None if !dealt => flag(RoundViolation::MissingForState {
                state,
                requirement: "an eliminated door",
            }),
            _ => {}
        }

        if decided && self.selected.is_none() {
            flag(RoundViolation::MissingForState {
                state,
                requirement: "a final selection",
            });
        }
        if !decided && self.selected != self.first_choice {
            flag(RoundViolation::SelectionChangedEarly { state });
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

/// Flatten accumulated violations into one human-readable line.
pub(crate) fn describe(violations: &NonEmptyVec<RoundViolation>) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn door(index: usize) -> DoorIndex {
        DoorIndex::ALL[index]
    }

    #[test]
    fn new_round_has_no_choices() {
        let mut rng = StdRng::seed_from_u64(5);
        let round = Round::new(Generation::new(1), &mut rng);

        assert_eq!(round.generation(), Generation::new(1));
        assert_eq!(round.first_choice(), None);
        assert_eq!(round.selected(), None);
        assert_eq!(round.eliminated(), None);
        assert_eq!(round.reveal(), Reveal::NotStarted);
        assert!(round.validate().is_success());
    }

    #[test]
    fn eliminate_requires_first_choice() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut round = Round::with_prize(Generation::new(1), door(0));

        assert_eq!(round.eliminate(&mut rng), None);
        assert_eq!(round.reveal(), Reveal::NotStarted);
    }

    #[test]
    fn eliminate_avoids_prize_and_pick() {
        let mut rng = StdRng::seed_from_u64(8);
        for prize in DoorIndex::ALL {
            for pick in DoorIndex::ALL {
                let mut round = Round::with_prize(Generation::new(1), prize);
                round.pick_first(pick);

                let eliminated = round.eliminate(&mut rng).unwrap();

                assert_ne!(eliminated, prize);
                assert_ne!(eliminated, pick);
                assert_eq!(round.reveal(), Reveal::Pending);
                assert!(round.validate().is_success());
            }
        }
    }

    #[test]
    fn complete_reveal_only_once() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::with_prize(Generation::new(1), door(2));
        assert!(!round.complete_reveal());

        round.pick_first(door(0));
        round.eliminate(&mut rng);

        assert!(round.complete_reveal());
        assert!(!round.complete_reveal());
        assert_eq!(round.reveal(), Reveal::Complete);
    }

    #[test]
    fn switch_target_is_the_remaining_door() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::with_prize(Generation::new(1), door(2));
        round.pick_first(door(0));
        round.eliminate(&mut rng);

        assert_eq!(round.eliminated(), Some(door(1)));
        assert_eq!(round.switch_target(), Some(door(2)));

        round.pick_final(door(2));
        assert_eq!(round.switched(), Some(true));
        assert_eq!(round.won(), Some(true));
    }

    #[test]
    fn staying_is_not_switching() {
        let mut round = Round::with_prize(Generation::new(1), door(1));
        round.pick_first(door(0));
        round.pick_final(door(0));

        assert_eq!(round.switched(), Some(false));
        assert_eq!(round.won(), Some(false));
    }

    #[test]
    fn validate_accumulates_all_violations() {
        let mut round = Round::with_prize(Generation::new(1), door(1));
        round.selected = Some(door(1));
        round.eliminated = Some(door(1));

        match round.validate() {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 3);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RoundViolation::EliminatedPrize { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RoundViolation::EliminatedWithoutChoice { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RoundViolation::SelectionWithoutFirstChoice)));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_for_checks_state_requirements() {
        let mut round = Round::with_prize(Generation::new(1), door(0));
        round.pick_first(door(0));

        assert!(round.validate_for(GameState::SelectFirstDoor).is_success());
        assert!(round.validate_for(GameState::EliminateDoor).is_failure());
        assert!(round.validate_for(GameState::ShowResults).is_failure());
    }

    #[test]
    fn validate_for_matches_reveal_to_state() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::with_prize(Generation::new(1), door(2));
        round.pick_first(door(0));
        round.eliminate(&mut rng);

        assert!(round.validate_for(GameState::EliminateDoor).is_success());
        assert!(round.validate_for(GameState::AskSwitchDoor).is_failure());

        round.reveal = Reveal::NotStarted;
        match round.validate_for(GameState::EliminateDoor) {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 1);
                assert!(errors.iter().any(|e| matches!(
                    e,
                    RoundViolation::RevealOutOfStep {
                        state: GameState::EliminateDoor,
                        reveal: Reveal::NotStarted,
                    }
                )));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }

        round.reveal = Reveal::Complete;
        assert!(round.validate_for(GameState::AskSwitchDoor).is_success());
        match round.validate_for(GameState::SelectFirstDoor) {
            Validation::Failure(errors) => {
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RoundViolation::EliminatedTooEarly { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, RoundViolation::RevealOutOfStep { .. })));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn validate_for_rejects_changed_pick_before_decision() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut round = Round::with_prize(Generation::new(1), door(2));
        round.pick_first(door(0));
        round.eliminate(&mut rng);
        round.complete_reveal();
        round.pick_final(door(2));

        assert!(round.validate_for(GameState::ShowFinalSelection).is_success());
        match round.validate_for(GameState::AskSwitchDoor) {
            Validation::Failure(errors) => assert!(errors.iter().any(|e| matches!(
                e,
                RoundViolation::SelectionChangedEarly {
                    state: GameState::AskSwitchDoor
                }
            ))),
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn describe_joins_messages() {
        let mut round = Round::with_prize(Generation::new(1), door(1));
        round.first_choice = Some(door(1));
        round.selected = Some(door(1));
        round.eliminated = Some(door(1));

        match round.validate() {
            Validation::Failure(errors) => {
                let text = describe(&errors);
                assert!(text.contains("door 2 hides the prize"));
                assert!(text.contains("door 2 was the first choice"));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn generation_advances() {
        let first = Generation::default();
        assert_eq!(first.next().get(), 1);
        assert!(first.next() > first);
        assert_eq!(first.next().to_string(), "#1");
    }
}
