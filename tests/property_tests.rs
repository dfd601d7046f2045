//! Property-based tests for the game state machine.
//!
//! These tests use proptest to check the round invariants over many
//! seeds and pick sequences.

use montyhall::game::{AnimationAck, DoorIndex, Game, GameError, GameState, Generation};
use montyhall::presenter::EventLog;
use proptest::prelude::*;

prop_compose! {
    fn arbitrary_door()(index in 0..3usize) -> usize {
        index
    }
}

proptest! {
    #[test]
    fn eliminated_door_is_never_prize_or_pick(seed in any::<u64>(), first in arbitrary_door()) {
        let mut game = Game::seeded(seed, ());
        game.select_door(first).unwrap();
        game.advance().unwrap();

        let eliminated = game.eliminated_door().unwrap();
        prop_assert_ne!(eliminated, game.prize_door());
        prop_assert_ne!(Some(eliminated), game.selected_door());
        prop_assert!(game.round().validate().is_success());
    }

    #[test]
    fn out_of_range_pick_is_always_invalid_input(seed in any::<u64>(), index in 3usize..10_000) {
        let mut game = Game::seeded(seed, ());
        prop_assert_eq!(game.select_door(index), Err(GameError::InvalidInput { index }));
        prop_assert_eq!(game.state(), GameState::SelectFirstDoor);
    }

    #[test]
    fn verdict_matches_final_pick(
        seed in any::<u64>(),
        first in arbitrary_door(),
        last in arbitrary_door(),
    ) {
        let mut game = Game::seeded(seed, EventLog::new());
        game.select_door(first).unwrap();
        game.advance().unwrap();
        game.on_animation_complete(game.generation());
        game.advance().unwrap();
        game.select_door(last).unwrap();
        game.advance().unwrap();
        game.advance().unwrap();

        let outcome = *game.last_outcome().unwrap();
        prop_assert_eq!(outcome.won, DoorIndex::new(last).unwrap() == game.prize_door());
        prop_assert_eq!(outcome.switched(), first != last);
    }

    #[test]
    fn stale_completion_never_touches_new_round(
        seed in any::<u64>(),
        first in arbitrary_door(),
        restarts in 1u64..5,
    ) {
        let mut game = Game::seeded(seed, ());
        game.select_door(first).unwrap();
        game.advance().unwrap();
        let stale = game.generation();

        for _ in 0..restarts {
            game.init_round();
        }
        game.select_door(first).unwrap();
        game.advance().unwrap();
        let before = game.round().clone();

        prop_assert_eq!(game.on_animation_complete(stale), AnimationAck::Stale);
        prop_assert_eq!(game.round(), &before);
        prop_assert!(game.advance().is_err());
        prop_assert_eq!(game.generation(), Generation::new(stale.get() + restarts));
    }

    #[test]
    fn same_seed_replays_same_game(seed in any::<u64>(), picks in prop::collection::vec(arbitrary_door(), 1..8)) {
        let mut first = Game::seeded(seed, EventLog::new());
        let mut second = Game::seeded(seed, EventLog::new());

        for pick in picks {
            for game in [&mut first, &mut second] {
                game.select_door(pick).unwrap();
                game.advance().unwrap();
                game.on_animation_complete(game.generation());
                game.advance().unwrap();
                game.select_door(pick).unwrap();
                game.advance().unwrap();
                game.advance().unwrap();
                game.advance().unwrap();
            }
        }

        prop_assert_eq!(first.presenter().events(), second.presenter().events());
    }
}
