//! Stay or Switch?
//!
//! This example plays thousands of headless rounds with each strategy
//! and prints how often each one wins.
//!
//! Key concepts:
//! - Driving the state machine without a user interface
//! - Acknowledging the reveal animation with the round generation
//! - Reproducible runs from a fixed seed
//!
//! Run with: RUST_LOG=info cargo run --example simulate_strategies

use montyhall::game::Game;
use montyhall::simulate::{simulate, Strategy};

const ROUNDS: u64 = 10_000;
const SEED: u64 = 1978;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Monty Hall: {ROUNDS} rounds per strategy ===\n");

    for strategy in Strategy::ALL {
        let mut game = Game::seeded(SEED, ());
        let board = simulate(&mut game, strategy, ROUNDS)?;
        let total = board.total();

        println!("Strategy: {strategy}");
        println!("  won {} of {} rounds", total.won, total.played);
        if let Some(rate) = board.stay().win_rate() {
            println!("  stayed   {:>6} rounds, won {:.2}%", board.stay().played, rate * 100.0);
        }
        if let Some(rate) = board.switch().win_rate() {
            println!("  switched {:>6} rounds, won {:.2}%", board.switch().played, rate * 100.0);
        }
        println!();
        log::info!("{strategy}: {}/{} won", total.won, total.played);
    }

    println!("Switching should win about 2 in 3 rounds, staying about 1 in 3.");
    Ok(())
}
