//! Montyhall: the Monty Hall puzzle as a pure state machine
//!
//! A player picks one of three doors, the host opens a losing door the
//! player did not pick, the player may switch, and the doors are opened.
//! This crate owns all of that logic and nothing else: rendering,
//! animation timing and resource loading belong to a presentation layer
//! that receives [`GameEvent`](game::GameEvent)s and calls back in.
//!
//! # Core Concepts
//!
//! - **State**: the fixed cycle of [`GameState`](game::GameState)s
//! - **Guards**: preconditions on the transition table, such as "a door
//!   must be picked" or "the reveal animation has finished"
//! - **Generation**: a round counter that makes late animation callbacks
//!   from an abandoned round harmless
//! - **History**: the transitions taken in the current round
//!
//! # Example
//!
//! ```rust
//! use montyhall::builder::GameBuilder;
//! use montyhall::game::{GameEvent, GameState};
//! use montyhall::presenter::EventLog;
//!
//! let mut game = GameBuilder::new()
//!     .seed(2024)
//!     .presenter(EventLog::new())
//!     .build()
//!     .unwrap();
//!
//! game.select_door(0).unwrap();
//! game.advance().unwrap();
//!
//! // The presentation layer animates the reveal, then reports back.
//! let generation = game.generation();
//! game.on_animation_complete(generation);
//! game.advance().unwrap();
//!
//! // Stay with door 1.
//! game.select_door(0).unwrap();
//! game.advance().unwrap();
//! game.advance().unwrap();
//! assert_eq!(game.state(), GameState::Restart);
//!
//! let won = game.prize_door().get() == 0;
//! assert!(game.presenter().events().contains(&GameEvent::Verdict { won }));
//! ```

pub mod builder;
pub mod checkpoint;
pub mod core;
pub mod game;
pub mod presenter;
pub mod simulate;
pub mod stats;

// Re-export commonly used types
pub use builder::{BuildError, GameBuilder};
pub use game::{AnimationAck, DoorIndex, Game, GameError, GameEvent, GameState, Generation};
pub use presenter::{EventLog, Presenter};
