//! Fluent configuration of a [`Game`].
//!
//! Both the random source and the presenter are required. Setters change
//! the builder's type parameters, so the builder always starts from
//! [`GameBuilder::new`] and picks up concrete types as it goes.
//!
//! ```
//! use montyhall::builder::GameBuilder;
//! use montyhall::game::GameState;
//! use montyhall::presenter::EventLog;
//!
//! let game = GameBuilder::new()
//!     .seed(42)
//!     .presenter(EventLog::new())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(game.state(), GameState::SelectFirstDoor);
//! assert!(!game.presenter().is_empty());
//! ```

pub mod error;

pub use error::BuildError;

use crate::checkpoint::Checkpoint;
use crate::game::Game;
use crate::presenter::Presenter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Builder for constructing games with a fluent API.
pub struct GameBuilder<R, P> {
    rng: Option<R>,
    presenter: Option<P>,
    start: bool,
}

impl GameBuilder<StdRng, ()> {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self {
            rng: None,
            presenter: None,
            start: true,
        }
    }
}

impl Default for GameBuilder<StdRng, ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, P> GameBuilder<R, P> {
    /// Use `rng` for the prize draw and elimination tie-breaks.
    pub fn rng<R2: Rng>(self, rng: R2) -> GameBuilder<R2, P> {
        GameBuilder {
            rng: Some(rng),
            presenter: self.presenter,
            start: self.start,
        }
    }

    /// Use a standard RNG seeded with `seed`; runs are reproducible.
    pub fn seed(self, seed: u64) -> GameBuilder<StdRng, P> {
        self.rng(StdRng::seed_from_u64(seed))
    }

    /// Use a standard RNG seeded from the operating system.
    pub fn entropy(self) -> GameBuilder<StdRng, P> {
        self.rng(StdRng::from_os_rng())
    }

    /// Send events to `presenter`.
    pub fn presenter<P2: Presenter>(self, presenter: P2) -> GameBuilder<R, P2> {
        GameBuilder {
            rng: self.rng,
            presenter: Some(presenter),
            start: self.start,
        }
    }

    /// Whether [`build`](GameBuilder::build) deals the first round right
    /// away (the default). An unstarted game waits in `Begin` and deals it
    /// on the first `advance`.
    pub fn start(mut self, start: bool) -> Self {
        self.start = start;
        self
    }
}

impl<R: Rng, P: Presenter> GameBuilder<R, P> {
    fn parts(self) -> Result<(R, P), BuildError> {
        let rng = self.rng.ok_or(BuildError::MissingRng)?;
        let presenter = self.presenter.ok_or(BuildError::MissingPresenter)?;
        Ok((rng, presenter))
    }

    /// Build the game, starting its first round unless `start(false)`
    /// was set.
    pub fn build(self) -> Result<Game<R, P>, BuildError> {
        let start = self.start;
        let (rng, presenter) = self.parts()?;
        Ok(if start {
            Game::new(rng, presenter)
        } else {
            Game::unstarted(rng, presenter)
        })
    }

    /// Build a game that continues from `checkpoint`.
    ///
    /// If the checkpoint was taken while a reveal animation was pending,
    /// the elimination event is sent again so it can be replayed.
    pub fn resume(self, checkpoint: Checkpoint) -> Result<Game<R, P>, BuildError> {
        let (rng, presenter) = self.parts()?;
        Ok(Game::restore(rng, presenter, checkpoint)?)
    }
}
