//! Errors raised while configuring a game.

use crate::checkpoint::CheckpointError;
use thiserror::Error;

/// Errors that can occur when building a game.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Random source not specified. Call .rng(rng), .seed(n) or .entropy() before .build()")]
    MissingRng,

    #[error("Presenter not specified. Call .presenter(p) before .build(); use () to discard events")]
    MissingPresenter,

    #[error("Cannot resume: {0}")]
    Checkpoint(#[from] CheckpointError),
}
