use game_persistence::StoreError;
use game_types::GameError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Storage(#[from] StoreError),
    #[error(transparent)]
    Game(#[from] GameError),
    #[error("Input error: {0}")]
    Input(#[from] io::Error),
}

impl ControllerError {
    /// Storage write faults can lose a game result and must reach the top level.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ControllerError::Storage(e) if e.is_write_failure())
    }
}
