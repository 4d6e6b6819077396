use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid base word: {word}")]
    InvalidBaseWord { word: String },
    #[error("Player name cannot be empty")]
    EmptyPlayerName,
    #[error("Both players are named {name}")]
    DuplicatePlayerName { name: String },
    #[error("Game already completed")]
    GameAlreadyCompleted,
    #[error("No game in progress")]
    NoGameInProgress,
}
