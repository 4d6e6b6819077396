use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read {}: {source}", .path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("Score file {} is corrupt: {source}", .path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Failed to serialize game data: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to save game data and create backup {}: {source}", .backup.display())]
    BackupFailed { backup: PathBuf, source: io::Error },
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

impl StoreError {
    /// True when a mutation could not be written anywhere.
    pub fn is_write_failure(&self) -> bool {
        matches!(self, StoreError::BackupFailed { .. } | StoreError::Serialize(_))
    }
}
