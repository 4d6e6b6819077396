//! JSON file holding players and game history.
//!
//! Writes go to a temporary file in the same directory which then replaces
//! the primary file in one rename, so a crash mid-write leaves the previous
//! contents intact. If that fails the payload is written to a timestamped
//! side-car backup instead.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use game_types::GameData;
use tempfile::NamedTempFile;
use tracing::{debug, error, warn};

use crate::errors::StoreError;

pub const DEFAULT_SCORES_FILE: &str = "scores.json";

/// Where the data ended up after a save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Committed,
    BackedUp(PathBuf),
}

#[derive(Debug, Clone)]
pub struct ScoreStore {
    path: PathBuf,
}

impl ScoreStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored document. A missing file is an empty store.
    pub fn load(&self) -> Result<GameData, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(GameData::default()),
            Err(source) => {
                return Err(StoreError::Read {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })
    }

    pub fn save(&self, data: &GameData) -> Result<SaveOutcome, StoreError> {
        let json = serde_json::to_string_pretty(data).map_err(StoreError::Serialize)?;

        match self.write_primary(&json) {
            Ok(()) => {
                debug!(path = %self.path.display(), "Scores saved");
                Ok(SaveOutcome::Committed)
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Error saving results, writing backup");
                let backup = self.backup_path();
                match fs::write(&backup, &json) {
                    Ok(()) => {
                        warn!(backup = %backup.display(), "Backup created");
                        Ok(SaveOutcome::BackedUp(backup))
                    }
                    Err(source) => {
                        error!(backup = %backup.display(), error = %source, "Failed to create backup");
                        Err(StoreError::BackupFailed { backup, source })
                    }
                }
            }
        }
    }

    fn write_primary(&self, json: &str) -> io::Result<()> {
        let mut temp = NamedTempFile::new_in(self.directory())?;
        temp.write_all(json.as_bytes())?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|e| e.error)?;
        Ok(())
    }

    fn directory(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    /// `<stem>_backup_<timestamp>.json` next to the primary file
    pub fn backup_path(&self) -> PathBuf {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "scores".to_string());
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S_%3f");
        self.directory()
            .join(format!("{}_backup_{}.json", stem, timestamp))
    }
}
