use std::fmt::Display;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use pairs_core::{Leaderboard, ScoreStorage, StorageError};
use tempfile::NamedTempFile;

/// Leaderboard stored as a JSON array in a single file.
#[derive(Clone, Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<Leaderboard, StorageError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No scores at {}", self.path.display());
                return Ok(Leaderboard::new());
            }
            Err(err) => return Err(self.fail(StorageError::Read, err)),
        };
        serde_json::from_str(&contents).map_err(|err| self.fail(StorageError::Decode, err))
    }

    fn write(&self, json: &str) -> Result<(), StorageError> {
        // temp file next to the target so the final rename stays on one filesystem
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut file =
            NamedTempFile::new_in(dir).map_err(|err| self.fail(StorageError::Write, err))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.as_file().sync_all())
            .map_err(|err| self.fail(StorageError::Write, err))?;
        file.persist(&self.path)
            .map_err(|err| self.fail(StorageError::Write, err.error))?;
        Ok(())
    }

    fn fail(&self, kind: StorageError, cause: impl Display) -> StorageError {
        log::warn!("{kind} at {}: {cause}", self.path.display());
        kind
    }
}

impl ScoreStorage for JsonFileStorage {
    fn load(&self) -> Leaderboard {
        self.read().unwrap_or_else(|_| {
            log::warn!("Ignoring stored scores, starting from an empty leaderboard");
            Leaderboard::new()
        })
    }

    fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), StorageError> {
        let json = serde_json::to_string_pretty(leaderboard)
            .map_err(|err| self.fail(StorageError::Encode, err))?;
        self.write(&json)?;
        log::debug!(
            "Saved {} scores to {}",
            leaderboard.len(),
            self.path.display()
        );
        Ok(())
    }
}
