use thiserror::Error;

use crate::Leaderboard;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Could not read scores")]
    Read,
    #[error("Stored scores are malformed")]
    Decode,
    #[error("Could not encode scores")]
    Encode,
    #[error("Could not write scores")]
    Write,
}

/// Where the leaderboard lives between rounds.
pub trait ScoreStorage {
    /// Reads the stored leaderboard, an absent or unreadable store is an empty one.
    fn load(&self) -> Leaderboard;

    fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), StorageError>;
}

/// Keeps the leaderboard in memory only.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MemoryStorage {
    leaderboard: Leaderboard,
    saves: usize,
}

impl MemoryStorage {
    pub fn new(leaderboard: Leaderboard) -> Self {
        Self {
            leaderboard,
            saves: 0,
        }
    }

    pub fn saves(&self) -> usize {
        self.saves
    }
}

impl ScoreStorage for MemoryStorage {
    fn load(&self) -> Leaderboard {
        self.leaderboard.clone()
    }

    fn save(&mut self, leaderboard: &Leaderboard) -> Result<(), StorageError> {
        self.leaderboard = leaderboard.clone();
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ScoreRecord;

    #[test]
    fn memory_storage_round_trips() {
        let mut storage = MemoryStorage::default();
        assert!(storage.load().is_empty());

        let board = Leaderboard::new().merge(ScoreRecord::new("kim", 85, "2026-10-19T08:30:00Z"));
        storage.save(&board).unwrap();

        assert_eq!(storage.load(), board);
        assert_eq!(storage.saves(), 1);
    }
}
