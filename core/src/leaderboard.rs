use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

/// How many records the leaderboard keeps.
pub const MAX_ENTRIES: usize = 5;

/// A finished round, as stored on the leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub name: String,
    pub score: u32,
    /// ISO-8601 timestamp of when the round ended.
    #[serde(rename = "date")]
    pub timestamp: String,
}

impl ScoreRecord {
    pub fn new(name: impl Into<String>, score: u32, timestamp: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score,
            timestamp: timestamp.into(),
        }
    }
}

/// Best records first, never more than [`MAX_ENTRIES`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<ScoreRecord>", into = "Vec<ScoreRecord>")]
pub struct Leaderboard {
    entries: Vec<ScoreRecord>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes arbitrary records into a valid leaderboard.
    pub fn from_records(mut entries: Vec<ScoreRecord>) -> Self {
        sort_and_trim(&mut entries);
        Self { entries }
    }

    pub fn clear() -> Self {
        Self::default()
    }

    /// Adds `entry`, keeping the best [`MAX_ENTRIES`] records.
    ///
    /// Records with equal scores keep their relative order, so an older record wins a tie.
    pub fn merge(self, entry: ScoreRecord) -> Self {
        let mut entries = self.entries;
        log::debug!("Merging {} with score {}", entry.name, entry.score);
        entries.push(entry);
        sort_and_trim(&mut entries);
        Self { entries }
    }

    /// Whether a round with `score` would make it onto the board.
    pub fn qualifies(&self, score: u32) -> bool {
        self.entries.len() < MAX_ENTRIES
            || self.entries.last().is_some_and(|lowest| score > lowest.score)
    }

    pub fn entries(&self) -> &[ScoreRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ScoreRecord> {
        self.entries.iter()
    }
}

fn sort_and_trim(entries: &mut Vec<ScoreRecord>) {
    // stable, ties keep insertion order
    entries.sort_by(|a, b| b.score.cmp(&a.score));
    entries.truncate(MAX_ENTRIES);
}

impl From<Vec<ScoreRecord>> for Leaderboard {
    fn from(entries: Vec<ScoreRecord>) -> Self {
        Self::from_records(entries)
    }
}

impl From<Leaderboard> for Vec<ScoreRecord> {
    fn from(leaderboard: Leaderboard) -> Self {
        leaderboard.entries
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a ScoreRecord;
    type IntoIter = core::slice::Iter<'a, ScoreRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
