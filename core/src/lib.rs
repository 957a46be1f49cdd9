#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use input::*;
pub use leaderboard::*;
pub use storage::*;
pub use types::*;

mod cell;
mod engine;
mod error;
mod generator;
mod input;
mod leaderboard;
mod storage;
mod types;

/// Hidden face values of a round, every symbol placed exactly twice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Array2<Symbol>", into = "Array2<Symbol>")]
pub struct Board {
    symbols: Array2<Symbol>,
}

impl Board {
    pub fn from_grid(symbols: Array2<Symbol>) -> Result<Self> {
        if symbols.dim() != (usize::from(ROWS), usize::from(COLS)) {
            return Err(GameError::InvalidBoard);
        }

        let holds_every_pair = SYMBOLS
            .iter()
            .all(|&symbol| symbols.iter().filter(|&&cell| cell == symbol).count() == 2);
        if !holds_every_pair {
            return Err(GameError::InvalidBoard);
        }

        Ok(Self { symbols })
    }

    pub fn from_rows(rows: [[Symbol; COLS as usize]; ROWS as usize]) -> Result<Self> {
        let cells: Vec<Symbol> = rows.iter().flatten().copied().collect();
        let symbols = Array2::from_shape_vec((usize::from(ROWS), usize::from(COLS)), cells)
            .map_err(|_| GameError::InvalidBoard)?;
        Self::from_grid(symbols)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::OutOfRange)
        }
    }

    pub fn symbol_at(&self, coords: Coord2) -> Symbol {
        self[coords]
    }

    /// Row-major view of all symbols.
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Symbol> + '_> + '_ {
        self.symbols.rows().into_iter().map(|row| row.into_iter().copied())
    }
}

impl TryFrom<Array2<Symbol>> for Board {
    type Error = GameError;

    fn try_from(symbols: Array2<Symbol>) -> Result<Self> {
        Self::from_grid(symbols)
    }
}

impl From<Board> for Array2<Symbol> {
    fn from(board: Board) -> Self {
        board.symbols
    }
}

impl Index<Coord2> for Board {
    type Output = Symbol;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.symbols[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MatchOutcome {
    /// Both cards show the same symbol and stay face up.
    Match,
    /// Cards differ, the caller must hide them again with `clear_unmatched`.
    NoMatch,
    /// The last pair was found.
    Complete,
}

impl MatchOutcome {
    pub const fn is_match(self) -> bool {
        matches!(self, Self::Match | Self::Complete)
    }
}
