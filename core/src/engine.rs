use core::num::Saturating;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Score of a round finished without a single move.
pub const MAX_SCORE: u32 = 100;
/// Points lost per move.
pub const MOVE_PENALTY: u32 = 5;
/// Lowest score any finished round can get.
pub const MIN_SCORE: u32 = 10;

/// `max(100 - moves * 5, 10)`.
pub const fn score_for_moves(move_count: Count) -> u32 {
    let score = MAX_SCORE.saturating_sub(move_count.saturating_mul(MOVE_PENALTY));
    if score < MIN_SCORE { MIN_SCORE } else { score }
}

/// Valid transitions:
/// - AwaitingFirstPick -> AwaitingSecondPick
/// - AwaitingSecondPick -> AwaitingFirstPick (match)
/// - AwaitingSecondPick -> Resolving (mismatch)
/// - AwaitingSecondPick -> Complete (last match)
/// - Resolving -> AwaitingFirstPick
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    AwaitingFirstPick,
    AwaitingSecondPick,
    Resolving,
    Complete,
}

impl RoundPhase {
    pub const fn is_complete(self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for RoundPhase {
    fn default() -> Self {
        Self::AwaitingFirstPick
    }
}

/// State of a single round, from a fresh board until every pair is found.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundEngine {
    board: Board,
    revealed: Array2<bool>,
    move_count: Saturating<Count>,
    match_count: Saturating<Count>,
    phase: RoundPhase,
    first_pick: Option<Coord2>,
    unmatched: Option<(Coord2, Coord2)>,
}

impl RoundEngine {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            revealed: Array2::default((usize::from(ROWS), usize::from(COLS))),
            move_count: Saturating(0),
            match_count: Saturating(0),
            phase: Default::default(),
            first_pick: None,
            unmatched: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn move_count(&self) -> Count {
        self.move_count.0
    }

    pub fn match_count(&self) -> Count {
        self.match_count.0
    }

    pub fn first_pick(&self) -> Option<Coord2> {
        self.first_pick
    }

    pub fn is_complete(&self) -> bool {
        self.match_count.0 as usize == PAIR_COUNT
    }

    pub fn is_revealed(&self, coords: Coord2) -> bool {
        self.revealed[coords.to_nd_index()]
    }

    pub fn cell_at(&self, coords: Coord2) -> CellView {
        if self.is_revealed(coords) {
            CellView::Revealed(self.board[coords])
        } else {
            CellView::Hidden
        }
    }

    pub fn compute_score(&self) -> u32 {
        score_for_moves(self.move_count.0)
    }

    pub fn reveal_first(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.board.validate_coords(coords)?;
        self.check_hidden(coords)?;
        self.check_phase(RoundPhase::AwaitingFirstPick)?;

        self.revealed[coords.to_nd_index()] = true;
        self.first_pick = Some(coords);
        self.phase = RoundPhase::AwaitingSecondPick;
        log::debug!("First pick at {:?}: {}", coords, self.board[coords]);
        Ok(())
    }

    pub fn reveal_second(&mut self, coords: Coord2) -> Result<MatchOutcome> {
        self.check_phase(RoundPhase::AwaitingSecondPick)?;
        let coords = self.board.validate_coords(coords)?;
        let Some(first) = self.first_pick else {
            return Err(GameError::WrongPhase);
        };
        if coords == first {
            return Err(GameError::SameAsFirst);
        }
        self.check_hidden(coords)?;

        self.revealed[coords.to_nd_index()] = true;
        self.move_count += 1;
        self.first_pick = None;

        let outcome = if self.board[first] == self.board[coords] {
            self.match_count += 1;
            if self.is_complete() {
                self.phase = RoundPhase::Complete;
                log::debug!("Round complete after {} moves", self.move_count);
                MatchOutcome::Complete
            } else {
                self.phase = RoundPhase::AwaitingFirstPick;
                MatchOutcome::Match
            }
        } else {
            self.unmatched = Some((first, coords));
            self.phase = RoundPhase::Resolving;
            MatchOutcome::NoMatch
        };
        log::debug!(
            "Second pick at {:?}: {}, outcome {:?}",
            coords,
            self.board[coords],
            outcome
        );
        Ok(outcome)
    }

    /// Hides the two cards of the last mismatch.
    pub fn clear_unmatched(&mut self) -> Result<()> {
        self.check_phase(RoundPhase::Resolving)?;
        let Some((first, second)) = self.unmatched.take() else {
            return Err(GameError::WrongPhase);
        };

        self.revealed[first.to_nd_index()] = false;
        self.revealed[second.to_nd_index()] = false;
        self.phase = RoundPhase::AwaitingFirstPick;
        log::trace!("Hid unmatched cards {:?} and {:?}", first, second);
        Ok(())
    }

    fn check_phase(&self, expected: RoundPhase) -> Result<()> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(GameError::WrongPhase)
        }
    }

    fn check_hidden(&self, coords: Coord2) -> Result<()> {
        if self.is_revealed(coords) {
            Err(GameError::AlreadyRevealed)
        } else {
            Ok(())
        }
    }
}
