use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid input, expected two numbers like 1,2")]
    InvalidInput,
    #[error("Coordinates out of range, rows and columns go from 1 to 4")]
    OutOfRange,
    #[error("That card is already face up")]
    AlreadyRevealed,
    #[error("Pick a different card than the first one")]
    SameAsFirst,
    #[error("That move is not allowed right now")]
    WrongPhase,
    #[error("Board must hold every symbol exactly twice")]
    InvalidBoard,
}

pub type Result<T> = core::result::Result<T, GameError>;
