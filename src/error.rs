//! Structured error types.
//!
//! Nothing here is fatal to the process: move errors are surfaced to the
//! move source for re-entry, setup errors are reported before a game starts,
//! and the game loop decides what to do with everything else.

use crate::core::{Coord, Move, Player};

/// Why a candidate move was rejected.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("{0} is off the board")]
    OutOfBounds(Coord),

    #[error("there is no piece at {0}")]
    EmptySource(Coord),

    #[error("the piece at {at} belongs to {owner}")]
    WrongOwner { at: Coord, owner: Player },

    #[error("{0} is already occupied")]
    Occupied(Coord),

    #[error("a piece must move to a different cell")]
    ZeroDistance,

    #[error("{0} is not one orthogonal step")]
    NotAdjacent(Move),
}

/// Text that could not be read as a board coordinate.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum NotationError {
    #[error("expected a coordinate like b2, got {0:?}")]
    Malformed(String),

    #[error("row letter {0:?} is not in a..z")]
    BadRow(char),

    #[error("column {0:?} is not a positive number")]
    BadColumn(String),
}

/// Board text that could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least 3x3, got side {0}")]
    TooSmall(usize),

    #[error("row {row} has {len} cells, expected {side}")]
    NotSquare { row: usize, len: usize, side: usize },

    #[error("unknown cell symbol {0:?}")]
    BadSymbol(char),
}

/// Configuration rejected at setup.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("board side must be at least 3, got {0}")]
    BoardTooSmall(usize),

    #[error("each player needs at least one piece")]
    NoPieces,

    #[error("{requested} pieces per player do not fit on a board with {capacity} cells")]
    TooManyPieces { requested: usize, capacity: usize },

    #[error("turn limit must be at least 1")]
    NoTurns,
}

/// Errors raised while driving a game.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("move source for {0} stopped supplying moves")]
    InputClosed(Player),

    #[error("the game is already over")]
    GameOver,

    #[error("setup error: {0}")]
    Setup(#[from] SetupError),
}
