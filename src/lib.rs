//! # rust-territory
//!
//! A two-player territory game on a square grid, with a computer opponent
//! driven by minimax search.
//!
//! ## Rules in Brief
//!
//! Each player starts with the same number of pieces scattered at random.
//! On a turn the player to move slides one of their pieces a single step
//! up, down, left or right onto an empty cell. A player with no legal move
//! skips the turn. The game ends when the ply budget runs out or neither
//! player can move, and the player with more mobility wins.
//!
//! ## Design Principles
//!
//! 1. **Value Semantics**: `GameState` is small and cloned freely. The
//!    search works on clones and never touches the caller's state.
//!
//! 2. **Rules as Free Functions**: legality, move generation, application
//!    and termination are pure functions over `GameState`.
//!
//! 3. **Configuration Over Convention**: board size, piece count, turn
//!    limit, search depth and evaluation weights are all configurable, with
//!    defaults matching the classic 7x7 game.
//!
//! ## Modules
//!
//! - `core`: players, board, moves, state, RNG, configuration
//! - `rules`: legality, move generation, termination, winner
//! - `eval`: the positional heuristic and the `Evaluator` trait
//! - `search`: minimax with alpha-beta and iterative deepening
//! - `game`: setup and the turn loop
//! - `error`: error types

pub mod core;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Board, Cell, Coord, Direction, GameConfig, GameRng, GameState, Move, MoveList, Player,
    PlayerMap,
};

pub use crate::error::{BoardError, GameError, MoveError, NotationError, SetupError};

pub use crate::rules::GameResult;

pub use crate::eval::{EvalWeights, Evaluator, TerritoryHeuristic};

pub use crate::search::{MinimaxSearch, SearchConfig, SearchStats};

pub use crate::game::{Game, MoveSource, PlyOutcome};
