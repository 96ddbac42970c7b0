//! Core game types: players, board, moves, state, RNG, configuration.
//!
//! Pure data. Behavior beyond the data invariants lives in `rules`.

pub mod board;
pub mod config;
pub mod moves;
pub mod player;
pub mod rng;
pub mod state;

pub use board::{Board, Coord, Direction, DEFAULT_BOARD_SIZE, MIN_BOARD_SIZE};
pub use config::GameConfig;
pub use moves::{Move, MoveList};
pub use player::{Cell, Player, PlayerMap};
pub use rng::GameRng;
pub use state::GameState;
