//! Rules engine: legality, move generation, application, termination.
//!
//! Everything the game loop and the search need to advance a position and
//! decide when and how the game ends. The neighborhood primitives used by
//! the evaluator live in `adjacency`.

pub mod adjacency;
pub mod engine;

pub use adjacency::{mobility_at, opponents_in_ring};
pub use engine::{
    advance, apply, count_moves, has_any_legal_move, is_legal, is_terminal, legal_moves,
    mobility, validate, winner, GameResult,
};
pub(crate) use engine::successor;
