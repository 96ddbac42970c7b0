//! Adversarial search for the computer player.
//!
//! ## Overview
//!
//! - **Minimax** with alpha-beta pruning over the move tree
//! - **Iterative deepening** from depth 1 up to a configurable maximum,
//!   keeping the choice of the deepest completed pass
//! - **Pluggable evaluation** via the `Evaluator` trait
//! - **Optional time limit** that never changes the result of a completed
//!   pass
//!
//! ## Usage
//!
//! ```rust
//! use rust_territory::core::{Board, GameState, Player};
//! use rust_territory::search::{MinimaxSearch, SearchConfig};
//!
//! let board = Board::from_rows(&["X..", "...", "..O"]).unwrap();
//! let state = GameState::new(board, Player::A, 10);
//!
//! let mut search = MinimaxSearch::new(SearchConfig::default().with_max_depth(3));
//! if let Some(mv) = search.best_move(&state) {
//!     println!("Best move: {}", mv);
//! }
//! println!("{} nodes", search.stats().nodes);
//! ```

pub mod config;
pub mod minimax;
pub mod stats;

pub use config::{SearchConfig, DEFAULT_MAX_DEPTH};
pub use minimax::MinimaxSearch;
pub use stats::SearchStats;
