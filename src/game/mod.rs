//! Game setup and the turn loop.
//!
//! - `setup`: validates configuration and scatters the opening pieces
//! - `session`: alternates plies between a `MoveSource` and the search

pub mod session;
pub mod setup;

pub use session::{Game, MoveSource, PlyOutcome};
pub use setup::{new_game, rng_for};
