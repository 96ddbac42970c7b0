//! Move representation: one piece stepping from one cell to another.
//!
//! A `Move` carries no validity of its own; it is only meaningful against
//! the state it was generated for or validated against.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::board::Coord;

/// A single piece relocation.
///
/// ## Example
///
/// ```
/// use rust_territory::core::{Coord, Move};
///
/// let mv = Move::new(Coord::new(1, 1), Coord::new(2, 1));
/// assert_eq!(mv.to_string(), "b2 -> c2");
/// assert_eq!(mv.inverse().inverse(), mv);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    #[must_use]
    pub const fn new(from: Coord, to: Coord) -> Self {
        Self { from, to }
    }

    /// The move that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        Self {
            from: self.to,
            to: self.from,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Move list returned by generation.
/// SmallVec keeps typical positions (up to 8 one-step moves) off the heap.
pub type MoveList = SmallVec<[Move; 16]>;
