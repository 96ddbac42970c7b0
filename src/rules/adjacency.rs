//! Neighborhood counts around a single piece.
//!
//! These are the cheap per-cell primitives the evaluator sums over the board.

use crate::core::{Board, Coord, Direction, Player};

/// Orthogonally adjacent empty cells.
#[must_use]
pub fn mobility_at(board: &Board, at: Coord) -> usize {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| board.neighbor(at, dir))
        .filter(|c| board.get(*c).is_empty())
        .count()
}

/// Pieces of `owner`'s opponent at Chebyshev distance exactly `ring` from `at`.
///
/// Ring 1 is the surrounding 3x3 block, ring 2 the outer frame of the 5x5
/// block.
#[must_use]
pub fn opponents_in_ring(board: &Board, at: Coord, owner: Player, ring: usize) -> usize {
    let opponent = owner.opponent();
    let r = ring as isize;
    let mut count = 0;
    for dr in -r..=r {
        for dc in -r..=r {
            let Some(c) = at.offset(dr, dc) else {
                continue;
            };
            if at.chebyshev(c) != ring {
                continue;
            }
            if board.try_get(c).is_some_and(|cell| cell.is_owned_by(opponent)) {
                count += 1;
            }
        }
    }
    count
}
