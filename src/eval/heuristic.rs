//! Static position evaluation.
//!
//! Every piece on the board contributes, whichever side owns it:
//!
//! 1. +1 if it belongs to the player to move, -1 otherwise;
//! 2. its orthogonal mobility, times `mobility`;
//! 3. `center / (|row - c| + 1) / (|col - c| + 1)` in integer arithmetic;
//! 4. minus `safety` per opponent piece touching it (Chebyshev distance 1);
//! 5. plus `aggressiveness` per opponent piece at Chebyshev distance 2.
//!
//! Terms 4 and 5 are real-valued; the running piece value is truncated
//! toward zero after each of them. The total is linear in board cells, which
//! matters because it runs at every leaf of the search tree.

use serde::{Deserialize, Serialize};

use crate::core::GameState;
use crate::rules::{mobility_at, opponents_in_ring};

/// Scores a position from the point of view of the player to move.
///
/// Positive favors the player to move. Closures implement this trait, which
/// is handy for exercising the search with synthetic scores.
pub trait Evaluator {
    fn evaluate(&self, state: &GameState) -> i32;
}

impl<F> Evaluator for F
where
    F: Fn(&GameState) -> i32,
{
    fn evaluate(&self, state: &GameState) -> i32 {
        self(state)
    }
}

/// Weights of the territory heuristic.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EvalWeights {
    /// Per adjacent empty cell.
    pub mobility: i32,
    /// Numerator of the center-affinity term.
    pub center: i32,
    /// Penalty per touching opponent piece.
    pub safety: f64,
    /// Bonus per opponent piece two cells away.
    pub aggressiveness: f64,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            mobility: 1,
            center: 4,
            safety: 1.5,
            aggressiveness: 1.25,
        }
    }
}

/// The default evaluator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TerritoryHeuristic {
    pub weights: EvalWeights,
}

impl TerritoryHeuristic {
    #[must_use]
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }
}

impl Evaluator for TerritoryHeuristic {
    fn evaluate(&self, state: &GameState) -> i32 {
        let w = &self.weights;
        let board = state.board();
        let center = board.center();

        let mut score = 0;
        for (at, owner) in board.pieces() {
            let mut value: i32 = if owner == state.current_player() { 1 } else { -1 };

            value += w.mobility * mobility_at(board, at) as i32;

            let row_falloff = at.row.abs_diff(center) as i32 + 1;
            let col_falloff = at.col.abs_diff(center) as i32 + 1;
            value += w.center / row_falloff / col_falloff;

            let touching = opponents_in_ring(board, at, owner, 1) as f64;
            value = (f64::from(value) - w.safety * touching) as i32;

            let nearby = opponents_in_ring(board, at, owner, 2) as f64;
            value = (f64::from(value) + w.aggressiveness * nearby) as i32;

            score += value;
        }
        score
    }
}

/// Evaluate with the default weights.
#[must_use]
pub fn evaluate(state: &GameState) -> i32 {
    TerritoryHeuristic::default().evaluate(state)
}
