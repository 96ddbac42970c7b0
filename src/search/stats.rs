//! Search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during one `best_move` call.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Minimax nodes visited, across all depths.
    pub nodes: u64,

    /// Leaf evaluations performed.
    pub evaluations: u64,

    /// Alpha-beta cutoffs taken.
    pub cutoffs: u64,

    /// Nodes visited by each completed iterative-deepening pass.
    pub depth_nodes: Vec<u64>,

    /// Deepest pass that ran to completion.
    pub completed_depth: u32,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Calculate nodes per second.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.nodes as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }
}
