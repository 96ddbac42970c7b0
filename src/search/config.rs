//! Search configuration parameters.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Depth used by the reference opponent.
pub const DEFAULT_MAX_DEPTH: u32 = 5;

/// Search configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Deepest iterative-deepening pass (values below 1 behave as 1).
    pub max_depth: u32,

    /// Optional wall-clock budget per `best_move` call.
    /// A pass interrupted by the deadline is discarded; depth 1 always
    /// completes so a move is always available.
    pub time_limit: Option<Duration>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            time_limit: None,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom max depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: u32) -> Self {
        self.max_depth = depth;
        self
    }

    /// Create a new config with a time limit.
    #[must_use]
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }
}
