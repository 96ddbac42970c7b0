//! Minimax with alpha-beta pruning, driven by iterative deepening.
//!
//! Every node works on its own clone of the state, so the caller's state is
//! never touched and sibling branches never share a board. A successor is
//! the move applied and the turn handed over; hypothetical plies do not
//! spend the game's ply budget.
//!
//! Scores always come from the evaluator at the leaf, seen from the leaf's
//! player to move. The maximizing flag alone decides which side of the tree
//! takes the max.

use std::time::Instant;

use tracing::{debug, warn};

use crate::core::{GameState, Move};
use crate::eval::{Evaluator, TerritoryHeuristic};
use crate::rules::{is_terminal, legal_moves, successor};

use super::config::SearchConfig;
use super::stats::SearchStats;

/// How many nodes pass between deadline checks.
const DEADLINE_CHECK_INTERVAL: u64 = 1024;

/// Alpha-beta search context.
///
/// Generic over the evaluator. Owns the configuration and the statistics of
/// the last search.
pub struct MinimaxSearch<V = TerritoryHeuristic> {
    /// Search configuration.
    config: SearchConfig,

    /// Leaf evaluator.
    evaluator: V,

    /// Statistics of the last search.
    stats: SearchStats,

    /// Deadline of the pass in progress, if enforced.
    deadline: Option<Instant>,

    /// Set once the deadline passes; the pass in progress is discarded.
    aborted: bool,
}

impl MinimaxSearch<TerritoryHeuristic> {
    /// Create a search using the default territory heuristic.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_evaluator(config, TerritoryHeuristic::default())
    }
}

impl<V: Evaluator> MinimaxSearch<V> {
    /// Create a search with a custom evaluator.
    pub fn with_evaluator(config: SearchConfig, evaluator: V) -> Self {
        Self {
            config,
            evaluator,
            stats: SearchStats::default(),
            deadline: None,
            aborted: false,
        }
    }

    /// Pick a move for the player to move by iterative deepening.
    ///
    /// Runs one full pass per depth from 1 to `max_depth`. Each pass starts
    /// from scratch and replaces the previous choice; the deepest completed
    /// pass wins. Returns `None` when the player to move has no legal move.
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        let start = Instant::now();
        self.stats.reset();
        self.aborted = false;
        let deadline = self.config.time_limit.map(|limit| start + limit);

        let mut best = None;
        for depth in 1..=self.config.max_depth.max(1) {
            self.deadline = if depth == 1 { None } else { deadline };
            let nodes_before = self.stats.nodes;

            let Some((mv, value)) = self.search_root(state, depth) else {
                break;
            };
            if self.aborted {
                warn!(
                    depth,
                    kept = self.stats.completed_depth,
                    "search deadline reached, discarding unfinished pass"
                );
                break;
            }

            let nodes = self.stats.nodes - nodes_before;
            self.stats.depth_nodes.push(nodes);
            self.stats.completed_depth = depth;
            debug!(depth, %mv, value, nodes, "search pass complete");
            best = Some(mv);
        }

        self.deadline = None;
        self.stats.time_us = start.elapsed().as_micros() as u64;
        best
    }

    /// Run a single pass at `depth` and return its choice and value.
    ///
    /// Not subject to the time limit. `None` when there is no legal move.
    pub fn search_depth(&mut self, state: &GameState, depth: u32) -> Option<(Move, i32)> {
        self.deadline = None;
        self.aborted = false;
        self.search_root(state, depth.max(1))
    }

    /// Score every root move with a minimizing search below it and keep the
    /// strictly best, earliest first on ties.
    fn search_root(&mut self, state: &GameState, depth: u32) -> Option<(Move, i32)> {
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(state) {
            let child = successor(state, mv);
            let value = self.minimax(&child, depth - 1, false, i32::MIN, i32::MAX);
            if self.aborted {
                break;
            }
            if best.map_or(true, |(_, best_value)| value > best_value) {
                best = Some((mv, value));
            }
        }

        best
    }

    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Returns the evaluation at `depth == 0` or at a terminal position.
    /// A mover with no legal move in a non-terminal position has no
    /// successors, so the node keeps its starting bound: `i32::MIN` when
    /// maximizing, `i32::MAX` when minimizing. Being boxed in scores as lost.
    pub fn minimax(
        &mut self,
        state: &GameState,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.stats.nodes += 1;
        if self.out_of_time() {
            return 0;
        }

        if depth == 0 || is_terminal(state) {
            self.stats.evaluations += 1;
            return self.evaluator.evaluate(state);
        }

        let moves = legal_moves(state);
        if maximizing {
            let mut best = i32::MIN;
            for mv in moves {
                let child = successor(state, mv);
                let value = self.minimax(&child, depth - 1, false, alpha, beta);
                best = best.max(value);
                alpha = alpha.max(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        } else {
            let mut best = i32::MAX;
            for mv in moves {
                let child = successor(state, mv);
                let value = self.minimax(&child, depth - 1, true, alpha, beta);
                best = best.min(value);
                beta = beta.min(value);
                if beta <= alpha {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
            best
        }
    }

    fn out_of_time(&mut self) -> bool {
        if self.aborted {
            return true;
        }
        let Some(deadline) = self.deadline else {
            return false;
        };
        if self.stats.nodes % DEADLINE_CHECK_INTERVAL == 0 && Instant::now() >= deadline {
            self.aborted = true;
        }
        self.aborted
    }

    /// Get search statistics of the last search.
    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
