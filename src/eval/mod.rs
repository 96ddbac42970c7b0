//! Static evaluation of positions for the search.

pub mod heuristic;

pub use heuristic::{evaluate, EvalWeights, Evaluator, TerritoryHeuristic};
