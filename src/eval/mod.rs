//! Positional evaluation for the heuristic bot
//!
//! - [`patterns`]: score of a single line shape and the weight vector
//! - [`heuristic`]: per-cell score combining offense, defense and centrality

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_cell, CellScore};
pub use patterns::{line_value, LineScore, ScoreWeights};
