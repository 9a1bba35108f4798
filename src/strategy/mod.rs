//! Move providers
//!
//! The match controller only talks to the [`Strategy`] trait. Three
//! providers ship with the crate:
//! - [`HeuristicStrategy`](crate::HeuristicStrategy): the deterministic reference bot
//! - [`RandomStrategy`]: uniform choice among empty cells
//! - [`ProcessStrategy`]: an external program speaking the JSON grid format
//!
//! Any `FnMut(&Board, Color) -> Pos` closure is a strategy as well.

pub mod process;
pub mod random;

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::Serialize;

use crate::board::{Board, Color, Pos};
use crate::config::ArenaConfig;
use crate::engine::HeuristicStrategy;
use crate::error::StrategyError;

pub use process::ProcessStrategy;
pub use random::RandomStrategy;

/// Something that picks a move for one color.
///
/// A returned position is not trusted: the caller validates it, and an
/// illegal move or an error forfeits the game for `color`.
pub trait Strategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Pos, StrategyError>;

    /// Display name for logs.
    fn name(&self) -> &str {
        "anonymous"
    }
}

impl<F> Strategy for F
where
    F: FnMut(&Board, Color) -> Pos,
{
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Pos, StrategyError> {
        Ok(self(board, color))
    }
}

/// Player specification as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Built-in heuristic bot
    Heuristic,
    /// Built-in uniform random bot
    Random,
    /// Command line of an external bot
    Process(String),
}

impl StrategyKind {
    /// Build a fresh strategy. `seed` only affects randomized strategies.
    pub fn build(&self, seed: u64, config: &ArenaConfig) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Heuristic => Box::new(HeuristicStrategy::with_weights(config.weights)),
            StrategyKind::Random => Box::new(RandomStrategy::new(seed)),
            StrategyKind::Process(command) => Box::new(ProcessStrategy::new(
                command,
                Duration::from_millis(config.move_timeout_ms),
            )),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("player must be 'heuristic', 'random' or a bot command".to_string()),
            "heuristic" => Ok(StrategyKind::Heuristic),
            "random" => Ok(StrategyKind::Random),
            command => Ok(StrategyKind::Process(command.to_string())),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Heuristic => f.write_str("heuristic"),
            StrategyKind::Random => f.write_str("random"),
            StrategyKind::Process(command) => f.write_str(command),
        }
    }
}
