//! Error types for the board, rule engine, strategies and match runner.
//!
//! Board and rule errors never abort a process: the match controller turns
//! them into a forfeiture for the color that caused them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::board::{Pos, MAX_BOARD_SIZE};

/// Errors raised by [`Board`](crate::Board) primitives.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("position {pos} is outside the {size}x{size} board")]
    OutOfRange { pos: Pos, size: usize },

    #[error("position {pos} is already occupied")]
    Occupied { pos: Pos },

    #[error("board size {0} is not supported (expected 1..={max})", max = MAX_BOARD_SIZE)]
    InvalidSize(usize),

    #[error("invalid board grid: {0}")]
    InvalidGrid(String),
}

/// Why a move was rejected by the rule engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MoveViolation {
    OutOfBounds,
    Occupied,
}

impl fmt::Display for MoveViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveViolation::OutOfBounds => f.write_str("out of bounds"),
            MoveViolation::Occupied => f.write_str("cell occupied"),
        }
    }
}

/// A move rejected by [`validate_move`](crate::rules::validate_move).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("invalid move {pos}: {reason}")]
pub struct InvalidMoveError {
    pub pos: Pos,
    pub reason: MoveViolation,
}

impl TryFrom<BoardError> for InvalidMoveError {
    type Error = BoardError;

    /// Maps placement failures to move violations; size and grid errors pass through.
    fn try_from(err: BoardError) -> Result<Self, Self::Error> {
        match err {
            BoardError::Occupied { pos } => Ok(InvalidMoveError {
                pos,
                reason: MoveViolation::Occupied,
            }),
            BoardError::OutOfRange { pos, .. } => Ok(InvalidMoveError {
                pos,
                reason: MoveViolation::OutOfBounds,
            }),
            other => Err(other),
        }
    }
}

/// Failures of a strategy to produce a move at all.
#[derive(Debug, thiserror::Error)]
pub enum StrategyError {
    #[error("no empty cell left to play")]
    NoLegalMove,

    #[error("failed to start bot command '{command}': {source}")]
    Spawn {
        command: String,
        source: std::io::Error,
    },

    #[error("I/O error while talking to bot: {0}")]
    Io(#[from] std::io::Error),

    #[error("bot did not answer within {0} ms")]
    Timeout(u64),

    #[error("bot exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    #[error("bot returned an unreadable move: {0}")]
    Protocol(String),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}

/// Errors that can occur while writing game logs.
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("failed to write game log {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors from driving matches and tournaments.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("match is already finished")]
    MatchFinished,

    #[error("position is unreachable: {black} black and {white} white stones")]
    UnbalancedPosition { black: usize, white: usize },

    #[error("board error: {0}")]
    Board(#[from] BoardError),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("log error: {0}")]
    Log(#[from] LogError),

    #[error("failed to build thread pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_error_display() {
        let err = BoardError::OutOfRange {
            pos: Pos::new(15, 0),
            size: 15,
        };
        assert_eq!(err.to_string(), "position (15, 0) is outside the 15x15 board");
    }

    #[test]
    fn test_invalid_move_from_board_error() {
        let err = InvalidMoveError::try_from(BoardError::Occupied { pos: Pos::new(3, 4) }).unwrap();
        assert_eq!(err.reason, MoveViolation::Occupied);
        assert_eq!(err.pos, Pos::new(3, 4));

        let err = InvalidMoveError::try_from(BoardError::OutOfRange {
            pos: Pos::new(-1, 2),
            size: 15,
        })
        .unwrap();
        assert_eq!(err.reason, MoveViolation::OutOfBounds);

        assert!(InvalidMoveError::try_from(BoardError::InvalidSize(0)).is_err());
    }

    #[test]
    fn test_invalid_move_display() {
        let err = InvalidMoveError {
            pos: Pos::new(15, 0),
            reason: MoveViolation::OutOfBounds,
        };
        assert_eq!(err.to_string(), "invalid move (15, 0): out of bounds");
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Validation("rounds must be > 0".to_string());
        assert_eq!(err.to_string(), "config validation error: rounds must be > 0");
    }
}
