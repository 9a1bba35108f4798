//! Five-in-a-row match runner with a heuristic reference bot
//!
//! Freestyle Gomoku with one restriction:
//! - Square board, 15x15 by default
//! - Black moves first, players alternate placing one stone
//! - A run of exactly five wins; six or more (an overline) does not
//! - A full board without a win is a draw
//! - An illegal move, or a bot that fails to move, forfeits the game
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation with per-colour bitboards
//! - [`rules`]: Move legality, win and draw detection
//! - [`search`]: Threat scanning (winning, blocking and pattern cells)
//! - [`eval`]: Pattern scores and positional cell scoring
//! - [`engine`]: The heuristic bot
//! - [`strategy`]: The move-provider trait and the random / external bots
//! - [`arena`]: Match controller, tournaments and game logs
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{HeuristicStrategy, MatchController, MatchResult, RandomStrategy};
//!
//! let mut controller = MatchController::new(15).unwrap();
//! let mut black = HeuristicStrategy::new();
//! let mut white = RandomStrategy::new(42);
//!
//! let result = controller.play(&mut black, &mut white).unwrap();
//! assert!(matches!(result, MatchResult::Win(_) | MatchResult::Draw));
//! println!("{result} after {} moves", controller.history().len());
//! ```
//!
//! # Bot Priority
//!
//! The heuristic bot follows this priority:
//! 1. Immediate winning move
//! 2. Block the opponent's immediate win
//! 3. Best positional score (own lines, opponent lines, centrality)
//! 4. Centre cell on an empty board

pub mod arena;
pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;
pub mod strategy;

// Re-export commonly used types for convenience
pub use arena::{MatchController, MatchResult, MatchState, Tournament, TournamentReport};
pub use board::{Board, Cell, Color, Pos, DEFAULT_BOARD_SIZE, WIN_LENGTH};
pub use config::ArenaConfig;
pub use engine::{Decision, DecisionKind, HeuristicStrategy};
pub use error::{ArenaError, BoardError, InvalidMoveError, MoveViolation, StrategyError};
pub use strategy::{ProcessStrategy, RandomStrategy, Strategy, StrategyKind};
