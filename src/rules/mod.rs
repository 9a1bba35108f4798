//! Game rules for freestyle Gomoku with the exact-five restriction
//!
//! This module implements the rule set:
//! - Move legality (in bounds, empty cell)
//! - Win condition (a run of exactly five; overlines do not count)
//! - Draw condition (full board without a win)
//!
//! All checks are pure functions over a borrowed [`Board`](crate::Board).

pub mod draw;
pub mod moves;
pub mod win;

use serde::Serialize;
use tracing::instrument;

use crate::board::{Board, Color, Pos};

// Re-exports for convenient access
pub use draw::check_draw;
pub use moves::validate_move;
pub use win::{check_win, winning_line};

/// Outcome of a placement, in priority order: a win beats a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Win,
    Draw,
    Continue,
}

/// Judge the position after `color` has played `last_move`.
#[instrument(skip(board))]
pub fn adjudicate(board: &Board, last_move: Pos, color: Color) -> Verdict {
    if check_win(board, last_move, color) {
        Verdict::Win
    } else if check_draw(board) {
        Verdict::Draw
    } else {
        Verdict::Continue
    }
}
