//! Single-ply positional scoring of candidate cells
//!
//! Scores a cell from the mover's perspective:
//! - Offense: lines the mover would build there
//! - Defense: opponent lines the move would occupy
//! - Centrality: closeness to the centre of the board

use serde::Serialize;

use crate::board::{Board, Color, Direction, Pos};
use crate::search::ThreatScanner;

use super::patterns::{line_value, ScoreWeights};

/// Breakdown of a cell's positional score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct CellScore {
    /// Sum of own line values over the four directions
    pub offense: i32,
    /// Sum of opponent line values over the four directions
    pub defense: i32,
    /// `max(0, N/2 - chebyshev(cell, centre))`
    pub centrality: i32,
    /// Weighted total used for ranking
    pub total: i32,
}

/// Score `pos` for `color` to play.
///
/// The cell is assumed empty; an occupied cell is scored as if it were not.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos, color: Color, weights: &ScoreWeights) -> CellScore {
    let scanner = ThreatScanner::new(board);
    let opponent = color.opponent();

    let (offense, defense) = Direction::ALL
        .into_iter()
        .fold((0, 0), |(own, opp), dir| {
            (
                own + line_value(&scanner.shape(pos, color, dir)),
                opp + line_value(&scanner.shape(pos, opponent, dir)),
            )
        });

    let half = (board.size() / 2) as i32;
    let centrality = (half - pos.chebyshev(board.center())).max(0);

    CellScore {
        offense,
        defense,
        centrality,
        total: weights
            .offense
            .saturating_mul(offense)
            .saturating_add(weights.defense.saturating_mul(defense))
            .saturating_add(weights.center.saturating_mul(centrality)),
    }
}
