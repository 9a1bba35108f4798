//! Heuristic reference bot
//!
//! Chooses a move with a fixed priority system:
//!
//! 1. **Opening**: the centre cell on an empty board
//! 2. **Win**: the first cell (row-major) that completes an exact five
//! 3. **Block**: the first cell where the opponent would complete one
//! 4. **Positional**: the best-scoring empty cell (see [`score_cell`])
//!
//! Positional ties are broken by squared distance to the centre cell and
//! then by row-major order, so the bot is fully deterministic.
//!
//! # Example
//!
//! ```
//! use gomoku::{Board, Color, HeuristicStrategy, Pos};
//! use gomoku::engine::DecisionKind;
//!
//! let mut board = Board::default();
//! for col in 3..7 {
//!     board.place(Pos::new(7, col), Color::Black).unwrap();
//! }
//!
//! let bot = HeuristicStrategy::new();
//! let decision = bot.decide(&board, Color::Black).unwrap();
//! assert_eq!(decision.kind, DecisionKind::Win);
//! assert_eq!(decision.pos, Pos::new(7, 2));
//! ```

use serde::Serialize;
use tracing::debug;

use crate::board::{Board, Color, Pos};
use crate::error::StrategyError;
use crate::eval::{score_cell, CellScore, ScoreWeights};
use crate::search::ThreatScanner;
use crate::strategy::Strategy;

/// Which rule of the priority system produced the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecisionKind {
    /// Centre cell on an empty board
    Opening,
    /// Completes an exact five
    Win,
    /// Takes the opponent's winning cell
    Block,
    /// Highest positional score
    Positional,
}

/// A chosen move with its provenance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Decision {
    pub pos: Pos,
    pub kind: DecisionKind,
    /// Positional breakdown of the chosen cell
    pub score: CellScore,
}

/// Deterministic single-ply bot. Holds only its weights; nothing carries
/// over between calls.
#[derive(Debug, Clone, Default)]
pub struct HeuristicStrategy {
    weights: ScoreWeights,
}

impl HeuristicStrategy {
    /// Create a bot with the default weights (offense 2, defense 1, center 1)
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Pick a move for `color`.
    ///
    /// Returns [`StrategyError::NoLegalMove`] on a full board.
    pub fn decide(&self, board: &Board, color: Color) -> Result<Decision, StrategyError> {
        if board.is_full() {
            return Err(StrategyError::NoLegalMove);
        }

        let decision = |pos: Pos, kind: DecisionKind| Decision {
            pos,
            kind,
            score: score_cell(board, pos, color, &self.weights),
        };

        if board.is_empty_board() {
            return Ok(decision(board.center(), DecisionKind::Opening));
        }

        let scanner = ThreatScanner::new(board);

        if let Some(pos) = scanner.winning_moves(color).next() {
            return Ok(decision(pos, DecisionKind::Win));
        }

        if let Some(pos) = scanner.blocking_moves(color).next() {
            return Ok(decision(pos, DecisionKind::Block));
        }

        self.best_positional(board, color)
            .ok_or(StrategyError::NoLegalMove)
    }

    /// Highest-scoring empty cell: score, then distance to centre, then row-major.
    fn best_positional(&self, board: &Board, color: Color) -> Option<Decision> {
        let center = board.center();
        let mut best: Option<(Decision, i32)> = None;

        for pos in board.empty_cells() {
            let score = score_cell(board, pos, color, &self.weights);
            let dist = pos.distance_sq(center);
            let better = match &best {
                None => true,
                Some((current, current_dist)) => {
                    score.total > current.score.total
                        || (score.total == current.score.total && dist < *current_dist)
                }
            };
            if better {
                let decision = Decision {
                    pos,
                    kind: DecisionKind::Positional,
                    score,
                };
                best = Some((decision, dist));
            }
        }

        best.map(|(decision, _)| decision)
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(&mut self, board: &Board, color: Color) -> Result<Pos, StrategyError> {
        let decision = self.decide(board, color)?;
        debug!(
            pos = %decision.pos,
            kind = ?decision.kind,
            score = decision.score.total,
            "heuristic decision"
        );
        Ok(decision.pos)
    }

    fn name(&self) -> &str {
        "heuristic"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_board(setup: &[(i32, i32, Color)]) -> Board {
        let mut board = Board::default();
        for &(row, col, color) in setup {
            board.place(Pos::new(row, col), color).unwrap();
        }
        board
    }

    #[test]
    fn test_opening_takes_center() {
        let decision = HeuristicStrategy::new()
            .decide(&Board::default(), Color::Black)
            .unwrap();
        assert_eq!(decision.pos, Pos::new(7, 7));
        assert_eq!(decision.kind, DecisionKind::Opening);

        let small = Board::new(4).unwrap();
        let decision = HeuristicStrategy::new().decide(&small, Color::Black).unwrap();
        assert_eq!(decision.pos, Pos::new(2, 2));
    }

    #[test]
    fn test_win_before_block() {
        let board = setup_board(&[
            (7, 3, Color::Black),
            (7, 4, Color::Black),
            (7, 5, Color::Black),
            (7, 6, Color::Black),
            (2, 3, Color::White),
            (2, 4, Color::White),
            (2, 5, Color::White),
            (2, 6, Color::White),
        ]);
        let decision = HeuristicStrategy::new().decide(&board, Color::Black).unwrap();
        assert_eq!(decision.kind, DecisionKind::Win);
        assert_eq!(decision.pos, Pos::new(7, 2));
    }

    #[test]
    fn test_block_opponent_four() {
        let board = setup_board(&[
            (5, 5, Color::White),
            (6, 5, Color::White),
            (7, 5, Color::White),
            (8, 5, Color::White),
            (4, 5, Color::Black),
            (7, 7, Color::Black),
            (7, 8, Color::Black),
        ]);
        let decision = HeuristicStrategy::new().decide(&board, Color::Black).unwrap();
        assert_eq!(decision.kind, DecisionKind::Block);
        assert_eq!(decision.pos, Pos::new(9, 5));
    }

    #[test]
    fn test_positional_extends_own_line() {
        let board = setup_board(&[
            (7, 7, Color::Black),
            (7, 8, Color::Black),
            (7, 9, Color::Black),
            (0, 0, Color::White),
            (14, 14, Color::White),
        ]);
        let decision = HeuristicStrategy::new().decide(&board, Color::Black).unwrap();
        assert_eq!(decision.kind, DecisionKind::Positional);
        // both ends make an open four; (7, 6) is closer to the centre
        assert_eq!(decision.pos, Pos::new(7, 6));
    }

    #[test]
    fn test_tie_broken_by_center_distance() {
        let flat = ScoreWeights {
            offense: 0,
            defense: 0,
            center: 0,
        };
        let board = setup_board(&[(0, 0, Color::White)]);
        let decision = HeuristicStrategy::with_weights(flat)
            .decide(&board, Color::Black)
            .unwrap();
        assert_eq!(decision.kind, DecisionKind::Positional);
        assert_eq!(decision.pos, Pos::new(7, 7));
    }

    #[test]
    fn test_tie_broken_by_row_major() {
        let flat = ScoreWeights {
            offense: 0,
            defense: 0,
            center: 0,
        };
        let mut board = Board::new(4).unwrap();
        board.place(Pos::new(2, 2), Color::Black).unwrap();
        // (1, 2), (2, 1), (2, 3) and (3, 2) are all one step from the centre
        let decision = HeuristicStrategy::with_weights(flat)
            .decide(&board, Color::White)
            .unwrap();
        assert_eq!(decision.pos, Pos::new(1, 2));
    }

    #[test]
    fn test_huge_weights_still_pick_win() {
        let mut stones: Vec<(i32, i32, Color)> = (3..6).map(|c| (7, c, Color::Black)).collect();
        stones.extend((2..6).map(|r| (r, 10, Color::Black)));
        stones.extend([(0, 0, Color::White), (0, 2, Color::White), (0, 4, Color::White)]);
        stones.extend([(14, 0, Color::White), (14, 2, Color::White), (14, 4, Color::White)]);
        let board = setup_board(&stones);
        let weights = ScoreWeights {
            offense: 100_000,
            defense: 1,
            center: 1,
        };
        let decision = HeuristicStrategy::with_weights(weights)
            .decide(&board, Color::Black)
            .unwrap();
        assert_eq!(decision.kind, DecisionKind::Win);
        assert_eq!(decision.pos, Pos::new(1, 10));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let mut board = Board::new(1).unwrap();
        board.place(Pos::new(0, 0), Color::Black).unwrap();
        let err = HeuristicStrategy::new().decide(&board, Color::White).unwrap_err();
        assert!(matches!(err, StrategyError::NoLegalMove));
    }

    #[test]
    fn test_deterministic() {
        let board = setup_board(&[(7, 7, Color::Black), (6, 8, Color::White), (8, 6, Color::Black)]);
        let bot = HeuristicStrategy::new();
        let first = bot.decide(&board, Color::White).unwrap();
        for _ in 0..3 {
            assert_eq!(bot.decide(&board, Color::White).unwrap(), first);
        }
    }

    #[test]
    fn test_strategy_trait_returns_decision() {
        let board = setup_board(&[(7, 7, Color::Black)]);
        let mut bot = HeuristicStrategy::new();
        let pos = bot.choose_move(&board, Color::White).unwrap();
        assert_eq!(pos, bot.decide(&board, Color::White).unwrap().pos);
        assert_eq!(bot.name(), "heuristic");
    }
}
