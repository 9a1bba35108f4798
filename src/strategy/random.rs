use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Board, Color, Pos};
use crate::error::StrategyError;

use super::Strategy;

/// A strategy that picks uniformly at random among empty cells.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new(seed: u64) -> Self {
        RandomStrategy {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(&mut self, board: &Board, _color: Color) -> Result<Pos, StrategyError> {
        let empty = board.empty_cells().count();
        if empty == 0 {
            return Err(StrategyError::NoLegalMove);
        }
        let idx = self.rng.random_range(0..empty);
        board.empty_cells().nth(idx).ok_or(StrategyError::NoLegalMove)
    }

    fn name(&self) -> &str {
        "random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_strategy_selects_empty_cell() {
        let mut bot = RandomStrategy::new(1);
        let mut board = Board::new(3).unwrap();
        board.place(Pos::new(1, 1), Color::Black).unwrap();

        for _ in 0..100 {
            let pos = bot.choose_move(&board, Color::White).unwrap();
            assert!(board.is_empty_at(pos), "{pos} is not empty");
        }
    }

    #[test]
    fn test_same_seed_same_moves() {
        let board = Board::default();
        let mut a = RandomStrategy::new(99);
        let mut b = RandomStrategy::new(99);
        for _ in 0..10 {
            assert_eq!(
                a.choose_move(&board, Color::Black).unwrap(),
                b.choose_move(&board, Color::Black).unwrap()
            );
        }
    }

    #[test]
    fn test_full_board_errors() {
        let mut board = Board::new(1).unwrap();
        board.place(Pos::new(0, 0), Color::Black).unwrap();
        let err = RandomStrategy::default()
            .choose_move(&board, Color::White)
            .unwrap_err();
        assert!(matches!(err, StrategyError::NoLegalMove));
    }

    #[test]
    fn test_last_empty_cell() {
        let mut board = Board::new(2).unwrap();
        board.place(Pos::new(0, 0), Color::Black).unwrap();
        board.place(Pos::new(0, 1), Color::White).unwrap();
        board.place(Pos::new(1, 1), Color::Black).unwrap();
        let pos = RandomStrategy::new(5).choose_move(&board, Color::White).unwrap();
        assert_eq!(pos, Pos::new(1, 0));
    }
}
