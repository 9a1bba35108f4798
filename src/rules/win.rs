//! Win condition checking
//!
//! A placement wins iff, in some direction, the contiguous run through it
//! is exactly five stones long. Six or more (an overline) does not win.

use tracing::instrument;

use crate::board::{Board, Color, Direction, LineRun, Pos, WIN_LENGTH};

/// Check whether `color` playing `last_move` produced an exact five.
///
/// Only the four lines through `last_move` are examined, so the check is
/// local and does not allocate.
#[instrument(skip(board), level = "trace")]
pub fn check_win(board: &Board, last_move: Pos, color: Color) -> bool {
    winning_line(board, last_move, color).is_some()
}

/// The exact-five run through `last_move`, if one exists.
///
/// Directions are tried in [`Direction::ALL`] order.
pub fn winning_line(board: &Board, last_move: Pos, color: Color) -> Option<LineRun> {
    if !board.contains(last_move) {
        return None;
    }
    Direction::ALL
        .into_iter()
        .map(|dir| board.run_through(last_move, color, dir))
        .find(|run| run.length == WIN_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_line(board: &mut Board, start: Pos, dir: Direction, len: i32, color: Color) {
        for i in 0..len {
            board.place(start.step(dir, i), color).unwrap();
        }
    }

    #[test]
    fn test_exact_five_horizontal() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(7, 3), Direction::Horizontal, 5, Color::Black);
        for c in 3..8 {
            assert!(check_win(&board, Pos::new(7, c), Color::Black));
        }
    }

    #[test]
    fn test_exact_five_every_direction() {
        for dir in Direction::ALL {
            let mut board = Board::default();
            let start = match dir {
                Direction::DiagonalUp => Pos::new(10, 2),
                _ => Pos::new(2, 2),
            };
            place_line(&mut board, start, dir, 5, Color::White);
            let last = start.step(dir, 4);
            let line = winning_line(&board, last, Color::White).unwrap();
            assert_eq!(line.direction, dir);
            assert_eq!(line.start, start);
            assert_eq!(line.length, 5);
        }
    }

    #[test]
    fn test_four_is_not_win() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(0, 0), Direction::Vertical, 4, Color::Black);
        assert!(!check_win(&board, Pos::new(3, 0), Color::Black));
    }

    #[test]
    fn test_overline_is_not_win() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(0, 0), Direction::Horizontal, 6, Color::Black);
        for c in 0..6 {
            assert!(!check_win(&board, Pos::new(0, c), Color::Black));
        }
    }

    #[test]
    fn test_overline_does_not_hide_other_direction() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(5, 2), Direction::Horizontal, 7, Color::Black);
        // vertical five sharing (5, 4)
        place_line(&mut board, Pos::new(1, 4), Direction::Vertical, 4, Color::Black);
        let line = winning_line(&board, Pos::new(5, 4), Color::Black).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
    }

    #[test]
    fn test_opponent_stones_break_run() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(7, 0), Direction::Horizontal, 2, Color::Black);
        board.place(Pos::new(7, 2), Color::White).unwrap();
        place_line(&mut board, Pos::new(7, 3), Direction::Horizontal, 3, Color::Black);
        assert!(!check_win(&board, Pos::new(7, 4), Color::Black));
    }

    #[test]
    fn test_win_at_board_edge() {
        let mut board = Board::default();
        place_line(&mut board, Pos::new(14, 10), Direction::Horizontal, 5, Color::White);
        assert!(check_win(&board, Pos::new(14, 14), Color::White));
    }

    #[test]
    fn test_off_board_move_never_wins() {
        let board = Board::default();
        assert!(!check_win(&board, Pos::new(15, 0), Color::Black));
    }
}
