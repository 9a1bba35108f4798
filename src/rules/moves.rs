//! Move legality

use tracing::instrument;

use crate::board::{Board, Color, Pos};
use crate::error::{InvalidMoveError, MoveViolation};

/// Check that `pos` is on the board and empty.
///
/// The color is carried for tracing only; legality does not depend on it.
/// A rejected move is never retried: the caller forfeits the mover.
#[instrument(skip(board))]
pub fn validate_move(board: &Board, pos: Pos, color: Color) -> Result<(), InvalidMoveError> {
    if !board.contains(pos) {
        return Err(InvalidMoveError {
            pos,
            reason: MoveViolation::OutOfBounds,
        });
    }
    if board.stone_at(pos).is_some() {
        return Err(InvalidMoveError {
            pos,
            reason: MoveViolation::Occupied,
        });
    }
    Ok(())
}
