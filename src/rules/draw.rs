//! Draw detection

use tracing::instrument;

use crate::board::Board;

/// A full board is a draw. Only meaningful after the last placement did not win.
#[instrument(skip(board), fields(stones = board.total_stones()))]
pub fn check_draw(board: &Board) -> bool {
    board.is_full()
}
