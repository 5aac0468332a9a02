//! Draw detection logic for tic-tac-toe.

use crate::types::Board;

/// Checks if the board is full (all cells occupied).
///
/// A full board can still hold a winning line, so callers check
/// [`is_winner`](super::is_winner) first.
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
