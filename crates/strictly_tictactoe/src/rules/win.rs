//! Win detection logic for tic-tac-toe.

use crate::action::Move;
use crate::types::{Board, Cell, Player};
use strum::IntoEnumIterator;

/// The 8 winning lines.
pub const LINES: [[Move; 3]; 8] = [
    // Rows
    [Move::at(0, 0), Move::at(0, 1), Move::at(0, 2)],
    [Move::at(1, 0), Move::at(1, 1), Move::at(1, 2)],
    [Move::at(2, 0), Move::at(2, 1), Move::at(2, 2)],
    // Columns
    [Move::at(0, 0), Move::at(1, 0), Move::at(2, 0)],
    [Move::at(0, 1), Move::at(1, 1), Move::at(2, 1)],
    [Move::at(0, 2), Move::at(1, 2), Move::at(2, 2)],
    // Diagonals
    [Move::at(0, 0), Move::at(1, 1), Move::at(2, 2)],
    [Move::at(0, 2), Move::at(1, 1), Move::at(2, 0)],
];

/// Checks whether `player` has three in a row on any line.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let mark = Cell::Occupied(player);
    LINES
        .iter()
        .any(|line| line.iter().all(|&mv| board.get(mv) == mark))
}

/// Returns the player holding a winning line, if any.
///
/// X is checked first. Boards reached by alternating play never have two winners.
pub fn winner(board: &Board) -> Option<Player> {
    Player::iter().find(|&player| is_winner(board, player))
}
