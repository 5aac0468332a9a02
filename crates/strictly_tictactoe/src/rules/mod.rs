//! Game rules for tic-tac-toe.
//!
//! Pure functions classifying a board as won, drawn or still open. The search
//! calls these at every node, so they stay free of allocation and tracing.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{is_winner, winner};

use crate::types::{Board, Player};
use serde::Serialize;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("{_0} wins")]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw => None,
        }
    }
}

/// Classifies a board: a winning line takes priority over a full board.
///
/// Returns `None` while the game is still open.
pub fn outcome(board: &Board) -> Option<Outcome> {
    if let Some(player) = winner(board) {
        Some(Outcome::Winner(player))
    } else if is_draw(board) {
        Some(Outcome::Draw)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_board_has_no_outcome() {
        assert_eq!(outcome(&Board::new()), None);
    }

    #[test]
    fn test_win_takes_priority_over_full_board() {
        // Full, and X owns the top row.
        let board: Board = "XXX|OOX|XOO".parse().unwrap();
        assert!(is_draw(&board));
        assert_eq!(outcome(&board), Some(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board: Board = "XOX|XOO|OXX".parse().unwrap();
        assert_eq!(outcome(&board), Some(Outcome::Draw));
        assert_eq!(Outcome::Draw.winner(), None);
    }
}
