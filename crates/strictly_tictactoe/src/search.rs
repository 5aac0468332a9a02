//! Exhaustive minimax search for the O player.
//!
//! The search explores every reachable continuation from one shared board.
//! Each tentative move is held by a [`Tentative`] guard, which places the mark
//! when created and clears it when dropped, so the board is back in its
//! original state whenever control returns to a caller.

use crate::action::Move;
use crate::rules::{is_draw, is_winner};
use crate::types::{Board, Player};
use derive_new::new;
use serde::Serialize;
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Minimax score. Positive favors O, negative favors X, zero is neutral.
pub type Score = i32;

/// Score of an immediate win, before the depth adjustment.
pub const WIN_SCORE: Score = 10;

/// The side the search plays for.
pub const MAXIMIZER: Player = Player::O;

/// The side the search plays against.
pub const MINIMIZER: Player = Player::X;

/// A candidate move and the minimax value of playing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, new)]
pub struct MoveScore {
    /// The candidate move.
    pub mv: Move,
    /// Value of the position after O plays `mv`, with X to reply.
    pub score: Score,
}

/// A mark placed for the lifetime of the guard.
struct Tentative<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Tentative<'a> {
    fn place(board: &'a mut Board, mv: Move, player: Player) -> Self {
        board.place(mv, player);
        Self { board, mv }
    }
}

impl Deref for Tentative<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Tentative<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Tentative<'_> {
    fn drop(&mut self) {
        self.board.undo(self.mv);
    }
}

/// Score for a finished position, or `None` if play continues.
///
/// O's win is checked before X's, and both before the full-board draw.
fn terminal_score(board: &Board, depth: u32) -> Option<Score> {
    let depth = depth as Score;
    if is_winner(board, MAXIMIZER) {
        Some(WIN_SCORE - depth)
    } else if is_winner(board, MINIMIZER) {
        Some(depth - WIN_SCORE)
    } else if is_draw(board) {
        Some(0)
    } else {
        None
    }
}

/// Minimax value of `board` with `depth` plies already played in this search.
///
/// `maximizing` is true when O is to move. Wins score `10 - depth` and losses
/// `depth - 10`, so faster wins and slower losses are preferred. No pruning:
/// every leaf below `board` is visited once.
///
/// The board is borrowed mutably for exploration and is unchanged on return.
pub fn evaluate(board: &mut Board, depth: u32, maximizing: bool) -> Score {
    if let Some(score) = terminal_score(board, depth) {
        return score;
    }

    let (player, mut best) = if maximizing {
        (MAXIMIZER, Score::MIN)
    } else {
        (MINIMIZER, Score::MAX)
    };

    for mv in board.valid_moves() {
        let score = {
            let mut child = Tentative::place(board, mv, player);
            evaluate(&mut child, depth + 1, !maximizing)
        };
        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}

/// Scores every move available to O, in scan order.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn score_moves(board: &mut Board) -> Vec<MoveScore> {
    board
        .valid_moves()
        .into_iter()
        .map(|mv| MoveScore::new(mv, score_candidate(board, mv)))
        .collect()
}

fn score_candidate(board: &mut Board, mv: Move) -> Score {
    let mut child = Tentative::place(board, mv, MAXIMIZER);
    evaluate(&mut child, 0, false)
}

/// Picks O's optimal move.
///
/// Each empty cell is tried in scan order and the first move with the
/// strictly greatest score is kept; a later move with an equal score never
/// replaces it. Returns `None` if the board has no empty cell.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn find_best_move(board: &mut Board) -> Option<Move> {
    let mut best: Option<MoveScore> = None;

    for mv in board.valid_moves() {
        let score = score_candidate(board, mv);
        debug!(%mv, score, "Scored candidate move");
        if best.is_none_or(|b| score > b.score) {
            best = Some(MoveScore::new(mv, score));
        }
    }

    match best {
        Some(choice) => {
            debug!(mv = %choice.mv, score = choice.score, "Selected move");
            Some(choice.mv)
        }
        None => {
            debug!("No empty cell to play");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    fn mv(row: usize, col: usize) -> Move {
        Move::new(row, col).unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let mut b = board("OO.|XX.|X..");
        assert_eq!(find_best_move(&mut b), Some(mv(0, 2)));
    }

    #[test]
    fn test_blocks_threat() {
        // X threatens the left column, O has nothing on the board.
        let mut b = board("X..|X..|...");
        // Not reachable by turn order, but the search does not care.
        assert_eq!(find_best_move(&mut b), Some(mv(2, 0)));
    }

    #[test]
    fn test_blocks_reachable_threat() {
        // X at (0,0) and (1,1), O at (0,2); X threatens (2,2).
        let mut b = board("X.O|.X.|...");
        assert_eq!(find_best_move(&mut b), Some(mv(2, 2)));
    }

    #[test]
    fn test_prefers_win_over_block() {
        // Both sides threaten; O should finish its own row.
        let mut b = board("OO.|XX.|X..");
        let scores = score_moves(&mut b);
        assert_eq!(scores[0], MoveScore::new(mv(0, 2), WIN_SCORE));
    }

    #[test]
    fn test_full_board_scores() {
        let mut draw = board("XOX|XOO|OXX");
        assert_eq!(evaluate(&mut draw, 0, true), 0);
        assert_eq!(evaluate(&mut draw, 4, false), 0);
        assert_eq!(find_best_move(&mut draw), None);
    }

    #[test]
    fn test_terminal_scores_use_depth() {
        let mut o_wins = board("OOO|XX.|X..");
        assert_eq!(evaluate(&mut o_wins, 3, false), 7);
        let mut x_wins = board("XXX|OO.|...");
        assert_eq!(evaluate(&mut x_wins, 3, true), -7);
    }

    #[test]
    fn test_search_restores_board() {
        let mut b = board("X..|.O.|..X");
        let before = b.clone();
        find_best_move(&mut b);
        assert_eq!(b, before);
        score_moves(&mut b);
        assert_eq!(b, before);
        evaluate(&mut b, 0, true);
        assert_eq!(b, before);
    }

    #[test]
    fn test_empty_board_ties_break_to_first_cell() {
        // Every opening draws under perfect play, so the first cell wins the tie.
        let mut b = Board::new();
        let scores = score_moves(&mut b);
        assert!(scores.iter().all(|s| s.score == 0));
        assert_eq!(find_best_move(&mut b), Some(mv(0, 0)));
    }

    #[test]
    fn test_equal_wins_keep_earliest() {
        // O can complete the top row at (0,2) or the left column at (2,0).
        let mut b = board("OO.|OX.|.XX");
        let scores = score_moves(&mut b);
        let winning: Vec<_> = scores
            .iter()
            .filter(|s| s.score == WIN_SCORE)
            .map(|s| s.mv)
            .collect();
        assert_eq!(winning, vec![mv(0, 2), mv(2, 0)]);
        assert_eq!(find_best_move(&mut b), Some(mv(0, 2)));
    }

    #[test]
    fn test_guard_undoes_on_drop() {
        let mut b = Board::new();
        {
            let child = Tentative::place(&mut b, mv(1, 1), Player::O);
            assert!(!child.is_empty(mv(1, 1)));
        }
        assert_eq!(b, Board::new());
    }
}
