//! One-shot position analysis for the `best-move` command.

use derive_getters::Getters;
use serde::Serialize;
use std::fmt;
use strictly_tictactoe::{
    Board, Move, MoveScore, Outcome, Player as Mark, find_best_move, outcome, score_moves,
};
use tracing::{instrument, warn};

/// Minimax scores for every O move on a board, plus the chosen move.
#[derive(Debug, Clone, Getters, Serialize)]
pub struct Analysis {
    /// Board in compact text form.
    board: String,
    /// Side to move inferred from mark counts, if the counts are legal.
    to_move: Option<Mark>,
    /// Set when the game on this board is already over.
    outcome: Option<Outcome>,
    /// Candidate moves in scan order. Empty for finished games.
    scores: Vec<MoveScore>,
    /// The move the AI would play.
    best: Option<Move>,
    /// Rendered grid for the text report.
    #[serde(skip)]
    #[getter(skip)]
    grid: String,
}

/// Analyzes `board` from O's point of view.
///
/// Finished games are reported without searching.
#[instrument(skip(board), fields(board = %board.compact()))]
pub fn analyze(board: &mut Board) -> Analysis {
    let to_move = board.to_move();
    if to_move != Some(Mark::O) {
        warn!(?to_move, "Board is not O's turn; analyzing as if O moves next");
    }

    let outcome = outcome(board);
    let (scores, best) = match outcome {
        Some(_) => (Vec::new(), None),
        None => (score_moves(board), find_best_move(board)),
    };

    Analysis {
        board: board.compact(),
        to_move,
        outcome,
        scores,
        best,
        grid: board.to_string(),
    }
}

impl fmt::Display for Analysis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)?;
        if let Some(outcome) = self.outcome {
            return writeln!(f, "Game over: {outcome}");
        }

        writeln!(f, "Candidate moves for O:")?;
        for MoveScore { mv, score } in &self.scores {
            writeln!(f, "  {mv}  score {score:>3}")?;
        }
        match self.best {
            Some(mv) => writeln!(f, "Best move: {mv}"),
            None => writeln!(f, "No move available"),
        }
    }
}
