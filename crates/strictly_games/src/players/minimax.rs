//! Minimax AI player.

use super::Player;
use anyhow::Result;
use std::io::Write;
use strictly_tictactoe::{Board, Move, find_best_move};
use tracing::{debug, instrument};

/// Plays O with the exhaustive minimax search.
pub struct MinimaxPlayer {
    name: String,
}

impl MinimaxPlayer {
    /// Creates a new minimax player.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Player for MinimaxPlayer {
    #[instrument(skip_all, fields(ai = %self.name))]
    fn get_move(&mut self, board: &mut Board, _out: &mut dyn Write) -> Result<Move> {
        let mv = find_best_move(board)
            .ok_or_else(|| anyhow::anyhow!("No empty cell left for {}", self.name))?;
        debug!(%mv, "AI chose move");
        Ok(mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
