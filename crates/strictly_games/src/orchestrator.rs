//! Game orchestration between players.

use crate::players::Player;
use anyhow::{Context, Result};
use std::io::Write;
use strictly_tictactoe::{Board, Outcome, Player as Mark, is_draw, is_winner};
use tracing::{debug, info, instrument};

/// Runs a console game: X moves first, turns alternate until a win or a full board.
pub struct Orchestrator {
    board: Board,
    player_x: Box<dyn Player>,
    player_o: Box<dyn Player>,
}

impl Orchestrator {
    /// Creates a new orchestrator with an empty board.
    pub fn new(player_x: Box<dyn Player>, player_o: Box<dyn Player>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop, writing the transcript to `out`.
    ///
    /// # Errors
    ///
    /// Fails if a player cannot produce a move (for example when input is
    /// closed), if a player returns an occupied cell, or if `out` fails.
    #[instrument(skip_all, fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Outcome> {
        info!("Starting game");
        writeln!(out, "Welcome to Tic Tac Toe with AI!")?;
        write!(out, "{}", self.board)?;

        let mut current = Mark::X;
        loop {
            let player = match current {
                Mark::X => &mut self.player_x,
                Mark::O => &mut self.player_o,
            };

            writeln!(out, "\n{}'s turn ({}).", player.name(), current)?;
            let mv = player.get_move(&mut self.board, out)?;
            self.board
                .apply(mv, current)
                .with_context(|| format!("{} returned an illegal move", player.name()))?;
            debug!(player = %current, %mv, board = %self.board.compact(), "Move committed");

            write!(out, "{}", self.board)?;

            if is_winner(&self.board, current) {
                writeln!(out, "\n{current} wins!")?;
                info!(winner = %current, "Game over");
                return Ok(Outcome::Winner(current));
            }
            if is_draw(&self.board) {
                writeln!(out, "\nIt's a draw!")?;
                info!("Game over: draw");
                return Ok(Outcome::Draw);
            }

            current = current.opponent();
        }
    }
}
