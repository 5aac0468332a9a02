//! Player trait and implementations.

mod human;
mod minimax;

pub use human::{HumanPlayer, InputError, parse_move};
pub use minimax::MinimaxPlayer;

use anyhow::Result;
use std::io::Write;
use strictly_tictactoe::{Board, Move};

/// Trait for players that can make moves.
pub trait Player {
    /// Gets a move from this player.
    ///
    /// The returned move must name an empty cell. The board is borrowed
    /// mutably so the search can explore it in place; it is unchanged on
    /// return. Prompts and feedback go to `out`.
    fn get_move(&mut self, board: &mut Board, out: &mut dyn Write) -> Result<Move>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
