//! Human player that reads moves from a line-oriented input.

use super::Player;
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use strictly_tictactoe::{Board, Move};
use tracing::{debug, info, instrument};

const PROMPT: &str = "Enter your move (row and column: 0 1): ";

/// Why a line of input was not accepted as a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum InputError {
    /// Not exactly two integer tokens.
    #[display("Invalid input. Enter row and column numbers separated by a space.")]
    Malformed,

    /// Well-formed, but off the board or already taken.
    #[display("That cell is not available.")]
    Unavailable {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}

impl std::error::Error for InputError {}

/// Parses `"row col"` and checks it against the board's valid moves.
pub fn parse_move(line: &str, board: &Board) -> Result<Move, InputError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let [row, col] = tokens.as_slice() else {
        return Err(InputError::Malformed);
    };
    let row: i64 = row.parse().map_err(|_| InputError::Malformed)?;
    let col: i64 = col.parse().map_err(|_| InputError::Malformed)?;

    let unavailable = InputError::Unavailable { row, col };
    let (Ok(r), Ok(c)) = (usize::try_from(row), usize::try_from(col)) else {
        return Err(unavailable);
    };
    let mv = Move::new(r, c).map_err(|_| unavailable.clone())?;
    if !board.valid_moves().contains(&mv) {
        return Err(unavailable);
    }
    Ok(mv)
}

/// Human player typing moves as `row col`.
pub struct HumanPlayer<R> {
    name: String,
    input: R,
}

impl<R: BufRead> HumanPlayer<R> {
    /// Creates a new human player reading from `input`.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            input,
        }
    }
}

impl<R: BufRead> Player for HumanPlayer<R> {
    /// Re-prompts until a valid move is entered.
    ///
    /// # Errors
    ///
    /// Fails only when the input cannot be read or reaches end of file.
    #[instrument(skip_all, fields(player = %self.name))]
    fn get_move(&mut self, board: &mut Board, out: &mut dyn Write) -> Result<Move> {
        loop {
            write!(out, "{PROMPT}")?;
            out.flush()?;

            let mut line = String::new();
            let read = self
                .input
                .read_line(&mut line)
                .context("Failed to read move")?;
            if read == 0 {
                anyhow::bail!("Input closed before {} entered a move", self.name);
            }

            match parse_move(&line, board) {
                Ok(mv) => {
                    info!(%mv, "Human entered move");
                    return Ok(mv);
                }
                Err(e) => {
                    debug!(input = %line.trim(), error = ?e, "Rejected move input");
                    writeln!(out, "{e}")?;
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
