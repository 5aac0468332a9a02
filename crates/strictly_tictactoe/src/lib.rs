//! Pure tic-tac-toe game logic with a perfect minimax opponent.
//!
//! # Architecture
//!
//! - **Board model** ([`Board`], [`Cell`], [`Move`]): the 3x3 grid, move
//!   enumeration in row-major order, and in-place apply/undo.
//! - **Rules** ([`is_winner`], [`is_draw`], [`outcome`]): terminal-state
//!   classification.
//! - **Search** ([`evaluate`], [`find_best_move`]): exhaustive minimax for
//!   the O player over a single mutable board.
//!
//! # Example
//!
//! ```
//! use strictly_tictactoe::{find_best_move, Board, Move};
//!
//! let mut board: Board = "OO.|XX.|X..".parse()?;
//! assert_eq!(find_best_move(&mut board), Some(Move::new(0, 2)?));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod rules;
mod search;
mod types;

pub use action::{Move, MoveError};
pub use rules::win::LINES;
pub use rules::{Outcome, is_draw, is_winner, outcome, winner};
pub use search::{
    MAXIMIZER, MINIMIZER, MoveScore, Score, WIN_SCORE, evaluate, find_best_move, score_moves,
};
pub use types::{Board, BoardParseError, Cell, Player};
