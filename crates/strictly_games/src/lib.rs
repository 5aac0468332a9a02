//! Strictly Games - tic-tac-toe against a perfect minimax opponent.
//!
//! # Architecture
//!
//! - **Players**: a human typing `row col` moves, and the minimax AI from
//!   [`strictly_tictactoe`]
//! - **Orchestrator**: the turn loop, rendering and end-of-game detection
//! - **Analysis**: scores every AI candidate move for a given board
//! - **Config**: player names and the default log filter, from TOML
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use strictly_games::{HumanPlayer, MinimaxPlayer, Orchestrator};
//! use strictly_tictactoe::{Outcome, Player};
//!
//! let human = HumanPlayer::new("Player", Cursor::new("0 0\n0 1\n1 0\n"));
//! let mut game = Orchestrator::new(Box::new(human), Box::new(MinimaxPlayer::new("AI")));
//! let mut transcript = Vec::new();
//! assert_eq!(game.run(&mut transcript)?, Outcome::Winner(Player::O));
//! # Ok::<(), anyhow::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod analysis;
mod config;
mod orchestrator;
mod players;

pub use analysis::{Analysis, analyze};
pub use config::{ConfigError, GameConfig};
pub use orchestrator::Orchestrator;
pub use players::{HumanPlayer, InputError, MinimaxPlayer, Player, parse_move};
