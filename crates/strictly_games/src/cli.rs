//! Command-line interface for strictly_games.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use strictly_tictactoe::Board;

/// Strictly Games - tic-tac-toe against a perfect minimax opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_games")]
#[command(about = "Play tic-tac-toe against an unbeatable AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game as X against the AI
    Play {
        /// Name shown on your turns
        #[arg(long)]
        human_name: Option<String>,

        /// Name shown on the AI's turns
        #[arg(long)]
        ai_name: Option<String>,
    },

    /// Score every AI move on a board and print the one it would play
    BestMove {
        /// Nine cells row-major: X, O, and . for empty (e.g. "XO.|.X.|...")
        #[arg(short, long)]
        board: Board,

        /// Emit the analysis as JSON
        #[arg(long)]
        json: bool,
    },
}
