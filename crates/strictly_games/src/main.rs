//! Strictly Games - Unified CLI
//!
//! Interactive tic-tac-toe against the minimax AI, plus position analysis.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{self, Write};
use strictly_games::{GameConfig, HumanPlayer, MinimaxPlayer, Orchestrator, analyze};
use strictly_tictactoe::Board;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => GameConfig::from_file(path)?,
        None => GameConfig::default(),
    };
    init_tracing(&config);
    debug!(?config, "Configuration resolved");

    match cli.command {
        None => run_game(config),
        Some(Command::Play {
            human_name,
            ai_name,
        }) => run_game(config.with_names(human_name, ai_name)),
        Some(Command::BestMove { board, json }) => run_best_move(board, json),
    }
}

/// Logs go to stderr so the game transcript on stdout stays clean.
fn init_tracing(config: &GameConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Run an interactive game on stdin/stdout
fn run_game(config: GameConfig) -> Result<()> {
    info!(human = %config.human_name(), ai = %config.ai_name(), "Starting interactive game");

    let human = HumanPlayer::new(config.human_name().clone(), io::stdin().lock());
    let ai = MinimaxPlayer::new(config.ai_name().clone());
    let mut game = Orchestrator::new(Box::new(human), Box::new(ai));

    let mut out = io::stdout().lock();
    let outcome = game.run(&mut out)?;
    out.flush().context("Failed to flush stdout")?;

    info!(%outcome, "Game finished");
    Ok(())
}

/// Print the analysis of a single board
fn run_best_move(mut board: Board, json: bool) -> Result<()> {
    let analysis = analyze(&mut board);

    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, &analysis)
            .context("Failed to write analysis as JSON")?;
        writeln!(out)?;
    } else {
        write!(out, "{analysis}")?;
    }
    Ok(())
}
