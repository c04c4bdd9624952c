//! Catch Phrase - Unified CLI
//!
//! Console and terminal UI front ends over one game core.

#![warn(missing_docs)]

mod cli;
mod console;
mod tui;

use anyhow::{Context, Result};
use catch_phrase::{GameConfig, build_setup};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = GameConfig::load_or_default(&cli.config)?;
    info!(?config, seed = ?cli.seed, "Configuration resolved");

    match cli.command {
        Command::Console => run_console(&config, cli.seed).await,
        Command::Tui => run_tui(&config, cli.seed).await,
    }
}

/// Sends logs to a file so they never interleave with the game.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = std::fs::File::create(path)
        .with_context(|| format!("Creating log file {}", path.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,catch_phrase=debug")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Run the line-oriented console game
#[instrument(skip(config))]
async fn run_console(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    info!("Starting console game");
    console::print_banner();
    let setup = build_setup(config, seed)?;
    let summary = console::run(setup).await?;
    info!(score = summary.score(), end = %summary.end(), "Console game finished");
    Ok(())
}

/// Run the terminal UI game
#[instrument(skip(config))]
async fn run_tui(config: &GameConfig, seed: Option<u64>) -> Result<()> {
    info!("Starting TUI game");
    let setup = build_setup(config, seed)?;
    tui::run(setup).await
}
