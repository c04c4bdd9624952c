//! Command-line interface for catch_phrase.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Catch Phrase - describe words to the computer and guess its clues
#[derive(Parser, Debug)]
#[command(name = "catch_phrase")]
#[command(about = "Timed word-guessing game against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the game configuration file
    #[arg(long, global = true, default_value = "catch_phrase.toml")]
    pub config: PathBuf,

    /// Where to write logs
    #[arg(long, global = true, default_value = "catch_phrase.log")]
    pub log_file: PathBuf,

    /// Seed for word order and round budgets
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal, one line at a time
    Console,

    /// Play in a full-screen terminal UI
    Tui,
}
