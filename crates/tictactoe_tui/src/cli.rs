//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe for two players at one terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults are used if omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start immediately with the configured players
        #[arg(long)]
        skip_setup: bool,
    },

    /// Apply moves without a UI and print the final state as JSON
    Replay {
        /// Moves as `row,col` or `rowcol`, e.g. `0,0 11 0,1`
        #[arg(required = true)]
        moves: Vec<String>,
    },
}
