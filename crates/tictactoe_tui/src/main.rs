//! tictactoe - two players, one terminal.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, GameConfig};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Command::Play { skip_setup } => {
            tictactoe_tui::init_file_logging(&config)?;
            tictactoe_tui::tui::run_tui(&config, skip_setup).await
        }
        Command::Replay { moves } => {
            tictactoe_tui::init_stderr_logging(&config);
            info!(count = moves.len(), "Replaying moves");
            let report = tictactoe_tui::replay(&config, &moves)?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
    }
}
