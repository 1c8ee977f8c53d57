//! Terminal front end for the tictactoe session.
//!
//! - **Config**: players and logging from TOML.
//! - **TUI**: setup form and board, driven by session events.
//! - **Replay**: apply moves headlessly and report the result as JSON.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod status;

pub mod tui;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, PlayerConfig};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{GameReport, ReplayError, parse_move, replay};
pub use status::status_line;
