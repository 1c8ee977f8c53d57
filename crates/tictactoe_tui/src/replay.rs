//! Headless play: apply a list of moves and report the result.

use crate::GameConfig;
use serde::Serialize;
use tictactoe::{GamePhase, Player, Session, SessionError, Snapshot};
use tracing::{info, instrument, warn};

/// Final state of a replayed game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameReport {
    /// Both players, in config order.
    pub players: (Player, Player),
    /// Board after the last move.
    pub board: Snapshot,
    /// Phase after the last move.
    pub phase: GamePhase,
    /// Successful moves.
    pub turn_count: u32,
    /// Outcome text once finished, e.g. `"Ada won!"`.
    pub outcome_text: Option<String>,
}

impl GameReport {
    fn from_session(session: &Session, players: (Player, Player)) -> Self {
        Self {
            players,
            board: session.snapshot(),
            phase: session.current_phase().clone(),
            turn_count: session.turn_count(),
            outcome_text: session.current_outcome().map(ToString::to_string),
        }
    }
}

/// Errors from a replay.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum ReplayError {
    /// Text that is not a coordinate pair.
    #[display("Move {index} ({text:?}) is not of the form row,col")]
    Unparseable {
        /// Zero-based position in the move list.
        index: usize,
        /// The offending text.
        text: String,
    },

    /// The session refused a move or the players.
    #[display("Move {index} rejected: {source}")]
    Rejected {
        /// Zero-based position in the move list.
        index: usize,
        /// Why the session refused it.
        source: SessionError,
    },

    /// The configured players could not start a game.
    #[display("Cannot start game: {_0}")]
    Players(SessionError),
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReplayError::Rejected { source, .. } | ReplayError::Players(source) => Some(source),
            ReplayError::Unparseable { .. } => None,
        }
    }
}

/// Parses `"r,c"` or `"rc"` into coordinates.
///
/// Only the shape is checked; range checking is left to the session.
pub fn parse_move(text: &str) -> Option<(usize, usize)> {
    let text = text.trim();
    let (row, col) = match text.split_once(',') {
        Some((row, col)) => (row.trim(), col.trim()),
        None if text.len() == 2 && text.is_char_boundary(1) => text.split_at(1),
        None => return None,
    };
    Some((row.parse().ok()?, col.parse().ok()?))
}

/// Starts a game with the configured players and applies `moves` in order.
///
/// Stops at the first move that fails to parse or is rejected.
#[instrument(skip(config))]
pub fn replay(config: &GameConfig, moves: &[String]) -> Result<GameReport, ReplayError> {
    let players = config.players();
    let mut session = Session::new();
    session
        .start(players.0.clone(), players.1.clone())
        .map_err(ReplayError::Players)?;

    for (index, text) in moves.iter().enumerate() {
        let (row, col) = parse_move(text).ok_or_else(|| ReplayError::Unparseable {
            index,
            text: text.clone(),
        })?;
        session.apply_move(row, col).map_err(|source| {
            warn!(index, row, col, error = %source, "Replay stopped");
            ReplayError::Rejected { index, source }
        })?;
    }

    let report = GameReport::from_session(&session, players);
    info!(
        turns = report.turn_count,
        outcome = report.outcome_text.as_deref().unwrap_or("none"),
        "Replay complete"
    );
    Ok(report)
}
