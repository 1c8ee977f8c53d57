//! Human-readable status for a session.

use tictactoe::{GamePhase, Session};

/// One line describing where the game stands.
///
/// A finished game reads `"<name> won!"` or `"It's a tie!"`.
pub fn status_line(session: &Session) -> String {
    match session.current_phase() {
        GamePhase::NotStarted => "Waiting for players...".to_string(),
        GamePhase::InProgress => match session.active_player() {
            Some(player) => format!("{}'s turn ({})", player.name(), player.symbol()),
            None => "Waiting for players...".to_string(),
        },
        GamePhase::Finished(outcome) => outcome.to_string(),
    }
}
