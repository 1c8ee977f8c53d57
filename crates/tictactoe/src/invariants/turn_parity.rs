//! Turn parity invariant: X to move on even turns.

use super::Invariant;
use crate::{Session, Symbol};

/// Invariant: while in progress, the active player holds X exactly when
/// the turn count is even.
///
/// Vacuously true outside of play.
pub struct TurnParityInvariant;

impl Invariant<Session> for TurnParityInvariant {
    fn holds(session: &Session) -> bool {
        if !session.current_phase().is_in_progress() {
            return true;
        }
        let expected = if session.turn_count() % 2 == 0 {
            Symbol::X
        } else {
            Symbol::O
        };
        session.active_player().map(|p| p.symbol()) == Some(expected)
    }

    fn description() -> &'static str {
        "Active player holds X on even turns and O on odd turns"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_when_o_listed_first() {
        let mut session = Session::new();
        session
            .start(Player::new("Ola", Symbol::O), Player::new("Xia", Symbol::X))
            .unwrap();
        assert!(TurnParityInvariant::holds(&session));
        session.apply_move(0, 2).unwrap();
        assert!(TurnParityInvariant::holds(&session));
    }

    #[test]
    fn test_detects_skipped_turn() {
        let mut session = Session::new();
        session
            .start(Player::new("Ada", Symbol::X), Player::new("Bob", Symbol::O))
            .unwrap();
        session.turn_count = 1;
        assert!(!TurnParityInvariant::holds(&session));
    }

    #[test]
    fn test_vacuous_before_start() {
        assert!(TurnParityInvariant::holds(&Session::new()));
    }
}
