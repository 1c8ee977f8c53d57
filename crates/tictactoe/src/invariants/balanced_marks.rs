//! Balanced marks invariant: X leads O by at most one.

use super::Invariant;
use crate::{Session, Symbol};

/// Invariant: X count minus O count is 0 or 1.
///
/// X always moves first and turns alternate.
pub struct BalancedMarksInvariant;

impl Invariant<Session> for BalancedMarksInvariant {
    fn holds(session: &Session) -> bool {
        let x = session.board().count(Symbol::X);
        let o = session.board().count(Symbol::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X leads O by zero or one marks"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_after_alternating_moves() {
        let mut session = Session::new();
        session
            .start(Player::new("Ada", Symbol::X), Player::new("Bob", Symbol::O))
            .unwrap();
        session.apply_move(1, 1).unwrap();
        assert!(BalancedMarksInvariant::holds(&session));
        session.apply_move(0, 0).unwrap();
        assert!(BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_detects_o_ahead() {
        let mut session = Session::new();
        session.board.set(0, 0, Symbol::O).unwrap();
        assert!(!BalancedMarksInvariant::holds(&session));
    }

    #[test]
    fn test_detects_x_two_ahead() {
        let mut session = Session::new();
        session.board.set(0, 0, Symbol::X).unwrap();
        session.board.set(0, 1, Symbol::X).unwrap();
        assert!(!BalancedMarksInvariant::holds(&session));
    }
}
