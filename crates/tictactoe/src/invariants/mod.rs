//! First-class invariants for a game session.
//!
//! Invariants are logical properties that must hold after every
//! successful move. The session checks them in debug builds; they are
//! also testable on their own.

mod balanced_marks;
mod occupancy;
mod turn_parity;

pub use balanced_marks::BalancedMarksInvariant;
pub use occupancy::OccupancyInvariant;
pub use turn_parity::TurnParityInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants checked together.
///
/// Implemented for tuples of [`Invariant`]s.
pub trait InvariantSet<S> {
    /// Checks every invariant, collecting all violations.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        collect(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        collect(violations)
    }
}

/// All session invariants as a composable set.
pub type SessionInvariants = (
    OccupancyInvariant,
    BalancedMarksInvariant,
    TurnParityInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Session, Symbol};

    fn started() -> Session {
        let mut session = Session::new();
        session
            .start(Player::new("Ada", Symbol::X), Player::new("Bob", Symbol::O))
            .unwrap();
        session
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        assert!(SessionInvariants::check_all(&started()).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut session = started();
        session.apply_move(0, 0).unwrap();
        session.apply_move(1, 1).unwrap();
        session.apply_move(2, 2).unwrap();
        assert!(SessionInvariants::check_all(&session).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut session = started();
        // Sneak an O onto the board without a turn.
        session.board.set(0, 0, Symbol::O).unwrap();

        let violations = SessionInvariants::check_all(&session).unwrap_err();
        assert_eq!(violations.len(), 2);
        assert!(violations.contains(&InvariantViolation::new(OccupancyInvariant::description())));
        assert!(
            violations.contains(&InvariantViolation::new(BalancedMarksInvariant::description()))
        );
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (OccupancyInvariant, TurnParityInvariant);
        assert!(TwoInvariants::check_all(&started()).is_ok());
    }
}
