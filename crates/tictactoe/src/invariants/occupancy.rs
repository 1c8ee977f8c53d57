//! Occupancy invariant: one filled cell per counted turn.

use super::Invariant;
use crate::Session;

/// Invariant: the number of occupied cells equals the turn count.
pub struct OccupancyInvariant;

impl Invariant<Session> for OccupancyInvariant {
    fn holds(session: &Session) -> bool {
        session.board().occupied_count() == session.turn_count() as usize
    }

    fn description() -> &'static str {
        "Occupied cells match the turn count"
    }
}
