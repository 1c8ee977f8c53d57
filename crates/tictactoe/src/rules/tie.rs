//! Tie detection logic for tic-tac-toe.

use crate::board::SIZE;

/// Moves needed to fill the board.
pub const MAX_TURNS: u32 = (SIZE * SIZE) as u32;

/// Returns true if a move that did not win ends the game in a tie.
///
/// Cells are never re-occupied, so the turn count reaching nine means
/// the board is full.
pub fn is_tie(turn_count: u32) -> bool {
    turn_count >= MAX_TURNS
}
