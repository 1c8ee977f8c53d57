//! Session lifecycle: phases, outcomes and move results.

use crate::{Player, Symbol};
use serde::{Deserialize, Serialize};

/// Outcome of a finished game.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The player who completed a line.
    Win(Player),
    /// Board filled with no line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<&Player> {
        match self {
            Outcome::Win(player) => Some(player),
            Outcome::Tie => None,
        }
    }

    /// Returns true if the game was a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Win(player) => write!(f, "{} won!", player.name()),
            Outcome::Tie => write!(f, "It's a tie!"),
        }
    }
}

/// Coarse lifecycle state of a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GamePhase {
    /// No players have been registered yet.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// Terminal until the session is reset.
    Finished(Outcome),
}

impl GamePhase {
    /// Returns true while moves are accepted.
    pub fn is_in_progress(&self) -> bool {
        matches!(self, GamePhase::InProgress)
    }

    /// Returns true once the game has an outcome.
    pub fn is_finished(&self) -> bool {
        matches!(self, GamePhase::Finished(_))
    }

    /// Returns the outcome of a finished game.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            GamePhase::Finished(outcome) => Some(outcome),
            _ => None,
        }
    }
}

/// What a successful move did, so callers can react without re-querying.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// Row that was played.
    pub row: usize,
    /// Column that was played.
    pub col: usize,
    /// Player who moved.
    pub mover: Player,
    /// Phase after the move.
    pub phase: GamePhase,
    /// Moves made so far, including this one.
    pub turn_count: u32,
}

impl MoveResult {
    /// Symbol that was placed.
    pub fn symbol(&self) -> Symbol {
        self.mover.symbol()
    }

    /// Outcome, if this move ended the game.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.phase.outcome()
    }
}
