//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Mark a player places on the board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Symbol {
    /// X (always moves first).
    #[serde(alias = "x")]
    X,
    /// O.
    #[serde(alias = "o")]
    O,
}

impl Symbol {
    /// Returns the other symbol.
    pub fn opponent(self) -> Self {
        match self {
            Symbol::X => Symbol::O,
            Symbol::O => Symbol::X,
        }
    }
}

/// A single position on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds a player's symbol.
    Occupied(Symbol),
}

impl Cell {
    /// Returns true if nobody has played here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the symbol in this cell, if any.
    pub fn symbol(self) -> Option<Symbol> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(symbol) => Some(symbol),
        }
    }
}

/// A named participant holding one symbol.
///
/// Players are immutable once built; validation (non-empty name, distinct
/// symbols) happens when a session is started with them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: String,
    symbol: Symbol,
}

impl Player {
    /// Creates a player.
    pub fn new(name: impl Into<String>, symbol: Symbol) -> Self {
        Self {
            name: name.into(),
            symbol,
        }
    }

    /// Returns the player's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the symbol this player places.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Symbol::X.opponent(), Symbol::O);
        assert_eq!(Symbol::O.opponent(), Symbol::X);
    }

    #[test]
    fn test_symbol_parses_either_case() {
        assert_eq!(Symbol::from_str("x"), Ok(Symbol::X));
        assert_eq!(Symbol::from_str("O"), Ok(Symbol::O));
        assert!(Symbol::from_str("z").is_err());
    }

    #[test]
    fn test_cell_symbol() {
        assert_eq!(Cell::Empty.symbol(), None);
        assert_eq!(Cell::Occupied(Symbol::O).symbol(), Some(Symbol::O));
        assert!(Cell::default().is_empty());
    }

    #[test]
    fn test_player_display() {
        let player = Player::new("Ada", Symbol::X);
        assert_eq!(player.to_string(), "Ada (X)");
    }
}
