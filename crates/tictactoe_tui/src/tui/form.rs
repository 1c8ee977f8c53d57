//! Player setup form.

use crate::GameConfig;
use tictactoe::{Player, Symbol};

/// Form field with keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// First player's name.
    PlayerOneName,
    /// Second player's name.
    PlayerTwoName,
    /// Which symbol player one takes.
    Symbol,
    /// The start button.
    Start,
}

impl Field {
    const ORDER: [Field; 4] = [
        Field::PlayerOneName,
        Field::PlayerTwoName,
        Field::Symbol,
        Field::Start,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Submitted with a blank name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Please fill out all fields.")]
pub struct IncompleteForm;

/// Names and symbol choice for a new game.
///
/// Player two always takes the symbol player one does not, so the only
/// way to submit a bad form is to leave a name blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupForm {
    player_one: String,
    player_two: String,
    player_one_symbol: Symbol,
    focus: Field,
}

impl SetupForm {
    /// Pre-fills the form from config.
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            player_one: config.player_one().name().clone(),
            player_two: config.player_two().name().clone(),
            player_one_symbol: *config.player_one().symbol(),
            focus: Field::PlayerOneName,
        }
    }

    /// Field with focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Moves focus down.
    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    /// Moves focus up.
    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Types a character into the focused name field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focused_name_mut() {
            field.push(c);
        }
    }

    /// Deletes the last character of the focused name field.
    pub fn backspace(&mut self) {
        if let Some(field) = self.focused_name_mut() {
            field.pop();
        }
    }

    /// Swaps which symbol each player holds.
    pub fn toggle_symbol(&mut self) {
        self.player_one_symbol = self.player_one_symbol.opponent();
    }

    /// First player's name as typed.
    pub fn player_one(&self) -> &str {
        &self.player_one
    }

    /// Second player's name as typed.
    pub fn player_two(&self) -> &str {
        &self.player_two
    }

    /// Symbol chosen for player one.
    pub fn player_one_symbol(&self) -> Symbol {
        self.player_one_symbol
    }

    /// Builds both players.
    pub fn submit(&self) -> Result<(Player, Player), IncompleteForm> {
        let one = self.player_one.trim();
        let two = self.player_two.trim();
        if one.is_empty() || two.is_empty() {
            return Err(IncompleteForm);
        }
        Ok((
            Player::new(one, self.player_one_symbol),
            Player::new(two, self.player_one_symbol.opponent()),
        ))
    }

    fn focused_name_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            Field::PlayerOneName => Some(&mut self.player_one),
            Field::PlayerTwoName => Some(&mut self.player_two),
            Field::Symbol | Field::Start => None,
        }
    }
}
