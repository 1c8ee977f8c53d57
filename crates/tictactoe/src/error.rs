//! Errors surfaced by the session.

use crate::BoardError;

/// Error returned by session operations.
///
/// Every variant is recoverable: it reports a caller-side mistake and the
/// session state is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum SessionError {
    /// Board rejected the placement.
    #[display("{_0}")]
    #[from]
    Board(BoardError),

    /// A move was attempted outside of play.
    #[display("Game is not in progress")]
    GameNotInProgress,

    /// An outcome was requested before the game ended.
    #[display("Game is not finished")]
    GameNotFinished,

    /// Players failed validation at start.
    #[display("Invalid players: {_0}")]
    InvalidPlayers(String),
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SessionError::Board(err) => Some(err),
            _ => None,
        }
    }
}

impl SessionError {
    /// Flat classification of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SessionError::Board(BoardError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            SessionError::Board(BoardError::CellOccupied { .. }) => ErrorKind::CellOccupied,
            SessionError::GameNotInProgress => ErrorKind::GameNotInProgress,
            SessionError::GameNotFinished => ErrorKind::GameNotFinished,
            SessionError::InvalidPlayers(_) => ErrorKind::InvalidPlayers,
        }
    }
}

/// Kinds of session error, without payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// Row or column outside the board.
    OutOfRange,
    /// Target cell already taken.
    CellOccupied,
    /// Session is not accepting moves.
    GameNotInProgress,
    /// Session has no outcome yet.
    GameNotFinished,
    /// Empty name or duplicate symbol.
    InvalidPlayers,
}
