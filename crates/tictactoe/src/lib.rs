//! Tic-tac-toe game session.
//!
//! # Architecture
//!
//! - **Board**: the 3x3 grid; range and occupancy checks only.
//! - **Rules**: pure win/tie evaluation over a board.
//! - **Session**: players, turn order and lifecycle; the only writer of
//!   the board.
//! - **Events**: observers notified after each successful state change,
//!   so presentation code never needs to poll.
//!
//! # Example
//!
//! ```
//! use tictactoe::{Outcome, Player, Session, Symbol};
//!
//! let mut session = Session::new();
//! session.start(Player::new("Ada", Symbol::X), Player::new("Bob", Symbol::O))?;
//!
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
//!     session.apply_move(row, col)?;
//! }
//! assert_eq!(session.get_outcome()?.to_string(), "Ada won!");
//! # Ok::<(), tictactoe::SessionError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod error;
mod events;
mod phases;
mod session;
mod types;

pub mod invariants;
pub mod rules;

pub use board::{Board, BoardError, SIZE, Snapshot};
pub use error::{ErrorKind, SessionError};
pub use events::{SessionEvent, SessionObserver, SubscriptionId};
pub use phases::{GamePhase, MoveResult, Outcome};
pub use session::Session;
pub use types::{Cell, Player, Symbol};
