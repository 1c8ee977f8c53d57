//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board, kept apart from board storage so the
//! session can apply them after each placement.

pub mod tie;
pub mod win;

pub use tie::{MAX_TURNS, is_tie};
pub use win::{TRIPLES, completes_triple};
