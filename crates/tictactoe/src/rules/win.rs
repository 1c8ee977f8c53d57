//! Win detection logic for tic-tac-toe.

use crate::{Board, Symbol};
use tracing::instrument;

/// The eight lines that win: three rows, three columns, two diagonals.
pub const TRIPLES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Returns true if `symbol` holds all three cells of any triple.
#[instrument(skip(board))]
pub fn completes_triple(board: &Board, symbol: Symbol) -> bool {
    TRIPLES.iter().any(|triple| {
        triple
            .iter()
            .all(|&pos| board.cell_at(pos).symbol() == Some(symbol))
    })
}

/// Returns the symbol holding a complete triple, if any.
#[cfg(test)]
pub(crate) fn winning_symbol(board: &Board) -> Option<Symbol> {
    [Symbol::X, Symbol::O]
        .into_iter()
        .find(|&symbol| completes_triple(board, symbol))
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(winning_symbol(&board), None);
    }

    #[test]
    fn test_every_triple_wins_for_every_symbol() {
        for symbol in Symbol::iter() {
            for triple in TRIPLES {
                let mut board = Board::new();
                for (row, col) in triple {
                    board.set(row, col, symbol).unwrap();
                }
                assert!(completes_triple(&board, symbol), "{triple:?}");
                assert!(!completes_triple(&board, symbol.opponent()));
                assert_eq!(winning_symbol(&board), Some(symbol));
            }
        }
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        board.set(0, 0, Symbol::X).unwrap();
        board.set(0, 1, Symbol::O).unwrap();
        board.set(0, 2, Symbol::X).unwrap();
        assert_eq!(winning_symbol(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        board.set(0, 0, Symbol::X).unwrap();
        board.set(1, 1, Symbol::X).unwrap();
        assert!(!completes_triple(&board, Symbol::X));
    }
}
