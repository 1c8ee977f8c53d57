//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use tictactoe::SIZE;

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor((row, col): (usize, usize), key: KeyCode) -> (usize, usize) {
    match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(SIZE - 1), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(SIZE - 1)),
        _ => (row, col),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_board() {
        assert_eq!(move_cursor((1, 1), KeyCode::Up), (0, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Down), (2, 1));
        assert_eq!(move_cursor((1, 1), KeyCode::Left), (1, 0));
        assert_eq!(move_cursor((1, 1), KeyCode::Right), (1, 2));
    }

    #[test]
    fn test_stops_at_edges() {
        assert_eq!(move_cursor((0, 0), KeyCode::Up), (0, 0));
        assert_eq!(move_cursor((0, 0), KeyCode::Left), (0, 0));
        assert_eq!(move_cursor((2, 2), KeyCode::Down), (2, 2));
        assert_eq!(move_cursor((2, 2), KeyCode::Right), (2, 2));
    }

    #[test]
    fn test_other_keys_do_nothing() {
        assert_eq!(move_cursor((1, 2), KeyCode::Enter), (1, 2));
        assert_eq!(move_cursor((1, 2), KeyCode::Char('x')), (1, 2));
    }
}
