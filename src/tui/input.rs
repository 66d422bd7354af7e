//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use timetoe_rules::Dimension;

/// Moves the cursor one cell for arrow keys and `hjkl`, stopping at edges.
pub fn move_cursor(cursor: usize, dimension: Dimension, key: KeyCode) -> usize {
    let n = dimension.size();
    let (row, col) = (cursor / n, cursor % n);

    let (row, col) = match key {
        KeyCode::Left | KeyCode::Char('h') => (row, col.saturating_sub(1)),
        KeyCode::Right | KeyCode::Char('l') => (row, (col + 1).min(n - 1)),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), col),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(n - 1), col),
        _ => (row, col),
    };

    row * n + col
}

/// Index of the centre cell (upper-left of the centre on even boards).
pub fn center(dimension: Dimension) -> usize {
    let mid = (dimension.size() - 1) / 2;
    mid * dimension.size() + mid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moves_within_classic_board() {
        let d = Dimension::CLASSIC;
        assert_eq!(move_cursor(4, d, KeyCode::Right), 5);
        assert_eq!(move_cursor(4, d, KeyCode::Char('k')), 1);
        assert_eq!(move_cursor(4, d, KeyCode::Down), 7);
        assert_eq!(move_cursor(4, d, KeyCode::Char('h')), 3);
    }

    #[test]
    fn test_stops_at_edges() {
        let d = Dimension::new(5).unwrap();
        assert_eq!(move_cursor(4, d, KeyCode::Right), 4);
        assert_eq!(move_cursor(20, d, KeyCode::Down), 20);
        assert_eq!(move_cursor(0, d, KeyCode::Up), 0);
        assert_eq!(move_cursor(10, d, KeyCode::Left), 10);
    }

    #[test]
    fn test_center() {
        assert_eq!(center(Dimension::CLASSIC), 4);
        assert_eq!(center(Dimension::new(4).unwrap()), 5);
        assert_eq!(center(Dimension::new(5).unwrap()), 12);
    }
}
