//! The viewed move always addresses a snapshot.

use super::Invariant;
use crate::History;

/// Invariant: `0 <= current_move < len`.
pub struct CursorInRangeInvariant;

impl Invariant<History> for CursorInRangeInvariant {
    fn holds(history: &History) -> bool {
        history.current_move() < history.len()
    }

    fn description() -> &'static str {
        "Current move addresses an existing snapshot"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Player;

    #[test]
    fn test_holds_after_failed_jump() {
        let mut history = History::default();
        let next = history.current().with_mark(0, Player::X).unwrap();
        history.append(next).unwrap();
        assert!(history.jump_to(5).is_err());
        assert!(CursorInRangeInvariant::holds(&history));
    }
}
