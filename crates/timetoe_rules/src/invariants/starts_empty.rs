//! The first snapshot is always the empty board.

use super::Invariant;
use crate::History;

/// Invariant: history is non-empty and snapshot 0 has no marks.
pub struct StartsEmptyInvariant;

impl Invariant<History> for StartsEmptyInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .first()
            .is_some_and(|board| board.occupied_count() == 0)
    }

    fn description() -> &'static str {
        "History starts with a single empty board"
    }
}
