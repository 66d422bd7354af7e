//! Consecutive snapshots differ by exactly one alternating mark.

use super::Invariant;
use crate::history::player_for_move;
use crate::{Board, History, Square};

/// Invariant: snapshot k+1 is snapshot k plus one mark for the player of move k.
///
/// This also makes the board monotonic: squares are never overwritten or
/// cleared between consecutive snapshots.
pub struct SinglePlyInvariant;

fn is_single_ply(before: &Board, after: &Board, move_index: usize) -> bool {
    let expected = Square::Occupied(player_for_move(move_index));
    let mut changed = before
        .squares()
        .iter()
        .zip(after.squares())
        .filter(|(b, a)| b != a);

    matches!(
        (changed.next(), changed.next()),
        (Some((Square::Empty, placed)), None) if *placed == expected
    )
}

impl Invariant<History> for SinglePlyInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots()
            .windows(2)
            .enumerate()
            .all(|(k, pair)| is_single_ply(&pair[0], &pair[1], k))
    }

    fn description() -> &'static str {
        "Each snapshot adds exactly one mark, alternating X and O"
    }
}
