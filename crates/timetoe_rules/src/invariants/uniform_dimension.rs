//! All snapshots share the history's dimension.

use super::Invariant;
use crate::History;

/// Invariant: every snapshot has N² squares for the history's N.
pub struct UniformDimensionInvariant;

impl Invariant<History> for UniformDimensionInvariant {
    fn holds(history: &History) -> bool {
        let dimension = history.dimension();
        history.snapshots().iter().all(|board| {
            board.dimension() == dimension && board.squares().len() == dimension.cells()
        })
    }

    fn description() -> &'static str {
        "All snapshots share the history's dimension"
    }
}
