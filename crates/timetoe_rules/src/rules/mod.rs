//! Game rules for N×N tic-tac-toe.
//!
//! Pure functions over board snapshots. Nothing here caches results: every
//! call re-scans the lines from scratch.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::is_full;
pub use lines::{Line, LineKind, lines};
pub use win::check_winner;

use super::{Board, GameOutcome, MoveError};
use tracing::instrument;

/// Evaluates a board: won, drawn or still in progress.
///
/// Lines are scanned rows first, then columns, then the main diagonal and
/// the anti-diagonal. The first uniform line wins.
#[instrument(skip(board), fields(dimension = %board.dimension()))]
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some((line, mark)) = check_winner(board) {
        return GameOutcome::Won {
            line: line.into_indices(),
            mark,
        };
    }
    if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// Checks whether a mark may be placed at `index`.
///
/// Legal iff the game is still in progress and the square is empty.
/// An index off the board is a caller error, not an illegal move.
#[instrument(skip(board))]
pub fn is_legal_move(board: &Board, index: usize) -> Result<bool, MoveError> {
    let square = board.get(index)?;
    Ok(square.is_empty() && !evaluate(board).is_over())
}

/// All indices where a mark may legally be placed.
pub fn legal_moves(board: &Board) -> Vec<usize> {
    if evaluate(board).is_over() {
        return Vec::new();
    }
    (0..board.squares().len())
        .filter(|&i| board.is_empty(i))
        .collect()
}
