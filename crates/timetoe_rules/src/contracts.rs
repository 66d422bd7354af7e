//! Preconditions for placing a mark.
//!
//! These return the precise reason a move is refused, where
//! [`rules::is_legal_move`](crate::rules::is_legal_move) only answers yes or no.

use super::{Board, MoveError, rules};
use tracing::instrument;

/// Precondition: the index addresses a cell on the board.
pub struct InBounds;

impl InBounds {
    /// Checks the index against the board size.
    pub fn check(board: &Board, index: usize) -> Result<(), MoveError> {
        board.get(index).map(|_| ())
    }
}

/// Precondition: nobody has won and the board is not full.
pub struct GameInProgress;

impl GameInProgress {
    /// Checks the board is still in play.
    pub fn check(board: &Board) -> Result<(), MoveError> {
        if rules::evaluate(board).is_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the square at the index is empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the target square is free.
    pub fn check(board: &Board, index: usize) -> Result<(), MoveError> {
        if board.is_empty(index) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(index))
        }
    }
}

/// Composite precondition: in bounds, game in progress, square empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move, in that order.
    #[instrument(skip(board))]
    pub fn check(board: &Board, index: usize) -> Result<(), MoveError> {
        InBounds::check(board, index)?;
        GameInProgress::check(board)?;
        SquareIsEmpty::check(board, index)?;
        Ok(())
    }
}
