//! Errors raised when a move is validated or applied.

use derive_more::{Display, Error};

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The index does not address a cell on the board.
    #[display("Position {} is out of bounds (board has {} cells)", index, cells)]
    OutOfBounds {
        /// Requested cell index.
        index: usize,
        /// Number of cells on the board.
        cells: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] usize),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}
