//! Immutable N×N board snapshots.

use super::action::MoveError;
use super::types::{Dimension, Player, Square};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// An N×N board in row-major order (index = row·N + col).
///
/// Boards are snapshots: placing a mark returns a new board and leaves
/// the original untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    dimension: Dimension,
    squares: Vec<Square>,
}

/// Unchecked wire form of [`Board`], validated by `from_squares`.
#[derive(Deserialize)]
struct RawBoard {
    dimension: Dimension,
    squares: Vec<Square>,
}

impl TryFrom<RawBoard> for Board {
    type Error = BoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_squares(raw.dimension, raw.squares)
    }
}

/// Rejected board construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    /// Square count does not match the dimension.
    #[display("Expected {} squares, found {}", expected, found)]
    WrongLength {
        /// N² for the requested dimension.
        expected: usize,
        /// Number of squares supplied.
        found: usize,
    },
}

impl Board {
    /// Creates an empty board.
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            squares: vec![Square::Empty; dimension.cells()],
        }
    }

    /// Builds a board from explicit squares.
    pub fn from_squares(dimension: Dimension, squares: Vec<Square>) -> Result<Self, BoardError> {
        if squares.len() != dimension.cells() {
            return Err(BoardError::WrongLength {
                expected: dimension.cells(),
                found: squares.len(),
            });
        }
        Ok(Self { dimension, squares })
    }

    /// Side length of this board.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Gets the square at the given index.
    pub fn get(&self, index: usize) -> Result<Square, MoveError> {
        self.squares
            .get(index)
            .copied()
            .ok_or(MoveError::OutOfBounds {
                index,
                cells: self.squares.len(),
            })
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.squares.get(index), Some(Square::Empty))
    }

    /// Returns all squares.
    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    /// Returns a copy of this board with `player`'s mark at `index`.
    ///
    /// Only bounds are checked here. Occupancy and game-over checks belong
    /// to the rules.
    #[instrument(skip(self), fields(dimension = %self.dimension))]
    pub fn with_mark(&self, index: usize, player: Player) -> Result<Board, MoveError> {
        self.get(index)?;
        let mut next = self.clone();
        next.squares[index] = Square::Occupied(player);
        Ok(next)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| !s.is_empty())
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }

    /// Converts a cell index to `(row, col)`.
    pub fn row_col(&self, index: usize) -> (usize, usize) {
        let n = self.dimension.size();
        (index / n, index % n)
    }

    /// Converts `(row, col)` to a cell index.
    pub fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.dimension.size() + col
    }

    /// Iterates over the board one row at a time.
    pub fn rows(&self) -> impl Iterator<Item = &[Square]> {
        self.squares.chunks(self.dimension.size())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|s| s.symbol()).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four() -> Dimension {
        Dimension::new(4).unwrap()
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(four());
        assert_eq!(board.squares().len(), 16);
        assert_eq!(board.occupied_count(), 0);
        assert!(!board.is_full());
    }

    #[test]
    fn test_with_mark_leaves_original_untouched() {
        let board = Board::new(Dimension::CLASSIC);
        let next = board.with_mark(4, Player::X).unwrap();
        assert!(board.is_empty(4));
        assert_eq!(next.get(4), Ok(Square::Occupied(Player::X)));
    }

    #[test]
    fn test_with_mark_out_of_bounds() {
        let board = Board::new(Dimension::CLASSIC);
        assert_eq!(
            board.with_mark(9, Player::X),
            Err(MoveError::OutOfBounds { index: 9, cells: 9 })
        );
    }

    #[test]
    fn test_from_squares_checks_length() {
        let result = Board::from_squares(four(), vec![Square::Empty; 9]);
        assert_eq!(
            result,
            Err(BoardError::WrongLength {
                expected: 16,
                found: 9
            })
        );
    }

    #[test]
    fn test_deserialize_rejects_short_board() {
        let parsed = serde_json::from_str::<Board>(r#"{"dimension":3,"squares":["Empty"]}"#);
        let err = parsed.unwrap_err();
        assert!(err.to_string().contains("Expected 9 squares, found 1"));
    }

    #[test]
    fn test_deserialize_accepts_serialized_board() {
        let board = Board::new(four()).with_mark(5, Player::O).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), board);
    }

    #[test]
    fn test_row_col_round_trip_on_five() {
        let board = Board::new(Dimension::new(5).unwrap());
        assert_eq!(board.row_col(12), (2, 2));
        assert_eq!(board.row_col(19), (3, 4));
        assert_eq!(board.index_of(3, 4), 19);
    }

    #[test]
    fn test_display_renders_rows() {
        let board = Board::new(Dimension::CLASSIC)
            .with_mark(0, Player::X)
            .and_then(|b| b.with_mark(4, Player::O))
            .unwrap();
        assert_eq!(board.to_string(), "X..\n.O.\n...");
    }
}
