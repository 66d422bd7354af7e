//! Core domain types: players, squares and board dimensions.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    /// Returns true for an empty square.
    pub fn is_empty(self) -> bool {
        self == Square::Empty
    }

    /// Single-character symbol used in text renderings.
    pub fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::X) => 'X',
            Square::Occupied(Player::O) => 'O',
        }
    }
}

/// Side length of a square board.
///
/// Only 3, 4 and 5 are playable. The range is enforced on construction,
/// so every `Dimension` in circulation is valid.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[display("{}", _0)]
pub struct Dimension(u8);

impl Dimension {
    /// Smallest supported side length.
    pub const MIN: u8 = 3;
    /// Largest supported side length.
    pub const MAX: u8 = 5;
    /// The classic 3x3 board.
    pub const CLASSIC: Dimension = Dimension(3);

    /// Validates a side length.
    pub fn new(size: u8) -> Result<Self, DimensionError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(DimensionError::OutOfRange(size))
        }
    }

    /// Side length as `usize`, for index arithmetic.
    pub fn size(self) -> usize {
        usize::from(self.0)
    }

    /// Number of cells on the board (N²).
    pub fn cells(self) -> usize {
        self.size() * self.size()
    }

    /// Next larger dimension, if any.
    pub fn grow(self) -> Option<Self> {
        Self::new(self.0 + 1).ok()
    }

    /// Next smaller dimension, if any.
    pub fn shrink(self) -> Option<Self> {
        Self::new(self.0 - 1).ok()
    }

    /// All supported dimensions in ascending order.
    pub fn all() -> impl Iterator<Item = Dimension> {
        (Self::MIN..=Self::MAX).map(Dimension)
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl TryFrom<u8> for Dimension {
    type Error = DimensionError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<Dimension> for u8 {
    fn from(dimension: Dimension) -> Self {
        dimension.0
    }
}

/// Rejected board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum DimensionError {
    /// Side length outside 3..=5.
    #[display("Board size {} is out of range (3..=5)", _0)]
    OutOfRange(#[error(not(source))] u8),
}
