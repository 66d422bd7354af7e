//! Result of evaluating a board.

use super::types::Player;
use serde::{Deserialize, Serialize};

/// Outcome of a board position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameOutcome {
    /// No winning line yet and at least one empty square.
    InProgress,
    /// Board full with no winning line.
    Draw,
    /// A row, column or main diagonal holds a single mark.
    Won {
        /// Indices of the winning line, in line order.
        line: Vec<usize>,
        /// The mark filling the line.
        mark: Player,
    },
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// Returns true once the game is won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns true if `index` is part of the winning line.
    pub fn highlights(&self, index: usize) -> bool {
        match self {
            GameOutcome::Won { line, .. } => line.contains(&index),
            _ => false,
        }
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "In progress"),
            GameOutcome::Draw => write!(f, "Draw"),
            GameOutcome::Won { mark, .. } => write!(f, "Player {} wins", mark),
        }
    }
}
