//! Linear snapshot history with time-travel.
//!
//! One board per ply, snapshot 0 being the empty board. Jumping back and
//! then appending discards every snapshot after the viewed one: the history
//! is a line, never a tree.

use super::invariants::{HistoryInvariants, InvariantSet};
use super::{Board, Dimension, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Errors raised by history navigation.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum HistoryError {
    /// Jump target past the last snapshot.
    #[display("Move {} is out of range (history has {} snapshots)", requested, len)]
    MoveOutOfRange {
        /// Requested move index.
        requested: usize,
        /// Number of snapshots.
        len: usize,
    },

    /// Appended board does not match the history's dimension.
    #[display("Board is {}x{}, history is {}x{}", found, found, expected, expected)]
    DimensionMismatch {
        /// Dimension of the history.
        expected: Dimension,
        /// Dimension of the rejected board.
        found: Dimension,
    },

    /// Loaded history breaks an invariant.
    #[display("Invalid history: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// The player whose turn it is after `move_index` plies.
///
/// Even indices belong to X, odd ones to O.
pub fn player_for_move(move_index: usize) -> Player {
    if move_index % 2 == 0 {
        Player::X
    } else {
        Player::O
    }
}

/// Ordered board snapshots plus the index of the one being viewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    dimension: Dimension,
    snapshots: Vec<Board>,
    current: usize,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    dimension: Dimension,
    snapshots: Vec<Board>,
    current: usize,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        let history = History {
            dimension: raw.dimension,
            snapshots: raw.snapshots,
            current: raw.current,
        };
        HistoryInvariants::check_all(&history).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            HistoryError::InvariantViolation(descriptions)
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            dimension,
            snapshots: vec![Board::new(dimension)],
            current: 0,
        }
    }

    /// Discards every snapshot and starts over at `dimension`.
    #[instrument(skip(self), fields(from = %self.dimension))]
    pub fn reset(&mut self, dimension: Dimension) {
        debug!(discarded = self.snapshots.len(), "Resetting history");
        *self = Self::new(dimension);
    }

    /// Records `next` as the move after the current snapshot.
    ///
    /// Snapshots after the current one are dropped first. Legality is the
    /// caller's business; only the dimension is checked. Returns the new
    /// current move index.
    #[instrument(skip(self, next), fields(current = self.current, len = self.snapshots.len()))]
    pub fn append(&mut self, next: Board) -> Result<usize, HistoryError> {
        if next.dimension() != self.dimension {
            warn!(found = %next.dimension(), "Rejected board of wrong dimension");
            return Err(HistoryError::DimensionMismatch {
                expected: self.dimension,
                found: next.dimension(),
            });
        }

        Ok(self.record(next))
    }

    /// Truncates after the current snapshot and pushes `next`.
    ///
    /// `next` must already have the history's dimension.
    pub(crate) fn record(&mut self, next: Board) -> usize {
        let discarded = self.snapshots.len() - (self.current + 1);
        if discarded > 0 {
            debug!(discarded, "Truncating future snapshots");
        }
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push(next);
        self.current = self.snapshots.len() - 1;

        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated after append"
        );

        self.current
    }

    /// Views the snapshot at `move_index` without discarding anything.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, move_index: usize) -> Result<usize, HistoryError> {
        if move_index >= self.snapshots.len() {
            warn!("Jump target out of range");
            return Err(HistoryError::MoveOutOfRange {
                requested: move_index,
                len: self.snapshots.len(),
            });
        }
        self.current = move_index;
        Ok(self.current)
    }

    /// Player to move at the current snapshot.
    pub fn current_player(&self) -> Player {
        player_for_move(self.current)
    }

    /// The snapshot being viewed.
    pub fn current(&self) -> &Board {
        &self.snapshots[self.current]
    }

    /// Index of the snapshot being viewed.
    pub fn current_move(&self) -> usize {
        self.current
    }

    /// Number of snapshots (always at least one).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: a history holds at least the starting board.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots, oldest first.
    pub fn snapshots(&self) -> &[Board] {
        &self.snapshots
    }

    /// Dimension shared by all snapshots.
    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// True when viewing the newest snapshot.
    pub fn is_at_latest(&self) -> bool {
        self.current + 1 == self.snapshots.len()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new(Dimension::CLASSIC)
    }
}
