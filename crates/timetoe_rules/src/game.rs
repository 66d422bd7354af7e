//! Game facade tying the rules to the history.

use super::contracts::LegalMove;
use super::history::{History, HistoryError};
use super::invariants::{InvariantSet, PlayInvariants};
use super::timeline::{self, MoveEntry, Order};
use super::{Board, Dimension, GameOutcome, MoveError, Player, rules};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Status line for the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Game continues with this player to move.
    NextPlayer(Player),
    /// This player completed a line.
    Winner(Player),
    /// Board full, nobody won.
    Draw,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Status::NextPlayer(player) => write!(f, "Next player: {}", player),
            Status::Winner(player) => write!(f, "Winner: {}", player),
            Status::Draw => write!(f, "Draw"),
        }
    }
}

/// A tic-tac-toe game with time-travel.
///
/// Owns the history; the outcome is recomputed from the viewed snapshot on
/// every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    history: History,
}

impl Game {
    /// Creates a new game on an empty board.
    #[instrument]
    pub fn new(dimension: Dimension) -> Self {
        Self {
            history: History::new(dimension),
        }
    }

    /// Creates a new 3x3 game.
    pub fn classic() -> Self {
        Self::new(Dimension::CLASSIC)
    }

    /// Outcome of the viewed snapshot.
    pub fn outcome(&self) -> GameOutcome {
        rules::evaluate(self.history.current())
    }

    /// Status line of the viewed snapshot.
    pub fn status(&self) -> Status {
        match self.outcome() {
            GameOutcome::InProgress => Status::NextPlayer(self.current_player()),
            GameOutcome::Won { mark, .. } => Status::Winner(mark),
            GameOutcome::Draw => Status::Draw,
        }
    }

    /// Places the current player's mark at `index`.
    ///
    /// Playing from an earlier snapshot discards the later ones. A refused
    /// move leaves the game untouched.
    #[instrument(skip(self), fields(player = %self.current_player(), current = self.history.current_move()))]
    pub fn play(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        let board = self.history.current();
        if let Err(e) = LegalMove::check(board, index) {
            warn!(error = %e, "Move refused");
            return Err(e);
        }

        let next = board.with_mark(index, self.current_player())?;
        self.history.record(next);

        debug_assert!(
            PlayInvariants::check_all(&self.history).is_ok(),
            "Play invariants violated"
        );

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.current_move(), "Game over");
        } else {
            debug!(move_index = self.history.current_move(), "Move played");
        }
        Ok(outcome)
    }

    /// Views the snapshot at `move_index`.
    pub fn jump_to(&mut self, move_index: usize) -> Result<usize, HistoryError> {
        self.history.jump_to(move_index)
    }

    /// Starts over on an empty board of `dimension`.
    #[instrument(skip(self))]
    pub fn resize(&mut self, dimension: Dimension) {
        info!(from = %self.dimension(), to = %dimension, "Resizing board");
        self.history.reset(dimension);
    }

    /// Starts over at the current dimension.
    pub fn restart(&mut self) {
        self.history.reset(self.dimension());
    }

    /// Player to move at the viewed snapshot.
    pub fn current_player(&self) -> Player {
        self.history.current_player()
    }

    /// The viewed board.
    pub fn board(&self) -> &Board {
        self.history.current()
    }

    /// Board side length.
    pub fn dimension(&self) -> Dimension {
        self.history.dimension()
    }

    /// The full history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Move list for display.
    pub fn timeline(&self, order: Order) -> Vec<MoveEntry> {
        timeline::entries(self.history.len(), self.history.current_move(), order)
    }
}
