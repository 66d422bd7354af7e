//! Headless replay of a move sequence.

use derive_more::{Display, Error};
use serde::Serialize;
use timetoe_rules::{Dimension, Game, GameOutcome, HistoryError, MoveError, Order};
use tracing::{debug, instrument};

/// Moves to replay, optionally branching from an earlier snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReplayPlan {
    /// Moves played from the empty board.
    pub moves: Vec<usize>,
    /// Snapshot to jump back to after `moves`.
    pub jump: Option<usize>,
    /// Moves played after the jump.
    pub then: Vec<usize>,
}

/// Why a replay stopped.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ReplayError {
    /// A move was refused.
    #[display("Move {} (cell {}) refused: {}", step, index, source)]
    Move {
        /// Position of the move in the sequence, from 1.
        step: usize,
        /// Requested cell.
        index: usize,
        /// Reason for refusal.
        source: MoveError,
    },
    /// The jump target does not exist.
    #[display("Cannot jump: {}", _0)]
    Jump(HistoryError),
}

/// Final state of a replay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplaySummary {
    /// Board side length.
    pub size: Dimension,
    /// Index of the viewed snapshot.
    pub current_move: usize,
    /// Number of snapshots.
    pub snapshots: usize,
    /// Viewed board, one string per row.
    pub board: Vec<String>,
    /// Outcome of the viewed board.
    pub outcome: GameOutcome,
    /// Status line.
    pub status: String,
    /// Move list captions, oldest first.
    pub timeline: Vec<String>,
}

impl ReplaySummary {
    /// Captures the viewed state of `game`.
    pub fn from_game(game: &Game) -> Self {
        Self {
            size: game.dimension(),
            current_move: game.history().current_move(),
            snapshots: game.history().len(),
            board: game.board().to_string().lines().map(str::to_string).collect(),
            outcome: game.outcome(),
            status: game.status().to_string(),
            timeline: game
                .timeline(Order::Ascending)
                .iter()
                .map(|entry| entry.caption())
                .collect(),
        }
    }

    /// Multi-line text rendering.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.status);
        out.push_str("\n\n");
        for row in &self.board {
            out.push_str(row);
            out.push('\n');
        }
        out.push('\n');
        for caption in &self.timeline {
            out.push_str(caption);
            out.push('\n');
        }
        out
    }
}

fn play_all(game: &mut Game, moves: &[usize], first_step: usize) -> Result<(), ReplayError> {
    for (offset, &index) in moves.iter().enumerate() {
        game.play(index).map_err(|source| ReplayError::Move {
            step: first_step + offset,
            index,
            source,
        })?;
    }
    Ok(())
}

/// Plays `plan` on a fresh board of `size`.
#[instrument(skip(plan), fields(moves = plan.moves.len(), branch = plan.then.len()))]
pub fn replay(size: Dimension, plan: &ReplayPlan) -> Result<Game, ReplayError> {
    let mut game = Game::new(size);
    play_all(&mut game, &plan.moves, 1)?;

    if let Some(target) = plan.jump {
        game.jump_to(target).map_err(ReplayError::Jump)?;
        debug!(target, "Jumped back");
    }
    play_all(&mut game, &plan.then, plan.moves.len() + 1)?;

    Ok(game)
}

#[cfg(test)]
mod tests {
    use super::*;
    use timetoe_rules::Player;

    fn plan(moves: &[usize]) -> ReplayPlan {
        ReplayPlan {
            moves: moves.to_vec(),
            ..ReplayPlan::default()
        }
    }

    #[test]
    fn test_replay_row_win() {
        let game = replay(Dimension::CLASSIC, &plan(&[0, 4, 1, 3, 2])).unwrap();
        assert_eq!(game.outcome().winner(), Some(Player::X));
    }

    #[test]
    fn test_replay_reports_step_of_refused_move() {
        let err = replay(Dimension::CLASSIC, &plan(&[0, 0])).unwrap_err();
        assert_eq!(
            err,
            ReplayError::Move {
                step: 2,
                index: 0,
                source: MoveError::SquareOccupied(0)
            }
        );
    }

    #[test]
    fn test_replay_branch_truncates() {
        let plan = ReplayPlan {
            moves: vec![0, 4, 1],
            jump: Some(1),
            then: vec![8],
        };
        let game = replay(Dimension::CLASSIC, &plan).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.board().to_string(), "X..\n...\n..O");
    }

    #[test]
    fn test_summary_text() {
        let game = replay(Dimension::CLASSIC, &plan(&[4])).unwrap();
        let text = ReplaySummary::from_game(&game).to_text();
        assert_eq!(
            text,
            "Next player: O\n\n...\n.X.\n...\n\nGo to game start\nYou are here at move #1\n"
        );
    }
}
