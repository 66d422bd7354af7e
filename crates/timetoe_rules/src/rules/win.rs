//! Win detection for N×N boards.

use super::lines::{Line, lines};
use crate::{Board, Player, Square};
use tracing::{debug, instrument};

/// Finds the first line filled by a single player.
///
/// Returns the line and the player occupying it, or `None` when no line is
/// complete. Lines are checked in [`lines`] order.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<(Line, Player)> {
    let squares = board.squares();
    for line in lines(board.dimension()) {
        let Some((&first, rest)) = line.indices().split_first() else {
            continue;
        };
        if let Square::Occupied(player) = squares[first]
            && rest.iter().all(|&i| squares[i] == Square::Occupied(player))
        {
            debug!(kind = %line.kind(), %player, "Winning line found");
            return Some((line, player));
        }
    }
    None
}
