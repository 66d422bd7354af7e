//! Pure tic-tac-toe rules and time-travel history for N×N boards.
//!
//! # Architecture
//!
//! - **Rules**: stateless evaluation of a board (won, drawn, in progress)
//! - **History**: linear snapshots with jump-back and branch-and-truncate
//! - **Game**: facade that validates a move, applies it and records it
//! - **Invariants**: properties every history satisfies, checked in debug builds
//!
//! # Example
//!
//! ```
//! use timetoe_rules::{Dimension, Game, GameOutcome, Player};
//!
//! let mut game = Game::new(Dimension::CLASSIC);
//! for index in [0, 4, 1, 3] {
//!     game.play(index).unwrap();
//! }
//! assert_eq!(
//!     game.play(2),
//!     Ok(GameOutcome::Won { line: vec![0, 1, 2], mark: Player::X })
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
pub mod contracts;
mod game;
pub mod history;
pub mod invariants;
mod outcome;
pub mod rules;
pub mod timeline;
mod types;

pub use action::MoveError;
pub use board::{Board, BoardError};
pub use game::{Game, Status};
pub use history::{History, HistoryError, player_for_move};
pub use outcome::GameOutcome;
pub use rules::{evaluate, is_legal_move, legal_moves};
pub use timeline::{MoveEntry, Order};
pub use types::{Dimension, DimensionError, Player, Square};
