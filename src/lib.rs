//! Timetoe library - tic-tac-toe with time-travel.
//!
//! The rules and history live in [`timetoe_rules`]; this crate adds the
//! ways to play them.
//!
//! # Architecture
//!
//! - **Cli**: `play` and `replay` commands
//! - **Config**: TOML settings (board size, move list order, logging)
//! - **Replay**: headless replay of a move sequence with branching
//! - **Tui**: interactive terminal game with history navigation
//!
//! # Example
//!
//! ```
//! use timetoe::{ReplayPlan, ReplaySummary, replay};
//! use timetoe_rules::Dimension;
//!
//! let plan = ReplayPlan { moves: vec![0, 4, 1, 3, 2], ..ReplayPlan::default() };
//! let game = replay(Dimension::CLASSIC, &plan).unwrap();
//! assert_eq!(ReplaySummary::from_game(&game).status, "Winner: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

pub use cli::{Cli, Command, Format};
pub use config::{Config, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{ReplayError, ReplayPlan, ReplaySummary, replay};
pub use tui::{App, Control, run_tui};
