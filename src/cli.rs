//! Command-line interface for timetoe.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Timetoe - tic-tac-toe with time-travel on 3x3 to 5x5 boards
#[derive(Parser, Debug)]
#[command(name = "timetoe")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional)
    #[arg(short, long, global = true, default_value = "timetoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal UI
    Play {
        /// Board side length (overrides the config file)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(3..=5))]
        size: Option<u8>,
    },

    /// Replay a sequence of moves headlessly and print the result
    Replay {
        /// Board side length
        #[arg(short, long, default_value = "3", value_parser = clap::value_parser!(u8).range(3..=5))]
        size: u8,

        /// Comma-separated cell indices, row-major from 0
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Jump to this move after playing `--moves`
        #[arg(long)]
        jump: Option<usize>,

        /// Moves played after the jump (branching from it)
        #[arg(long, value_delimiter = ',', requires = "jump")]
        then: Vec<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

/// Output format for `replay`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable board, status and move list
    Text,
    /// JSON summary
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from([
            "timetoe", "replay", "--size", "4", "--moves", "0,5,10", "--jump", "1", "--then", "3",
        ]);
        match cli.command {
            Command::Replay {
                size,
                moves,
                jump,
                then,
                format,
            } => {
                assert_eq!(size, 4);
                assert_eq!(moves, vec![0, 5, 10]);
                assert_eq!(jump, Some(1));
                assert_eq!(then, vec![3]);
                assert_eq!(format, Format::Text);
            }
            Command::Play { .. } => panic!("Expected replay"),
        }
    }

    #[test]
    fn test_size_out_of_range_rejected() {
        assert!(Cli::try_parse_from(["timetoe", "play", "--size", "6"]).is_err());
    }

    #[test]
    fn test_then_requires_jump() {
        assert!(Cli::try_parse_from(["timetoe", "replay", "--moves", "0", "--then", "1"]).is_err());
    }
}
