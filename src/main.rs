//! Timetoe - tic-tac-toe with time-travel.

use anyhow::{Context, Result};
use clap::Parser;
use timetoe::{
    App, Cli, Command, Config, Format, ReplayPlan, ReplaySummary, init_file_logging,
    init_stderr_logging, replay, run_tui,
};
use timetoe_rules::Dimension;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { size } => run_play(config, size),
        Command::Replay {
            size,
            moves,
            jump,
            then,
            format,
        } => run_replay(&config, size, ReplayPlan { moves, jump, then }, format),
    }
}

/// Runs the interactive game.
fn run_play(config: Config, size: Option<u8>) -> Result<()> {
    let config = match size {
        Some(size) => config.with_board_size(Dimension::new(size)?),
        None => config,
    };
    init_file_logging(&config)
        .with_context(|| format!("Cannot open log file {}", config.log_file().display()))?;

    info!(board_size = %config.board_size(), "Starting game");
    run_tui(App::new(*config.board_size(), *config.history_order()))
}

/// Replays moves headlessly and prints the final state.
fn run_replay(config: &Config, size: u8, plan: ReplayPlan, format: Format) -> Result<()> {
    init_stderr_logging(config);

    let game = replay(Dimension::new(size)?, &plan)?;
    let summary = ReplaySummary::from_game(&game);

    match format {
        Format::Text => print!("{}", summary.to_text()),
        Format::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }
    Ok(())
}
