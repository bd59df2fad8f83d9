//! Strictly Dots - command-line driver
//!
//! Replays move scripts through the rules engine and reports standings.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod report;
mod script;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use report::{Standings, Topology};
use std::path::PathBuf;
use strictly_dots::{DotsGame, GameConfig, GridSize};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play {
            config,
            moves,
            strict,
        } => run_play(config, moves, strict),
        Command::Topology { size } => run_topology(size),
    }
}

/// Replay a move script and print the final standings
#[instrument]
fn run_play(config: Option<PathBuf>, moves: PathBuf, strict: bool) -> Result<()> {
    let config = match config {
        Some(path) => GameConfig::from_file(&path)?,
        None => {
            debug!("No config given, using defaults");
            GameConfig::default()
        }
    };

    let mut game = DotsGame::from_config(&config).context("Invalid game configuration")?;
    game.start()?;
    info!(
        grid = %game.state().grid_size(),
        players = game.roster().len(),
        "Replaying move script"
    );

    for scripted in script::load(&moves)? {
        match game.draw_line(scripted.from, scripted.to) {
            Ok(outcome) => {
                debug!(line = %outcome.line, player = %outcome.player, "Line drawn");
                for event in outcome.events() {
                    info!(script_line = scripted.line, "{}", event);
                }
            }
            Err(e) if strict => {
                bail!("Move on line {} rejected: {}", scripted.line, e);
            }
            Err(e) => {
                warn!(script_line = scripted.line, error = %e, "Skipping rejected move");
            }
        }
    }

    let standings = Standings::from_game(&game);
    println!("{}", serde_json::to_string_pretty(&standings)?);
    Ok(())
}

/// Print dot, line and box counts for a grid size
#[instrument]
fn run_topology(size: u8) -> Result<()> {
    let size = GridSize::new(size)?;
    println!("{}", serde_json::to_string_pretty(&Topology::of(size))?);
    Ok(())
}
