//! Command-line interface for strictly_dots.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Dots - dots-and-boxes rules engine driver
#[derive(Parser, Debug)]
#[command(name = "strictly_dots")]
#[command(about = "Replay dots-and-boxes games through the rules engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Replay a move script and print the final standings
    Play {
        /// Path to game configuration (grid size and players)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Path to the move script, one `r1,c1 r2,c2` move per line
        #[arg(short, long)]
        moves: PathBuf,

        /// Abort on the first rejected move instead of skipping it
        #[arg(long)]
        strict: bool,
    },

    /// Print dot, line and box counts for a grid size
    Topology {
        /// Side length of the dot lattice
        #[arg(short, long, default_value = "4")]
        size: u8,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from([
            "strictly_dots",
            "play",
            "--config",
            "game.toml",
            "--moves",
            "moves.txt",
            "--strict",
        ]);
        match cli.command {
            Command::Play {
                config,
                moves,
                strict,
            } => {
                assert_eq!(config, Some(PathBuf::from("game.toml")));
                assert_eq!(moves, PathBuf::from("moves.txt"));
                assert!(strict);
            }
            other => panic!("Expected play, got {:?}", other),
        }
    }

    #[test]
    fn test_topology_default_size() {
        let cli = Cli::parse_from(["strictly_dots", "topology"]);
        assert!(matches!(cli.command, Command::Topology { size: 4 }));
    }
}
