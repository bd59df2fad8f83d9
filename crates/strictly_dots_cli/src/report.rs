//! JSON reports printed by the CLI.

use serde::Serialize;
use strictly_dots::{DotsGame, GameStatus, GridSize, Outcome, Player, grid};

/// Final state of a replayed game.
#[derive(Debug, Clone, Serialize)]
pub struct Standings {
    /// Side length of the dot lattice.
    pub grid_size: GridSize,
    /// Lifecycle status after the last move.
    pub status: GameStatus,
    /// Lines drawn out of the total available.
    pub lines_drawn: usize,
    /// Boxes claimed so far.
    pub boxes_claimed: usize,
    /// Boxes on the grid.
    pub total_boxes: usize,
    /// Players in turn order with their scores.
    pub players: Vec<Player>,
    /// Winner or tie, once the game is finished.
    pub outcome: Option<Outcome>,
}

impl Standings {
    /// Snapshots a game.
    pub fn from_game(game: &DotsGame) -> Self {
        let state = game.state();
        Self {
            grid_size: state.grid_size(),
            status: state.status(),
            lines_drawn: state.lines().len(),
            boxes_claimed: state.claimed_boxes(),
            total_boxes: state.total_boxes(),
            players: state.roster().players().to_vec(),
            outcome: game.outcome(),
        }
    }
}

/// Element counts for a grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Topology {
    /// Side length of the dot lattice.
    pub size: GridSize,
    /// Number of dots.
    pub dots: usize,
    /// Number of drawable lines.
    pub lines: usize,
    /// Number of claimable boxes.
    pub boxes: usize,
}

impl Topology {
    /// Counts the elements of a grid by enumerating them.
    pub fn of(size: GridSize) -> Self {
        Self {
            size,
            dots: grid::dots(size).count(),
            lines: grid::lines(size).count(),
            boxes: grid::boxes(size).count(),
        }
    }
}
