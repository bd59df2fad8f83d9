//! Applying a line draw and detecting the boxes it completes.

use super::super::action::{Move, MoveError};
use super::super::contracts::LegalMove;
use super::super::grid::{self, BoxId, Line};
use super::super::state::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a single line draw did to the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    /// The canonical line that was drawn.
    pub line: Line,
    /// Boxes claimed by this draw (0, 1 or 2).
    pub claimed: Vec<BoxId>,
}

impl MoveResult {
    /// Number of boxes this draw completed.
    pub fn completions(&self) -> u8 {
        self.claimed.len() as u8
    }
}

/// Validates and applies a move.
///
/// All preconditions are checked before anything is written, so a rejected
/// move leaves the state untouched. On success the line is recorded and every
/// adjacent box that is now enclosed and still unclaimed goes to the mover,
/// one point each.
///
/// # Errors
///
/// Returns the first failed precondition as a [`MoveError`].
#[instrument(skip(state), fields(player = %mov.player))]
pub fn apply_move(state: &mut GameState, mov: Move) -> Result<MoveResult, MoveError> {
    let line = LegalMove::check(&mov, state)?;
    let actor = state.current_index();

    state.record_line(line, mov.player);

    let claimed: Vec<BoxId> = grid::boxes_adjacent_to_line(line, state.grid_size())
        .into_iter()
        .filter(|cell| state.box_owner(cell).is_none() && state.is_enclosed(*cell))
        .collect();

    for cell in &claimed {
        state.record_box(*cell, mov.player);
    }
    state.roster_mut().award(actor, claimed.len() as u32);

    debug!(%line, completions = claimed.len(), "Line drawn");
    Ok(MoveResult { line, claimed })
}
