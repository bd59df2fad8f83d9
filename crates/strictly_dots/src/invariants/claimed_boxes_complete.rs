//! Claimed box invariant: boxes are only owned once fully enclosed.

use super::super::GameState;
use super::Invariant;

/// Invariant: every claimed box has all four edges drawn.
pub struct ClaimedBoxesCompleteInvariant;

impl Invariant<GameState> for ClaimedBoxesCompleteInvariant {
    fn holds(state: &GameState) -> bool {
        state.boxes().keys().all(|cell| state.is_enclosed(*cell))
    }

    fn description() -> &'static str {
        "Claimed boxes have all four edges drawn"
    }
}
