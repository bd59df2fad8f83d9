//! Current player invariant: the turn always belongs to someone on the roster.

use super::super::GameState;
use super::Invariant;

/// Invariant: the current player index points at a live roster entry.
pub struct CurrentPlayerLiveInvariant;

impl Invariant<GameState> for CurrentPlayerLiveInvariant {
    fn holds(state: &GameState) -> bool {
        state.current_index() < state.roster().len()
    }

    fn description() -> &'static str {
        "Current player index refers to a roster entry"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DotsGame;

    #[test]
    fn test_new_game_holds() {
        let game = DotsGame::new();
        assert!(CurrentPlayerLiveInvariant::holds(game.state()));
    }

    #[test]
    fn test_dangling_index_violates() {
        let mut game = DotsGame::new();
        game.state_mut().set_current(2);
        assert!(!CurrentPlayerLiveInvariant::holds(game.state()));
    }
}
