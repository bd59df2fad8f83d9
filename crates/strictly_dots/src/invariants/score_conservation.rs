//! Score conservation invariant: every point comes from exactly one box.

use super::super::GameState;
use super::Invariant;

/// Invariant: the sum of all scores equals the number of claimed boxes,
/// and each player's score equals the number of boxes they own.
pub struct ScoreConservationInvariant;

impl Invariant<GameState> for ScoreConservationInvariant {
    fn holds(state: &GameState) -> bool {
        let roster = state.roster();
        if roster.total_score() as usize != state.claimed_boxes() {
            return false;
        }

        roster.iter().all(|player| {
            let owned = state
                .boxes()
                .values()
                .filter(|owner| **owner == player.id())
                .count();
            owned == player.score() as usize
        })
    }

    fn description() -> &'static str {
        "Scores sum to the number of claimed boxes"
    }
}
