//! Turn rotation with the bonus-turn rule.

use super::super::roster::PlayerId;
use super::super::state::GameState;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the turn moved after a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnChange {
    /// The mover completed a box and goes again.
    Retained(PlayerId),
    /// The turn passed to the next player in roster order.
    Passed {
        /// Player who just moved.
        from: PlayerId,
        /// Player who moves next.
        to: PlayerId,
    },
}

impl TurnChange {
    /// The player who moves next.
    pub fn next_player(&self) -> PlayerId {
        match self {
            TurnChange::Retained(player) => *player,
            TurnChange::Passed { to, .. } => *to,
        }
    }
}

/// Passes the turn on iff the draw completed nothing.
#[instrument(skip(state), fields(current = state.current_index()))]
pub fn advance(state: &mut GameState, completions: u8) -> TurnChange {
    let from = state.current_player_id();
    if completions > 0 {
        debug!(player = %from, "Bonus turn");
        return TurnChange::Retained(from);
    }

    let len = state.roster().len().max(1);
    state.set_current((state.current_index() + 1) % len);
    let to = state.current_player_id();
    debug!(%from, %to, "Turn passed");
    TurnChange::Passed { from, to }
}
