//! Winner determination for a finished game.

use super::super::roster::Player;
use super::super::state::{GameState, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Outcome of a finished game.
///
/// Players are snapshots taken when the last box was claimed, so names and
/// scores can be reported without the live roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// One player holds the highest score.
    Winner(Player),
    /// Two or more players share the highest score.
    Tie(Vec<Player>),
}

impl Outcome {
    /// Every player with the top score.
    pub fn winners(&self) -> &[Player] {
        match self {
            Outcome::Winner(player) => std::slice::from_ref(player),
            Outcome::Tie(players) => players,
        }
    }

    /// Returns true if the top score is shared.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie(_))
    }

    /// The winning score.
    pub fn top_score(&self) -> u32 {
        self.winners().first().map_or(0, |p| p.score())
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(player) => {
                write!(f, "{} wins with {} boxes", player.name(), player.score())
            }
            Outcome::Tie(players) => {
                let names = players
                    .iter()
                    .map(|p| p.name().as_str())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "Tie between {} at {} boxes", names, self.top_score())
            }
        }
    }
}

/// Computes the outcome once every box is claimed.
///
/// Returns `None` while the game is not finished.
#[instrument(skip(state), fields(status = %state.status()))]
pub fn evaluate(state: &GameState) -> Option<Outcome> {
    if state.status() != GameStatus::Finished {
        return None;
    }

    let roster = state.roster();
    let top = roster.iter().map(|p| p.score()).max()?;
    let mut leaders: Vec<Player> = roster
        .iter()
        .filter(|p| p.score() == top)
        .cloned()
        .collect();

    let outcome = if leaders.len() == 1 {
        Outcome::Winner(leaders.remove(0))
    } else {
        Outcome::Tie(leaders)
    };
    info!(%outcome, "Game over");
    Some(outcome)
}
