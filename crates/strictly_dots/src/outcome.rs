//! Structured results handed back to the presentation layer.
//!
//! The engine never shows messages itself. Callers turn these values into
//! whatever notifications they like.

use super::grid::{BoxId, Line};
use super::roster::PlayerId;
use super::rules::Outcome;
use serde::{Deserialize, Serialize};

/// Everything a caller needs to know after a successful draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveOutcome {
    /// The canonical line drawn.
    pub line: Line,
    /// Player who drew it.
    pub player: PlayerId,
    /// Number of boxes the draw completed (0, 1 or 2).
    pub completions: u8,
    /// The boxes completed, in row-major order.
    pub claimed_boxes: Vec<BoxId>,
    /// Player who moves next.
    pub next_player: PlayerId,
    /// True if this draw claimed the last box.
    pub game_over: bool,
    /// Final standings, present only when `game_over` is set.
    pub winners: Option<Outcome>,
}

impl MoveOutcome {
    /// Notifications this draw gives rise to, in presentation order.
    pub fn events(&self) -> Vec<GameEvent> {
        let mut events = Vec::with_capacity(2);
        if self.completions > 0 {
            events.push(GameEvent::BoxesCompleted {
                player: self.player,
                boxes: self.claimed_boxes.clone(),
            });
        }
        match &self.winners {
            Some(outcome) => events.push(GameEvent::GameOver(outcome.clone())),
            None if self.next_player != self.player => events.push(GameEvent::TurnChanged {
                player: self.next_player,
            }),
            None => {}
        }
        events
    }
}

/// A notification-worthy change in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The turn passed to another player.
    TurnChanged {
        /// Player now on move.
        player: PlayerId,
    },
    /// A player completed one or more boxes and moves again.
    BoxesCompleted {
        /// Player who claimed the boxes.
        player: PlayerId,
        /// Boxes claimed.
        boxes: Vec<BoxId>,
    },
    /// The last box was claimed.
    GameOver(Outcome),
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameEvent::TurnChanged { player } => write!(f, "{}'s turn", player),
            GameEvent::BoxesCompleted { player, boxes } => {
                let plural = if boxes.len() == 1 { "box" } else { "boxes" };
                write!(f, "{} completed {} {}", player, boxes.len(), plural)
            }
            GameEvent::GameOver(outcome) => write!(f, "Game over: {}", outcome),
        }
    }
}
