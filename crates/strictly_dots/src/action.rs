//! First-class move type for dots and boxes.
//!
//! A move is a player's request to draw one line. It carries the two dots
//! as the player gave them; canonical ordering happens during validation.

use super::grid::{Dot, Line};
use super::roster::PlayerId;
use serde::{Deserialize, Serialize};

/// A move: a player drawing a line between two dots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player drawing the line.
    pub player: PlayerId,
    /// First endpoint, in the order the player supplied it.
    pub from: Dot,
    /// Second endpoint.
    pub to: Dot,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> PlayerId {
        self.player
    }

    /// Returns both endpoints as supplied.
    pub fn endpoints(&self) -> (Dot, Dot) {
        (self.from, self.to)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} -> {}", self.player, self.from, self.to)
    }
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// No game is running.
    #[display("Game has not been started")]
    NotStarted,

    /// Every box is already claimed.
    #[display("Game is already over")]
    GameOver,

    /// A dot lies outside the grid.
    #[display("Dot {} is outside the grid", _0)]
    OutOfBounds(Dot),

    /// The two dots are not orthogonal neighbours.
    #[display("Dots {} and {} are not adjacent", _0, _1)]
    NotAdjacent(Dot, Dot),

    /// The line already has an owner.
    #[display("Line {} is already drawn", _0)]
    LineTaken(Line),

    /// Someone other than the current player tried to move.
    #[display("It's not {}'s turn (expected {})", actual, expected)]
    WrongPlayer {
        /// Player whose turn it is.
        expected: PlayerId,
        /// Player who attempted the move.
        actual: PlayerId,
    },

    /// An invariant was violated (postcondition failure).
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
