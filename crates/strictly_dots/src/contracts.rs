//! Contract-based validation for dots and boxes.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveError};
use super::grid::{self, Line};
use super::invariants::{DotsInvariants, InvariantSet};
use super::state::{GameState, GameStatus};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the game must be accepting moves.
pub struct GameAcceptsMoves;

impl GameAcceptsMoves {
    /// Rejects moves before start and after the last box is claimed.
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        match state.status() {
            GameStatus::InProgress => Ok(()),
            GameStatus::NotStarted => Err(MoveError::NotStarted),
            GameStatus::Finished => Err(MoveError::GameOver),
        }
    }
}

/// Precondition: it must be the acting player's turn.
pub struct PlayersTurn;

impl PlayersTurn {
    /// Compares the move's player against the current player.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let expected = state.current_player_id();
        if mov.player != expected {
            Err(MoveError::WrongPlayer {
                expected,
                actual: mov.player,
            })
        } else {
            Ok(())
        }
    }
}

/// Precondition: both dots lie on the grid.
pub struct DotsOnGrid;

impl DotsOnGrid {
    /// Reports the first dot that falls outside the grid.
    pub fn check(mov: &Move, state: &GameState) -> Result<(), MoveError> {
        let size = state.grid_size();
        [mov.from, mov.to]
            .into_iter()
            .find(|dot| !size.contains(*dot))
            .map_or(Ok(()), |dot| Err(MoveError::OutOfBounds(dot)))
    }
}

/// Precondition: the line has not been drawn yet.
pub struct LineUndrawn;

impl LineUndrawn {
    /// Fails if the canonical line already has an owner.
    pub fn check(line: &Line, state: &GameState) -> Result<(), MoveError> {
        if state.line_owner(line).is_some() {
            Err(MoveError::LineTaken(*line))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every check a move must pass.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the canonical line.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &GameState) -> Result<Line, MoveError> {
        GameAcceptsMoves::check(state)?;
        PlayersTurn::check(mov, state)?;
        DotsOnGrid::check(mov, state)?;
        let line = grid::canonical_line(mov.from, mov.to)?;
        LineUndrawn::check(&line, state)?;
        Ok(line)
    }
}

// ─────────────────────────────────────────────────────────────
//  Monotonic claims (two-state property)
// ─────────────────────────────────────────────────────────────

/// Lines and boxes owned before a move keep the same owner after it.
pub struct MonotonicClaims;

impl MonotonicClaims {
    /// Checks that `after` extends `before` without rewriting ownership.
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let lines_kept = before
            .lines()
            .iter()
            .all(|(line, owner)| after.line_owner(line) == Some(*owner));
        let boxes_kept = before
            .boxes()
            .iter()
            .all(|(cell, owner)| after.box_owner(cell) == Some(*owner));

        if !(lines_kept && boxes_kept) {
            warn!(lines_kept, boxes_kept, "Claim monotonicity violated");
        }
        lines_kept && boxes_kept
    }
}

// ─────────────────────────────────────────────────────────────
//  Draw-line Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for line-draw actions.
///
/// Preconditions:
/// - Game is in progress
/// - Move is made by the current player
/// - Dots are on the grid and adjacent
/// - Line is undrawn
///
/// Postconditions:
/// - Existing claims are unchanged
/// - Scores match claimed boxes
/// - Claimed boxes are enclosed
/// - Current player is on the roster
pub struct DrawLineContract;

impl Contract<GameState, Move> for DrawLineContract {
    fn pre(state: &GameState, action: &Move) -> Result<(), MoveError> {
        LegalMove::check(action, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !MonotonicClaims::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: existing claims changed owner".to_string(),
            ));
        }

        DotsInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}
