//! Unified error for command dispatch.

use super::action::MoveError;
use super::grid::GridSizeError;
use super::roster::RosterError;
use derive_more::{Display, Error, From};

/// Any error a [`Command`](super::Command) can produce.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum DotsError {
    /// A line draw was rejected.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveError),

    /// A roster change or start was rejected.
    #[display("Roster violation: {}", _0)]
    Roster(RosterError),

    /// A grid resize was rejected.
    #[display("Grid size violation: {}", _0)]
    GridSize(GridSizeError),
}
