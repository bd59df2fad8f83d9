//! Strictly Dots - a rules engine for dots and boxes
//!
//! Players take turns drawing a line between two adjacent dots on a square
//! lattice. Drawing the fourth side of a box claims it, scores a point and
//! earns another turn. When every box is claimed the highest score wins.
//!
//! # Architecture
//!
//! - **Grid**: lattice geometry, canonical lines and box adjacency
//! - **Roster**: ordered players with positional ids and palette colors
//! - **Rules**: pure move processing, turn rotation and winner evaluation
//! - **Game**: lifecycle (setup, play, reset) over an authoritative state
//! - **Contracts**: move preconditions and postconditions backed by invariants
//!
//! # Example
//!
//! ```
//! use strictly_dots::{Dot, DotsGame, GameStatus};
//!
//! let mut game = DotsGame::with_grid(2)?;
//! game.start()?;
//! game.draw_line(Dot::new(0, 0), Dot::new(0, 1))?;
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.state().current_index(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod config;
mod error;
mod game;
mod outcome;
mod roster;
mod state;

// Public module declarations
pub mod contracts;
pub mod grid;
pub mod invariants;
pub mod rules;

// Crate-level exports - Actions
pub use action::{Move, MoveError};

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig};

// Crate-level exports - Contracts
pub use contracts::{Contract, DrawLineContract, LegalMove};

// Crate-level exports - Errors
pub use error::DotsError;

// Crate-level exports - Lifecycle
pub use game::{Command, CommandOutcome, DotsGame};

// Crate-level exports - Geometry
pub use grid::{BoxId, Dot, GridSize, GridSizeError, Line, Orientation};

// Crate-level exports - Results
pub use outcome::{GameEvent, MoveOutcome};
pub use rules::{Outcome, TurnChange};

// Crate-level exports - Players
pub use roster::{Player, PlayerColor, PlayerId, Roster, RosterError};

// Crate-level exports - State
pub use state::{GameState, GameStatus};
