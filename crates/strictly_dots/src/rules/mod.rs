//! Game rules for dots and boxes.
//!
//! Pure functions over [`GameState`](super::GameState): applying a draw,
//! rotating the turn and deciding the winner. Rules are kept apart from the
//! lifecycle so they can be composed and tested on their own.

pub mod completion;
pub mod turn;
pub mod win;

pub use completion::{apply_move, MoveResult};
pub use turn::{advance, TurnChange};
pub use win::{evaluate, Outcome};
