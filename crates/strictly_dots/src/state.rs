//! Authoritative state of one game.

use super::grid::{self, BoxId, GridSize, Line};
use super::roster::{Player, PlayerId, Roster};
use super::rules::Outcome;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Where the game is in its lifecycle.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
pub enum GameStatus {
    /// Setup: grid size and roster may change.
    #[default]
    NotStarted,
    /// Moves are being accepted.
    InProgress,
    /// Every box is claimed.
    Finished,
}

/// Complete game state.
///
/// Lines and boxes only carry entries once drawn or claimed, and those
/// entries never change owner for the remainder of the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid_size: GridSize,
    status: GameStatus,
    lines: BTreeMap<Line, PlayerId>,
    boxes: BTreeMap<BoxId, PlayerId>,
    roster: Roster,
    current: usize,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Creates an unstarted game.
    pub fn new(grid_size: GridSize, roster: Roster) -> Self {
        Self {
            grid_size,
            status: GameStatus::NotStarted,
            lines: BTreeMap::new(),
            boxes: BTreeMap::new(),
            roster,
            current: 0,
            outcome: None,
        }
    }

    /// Returns the grid size.
    pub fn grid_size(&self) -> GridSize {
        self.grid_size
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Drawn lines and who drew them.
    pub fn lines(&self) -> &BTreeMap<Line, PlayerId> {
        &self.lines
    }

    /// Claimed boxes and their owners.
    pub fn boxes(&self) -> &BTreeMap<BoxId, PlayerId> {
        &self.boxes
    }

    /// Roster index of the player to move.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// The player to move.
    pub fn current_player(&self) -> Option<&Player> {
        self.roster.by_index(self.current)
    }

    /// Id of the player to move.
    pub fn current_player_id(&self) -> PlayerId {
        PlayerId::from_index(self.current)
    }

    /// Owner of a line, if drawn.
    pub fn line_owner(&self, line: &Line) -> Option<PlayerId> {
        self.lines.get(line).copied()
    }

    /// Owner of a box, if claimed.
    pub fn box_owner(&self, cell: &BoxId) -> Option<PlayerId> {
        self.boxes.get(cell).copied()
    }

    /// True if all four edges of the box are drawn.
    pub fn is_enclosed(&self, cell: BoxId) -> bool {
        grid::edges_of_box(cell)
            .iter()
            .all(|edge| self.lines.contains_key(edge))
    }

    /// Number of claimed boxes.
    pub fn claimed_boxes(&self) -> usize {
        self.boxes.len()
    }

    /// Number of boxes on this grid.
    pub fn total_boxes(&self) -> usize {
        self.grid_size.total_boxes()
    }

    /// True once every box has an owner.
    pub fn all_boxes_claimed(&self) -> bool {
        self.claimed_boxes() >= self.total_boxes()
    }

    /// Lines not drawn yet, horizontal first.
    pub fn undrawn_lines(&self) -> impl Iterator<Item = Line> + '_ {
        grid::lines(self.grid_size).filter(move |line| !self.lines.contains_key(line))
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn set_grid_size(&mut self, grid_size: GridSize) {
        self.grid_size = grid_size;
    }

    pub(crate) fn set_current(&mut self, index: usize) {
        self.current = index;
    }

    pub(crate) fn roster_mut(&mut self) -> &mut Roster {
        &mut self.roster
    }

    pub(crate) fn replace_roster(&mut self, roster: Roster) {
        self.roster = roster;
        self.current = 0;
    }

    /// Records a drawn line. Owners are never overwritten.
    pub(crate) fn record_line(&mut self, line: Line, owner: PlayerId) {
        self.lines.entry(line).or_insert(owner);
    }

    /// Records a claimed box. Owners are never overwritten.
    pub(crate) fn record_box(&mut self, cell: BoxId, owner: PlayerId) {
        self.boxes.entry(cell).or_insert(owner);
    }

    /// Final standings, recorded once when the last box is claimed.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    pub(crate) fn set_outcome(&mut self, outcome: Option<Outcome>) {
        self.outcome = outcome;
    }

    /// Clears lines, boxes, scores and any outcome, and hands the turn to
    /// the first player.
    pub(crate) fn clear_board(&mut self) {
        self.lines.clear();
        self.boxes.clear();
        self.outcome = None;
        self.roster.reset_scores();
        self.current = 0;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(GridSize::default(), Roster::default())
    }
}
