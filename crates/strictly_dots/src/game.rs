//! Game lifecycle: setup, play and reset of a single dots-and-boxes game.
//!
//! [`DotsGame`] owns the authoritative [`GameState`]. Every operation is
//! all-or-nothing: a rejected call leaves the game exactly as it was.

use super::action::{Move, MoveError};
use super::config::GameConfig;
#[cfg(debug_assertions)]
use super::contracts::{Contract, DrawLineContract};
use super::error::DotsError;
use super::grid::{Dot, GridSize, GridSizeError, Line};
use super::outcome::MoveOutcome;
use super::roster::{Player, PlayerId, Roster, RosterError};
use super::rules::{self, Outcome};
use super::state::{GameState, GameStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// A request from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Start (or restart) with the current roster.
    Start,
    /// Replace the roster, then start.
    StartWith(Roster),
    /// Abandon the current game and return to setup.
    Reset,
    /// Grow or shrink the grid by `delta`.
    Resize(i8),
    /// Append a default player.
    AddPlayer,
    /// Remove a player by id.
    RemovePlayer(PlayerId),
    /// Change a player's display name.
    RenamePlayer {
        /// Player to rename.
        id: PlayerId,
        /// New name.
        name: String,
    },
    /// Draw a line for the current player.
    DrawLine(Dot, Dot),
    /// Draw a line on behalf of a specific player.
    Play(Move),
}

/// Successful result of a [`Command`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommandOutcome {
    /// A game is now in progress.
    Started,
    /// The game is back in setup.
    Reset,
    /// The grid has a new size.
    Resized(GridSize),
    /// A player joined.
    PlayerAdded(Player),
    /// A player left; the snapshot carries their old id.
    PlayerRemoved(Player),
    /// A player was renamed.
    PlayerRenamed(Player),
    /// A line was drawn.
    Moved(MoveOutcome),
}

/// A single dots-and-boxes game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DotsGame {
    state: GameState,
}

impl DotsGame {
    /// Creates a game in setup with the default grid and two players.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a game in setup with a custom grid size.
    #[instrument]
    pub fn with_grid(size: u8) -> Result<Self, GridSizeError> {
        Ok(Self {
            state: GameState::new(GridSize::new(size)?, Roster::new()),
        })
    }

    /// Builds a game in setup from configuration.
    ///
    /// # Errors
    ///
    /// Returns `DotsError::GridSize` or `DotsError::Roster` if the
    /// configuration is out of bounds.
    #[instrument(skip(config), fields(grid_size = config.grid_size()))]
    pub fn from_config(config: &GameConfig) -> Result<Self, DotsError> {
        let grid_size = GridSize::new(config.grid_size())?;
        let roster = Roster::with_names(config.players().iter().cloned())?;
        debug!(players = roster.len(), "Game configured");
        Ok(Self {
            state: GameState::new(grid_size, roster),
        })
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[cfg(test)]
    pub(crate) fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// Returns the status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns the roster.
    pub fn roster(&self) -> &Roster {
        self.state.roster()
    }

    /// Starts a new game with the current roster and grid size.
    ///
    /// Clears the board, zeroes scores and gives the first player the turn.
    ///
    /// # Errors
    ///
    /// Returns a `RosterError` if the roster size is out of bounds.
    #[instrument(
        skip(self),
        fields(grid = %self.state.grid_size(), players = self.state.roster().len())
    )]
    pub fn start(&mut self) -> Result<(), RosterError> {
        self.state.roster().validate().inspect_err(|e| {
            warn!(error = %e, "Cannot start game");
        })?;

        self.state.clear_board();
        self.state.set_status(GameStatus::InProgress);
        info!("Game started");
        Ok(())
    }

    /// Replaces the roster and starts.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::GameInProgress` while a game is running, or a
    /// size error for an invalid roster. Nothing changes on error.
    #[instrument(skip(self, roster), fields(players = roster.len()))]
    pub fn start_with(&mut self, roster: Roster) -> Result<(), RosterError> {
        if self.state.status() == GameStatus::InProgress {
            warn!("Cannot replace roster mid-game");
            return Err(RosterError::GameInProgress);
        }
        roster.validate()?;
        self.state.replace_roster(roster);
        self.start()
    }

    /// Abandons the current game and returns to setup.
    ///
    /// The roster is kept; lines, boxes and scores are discarded.
    #[instrument(skip(self), fields(status = %self.state.status()))]
    pub fn reset(&mut self) {
        self.state.clear_board();
        self.state.set_status(GameStatus::NotStarted);
        info!("Game reset");
    }

    /// Grows or shrinks the grid by `delta`.
    ///
    /// # Errors
    ///
    /// Returns `GridSizeError::GameInProgress` unless in setup, and
    /// `GridSizeError::OutOfRange` if the result leaves `[2, 8]`.
    #[instrument(skip(self), fields(grid = %self.state.grid_size()))]
    pub fn resize(&mut self, delta: i8) -> Result<GridSize, GridSizeError> {
        if self.state.status() != GameStatus::NotStarted {
            warn!("Resize rejected outside setup");
            return Err(GridSizeError::GameInProgress);
        }

        let size = self.state.grid_size().resized(delta).inspect_err(|e| {
            warn!(error = %e, "Resize rejected");
        })?;
        self.state.set_grid_size(size);
        info!(%size, "Grid resized");
        Ok(size)
    }

    /// Adds a player with the next id, a default name and a free color.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::GameInProgress` outside setup and
    /// `RosterError::TooMany` at eight players.
    #[instrument(skip(self))]
    pub fn add_player(&mut self) -> Result<Player, RosterError> {
        self.ensure_roster_unlocked()?;
        let player = self.state.roster_mut().add_player()?.clone();
        info!(player = %player.id(), "Player added");
        Ok(player)
    }

    /// Removes a player; the rest are renumbered `1..=len` in order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::GameInProgress` outside setup,
    /// `RosterError::TooFew` at two players, or `RosterError::UnknownPlayer`.
    #[instrument(skip(self))]
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        self.ensure_roster_unlocked()?;
        let removed = self.state.roster_mut().remove_player(id)?;
        self.state.set_current(0);
        info!(player = %id, name = %removed.name(), "Player removed");
        Ok(removed)
    }

    /// Renames a player.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::GameInProgress` outside setup,
    /// `RosterError::UnknownPlayer` or `RosterError::EmptyName`.
    #[instrument(skip(self, name))]
    pub fn rename_player(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<Player, RosterError> {
        self.ensure_roster_unlocked()?;
        let player = self.state.roster_mut().rename(id, name)?.clone();
        debug!(player = %id, name = %player.name(), "Player renamed");
        Ok(player)
    }

    /// Draws a line for whoever is on move.
    ///
    /// # Errors
    ///
    /// Returns a [`MoveError`] if the game is not running, a dot is off the
    /// grid, the dots are not adjacent or the line is already drawn.
    #[instrument(skip(self))]
    pub fn draw_line(&mut self, a: Dot, b: Dot) -> Result<MoveOutcome, MoveError> {
        let mov = Move::new(self.state.current_player_id(), a, b);
        self.make_move(mov)
    }

    /// Applies a move made by a specific player.
    ///
    /// Runs the draw, the turn rule and end-of-game detection as one step.
    /// Postconditions are verified in debug builds; a violation rolls the
    /// move back.
    ///
    /// # Errors
    ///
    /// As [`draw_line`](Self::draw_line), plus `MoveError::WrongPlayer` when
    /// `mov.player` is not on move.
    #[instrument(skip(self, mov), fields(mov = %mov))]
    pub fn make_move(&mut self, mov: Move) -> Result<MoveOutcome, MoveError> {
        #[cfg(debug_assertions)]
        let before = self.state.clone();

        let result = rules::apply_move(&mut self.state, mov).inspect_err(|e| {
            warn!(error = %e, "Move rejected");
        })?;
        let turn = rules::advance(&mut self.state, result.completions());

        let game_over = self.state.all_boxes_claimed();
        if game_over {
            self.state.set_status(GameStatus::Finished);
        }

        #[cfg(debug_assertions)]
        {
            if let Err(e) = DrawLineContract::post(&before, &self.state) {
                warn!(error = %e, "Postcondition failed, rolling back move");
                self.state = before;
                return Err(e);
            }
        }

        let winners = if game_over {
            let outcome = rules::evaluate(&self.state);
            self.state.set_outcome(outcome.clone());
            outcome
        } else {
            None
        };

        Ok(MoveOutcome {
            line: result.line,
            player: mov.player,
            completions: result.completions(),
            claimed_boxes: result.claimed,
            next_player: turn.next_player(),
            game_over,
            winners,
        })
    }

    /// Lines still available to draw.
    pub fn valid_lines(&self) -> Vec<Line> {
        match self.state.status() {
            GameStatus::InProgress => self.state.undrawn_lines().collect(),
            _ => Vec::new(),
        }
    }

    /// Final standings, once the game is finished.
    pub fn outcome(&self) -> Option<Outcome> {
        self.state.outcome().cloned()
    }

    /// Applies a command and hands back the game with the result.
    ///
    /// On error the returned game equals the one passed in.
    #[instrument(skip(self))]
    pub fn transition(mut self, command: Command) -> (Self, Result<CommandOutcome, DotsError>) {
        let result = match command {
            Command::Start => self
                .start()
                .map(|()| CommandOutcome::Started)
                .map_err(DotsError::from),
            Command::StartWith(roster) => self
                .start_with(roster)
                .map(|()| CommandOutcome::Started)
                .map_err(DotsError::from),
            Command::Reset => {
                self.reset();
                Ok(CommandOutcome::Reset)
            }
            Command::Resize(delta) => self
                .resize(delta)
                .map(CommandOutcome::Resized)
                .map_err(DotsError::from),
            Command::AddPlayer => self
                .add_player()
                .map(CommandOutcome::PlayerAdded)
                .map_err(DotsError::from),
            Command::RemovePlayer(id) => self
                .remove_player(id)
                .map(CommandOutcome::PlayerRemoved)
                .map_err(DotsError::from),
            Command::RenamePlayer { id, name } => self
                .rename_player(id, name)
                .map(CommandOutcome::PlayerRenamed)
                .map_err(DotsError::from),
            Command::DrawLine(a, b) => self
                .draw_line(a, b)
                .map(CommandOutcome::Moved)
                .map_err(DotsError::from),
            Command::Play(mov) => self
                .make_move(mov)
                .map(CommandOutcome::Moved)
                .map_err(DotsError::from),
        };
        (self, result)
    }

    fn ensure_roster_unlocked(&self) -> Result<(), RosterError> {
        if self.state.status() == GameStatus::NotStarted {
            Ok(())
        } else {
            warn!(status = %self.state.status(), "Roster is locked");
            Err(RosterError::GameInProgress)
        }
    }
}
