//! Players and the ordered roster they sit in.
//!
//! Player ids are positional: the player at roster index `i` always has id
//! `i + 1`. Removing a player re-issues ids so they stay contiguous.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, instrument, warn};

/// One-based player identifier, derived from roster position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u8);

impl PlayerId {
    /// Creates a player id. Ids start at 1.
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Raw id value.
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Id of the player at roster index `index`.
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < Roster::MAX_PLAYERS, "roster index {index} out of range");
        Self(u8::try_from(index + 1).unwrap_or(u8::MAX))
    }

    /// Roster index this id refers to.
    pub(crate) fn index(self) -> Option<usize> {
        usize::from(self.0).checked_sub(1)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Fixed palette player colors are drawn from.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PlayerColor {
    /// Palette primary.
    Primary,
    /// Palette secondary.
    Secondary,
    /// Palette accent.
    Accent,
    /// Red.
    Red,
    /// Green.
    Green,
    /// Amber.
    Amber,
    /// Purple.
    Purple,
    /// Teal.
    Teal,
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Player {
    /// Position-derived id.
    #[getter(copy)]
    id: PlayerId,
    /// Display name.
    name: String,
    /// Boxes claimed in the current game.
    #[getter(copy)]
    score: u32,
    /// Color used to draw this player's lines and boxes.
    #[getter(copy)]
    color: PlayerColor,
}

impl Player {
    /// Creates a player with a zero score.
    pub fn new(id: PlayerId, name: impl Into<String>, color: PlayerColor) -> Self {
        Self {
            id,
            name: name.into(),
            score: 0,
            color,
        }
    }

    /// Name given to a player nobody has renamed yet.
    pub fn default_name(id: PlayerId) -> String {
        format!("Player {}", id.get())
    }
}

/// Error raised when a roster operation is rejected.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RosterError {
    /// Fewer than [`Roster::MIN_PLAYERS`] players.
    #[display("A game needs at least 2 players")]
    TooFew,

    /// More than [`Roster::MAX_PLAYERS`] players.
    #[display("A game supports at most 8 players")]
    TooMany,

    /// No player has this id.
    #[display("Unknown player: {}", _0)]
    UnknownPlayer(PlayerId),

    /// Names must contain something other than whitespace.
    #[display("Player name cannot be empty")]
    EmptyName,

    /// Two players were given the same color.
    #[display("Color {} is used by more than one player", _0)]
    DuplicateColor(PlayerColor),

    /// The roster is locked once a game has started.
    #[display("Roster can only change before a game starts")]
    GameInProgress,
}

impl std::error::Error for RosterError {}

/// Ordered players of a game.
///
/// Deserialization goes through the same checks as construction: sizes are
/// bounded, names are trimmed and non-blank, colors are unique and ids are
/// re-issued from position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Player>", into = "Vec<Player>")]
pub struct Roster {
    players: Vec<Player>,
}

impl Roster {
    /// Minimum number of players.
    pub const MIN_PLAYERS: usize = 2;
    /// Maximum number of players.
    pub const MAX_PLAYERS: usize = 8;

    /// Creates the default two-player roster.
    #[instrument]
    pub fn new() -> Self {
        let mut roster = Self {
            players: Vec::with_capacity(Self::MAX_PLAYERS),
        };
        for _ in 0..Self::MIN_PLAYERS {
            roster.push_default();
        }
        roster
    }

    /// Creates a roster from display names, in order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::TooFew`/`TooMany` if the count is out of range
    /// and `RosterError::EmptyName` for a blank name.
    #[instrument(skip(names))]
    pub fn with_names<I, S>(names: I) -> Result<Self, RosterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut roster = Self {
            players: Vec::with_capacity(Self::MAX_PLAYERS),
        };
        for name in names {
            if roster.players.len() == Self::MAX_PLAYERS {
                return Err(RosterError::TooMany);
            }
            let name = normalize_name(name.into())?;
            let id = PlayerId::from_index(roster.players.len());
            let color = roster.next_color();
            roster.players.push(Player::new(id, name, color));
        }
        roster.validate()?;
        Ok(roster)
    }

    /// Checks the size bounds.
    pub fn validate(&self) -> Result<(), RosterError> {
        match self.players.len() {
            n if n < Self::MIN_PLAYERS => Err(RosterError::TooFew),
            n if n > Self::MAX_PLAYERS => Err(RosterError::TooMany),
            _ => Ok(()),
        }
    }

    /// Number of players.
    pub fn len(&self) -> usize {
        self.players.len()
    }

    /// True if the roster has no players.
    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Iterates players in turn order.
    pub fn iter(&self) -> impl Iterator<Item = &Player> {
        self.players.iter()
    }

    /// Looks up a player by id.
    pub fn get(&self, id: PlayerId) -> Option<&Player> {
        id.index().and_then(|index| self.players.get(index))
    }

    /// Looks up a player by roster index.
    pub fn by_index(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Sum of every player's score.
    pub fn total_score(&self) -> u32 {
        self.players.iter().map(|p| p.score).sum()
    }

    /// Appends a player with the next id, a default name and a free color.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::TooMany` if the roster is full.
    #[instrument(skip(self), fields(size = self.players.len()))]
    pub fn add_player(&mut self) -> Result<&Player, RosterError> {
        if self.players.len() >= Self::MAX_PLAYERS {
            warn!("Roster is full");
            return Err(RosterError::TooMany);
        }
        Ok(self.push_default())
    }

    /// Removes a player and re-issues ids `1..=len` in the existing order.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::TooFew` at the minimum size and
    /// `RosterError::UnknownPlayer` for an id not in the roster.
    #[instrument(skip(self), fields(size = self.players.len()))]
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, RosterError> {
        let index = id
            .index()
            .filter(|&index| index < self.players.len())
            .ok_or(RosterError::UnknownPlayer(id))?;
        if self.players.len() <= Self::MIN_PLAYERS {
            warn!("Roster is at minimum size");
            return Err(RosterError::TooFew);
        }

        let removed = self.players.remove(index);
        for (index, player) in self.players.iter_mut().enumerate() {
            player.id = PlayerId::from_index(index);
        }
        debug!(removed = %removed.name, remaining = self.players.len(), "Player removed");
        Ok(removed)
    }

    /// Changes a player's display name. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    ///
    /// Returns `RosterError::UnknownPlayer` or `RosterError::EmptyName`.
    #[instrument(skip(self, name))]
    pub fn rename(
        &mut self,
        id: PlayerId,
        name: impl Into<String>,
    ) -> Result<&Player, RosterError> {
        let name = normalize_name(name.into())?;
        let player = id
            .index()
            .and_then(|index| self.players.get_mut(index))
            .ok_or(RosterError::UnknownPlayer(id))?;
        player.name = name;
        Ok(player)
    }

    /// Sets every score back to zero.
    pub(crate) fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.score = 0;
        }
    }

    /// Adds `points` to the player at `index`.
    pub(crate) fn award(&mut self, index: usize, points: u32) {
        debug_assert!(index < self.players.len(), "award to missing roster index {index}");
        if let Some(player) = self.players.get_mut(index) {
            player.score += points;
        }
    }

    /// First palette color no player uses, cycling once all are taken.
    fn next_color(&self) -> PlayerColor {
        PlayerColor::iter()
            .find(|color| self.players.iter().all(|p| p.color != *color))
            .or_else(|| PlayerColor::iter().cycle().nth(self.players.len()))
            .unwrap_or(PlayerColor::Primary)
    }

    fn push_default(&mut self) -> &Player {
        let id = PlayerId::from_index(self.players.len());
        let color = self.next_color();
        self.players.push(Player::new(id, Player::default_name(id), color));
        debug!(player = %id, %color, "Player added");
        &self.players[self.players.len() - 1]
    }
}

impl Default for Roster {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Player>> for Roster {
    type Error = RosterError;

    fn try_from(players: Vec<Player>) -> Result<Self, Self::Error> {
        if players.len() > Self::MAX_PLAYERS {
            return Err(RosterError::TooMany);
        }

        let mut roster = Self {
            players: Vec::with_capacity(players.len()),
        };
        for (index, player) in players.into_iter().enumerate() {
            if roster.players.iter().any(|p| p.color == player.color) {
                return Err(RosterError::DuplicateColor(player.color));
            }
            roster.players.push(Player {
                id: PlayerId::from_index(index),
                name: normalize_name(player.name)?,
                score: player.score,
                color: player.color,
            });
        }
        roster.validate()?;
        Ok(roster)
    }
}

impl From<Roster> for Vec<Player> {
    fn from(roster: Roster) -> Self {
        roster.players
    }
}

fn normalize_name(name: String) -> Result<String, RosterError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(RosterError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}
