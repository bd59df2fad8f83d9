//! Grid topology: dots, lines and boxes of an N×N lattice.
//!
//! Everything here is pure. Lines are only constructible in canonical
//! (lower endpoint first) form, so two orderings of the same edge always
//! compare equal and hash identically.

use super::action::MoveError;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Side length of the dot lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct GridSize(u8);

impl GridSize {
    /// Smallest playable grid (one box).
    pub const MIN: u8 = 2;
    /// Largest supported grid.
    pub const MAX: u8 = 8;
    /// Size a fresh game starts with.
    pub const DEFAULT: GridSize = GridSize(4);

    /// Creates a grid size, rejecting values outside `[MIN, MAX]`.
    #[instrument]
    pub fn new(size: u8) -> Result<Self, GridSizeError> {
        if (Self::MIN..=Self::MAX).contains(&size) {
            Ok(Self(size))
        } else {
            Err(GridSizeError::OutOfRange(i16::from(size)))
        }
    }

    /// Returns the raw side length.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Returns this size adjusted by `delta`, if the result is in range.
    #[instrument]
    pub fn resized(self, delta: i8) -> Result<Self, GridSizeError> {
        let requested = i16::from(self.0) + i16::from(delta);
        u8::try_from(requested)
            .ok()
            .filter(|size| (Self::MIN..=Self::MAX).contains(size))
            .map(Self)
            .ok_or(GridSizeError::OutOfRange(requested))
    }

    /// Number of dots, `N²`.
    pub fn total_dots(self) -> usize {
        usize::from(self.0) * usize::from(self.0)
    }

    /// Number of drawable lines, `2·N·(N−1)`.
    pub fn total_lines(self) -> usize {
        2 * usize::from(self.0) * usize::from(self.0 - 1)
    }

    /// Number of claimable boxes, `(N−1)²`.
    pub fn total_boxes(self) -> usize {
        let side = usize::from(self.0 - 1);
        side * side
    }

    /// Checks whether a dot lies on this grid.
    pub fn contains(self, dot: Dot) -> bool {
        dot.row < self.0 && dot.col < self.0
    }
}

impl Default for GridSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<u8> for GridSize {
    type Error = GridSizeError;

    fn try_from(size: u8) -> Result<Self, Self::Error> {
        Self::new(size)
    }
}

impl From<GridSize> for u8 {
    fn from(size: GridSize) -> Self {
        size.0
    }
}

impl std::fmt::Display for GridSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.0, self.0)
    }
}

/// Error raised when a grid size change is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GridSizeError {
    /// The requested size falls outside the supported range.
    #[display("Grid size {} is outside 2..=8", _0)]
    OutOfRange(i16),

    /// The grid cannot change while a game is running or awaiting reset.
    #[display("Grid size can only change before a game starts")]
    GameInProgress,
}

impl std::error::Error for GridSizeError {}

/// A lattice point.
///
/// Ordering is row-major, which defines the canonical endpoint order of a
/// [`Line`].
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct Dot {
    /// Row, counted from the top.
    pub row: u8,
    /// Column, counted from the left.
    pub col: u8,
}

impl std::fmt::Display for Dot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Direction a line runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Orientation {
    /// Joins two dots in the same row.
    Horizontal,
    /// Joins two dots in the same column.
    Vertical,
}

/// An edge between two orthogonally adjacent dots, stored lower endpoint first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Dot; 2]", into = "[Dot; 2]")]
pub struct Line {
    start: Dot,
    end: Dot,
}

impl Line {
    /// Builds the canonical line between two dots in either order.
    ///
    /// # Errors
    ///
    /// Returns `MoveError::NotAdjacent` if the dots are not neighbours.
    pub fn new(a: Dot, b: Dot) -> Result<Self, MoveError> {
        canonical_line(a, b)
    }

    /// Lower-ordered endpoint.
    pub fn start(&self) -> Dot {
        self.start
    }

    /// Higher-ordered endpoint.
    pub fn end(&self) -> Dot {
        self.end
    }

    /// Returns which way the line runs.
    pub fn orientation(&self) -> Orientation {
        if self.start.row == self.end.row {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }

    // Callers guarantee `start < end` and adjacency.
    fn between(start: Dot, end: Dot) -> Self {
        Self { start, end }
    }
}

impl TryFrom<[Dot; 2]> for Line {
    type Error = MoveError;

    fn try_from([a, b]: [Dot; 2]) -> Result<Self, Self::Error> {
        canonical_line(a, b)
    }
}

impl From<Line> for [Dot; 2] {
    fn from(line: Line) -> Self {
        [line.start, line.end]
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A unit cell, identified by its top-left dot.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_new::new,
)]
pub struct BoxId {
    /// Row of the top-left dot.
    pub row: u8,
    /// Column of the top-left dot.
    pub col: u8,
}

impl BoxId {
    /// The dot at this box's top-left corner.
    pub fn top_left(&self) -> Dot {
        Dot::new(self.row, self.col)
    }
}

impl std::fmt::Display for BoxId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "box({}, {})", self.row, self.col)
    }
}

/// All dots of the grid in row-major order.
///
/// The iterator is lazy and `Clone`, so it can be restarted freely.
pub fn dots(size: GridSize) -> impl Iterator<Item = Dot> + Clone {
    let n = size.get();
    (0..n).flat_map(move |row| (0..n).map(move |col| Dot::new(row, col)))
}

/// All drawable lines: horizontal lines row by row, then vertical lines.
pub fn lines(size: GridSize) -> impl Iterator<Item = Line> + Clone {
    let n = size.get();
    let horizontal = (0..n).flat_map(move |row| {
        (0..n - 1).map(move |col| Line::between(Dot::new(row, col), Dot::new(row, col + 1)))
    });
    let vertical = (0..n - 1).flat_map(move |row| {
        (0..n).map(move |col| Line::between(Dot::new(row, col), Dot::new(row + 1, col)))
    });
    horizontal.chain(vertical)
}

/// All claimable boxes in row-major order.
pub fn boxes(size: GridSize) -> impl Iterator<Item = BoxId> + Clone {
    let side = size.get() - 1;
    (0..side).flat_map(move |row| (0..side).map(move |col| BoxId::new(row, col)))
}

/// True iff the dots differ by exactly one in exactly one coordinate.
pub fn is_adjacent(a: Dot, b: Dot) -> bool {
    a.row.abs_diff(b.row) + a.col.abs_diff(b.col) == 1
}

/// Normalizes a pair of dots into a line, lower endpoint first.
///
/// # Errors
///
/// Returns `MoveError::NotAdjacent` if the dots are not neighbours.
#[instrument]
pub fn canonical_line(a: Dot, b: Dot) -> Result<Line, MoveError> {
    if !is_adjacent(a, b) {
        return Err(MoveError::NotAdjacent(a, b));
    }
    Ok(if a < b { Line::between(a, b) } else { Line::between(b, a) })
}

/// The zero, one or two boxes a line borders on a grid of `size`.
///
/// Boundary lines border a single box; lines off the grid border none.
#[instrument]
pub fn boxes_adjacent_to_line(line: Line, size: GridSize) -> Vec<BoxId> {
    if !size.contains(line.end) {
        return Vec::new();
    }

    let last = size.get() - 1;
    let Dot { row, col } = line.start;
    let mut adjacent = Vec::with_capacity(2);

    match line.orientation() {
        Orientation::Horizontal => {
            // Above, then below.
            if row > 0 {
                adjacent.push(BoxId::new(row - 1, col));
            }
            if row < last {
                adjacent.push(BoxId::new(row, col));
            }
        }
        Orientation::Vertical => {
            // Left, then right.
            if col > 0 {
                adjacent.push(BoxId::new(row, col - 1));
            }
            if col < last {
                adjacent.push(BoxId::new(row, col));
            }
        }
    }

    adjacent
}

/// The four lines bounding a box: top, bottom, left, right.
pub fn edges_of_box(cell: BoxId) -> [Line; 4] {
    let BoxId { row, col } = cell;
    let top_left = Dot::new(row, col);
    let top_right = Dot::new(row, col + 1);
    let bottom_left = Dot::new(row + 1, col);
    let bottom_right = Dot::new(row + 1, col + 1);

    [
        Line::between(top_left, top_right),
        Line::between(bottom_left, bottom_right),
        Line::between(top_left, bottom_left),
        Line::between(top_right, bottom_right),
    ]
}
