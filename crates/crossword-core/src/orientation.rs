//! Placement axes.

use std::fmt::{self, Display};

use crate::Position;

/// The axis a word is written along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::IsVariant)]
pub enum Orientation {
    /// Left to right.
    Across,
    /// Top to bottom.
    Down,
}

impl Orientation {
    /// Both orientations, Across first.
    pub const ALL: [Self; 2] = [Self::Across, Self::Down];

    /// Returns the other orientation.
    #[must_use]
    pub const fn perpendicular(self) -> Self {
        match self {
            Self::Across => Self::Down,
            Self::Down => Self::Across,
        }
    }

    /// Returns the `(row, col)` step taken when advancing one letter.
    #[must_use]
    pub const fn step(self) -> (isize, isize) {
        match self {
            Self::Across => (0, 1),
            Self::Down => (1, 0),
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Across => "across",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Where a word starts and which way it runs.
///
/// # Examples
///
/// ```
/// use crossword_core::{Orientation, Placement, Position};
///
/// let placement = Placement::new(Position::new(1, 2), Orientation::Down);
/// let cells: Vec<_> = placement.positions(3).collect();
/// assert_eq!(
///     cells,
///     [Position::new(1, 2), Position::new(2, 2), Position::new(3, 2)]
/// );
/// assert_eq!(placement.before(), Some(Position::new(0, 2)));
/// assert_eq!(placement.after(3), Position::new(4, 2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    /// First cell of the word.
    pub origin: Position,
    /// Axis the word runs along.
    pub orientation: Orientation,
}

impl Placement {
    /// Creates a placement.
    #[must_use]
    pub const fn new(origin: Position, orientation: Orientation) -> Self {
        Self {
            origin,
            orientation,
        }
    }

    /// Returns the position of the `offset`-th letter.
    #[must_use]
    pub const fn position_at(self, offset: usize) -> Position {
        match self.orientation {
            Orientation::Across => Position::new(self.origin.row(), self.origin.col() + offset),
            Orientation::Down => Position::new(self.origin.row() + offset, self.origin.col()),
        }
    }

    /// Iterates over the positions covered by a word of length `len`.
    pub fn positions(self, len: usize) -> impl Iterator<Item = Position> {
        (0..len).map(move |offset| self.position_at(offset))
    }

    /// Returns the cell immediately before the first letter, if it has
    /// non-negative coordinates.
    #[must_use]
    pub fn before(self) -> Option<Position> {
        let (d_row, d_col) = self.orientation.step();
        self.origin.offset(-d_row, -d_col)
    }

    /// Returns the cell immediately after the last letter of a word of length `len`.
    #[must_use]
    pub const fn after(self, len: usize) -> Position {
        self.position_at(len)
    }

    /// Returns the two cells beside `pos` across this placement's axis, where
    /// they have non-negative coordinates.
    pub fn sides(self, pos: Position) -> impl Iterator<Item = Position> {
        let (d_row, d_col) = self.orientation.perpendicular().step();
        [pos.offset(-d_row, -d_col), pos.offset(d_row, d_col)]
            .into_iter()
            .flatten()
    }

    /// Returns this placement moved by `delta` cells along its own axis.
    #[must_use]
    pub fn shifted(self, delta: isize) -> Option<Self> {
        let (d_row, d_col) = self.orientation.step();
        let origin = self.origin.offset(d_row * delta, d_col * delta)?;
        Some(Self::new(origin, self.orientation))
    }
}
