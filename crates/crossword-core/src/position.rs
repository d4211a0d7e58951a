//! Board coordinates.

use std::fmt::{self, Display};

/// A cell coordinate on a crossword grid.
///
/// Rows grow downward and columns grow to the right; `(0, 0)` is the top-left
/// cell. A position carries no grid size, so it may lie outside a particular
/// grid; use [`Grid::contains`](crate::Grid::contains) to check.
///
/// # Examples
///
/// ```
/// use crossword_core::Position;
///
/// let pos = Position::new(3, 4);
/// assert_eq!(pos.offset(-1, 2), Some(Position::new(2, 6)));
/// assert_eq!(pos.offset(-4, 0), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    row: usize,
    col: usize,
}

impl Position {
    /// Creates a position from a row and a column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Returns the row (0 is the top row).
    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    /// Returns the column (0 is the leftmost column).
    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }

    /// Returns the position shifted by a signed row/column delta.
    ///
    /// Returns `None` if the result would have a negative coordinate.
    #[must_use]
    pub fn offset(self, d_row: isize, d_col: isize) -> Option<Self> {
        Some(Self {
            row: self.row.checked_add_signed(d_row)?,
            col: self.col.checked_add_signed(d_col)?,
        })
    }

    /// Returns `true` if `other` shares an edge with this position.
    #[must_use]
    pub fn is_orthogonally_adjacent(self, other: Self) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
