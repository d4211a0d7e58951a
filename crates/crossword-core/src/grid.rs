//! The letter lattice.

use std::{
    fmt::{self, Display},
    ops::Index,
    str::FromStr,
};

use crate::{Cell, Placement, Position};

/// A validated grid size.
///
/// Both axes must lie in [`GridSize::MIN`]`..=`[`GridSize::MAX`].
///
/// # Examples
///
/// ```
/// use crossword_core::{GridSize, GridSizeError};
///
/// let size = GridSize::new(10, 15)?;
/// assert_eq!((size.rows(), size.cols()), (10, 15));
///
/// assert_eq!(
///     GridSize::new(4, 15),
///     Err(GridSizeError::RowsOutOfRange { rows: 4 })
/// );
/// # Ok::<(), GridSizeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridSize {
    rows: usize,
    cols: usize,
}

/// Error returned when a grid dimension is out of range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridSizeError {
    /// The row count is outside the supported range.
    #[display("row count {rows} is outside {}..={}", GridSize::MIN, GridSize::MAX)]
    RowsOutOfRange {
        /// Requested row count.
        rows: usize,
    },
    /// The column count is outside the supported range.
    #[display("column count {cols} is outside {}..={}", GridSize::MIN, GridSize::MAX)]
    ColsOutOfRange {
        /// Requested column count.
        cols: usize,
    },
}

impl GridSize {
    /// Smallest supported extent of either axis.
    pub const MIN: usize = 5;
    /// Largest supported extent of either axis.
    pub const MAX: usize = 30;

    /// Creates a grid size.
    ///
    /// # Errors
    ///
    /// Returns [`GridSizeError`] if either axis is outside `MIN..=MAX`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridSizeError> {
        if !(Self::MIN..=Self::MAX).contains(&rows) {
            return Err(GridSizeError::RowsOutOfRange { rows });
        }
        if !(Self::MIN..=Self::MAX).contains(&cols) {
            return Err(GridSizeError::ColsOutOfRange { cols });
        }
        Ok(Self { rows, cols })
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(self) -> usize {
        self.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(self) -> usize {
        self.cols
    }
}

/// A fixed `rows × cols` matrix of [`Cell`]s stored in row-major order.
///
/// The grid is a plain buffer: it never decides whether a write is legal.
/// Placement rules live in the generator.
///
/// # Text format
///
/// [`Display`] and [`FromStr`] use one line per row with `.` for an empty
/// cell. When parsing, `_` is also accepted as empty, letters are uppercased
/// and blank lines and surrounding whitespace are ignored.
///
/// ```
/// use crossword_core::{Grid, Position};
///
/// let grid: Grid = "
///     .....
///     .CAT.
///     ...I.
///     ...G.
///     ...E.
///     ...R.
/// "
/// .parse()?;
/// assert_eq!(grid.rows(), 6);
/// assert_eq!(grid[Position::new(1, 3)].as_letter(), Some('T'));
/// # Ok::<(), crossword_core::GridParseError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: GridSize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size.rows * size.cols],
        }
    }

    /// Returns the grid size.
    #[must_use]
    pub const fn size(&self) -> GridSize {
        self.size
    }

    /// Returns the number of rows.
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.size.rows
    }

    /// Returns the number of columns.
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.size.cols
    }

    /// Returns `true` if `pos` lies inside the grid.
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row() < self.size.rows && pos.col() < self.size.cols
    }

    /// Returns `true` if a word of length `len` at `placement` lies fully inside the grid.
    #[must_use]
    pub fn fits(&self, placement: Placement, len: usize) -> bool {
        len > 0 && self.contains(placement.position_at(len - 1))
    }

    fn index_of(&self, pos: Position) -> usize {
        assert!(self.contains(pos), "position {pos} outside grid");
        pos.row() * self.size.cols + pos.col()
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cells[self.index_of(pos)]
    }

    /// Returns the cell at `pos`, or `None` if `pos` is outside the grid.
    #[must_use]
    pub fn try_get(&self, pos: Position) -> Option<Cell> {
        self.contains(pos).then(|| self.get(pos))
    }

    /// Writes `letter` into the cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    pub fn set(&mut self, pos: Position, letter: char) {
        let index = self.index_of(pos);
        self.cells[index] = Cell::Letter(letter);
    }

    /// Returns `true` if the cell at `pos` holds no letter.
    ///
    /// # Panics
    ///
    /// Panics if `pos` is outside the grid.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos).is_empty()
    }

    /// Returns `true` if `pos` is outside the grid or the cell there is empty.
    #[must_use]
    pub fn is_vacant(&self, pos: Position) -> bool {
        self.try_get(pos).is_none_or(|cell| cell.is_empty())
    }

    /// Writes every letter of `word` along `placement`.
    ///
    /// # Panics
    ///
    /// Panics if the word does not fit inside the grid.
    pub fn place_word(&mut self, word: &str, placement: Placement) {
        for (pos, letter) in placement.positions(word.chars().count()).zip(word.chars()) {
            self.set(pos, letter);
        }
    }

    /// Returns the number of cells holding a letter.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_letter()).count()
    }

    /// Iterates over every position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let cols = self.size.cols;
        (0..self.size.rows).flat_map(move |row| (0..cols).map(move |col| Position::new(row, col)))
    }

    /// Returns the grid as dense rows, `None` marking an empty cell.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Option<char>>> {
        self.cells
            .chunks(self.size.cols)
            .map(|row| row.iter().map(|cell| cell.as_letter()).collect())
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = Cell;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[self.index_of(pos)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(self.size.cols).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{}", cell.as_letter().unwrap_or('.'))?;
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GridParseError {
    /// The text held no rows.
    #[display("grid text is empty")]
    Empty,
    /// A row has a different width than the first row.
    #[display("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        /// Zero-based row index.
        row: usize,
        /// Width of the first row.
        expected: usize,
        /// Width of the offending row.
        found: usize,
    },
    /// The parsed dimensions are out of range.
    #[display("{_0}")]
    Size(GridSizeError),
}

impl FromStr for Grid {
    type Err = GridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<Vec<char>> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().filter(|ch| !ch.is_whitespace()).collect())
            .collect();
        let Some(first) = lines.first() else {
            return Err(GridParseError::Empty);
        };
        let expected = first.len();
        if let Some((row, line)) = lines
            .iter()
            .enumerate()
            .find(|(_, line)| line.len() != expected)
        {
            return Err(GridParseError::RaggedRow {
                row,
                expected,
                found: line.len(),
            });
        }

        let size = GridSize::new(lines.len(), expected).map_err(GridParseError::Size)?;
        let mut grid = Self::new(size);
        for (row, line) in lines.iter().enumerate() {
            for (col, &ch) in line.iter().enumerate() {
                if ch != '.' && ch != '_' {
                    grid.set(Position::new(row, col), ch.to_ascii_uppercase());
                }
            }
        }
        Ok(grid)
    }
}
