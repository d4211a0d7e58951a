//! Grid cells.

/// A single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::IsVariant)]
pub enum Cell {
    /// No letter.
    #[default]
    Empty,
    /// A placed letter.
    Letter(char),
}

impl Cell {
    /// Returns the letter held by this cell, if any.
    #[must_use]
    pub const fn as_letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(ch) => Some(ch),
        }
    }

    /// Returns `true` if the cell is empty or already holds `letter`.
    #[must_use]
    pub fn accepts(self, letter: char) -> bool {
        match self {
            Self::Empty => true,
            Self::Letter(ch) => ch == letter,
        }
    }
}

impl From<Option<char>> for Cell {
    fn from(letter: Option<char>) -> Self {
        letter.map_or(Self::Empty, Self::Letter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts() {
        assert!(Cell::Empty.accepts('A'));
        assert!(Cell::Letter('A').accepts('A'));
        assert!(!Cell::Letter('B').accepts('A'));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Cell::from(None), Cell::Empty);
        assert_eq!(Cell::from(Some('Q')), Cell::Letter('Q'));
        assert_eq!(Cell::Letter('Q').as_letter(), Some('Q'));
        assert!(Cell::default().is_empty());
    }
}
