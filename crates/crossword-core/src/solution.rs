//! Theme ("solution") words.
//!
//! A theme word is spelled by reading marked cells of the finished crossword
//! in order. The generator decides which cell hosts each theme letter and
//! records the result as a [`SolutionWord`].

use crate::Position;

/// A requested theme word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThemeWord {
    /// The theme word text. Compared case-insensitively with grid letters.
    pub text: String,
    /// Optional description shown alongside the reveal.
    pub description: Option<String>,
}

impl ThemeWord {
    /// Creates a theme word without a description.
    #[must_use]
    pub fn new(text: &str) -> Self {
        Self {
            text: text.trim().to_uppercase(),
            description: None,
        }
    }

    /// Attaches a description.
    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.trim().to_owned());
        self
    }
}

/// The grid cell chosen to host one theme letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterSource {
    /// Index into the generator's placed-word list.
    pub word_index: usize,
    /// Offset of the letter within that word.
    pub letter_index: usize,
    /// Grid position of the letter.
    pub position: Position,
}

/// The assignment of a single theme letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LetterAssignment {
    /// The theme letter.
    pub letter: char,
    /// 1-based index of the letter in the theme word.
    pub solution_position: usize,
    /// The hosting cell, or `None` if no placed word could host this letter.
    pub source: Option<LetterSource>,
}

/// A theme word together with where its letters live on the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SolutionWord {
    /// The theme word text.
    pub text: String,
    /// Optional description.
    pub description: Option<String>,
    /// One assignment per theme letter, in theme-word order.
    pub assignments: Vec<LetterAssignment>,
}

impl SolutionWord {
    /// Returns the number of letters that found a hosting cell.
    #[must_use]
    pub fn assigned_count(&self) -> usize {
        self.assignments
            .iter()
            .filter(|assignment| assignment.source.is_some())
            .count()
    }

    /// Returns `true` if every theme letter found a hosting cell.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.assigned_count() == self.assignments.len()
    }

    /// Returns the theme-letter marker at `pos`, if any.
    #[must_use]
    pub fn assignment_at(&self, pos: Position) -> Option<&LetterAssignment> {
        self.assignments
            .iter()
            .find(|assignment| assignment.source.is_some_and(|source| source.position == pos))
    }

    /// Returns the reveal string, with `missing` standing in for unassigned letters.
    #[must_use]
    pub fn reveal(&self, missing: char) -> String {
        self.assignments
            .iter()
            .map(|assignment| {
                if assignment.source.is_some() {
                    assignment.letter
                } else {
                    missing
                }
            })
            .collect()
    }
}
