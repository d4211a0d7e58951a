//! Input words and placed words.

use crate::{Orientation, Placement, Position};

/// A word and its clue, ready to hand to the generator.
///
/// The text is always uppercase and consists only of ASCII letters, hyphens
/// and apostrophes. Uniqueness across a word list is the caller's concern.
///
/// # Examples
///
/// ```
/// use crossword_core::{WordEntry, WordError};
///
/// let entry = WordEntry::new(" o'brien ", "Common Irish surname")?;
/// assert_eq!(entry.text(), "O'BRIEN");
/// assert_eq!(entry.len(), 7);
///
/// assert!(matches!(
///     WordEntry::new("rain coat", ""),
///     Err(WordError::InvalidCharacter { ch: ' ', .. })
/// ));
/// # Ok::<(), WordError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    text: String,
    clue: String,
}

/// Error returned when a word cannot be used in a crossword.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum WordError {
    /// The word is empty after trimming.
    #[display("word is empty")]
    Empty,
    /// The word contains a character other than a letter, hyphen or apostrophe.
    #[display("word {word:?} contains invalid character {ch:?}")]
    InvalidCharacter {
        /// The offending word.
        word: String,
        /// The first invalid character.
        ch: char,
    },
}

impl WordEntry {
    /// Creates an entry, trimming and uppercasing the word and trimming the clue.
    ///
    /// # Errors
    ///
    /// Returns [`WordError`] if the trimmed word is empty or contains
    /// characters outside `A-Z`, `a-z`, `-` and `'`.
    pub fn new(text: &str, clue: &str) -> Result<Self, WordError> {
        let text = text.trim();
        validate_word(text)?;
        Ok(Self {
            text: text.to_ascii_uppercase(),
            clue: clue.trim().to_owned(),
        })
    }

    /// Returns the uppercase word text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the clue.
    #[must_use]
    pub fn clue(&self) -> &str {
        &self.clue
    }

    /// Replaces the clue.
    pub fn set_clue(&mut self, clue: &str) {
        clue.trim().clone_into(&mut self.clue);
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the word has no letters. Never true for a constructed entry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Checks that `word` is usable as crossword text.
///
/// # Errors
///
/// Returns [`WordError`] if `word` is empty or contains characters outside
/// `A-Z`, `a-z`, `-` and `'`.
pub fn validate_word(word: &str) -> Result<(), WordError> {
    if word.is_empty() {
        return Err(WordError::Empty);
    }
    if let Some(ch) = word
        .chars()
        .find(|&ch| !(ch.is_ascii_alphabetic() || ch == '-' || ch == '\''))
    {
        return Err(WordError::InvalidCharacter {
            word: word.to_owned(),
            ch,
        });
    }
    Ok(())
}

/// A word placed on the grid by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlacedWord {
    /// The uppercase word text.
    pub text: String,
    /// The clue.
    pub clue: String,
    /// Where the word starts and which way it runs.
    pub placement: Placement,
    /// Number of letters the word shared with the grid when it was placed.
    pub intersections: usize,
    /// Clue number, assigned in placement order starting at 1.
    pub number: usize,
}

impl PlacedWord {
    /// Returns the first cell of the word.
    #[must_use]
    pub fn origin(&self) -> Position {
        self.placement.origin
    }

    /// Returns the axis the word runs along.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        self.placement.orientation
    }

    /// Returns the number of letters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns `true` if the word has no letters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterates over `(position, letter)` pairs in word order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, char)> + '_ {
        self.placement.positions(self.len()).zip(self.text.chars())
    }

    /// Returns the offset of `pos` within this word, if the word covers it.
    #[must_use]
    pub fn offset_of(&self, pos: Position) -> Option<usize> {
        let origin = self.origin();
        let (along, across) = match self.orientation() {
            Orientation::Across => (pos.col().checked_sub(origin.col())?, pos.row() == origin.row()),
            Orientation::Down => (pos.row().checked_sub(origin.row())?, pos.col() == origin.col()),
        };
        (across && along < self.len()).then_some(along)
    }

    /// Returns `true` if the word covers `pos`.
    #[must_use]
    pub fn covers(&self, pos: Position) -> bool {
        self.offset_of(pos).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placed(text: &str, row: usize, col: usize, orientation: Orientation) -> PlacedWord {
        PlacedWord {
            text: text.to_owned(),
            clue: String::new(),
            placement: Placement::new(Position::new(row, col), orientation),
            intersections: 0,
            number: 1,
        }
    }

    #[test]
    fn test_word_entry_normalizes_input() {
        let entry = WordEntry::new("  e-mail ", "  Electronic mail ").expect("valid word");
        assert_eq!(entry.text(), "E-MAIL");
        assert_eq!(entry.clue(), "Electronic mail");
        assert!(!entry.is_empty());
    }

    #[test]
    fn test_word_entry_rejects_invalid_words() {
        assert_eq!(WordEntry::new("   ", "clue"), Err(WordError::Empty));
        assert_eq!(
            WordEntry::new("ABC1", "clue"),
            Err(WordError::InvalidCharacter {
                word: "ABC1".to_owned(),
                ch: '1'
            })
        );
        assert!(WordEntry::new("CAFÉ", "clue").is_err());
    }

    #[test]
    fn test_set_clue_trims() {
        let mut entry = WordEntry::new("cat", "").expect("valid word");
        entry.set_clue("  A small feline ");
        assert_eq!(entry.clue(), "A small feline");
    }

    #[test]
    fn test_placed_word_cells() {
        let word = placed("DOG", 2, 1, Orientation::Down);
        let cells: Vec<_> = word.cells().collect();
        assert_eq!(
            cells,
            [
                (Position::new(2, 1), 'D'),
                (Position::new(3, 1), 'O'),
                (Position::new(4, 1), 'G'),
            ]
        );
    }

    #[test]
    fn test_offset_of() {
        let across = placed("TIGER", 3, 2, Orientation::Across);
        assert_eq!(across.offset_of(Position::new(3, 2)), Some(0));
        assert_eq!(across.offset_of(Position::new(3, 6)), Some(4));
        assert_eq!(across.offset_of(Position::new(3, 7)), None);
        assert_eq!(across.offset_of(Position::new(3, 1)), None);
        assert_eq!(across.offset_of(Position::new(4, 3)), None);

        let down = placed("CAT", 0, 0, Orientation::Down);
        assert!(down.covers(Position::new(2, 0)));
        assert!(!down.covers(Position::new(3, 0)));
        assert!(!down.covers(Position::new(1, 1)));
    }
}
