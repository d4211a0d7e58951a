use crossword_core::{WordEntry, WordError};

/// Returns the placeholder clue used when a word is added without one.
#[must_use]
pub fn default_clue(word: &str) -> String {
    format!("Clue for {word}")
}

/// Returns `true` if `clue` has any non-whitespace content.
#[must_use]
pub fn validate_clue(clue: &str) -> bool {
    !clue.trim().is_empty()
}

/// Error returned when editing a [`WordList`] fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum WordListError {
    /// The word is already in the list.
    #[display("{word} is already in the list")]
    Duplicate {
        /// The normalized word.
        word: String,
    },
    /// The word cannot be used in a crossword.
    #[display("{_0}")]
    InvalidWord(#[from] WordError),
    /// No entry exists at the index.
    #[display("no word at index {index} (list has {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of entries in the list.
        len: usize,
    },
}

/// An ordered list of unique words and their clues.
///
/// Words are normalized on entry (trimmed, uppercased), so `cat` and ` CAT`
/// count as the same word.
///
/// # Examples
///
/// ```
/// use crossword_words::{WordList, WordListError};
///
/// let mut list = WordList::new();
/// list.add("cat", "")?;
/// list.add("dog", "Barks")?;
/// assert_eq!(list.entries()[0].clue(), "Clue for CAT");
/// assert!(matches!(list.add(" Cat ", ""), Err(WordListError::Duplicate { .. })));
/// # Ok::<(), WordListError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    entries: Vec<WordEntry>,
}

impl WordList {
    /// Creates an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a word, substituting [`default_clue`] for an empty clue.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::InvalidWord`] if the word is not valid and
    /// [`WordListError::Duplicate`] if it is already present.
    pub fn add(&mut self, word: &str, clue: &str) -> Result<&WordEntry, WordListError> {
        let mut entry = WordEntry::new(word, clue)?;
        if !validate_clue(entry.clue()) {
            entry.set_clue(&default_clue(entry.text()));
        }
        self.push(entry)
    }

    fn push(&mut self, entry: WordEntry) -> Result<&WordEntry, WordListError> {
        if self.contains(entry.text()) {
            return Err(WordListError::Duplicate {
                word: entry.text().to_owned(),
            });
        }
        self.entries.push(entry);
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Appends entries whose words are not yet in the list and returns how many were added.
    pub fn merge(&mut self, entries: impl IntoIterator<Item = WordEntry>) -> usize {
        let mut added = 0;
        for entry in entries {
            if self.push(entry).is_ok() {
                added += 1;
            }
        }
        added
    }

    /// Removes and returns the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::IndexOutOfRange`] if `index` is past the end.
    pub fn remove(&mut self, index: usize) -> Result<WordEntry, WordListError> {
        self.check_index(index)?;
        Ok(self.entries.remove(index))
    }

    /// Replaces the clue of the entry at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::IndexOutOfRange`] if `index` is past the end.
    pub fn update_clue(&mut self, index: usize, clue: &str) -> Result<(), WordListError> {
        self.check_index(index)?;
        self.entries[index].set_clue(clue);
        Ok(())
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns `true` if the normalized `word` is in the list.
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        let word = word.trim();
        self.entries
            .iter()
            .any(|entry| entry.text().eq_ignore_ascii_case(word))
    }

    /// Returns the entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn check_index(&self, index: usize) -> Result<(), WordListError> {
        if index < self.entries.len() {
            Ok(())
        } else {
            Err(WordListError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
        }
    }
}

impl From<WordList> for Vec<WordEntry> {
    fn from(list: WordList) -> Self {
        list.entries
    }
}
