//! Generation errors.

/// Errors that prevent a generation run from starting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum GenerateError {
    /// No words were supplied.
    #[display("cannot generate a crossword from an empty word list")]
    EmptyWordList,
}
