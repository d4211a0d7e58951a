use std::{io, path::PathBuf};

use crossword_core::{ConsistencyError, GridSizeError};
use crossword_generator::GenerateError;

/// Errors reported by the command-line front end.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum CliError {
    /// The word list could not be read.
    #[display("cannot read {}: {source}", path.display())]
    Read {
        /// The word list path.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The word list has no non-blank lines.
    #[display("word list is empty")]
    EmptyInput,
    /// No line of the word list holds a valid word.
    #[display("no valid words found in the word list")]
    NoValidWords,
    /// The requested grid size is out of range.
    #[display("invalid grid size: {_0}")]
    GridSize(#[from] GridSizeError),
    /// The generator refused to run.
    #[display("{_0}")]
    Generate(#[from] GenerateError),
    /// The generated layout failed verification.
    #[display("layout check failed: {_0}")]
    Consistency(#[from] ConsistencyError),
    /// JSON serialization failed.
    #[display("cannot encode JSON: {_0}")]
    Json(#[from] serde_json::Error),
    /// Writing the output failed.
    #[display("cannot write output: {_0}")]
    Write(#[from] io::Error),
}
