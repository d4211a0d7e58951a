//! Reproducible layout seeds.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use rand::SeedableRng as _;
use rand_pcg::Pcg64;
use sha2::{Digest as _, Sha256};

/// A 256-bit seed that determines every random tie-break of a generation run.
///
/// Seeds print and parse as 64 lowercase hexadecimal digits, so a layout can
/// be reproduced by passing the printed seed back to
/// [`CrosswordGenerator::generate_with_seed`](crate::CrosswordGenerator::generate_with_seed).
///
/// # Examples
///
/// ```
/// use crossword_generator::LayoutSeed;
///
/// let seed = LayoutSeed::from_phrase("sunday puzzle");
/// let text = seed.to_string();
/// assert_eq!(text.len(), 64);
/// assert_eq!(text.parse::<LayoutSeed>()?, seed);
/// # Ok::<(), crossword_generator::SeedParseError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutSeed([u8; 32]);

/// Error returned when parsing a [`LayoutSeed`] fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SeedParseError {
    /// The text is not exactly 64 characters long.
    #[display("seed must be 64 hex digits, got {len}")]
    InvalidLength {
        /// Length of the rejected text.
        len: usize,
    },
    /// The text contains a non-hexadecimal character.
    #[display("invalid hex digit {ch:?} in seed")]
    InvalidDigit {
        /// The offending character.
        ch: char,
    },
}

impl LayoutSeed {
    /// Creates a seed from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derives a seed by hashing an arbitrary phrase with SHA-256.
    #[must_use]
    pub fn from_phrase(phrase: &str) -> Self {
        Self(Sha256::digest(phrase.as_bytes()).into())
    }

    /// Draws a fresh seed from the operating system's random source.
    ///
    /// # Panics
    ///
    /// Panics if the operating system cannot provide random bytes.
    #[must_use]
    pub fn random() -> Self {
        let mut bytes = [0; 32];
        getrandom::fill(&mut bytes).expect("OS random source is unavailable");
        Self(bytes)
    }

    /// Returns the raw seed bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub(crate) fn to_rng(self) -> Pcg64 {
        Pcg64::from_seed(self.0)
    }
}

impl Display for LayoutSeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl FromStr for LayoutSeed {
    type Err = SeedParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 64 {
            return Err(SeedParseError::InvalidLength {
                len: s.chars().count(),
            });
        }
        if let Some(ch) = s.chars().find(|ch| !ch.is_ascii_hexdigit()) {
            return Err(SeedParseError::InvalidDigit { ch });
        }

        let mut bytes = [0; 32];
        for (byte, pair) in bytes.iter_mut().zip(s.as_bytes().chunks_exact(2)) {
            *byte = (hex_value(pair[0]) << 4) | hex_value(pair[1]);
        }
        Ok(Self(bytes))
    }
}

fn hex_value(digit: u8) -> u8 {
    match digit {
        b'0'..=b'9' => digit - b'0',
        b'a'..=b'f' => digit - b'a' + 10,
        b'A'..=b'F' => digit - b'A' + 10,
        _ => unreachable!("digit validated as hex"),
    }
}
