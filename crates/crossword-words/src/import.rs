//! Delimited-text word lists.
//!
//! Each non-blank line holds a word followed by its clue. The separator is
//! guessed from the content; comma, semicolon and tab are recognised.

use std::{
    collections::HashSet,
    fmt::{self, Display},
    str::FromStr,
};

use crossword_core::{WordEntry, validate_word};

use crate::default_clue;

/// Number of leading non-blank lines inspected when guessing the separator.
const SNIFF_LINES: usize = 10;

/// Number of lines echoed back by [`analyze`].
const SAMPLE_LINES: usize = 3;

/// A field separator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Separator {
    /// `,`
    #[default]
    Comma,
    /// `;`
    Semicolon,
    /// A horizontal tab.
    Tab,
}

/// Error returned when parsing a [`Separator`] name fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown separator {name:?} (expected comma, semicolon or tab)")]
pub struct SeparatorParseError {
    /// The rejected name.
    pub name: String,
}

impl Separator {
    /// Returns the separator character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Comma => ',',
            Self::Semicolon => ';',
            Self::Tab => '\t',
        }
    }

    /// Guesses the separator from the first few non-blank lines.
    ///
    /// Tab wins if it outnumbers both other candidates, semicolon wins if it
    /// outnumbers commas, and comma is the default.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_words::Separator;
    ///
    /// assert_eq!(Separator::detect("CAT;Meows\nDOG;Barks, loudly"), Separator::Semicolon);
    /// assert_eq!(Separator::detect("CAT\tMeows"), Separator::Tab);
    /// assert_eq!(Separator::detect(""), Separator::Comma);
    /// ```
    #[must_use]
    pub fn detect(content: &str) -> Self {
        let (mut commas, mut semicolons, mut tabs) = (0, 0, 0);
        for line in non_blank_lines(content).take(SNIFF_LINES) {
            for ch in line.chars() {
                match ch {
                    ',' => commas += 1,
                    ';' => semicolons += 1,
                    '\t' => tabs += 1,
                    _ => {}
                }
            }
        }
        if tabs > commas && tabs > semicolons {
            Self::Tab
        } else if semicolons > commas {
            Self::Semicolon
        } else {
            Self::Comma
        }
    }
}

impl Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Comma => "comma",
            Self::Semicolon => "semicolon",
            Self::Tab => "tab",
        };
        f.write_str(name)
    }
}

impl FromStr for Separator {
    type Err = SeparatorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "comma" | "," => Ok(Self::Comma),
            "semicolon" | ";" => Ok(Self::Semicolon),
            "tab" | "\t" => Ok(Self::Tab),
            _ => Err(SeparatorParseError { name: s.to_owned() }),
        }
    }
}

/// Splits on `\r\n`, `\n` or `\r`.
fn lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

fn non_blank_lines(content: &str) -> impl Iterator<Item = &str> {
    lines(content).filter(|line| !line.trim().is_empty())
}

/// Splits one line into trimmed fields.
///
/// Separators inside double quotes do not split. A backslash takes the next
/// character literally, and `""` inside quotes stands for one quote. Fields
/// wrapped in matching single or double quotes are unwrapped.
fn split_fields(line: &str, separator: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.trim().chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                if let Some(next) = chars.next() {
                    current.push(next);
                }
            }
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                chars.next();
                current.push('"');
            }
            '"' => in_quotes = !in_quotes,
            ch if ch == separator && !in_quotes => {
                fields.push(unquote(current.trim()).to_owned());
                current.clear();
            }
            ch => current.push(ch),
        }
    }
    fields.push(unquote(current.trim()).to_owned());
    fields
}

fn unquote(field: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| {
            field
                .strip_prefix(quote)
                .and_then(|rest| rest.strip_suffix(quote))
        })
        .unwrap_or(field)
}

/// Parses a delimited word list.
///
/// The first field of each line is the word; any remaining fields, joined
/// with `", "`, form the clue, which defaults to `"Clue for WORD"`. Lines with
/// invalid words are skipped with a warning. When a word appears more than
/// once, the first occurrence wins.
///
/// # Examples
///
/// ```
/// let entries = crossword_words::parse("cat,Meows\n\ndog,\"Barks, loudly\"\nrex");
/// let words: Vec<_> = entries.iter().map(|entry| (entry.text(), entry.clue())).collect();
/// assert_eq!(
///     words,
///     [("CAT", "Meows"), ("DOG", "Barks, loudly"), ("REX", "Clue for REX")]
/// );
/// ```
#[must_use]
pub fn parse(content: &str) -> Vec<WordEntry> {
    let separator = Separator::detect(content);
    log::debug!("parsing word list as {separator}-separated");

    let mut seen = HashSet::new();
    let mut entries = Vec::new();
    for (index, line) in lines(content).enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let fields = split_fields(line, separator.as_char());
        let word = fields[0].to_uppercase();
        if word.is_empty() {
            continue;
        }
        let clue = fields[1..].join(", ");
        let clue = if clue.trim().is_empty() {
            default_clue(&word)
        } else {
            clue
        };
        match WordEntry::new(&word, &clue) {
            Ok(entry) => {
                if seen.insert(entry.text().to_owned()) {
                    entries.push(entry);
                } else {
                    log::debug!("line {}: duplicate word {word}", index + 1);
                }
            }
            Err(err) => log::warn!("line {}: skipping {word:?}: {err}", index + 1),
        }
    }
    entries
}

/// A quick structural summary of a delimited word list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Analysis {
    /// The detected separator.
    pub separator: Separator,
    /// Number of non-blank lines.
    pub line_count: usize,
    /// Number of non-blank lines whose first field is a valid word.
    pub valid_lines: usize,
    /// The first few non-blank lines, verbatim.
    pub sample_lines: Vec<String>,
}

/// Summarizes `content` without building entries.
#[must_use]
pub fn analyze(content: &str) -> Analysis {
    let separator = Separator::detect(content);
    let lines: Vec<&str> = non_blank_lines(content).collect();
    let valid_lines = lines
        .iter()
        .filter(|line| {
            line.split(separator.as_char())
                .next()
                .is_some_and(|word| validate_word(word.trim()).is_ok())
        })
        .count();
    Analysis {
        separator,
        line_count: lines.len(),
        valid_lines,
        sample_lines: lines
            .iter()
            .take(SAMPLE_LINES)
            .map(|&line| line.to_owned())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[WordEntry]) -> Vec<(&str, &str)> {
        entries.iter().map(|entry| (entry.text(), entry.clue())).collect()
    }

    #[test]
    fn test_detect() {
        assert_eq!(Separator::detect("A,b\nC,d"), Separator::Comma);
        assert_eq!(Separator::detect("A;b,c;d"), Separator::Semicolon);
        assert_eq!(Separator::detect("A\tb\nC\td"), Separator::Tab);
        // ties fall back to comma
        assert_eq!(Separator::detect("A;b,c"), Separator::Comma);
        assert_eq!(Separator::detect("A\tb;c"), Separator::Semicolon);
    }

    #[test]
    fn test_detect_looks_at_leading_lines_only() {
        let mut content = "A;b\n".repeat(SNIFF_LINES);
        content.push_str(&"C,d,e,f\n".repeat(20));
        assert_eq!(Separator::detect(&content), Separator::Semicolon);
    }

    #[test]
    fn test_separator_names() {
        assert_eq!("Tab".parse::<Separator>(), Ok(Separator::Tab));
        assert_eq!(";".parse::<Separator>(), Ok(Separator::Semicolon));
        assert!("pipe".parse::<Separator>().is_err());
        assert_eq!(Separator::Comma.to_string(), "comma");
        assert!(Separator::default().is_comma());
    }

    #[test]
    fn test_split_fields() {
        assert_eq!(split_fields(" a , b ", ','), ["a", "b"]);
        assert_eq!(split_fields("a,\"b, c\"", ','), ["a", "b, c"]);
        assert_eq!(split_fields("a,b\\,c", ','), ["a", "b,c"]);
        assert_eq!(split_fields("a,\"say \"\"hi\"\"\"", ','), ["a", "say \"hi\""]);
        assert_eq!(split_fields("'a';'b'", ';'), ["a", "b"]);
        assert_eq!(split_fields("o'brien,x", ','), ["o'brien", "x"]);
        assert_eq!(split_fields("a", ','), ["a"]);
    }

    #[test]
    fn test_parse_line_endings_and_defaults() {
        let entries = parse("cat,Meows\r\ndog\rrain-coat,Keeps you, dry\n\n");
        assert_eq!(
            pairs(&entries),
            [
                ("CAT", "Meows"),
                ("DOG", "Clue for DOG"),
                ("RAIN-COAT", "Keeps you, dry"),
            ]
        );
    }

    #[test]
    fn test_parse_skips_invalid_and_duplicates() {
        let entries = parse("cat;one\nr2d2;robot\nCAT;two\n;orphan clue\nemu;bird");
        assert_eq!(pairs(&entries), [("CAT", "one"), ("EMU", "bird")]);
    }

    #[test]
    fn test_parse_tab_separated() {
        let entries = parse("APPLE\tFruit, red\nPEAR\tFruit\tgreen");
        assert_eq!(
            pairs(&entries),
            [("APPLE", "Fruit, red"), ("PEAR", "Fruit, green")]
        );
    }

    #[test]
    fn test_analyze() {
        let analysis = analyze("cat,Meows\n\nr2d2,Robot\ndog,Barks\nemu,Bird\n");
        assert_eq!(analysis.separator, Separator::Comma);
        assert_eq!(analysis.line_count, 4);
        assert_eq!(analysis.valid_lines, 3);
        assert_eq!(analysis.sample_lines, ["cat,Meows", "r2d2,Robot", "dog,Barks"]);

        let empty = analyze(" \n");
        assert_eq!(empty.line_count, 0);
        assert!(empty.sample_lines.is_empty());
    }
}
