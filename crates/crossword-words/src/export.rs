use crossword_core::WordEntry;

use crate::Separator;

/// Error returned when exporting a word list fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ExportError {
    /// There is nothing to export.
    #[display("no words to export")]
    NoWords,
}

/// Writes `entries` as `WORD<sep>CLUE` lines.
///
/// A clue containing the separator or a double quote is wrapped in double
/// quotes, with embedded quotes doubled, so [`parse`](crate::parse) reads it
/// back unchanged.
///
/// # Errors
///
/// Returns [`ExportError::NoWords`] if `entries` is empty.
///
/// # Examples
///
/// ```
/// use crossword_core::WordEntry;
/// use crossword_words::{Separator, export};
///
/// let entries = [
///     WordEntry::new("cat", "Meows")?,
///     WordEntry::new("dog", "Barks, loudly")?,
/// ];
/// assert_eq!(
///     export(&entries, Separator::Comma)?,
///     "CAT,Meows\nDOG,\"Barks, loudly\""
/// );
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn export(entries: &[WordEntry], separator: Separator) -> Result<String, ExportError> {
    if entries.is_empty() {
        return Err(ExportError::NoWords);
    }
    let separator = separator.as_char();
    let lines: Vec<String> = entries
        .iter()
        .map(|entry| {
            let clue = entry.clue();
            if clue.contains(separator) || clue.contains('"') {
                format!("{}{separator}\"{}\"", entry.text(), clue.replace('"', "\"\""))
            } else {
                format!("{}{separator}{clue}", entry.text())
            }
        })
        .collect();
    Ok(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::parse;

    #[test]
    fn test_export_quotes_when_needed() {
        let entries = [
            WordEntry::new("o'brien", "Irish surname").unwrap(),
            WordEntry::new("quote", "He said \"hi\"").unwrap(),
            WordEntry::new("list", "a;b").unwrap(),
        ];
        assert_eq!(
            export(&entries, Separator::Semicolon).unwrap(),
            "O'BRIEN;Irish surname\nQUOTE;\"He said \"\"hi\"\"\"\nLIST;\"a;b\""
        );
        assert_eq!(
            export(&entries[2..], Separator::Tab).unwrap(),
            "LIST\ta;b"
        );
    }

    #[test]
    fn test_export_empty() {
        assert_eq!(export(&[], Separator::Comma), Err(ExportError::NoWords));
    }

    proptest! {
        #[test]
        fn exported_lists_parse_back(
            words in prop::collection::btree_set("[A-Z]{1,8}", 1..6),
            clue in "[a-z][a-z ;\"]{0,15}[a-z]",
        ) {
            let entries: Vec<_> = words
                .iter()
                .map(|word| WordEntry::new(word, &clue).unwrap())
                .collect();
            let text = export(&entries, Separator::Semicolon).unwrap();
            prop_assert_eq!(parse(&text), entries);
        }
    }
}
