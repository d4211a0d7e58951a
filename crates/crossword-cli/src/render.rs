//! Plain-text rendering.

use std::fmt::{self, Display};

use crossword_core::{Orientation, PlacedWord, Position};
use crossword_generator::GeneratedCrossword;

/// Placeholder for theme letters that found no host cell.
pub const MISSING_LETTER: char = '_';

/// Displays the grid, one row per line.
///
/// Empty cells print as `.`; cells hosting a theme letter are bracketed.
#[derive(Debug, Clone, Copy)]
pub struct GridView<'a>(pub &'a GeneratedCrossword);

impl Display for GridView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crossword = self.0;
        let grid = &crossword.grid;
        for row in 0..grid.rows() {
            let mut line = String::new();
            for col in 0..grid.cols() {
                let pos = Position::new(row, col);
                let letter = grid[pos].as_letter().unwrap_or('.');
                let themed = crossword
                    .solution_word
                    .as_ref()
                    .is_some_and(|solution| solution.assignment_at(pos).is_some());
                if themed {
                    line.extend(['[', letter, ']']);
                } else {
                    line.extend([' ', letter, ' ']);
                }
            }
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

/// Displays the full report: seed, grid, clues, theme, statistics and unplaced words.
#[derive(Debug, Clone, Copy)]
pub struct TextReport<'a>(pub &'a GeneratedCrossword);

impl TextReport<'_> {
    fn fmt_clues(
        f: &mut fmt::Formatter<'_>,
        title: &str,
        words: &[PlacedWord],
        orientation: Orientation,
    ) -> fmt::Result {
        let mut words: Vec<_> = words
            .iter()
            .filter(|word| word.orientation() == orientation)
            .collect();
        if words.is_empty() {
            return Ok(());
        }
        words.sort_by_key(|word| word.number);
        writeln!(f, "{title}:")?;
        for word in words {
            writeln!(
                f,
                "  {:>2}. {} ({}) [{}]",
                word.number,
                word.clue,
                word.len(),
                word.text
            )?;
        }
        writeln!(f)
    }
}

impl Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crossword = self.0;
        writeln!(f, "Seed: {}", crossword.seed)?;
        writeln!(f)?;
        writeln!(f, "{}", GridView(crossword))?;

        Self::fmt_clues(f, "Across", &crossword.placed_words, Orientation::Across)?;
        Self::fmt_clues(f, "Down", &crossword.placed_words, Orientation::Down)?;

        if let Some(solution) = &crossword.solution_word {
            write!(f, "Theme: {}", solution.reveal(MISSING_LETTER))?;
            if let Some(description) = &solution.description {
                write!(f, " ({description})")?;
            }
            writeln!(f)?;
            for assignment in &solution.assignments {
                let (position, letter) = (assignment.solution_position, assignment.letter);
                match assignment.source {
                    Some(source) => writeln!(f, "  {position}. {letter} at {}", source.position)?,
                    None => writeln!(f, "  {position}. {letter} not placed")?,
                }
            }
            writeln!(f)?;
        }

        let stats = &crossword.stats;
        writeln!(f, "Placed: {}/{} words", stats.placed, stats.total)?;
        writeln!(f, "Crossings: {}", stats.intersections)?;
        writeln!(f, "Efficiency: {:.2}", stats.efficiency)?;

        if !crossword.unplaced_words.is_empty() {
            let words: Vec<_> = crossword
                .unplaced_words
                .iter()
                .map(|entry| entry.text())
                .collect();
            writeln!(f, "Unplaced: {}", words.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{GridSize, ThemeWord, WordEntry};
    use crossword_generator::{CrosswordGenerator, LayoutSeed};

    use super::*;

    fn crossword(theme: Option<&str>) -> GeneratedCrossword {
        let words: Vec<_> = [
            ("TIGER", "Striped cat"),
            ("CAT", "Meows"),
            ("DOG", "Barks"),
            ("ABCDEFGHIJKL", "Too long"),
        ]
        .into_iter()
        .map(|(word, clue)| WordEntry::new(word, clue).unwrap())
        .collect();
        let theme = theme.map(|theme| ThemeWord::new(theme).with_description("Big cat"));
        CrosswordGenerator::default()
            .generate_with_seed(
                &words,
                GridSize::new(10, 10).unwrap(),
                theme.as_ref(),
                LayoutSeed::from_phrase("render"),
            )
            .unwrap()
    }

    #[test]
    fn test_grid_view_shape() {
        let crossword = crossword(None);
        let grid = GridView(&crossword).to_string();
        assert_eq!(grid.lines().count(), 10);
        assert!(!grid.contains('['));
        let letters = grid.chars().filter(char::is_ascii_uppercase).count();
        assert_eq!(letters, crossword.grid.filled_count());
    }

    #[test]
    fn test_grid_view_marks_theme_cells() {
        let crossword = crossword(Some("TIGER"));
        let solution = crossword.solution_word.as_ref().unwrap();
        let grid = GridView(&crossword).to_string();
        assert_eq!(grid.matches('[').count(), solution.assigned_count());
    }

    #[test]
    fn test_text_report_sections() {
        let crossword = crossword(Some("TIGERX"));
        let text = TextReport(&crossword).to_string();
        assert!(text.starts_with(&format!("Seed: {}\n", crossword.seed)));
        assert!(text.contains("Down:\n"));
        assert!(text.contains("Striped cat (5) [TIGER]"));
        assert!(text.contains("Theme: TIGER_ (Big cat)\n"));
        assert!(text.contains("6. X not placed"));
        assert!(text.contains("Placed: 3/4 words"));
        assert!(text.contains("Unplaced: ABCDEFGHIJKL\n"));
    }
}
