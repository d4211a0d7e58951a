//! Layout invariant checks.
//!
//! The generator only produces layouts that pass these checks. They exist so
//! that tests, benchmarks and front ends can verify a layout without
//! re-deriving placement logic.

use std::collections::HashSet;

use crate::{Grid, PlacedWord, Position, SolutionWord};

/// A violated layout invariant.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ConsistencyError {
    /// A placed word runs off the grid.
    #[display("word {number} runs outside the grid")]
    OutOfBounds {
        /// Clue number of the word.
        number: usize,
    },
    /// A cell does not hold the letter its word expects.
    #[display("word {number} expects {expected:?} at {position}, found {found:?}")]
    LetterMismatch {
        /// Clue number of the word.
        number: usize,
        /// Cell position.
        position: Position,
        /// Letter the word expects.
        expected: char,
        /// Letter present in the grid, if any.
        found: Option<char>,
    },
    /// A letter in the grid belongs to no placed word.
    #[display("letter at {position} belongs to no word")]
    StrayLetter {
        /// Cell position.
        position: Position,
    },
    /// A cell holds a letter directly before or after a word.
    #[display("word {number} runs into a letter at {position}")]
    UnterminatedWord {
        /// Clue number of the word.
        number: usize,
        /// The occupied cell next to the word's end.
        position: Position,
    },
    /// Two parallel words touch outside a shared crossing word.
    #[display("parallel words {first} and {second} touch at {position}")]
    ParallelContact {
        /// Clue number of the first word.
        first: usize,
        /// Clue number of the second word.
        second: usize,
        /// Cell of the first word that touches the second.
        position: Position,
    },
    /// Clue numbers are not unique and ascending.
    #[display("clue number {number} is out of order")]
    NumberOutOfOrder {
        /// The offending number.
        number: usize,
    },
    /// A theme letter is not hosted where its assignment says.
    #[display("theme letter {solution_position} is not hosted by its source cell")]
    ThemeLetterMismatch {
        /// 1-based theme position.
        solution_position: usize,
    },
    /// Two theme letters share a cell.
    #[display("theme letters share the cell at {position}")]
    ThemeCellReused {
        /// The shared cell.
        position: Position,
    },
    /// Theme positions are not the contiguous range `1..=N`.
    #[display("theme positions are not numbered 1..={len}")]
    ThemePositionsNotContiguous {
        /// Number of theme letters.
        len: usize,
    },
}

/// Checks that `grid` and `placed_words` describe a legal crossword.
///
/// The following must hold:
///
/// - every word lies inside the grid and every covered cell holds the word's letter,
/// - every letter in the grid belongs to some word,
/// - the cells just before and after each word are empty or off-grid,
/// - two parallel words never touch, except at consecutive cells of a single
///   perpendicular word that crosses both,
/// - clue numbers are strictly ascending in list order.
///
/// # Errors
///
/// Returns the first [`ConsistencyError`] found.
///
/// # Examples
///
/// ```
/// use crossword_core::{
///     Grid, Orientation, PlacedWord, Placement, Position, check_layout,
/// };
///
/// let grid: Grid = "
///     .....
///     .CAT.
///     ...I.
///     ...G.
///     ...E.
///     ...R.
/// "
/// .parse()?;
/// let words = [
///     PlacedWord {
///         text: "CAT".into(),
///         clue: String::new(),
///         placement: Placement::new(Position::new(1, 1), Orientation::Across),
///         intersections: 0,
///         number: 1,
///     },
///     PlacedWord {
///         text: "TIGER".into(),
///         clue: String::new(),
///         placement: Placement::new(Position::new(1, 3), Orientation::Down),
///         intersections: 1,
///         number: 2,
///     },
/// ];
/// assert!(check_layout(&grid, &words).is_ok());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn check_layout(grid: &Grid, placed_words: &[PlacedWord]) -> Result<(), ConsistencyError> {
    check_numbers(placed_words)?;
    for word in placed_words {
        check_word_cells(grid, word)?;
    }
    check_stray_letters(grid, placed_words)?;
    check_parallel_contact(placed_words)
}

fn check_numbers(placed_words: &[PlacedWord]) -> Result<(), ConsistencyError> {
    let mut previous = 0;
    for word in placed_words {
        if word.number <= previous {
            return Err(ConsistencyError::NumberOutOfOrder {
                number: word.number,
            });
        }
        previous = word.number;
    }
    Ok(())
}

fn check_word_cells(grid: &Grid, word: &PlacedWord) -> Result<(), ConsistencyError> {
    let number = word.number;
    if !grid.fits(word.placement, word.len()) {
        return Err(ConsistencyError::OutOfBounds { number });
    }
    for (position, expected) in word.cells() {
        let found = grid[position].as_letter();
        if found != Some(expected) {
            return Err(ConsistencyError::LetterMismatch {
                number,
                position,
                expected,
                found,
            });
        }
    }
    let ends = [
        word.placement.before(),
        Some(word.placement.after(word.len())),
    ];
    if let Some(position) = ends
        .into_iter()
        .flatten()
        .find(|&pos| !grid.is_vacant(pos))
    {
        return Err(ConsistencyError::UnterminatedWord { number, position });
    }
    Ok(())
}

fn check_stray_letters(grid: &Grid, placed_words: &[PlacedWord]) -> Result<(), ConsistencyError> {
    let covered: HashSet<Position> = placed_words
        .iter()
        .flat_map(|word| word.cells().map(|(pos, _)| pos))
        .collect();
    match grid
        .positions()
        .find(|&pos| !grid.is_empty(pos) && !covered.contains(&pos))
    {
        Some(position) => Err(ConsistencyError::StrayLetter { position }),
        None => Ok(()),
    }
}

fn check_parallel_contact(placed_words: &[PlacedWord]) -> Result<(), ConsistencyError> {
    for (i, first) in placed_words.iter().enumerate() {
        for second in &placed_words[i + 1..] {
            if first.orientation() != second.orientation() {
                continue;
            }
            for (a, _) in first.cells() {
                for (b, _) in second.cells() {
                    let touching = a == b || a.is_orthogonally_adjacent(b);
                    if touching && !crossed_together(placed_words, first, a, b) {
                        return Err(ConsistencyError::ParallelContact {
                            first: first.number,
                            second: second.number,
                            position: a,
                        });
                    }
                }
            }
        }
    }
    Ok(())
}

/// Returns `true` if a single word perpendicular to `parallel` covers both `a` and `b`.
fn crossed_together(placed_words: &[PlacedWord], parallel: &PlacedWord, a: Position, b: Position) -> bool {
    a != b
        && placed_words.iter().any(|word| {
            word.orientation() != parallel.orientation() && word.covers(a) && word.covers(b)
        })
}

/// Checks that a theme word's assignments agree with the layout.
///
/// Each hosted letter must sit in its source word at the recorded offset and
/// position and match the grid letter; no two letters may share a cell; and
/// the solution positions must be exactly `1..=N` in order.
///
/// # Errors
///
/// Returns the first [`ConsistencyError`] found.
pub fn check_solution_word(
    grid: &Grid,
    placed_words: &[PlacedWord],
    solution: &SolutionWord,
) -> Result<(), ConsistencyError> {
    let len = solution.assignments.len();
    if solution
        .assignments
        .iter()
        .enumerate()
        .any(|(i, assignment)| assignment.solution_position != i + 1)
    {
        return Err(ConsistencyError::ThemePositionsNotContiguous { len });
    }

    let mut used = HashSet::new();
    for assignment in &solution.assignments {
        let Some(source) = assignment.source else {
            continue;
        };
        let hosted = placed_words.get(source.word_index).is_some_and(|word| {
            word.offset_of(source.position) == Some(source.letter_index)
                && word.text.chars().nth(source.letter_index) == Some(assignment.letter)
        }) && grid.try_get(source.position).and_then(|cell| cell.as_letter())
            == Some(assignment.letter);
        if !hosted {
            return Err(ConsistencyError::ThemeLetterMismatch {
                solution_position: assignment.solution_position,
            });
        }
        if !used.insert(source.position) {
            return Err(ConsistencyError::ThemeCellReused {
                position: source.position,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{LetterAssignment, LetterSource, Orientation, Placement};

    fn placed(text: &str, row: usize, col: usize, orientation: Orientation, number: usize) -> PlacedWord {
        PlacedWord {
            text: text.to_owned(),
            clue: String::new(),
            placement: Placement::new(Position::new(row, col), orientation),
            intersections: 0,
            number,
        }
    }

    fn grid(s: &str) -> Grid {
        s.parse().expect("valid grid")
    }

    #[test]
    fn test_valid_crossing() {
        let grid = grid(
            "
            .....
            .CAT.
            ...I.
            ...G.
            ...E.
            ...R.
            ",
        );
        let words = [
            placed("CAT", 1, 1, Orientation::Across, 1),
            placed("TIGER", 1, 3, Orientation::Down, 2),
        ];
        assert_eq!(check_layout(&grid, &words), Ok(()));
    }

    #[test]
    fn test_letter_mismatch_and_out_of_bounds() {
        let grid = grid(".....\n.CAB.\n.....\n.....\n.....");
        let words = [placed("CAT", 1, 1, Orientation::Across, 1)];
        assert_eq!(
            check_layout(&grid, &words),
            Err(ConsistencyError::LetterMismatch {
                number: 1,
                position: Position::new(1, 3),
                expected: 'T',
                found: Some('B'),
            })
        );

        let words = [placed("CATS", 1, 2, Orientation::Across, 1)];
        assert_eq!(
            check_layout(&grid, &words),
            Err(ConsistencyError::OutOfBounds { number: 1 })
        );
    }

    #[test]
    fn test_stray_letter() {
        let grid = grid(".....\n.CAT.\n.....\n.....\nZ....");
        let words = [placed("CAT", 1, 1, Orientation::Across, 1)];
        assert_eq!(
            check_layout(&grid, &words),
            Err(ConsistencyError::StrayLetter {
                position: Position::new(4, 0)
            })
        );
    }

    #[test]
    fn test_unterminated_word() {
        let grid = grid(".....\nCATS.\n.....\n.....\n.....");
        let words = [
            placed("CAT", 1, 0, Orientation::Across, 1),
            placed("S", 1, 3, Orientation::Down, 2),
        ];
        assert_eq!(
            check_layout(&grid, &words),
            Err(ConsistencyError::UnterminatedWord {
                number: 1,
                position: Position::new(1, 3)
            })
        );
    }

    #[test]
    fn test_parallel_contact() {
        let grid = grid(".....\n.CAT.\n.DOG.\n.....\n.....");
        let words = [
            placed("CAT", 1, 1, Orientation::Across, 1),
            placed("DOG", 2, 1, Orientation::Across, 2),
        ];
        assert!(matches!(
            check_layout(&grid, &words),
            Err(ConsistencyError::ParallelContact {
                first: 1,
                second: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_parallel_words_touching_through_shared_crossing_are_legal() {
        let grid = grid(
            "
            ...B.
            CARE.
            ...ND
            ...D.
            .....
            ",
        );
        let words = [
            placed("CARE", 1, 0, Orientation::Across, 1),
            placed("BEND", 0, 3, Orientation::Down, 2),
            placed("ND", 2, 3, Orientation::Across, 3),
        ];
        assert_eq!(check_layout(&grid, &words), Ok(()));
    }

    #[test]
    fn test_numbers_must_ascend() {
        let grid = grid(".....\n.CAT.\n.....\n.DOG.\n.....");
        let words = [
            placed("CAT", 1, 1, Orientation::Across, 2),
            placed("DOG", 3, 1, Orientation::Across, 2),
        ];
        assert_eq!(
            check_layout(&grid, &words),
            Err(ConsistencyError::NumberOutOfOrder { number: 2 })
        );
    }

    #[test]
    fn test_solution_word_checks() {
        let grid = grid(".....\n.CAT.\n.....\n.....\n.....");
        let words = [placed("CAT", 1, 1, Orientation::Across, 1)];
        let source = |letter_index: usize| LetterSource {
            word_index: 0,
            letter_index,
            position: Position::new(1, 1 + letter_index),
        };

        let mut solution = SolutionWord {
            text: "TAX".to_owned(),
            description: None,
            assignments: vec![
                LetterAssignment {
                    letter: 'T',
                    solution_position: 1,
                    source: Some(source(2)),
                },
                LetterAssignment {
                    letter: 'A',
                    solution_position: 2,
                    source: Some(source(1)),
                },
                LetterAssignment {
                    letter: 'X',
                    solution_position: 3,
                    source: None,
                },
            ],
        };
        assert_eq!(check_solution_word(&grid, &words, &solution), Ok(()));

        solution.assignments[1].source = Some(source(2));
        assert_eq!(
            check_solution_word(&grid, &words, &solution),
            Err(ConsistencyError::ThemeLetterMismatch {
                solution_position: 2
            })
        );

        solution.assignments[1].source = Some(source(1));
        solution.assignments[2].solution_position = 4;
        assert_eq!(
            check_solution_word(&grid, &words, &solution),
            Err(ConsistencyError::ThemePositionsNotContiguous { len: 3 })
        );
    }

    #[test]
    fn test_solution_cells_are_unique() {
        let grid = grid(".....\n.AA..\n.....\n.....\n.....");
        let words = [placed("AA", 1, 1, Orientation::Across, 1)];
        let hosted = LetterSource {
            word_index: 0,
            letter_index: 0,
            position: Position::new(1, 1),
        };
        let solution = SolutionWord {
            text: "AA".to_owned(),
            description: None,
            assignments: vec![
                LetterAssignment {
                    letter: 'A',
                    solution_position: 1,
                    source: Some(hosted),
                },
                LetterAssignment {
                    letter: 'A',
                    solution_position: 2,
                    source: Some(hosted),
                },
            ],
        };
        assert_eq!(
            check_solution_word(&grid, &words, &solution),
            Err(ConsistencyError::ThemeCellReused {
                position: Position::new(1, 1)
            })
        );
    }
}
