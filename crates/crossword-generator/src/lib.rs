//! Crossword layout generation.
//!
//! [`CrosswordGenerator`] turns a list of words into a crossword grid:
//!
//! 1. words are ordered by how many crossings they are likely to offer
//!    ([`scoring`]);
//! 2. the first word is centered and every later word is placed greedily,
//!    crossing an existing word where possible and in open space otherwise
//!    ([`legality`] decides what is allowed);
//! 3. an optional repositioning pass moves weakly crossed words;
//! 4. if a theme word is requested, its letters are assigned to grid cells.
//!
//! Words that cannot be placed are reported, not treated as errors. Every
//! random tie-break is driven by a [`LayoutSeed`], so a run can be replayed.
//!
//! # Examples
//!
//! ```
//! use crossword_core::{GridSize, ThemeWord, WordEntry, check_layout};
//! use crossword_generator::{CrosswordGenerator, LayoutSeed};
//!
//! let words = ["TIGER", "CAT", "DOG"]
//!     .into_iter()
//!     .map(|word| WordEntry::new(word, ""))
//!     .collect::<Result<Vec<_>, _>>()?;
//! let generator = CrosswordGenerator::default();
//! let seed = LayoutSeed::from_phrase("zoo");
//!
//! let crossword = generator.generate_with_seed(&words, GridSize::new(10, 10)?, None, seed)?;
//! assert_eq!(crossword.placed_words.len(), 3);
//! assert!(check_layout(&crossword.grid, &crossword.placed_words).is_ok());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crossword_core::{Grid, GridSize, PlacedWord, SolutionWord, ThemeWord, WordEntry};

pub use self::{error::*, options::*, seed::*, stats::*};

mod assigner;
mod candidate;
mod error;
pub mod legality;
mod optimizer;
mod options;
mod placer;
pub mod scoring;
mod seed;
mod stats;

/// The outcome of one generation run.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedCrossword {
    /// Seed that reproduces this layout.
    pub seed: LayoutSeed,
    /// The filled grid.
    pub grid: Grid,
    /// Placed words, ordered by clue number.
    pub placed_words: Vec<PlacedWord>,
    /// Words that found no legal placement, in the order they were tried.
    pub unplaced_words: Vec<WordEntry>,
    /// Theme-letter assignments, if a theme word was requested.
    pub solution_word: Option<SolutionWord>,
    /// Summary figures.
    pub stats: GenerationStats,
}

/// Lays out words on a crossword grid.
///
/// The generator holds only configuration, so a single value can serve many
/// runs, including runs on different threads.
#[derive(Debug, Clone, Default)]
pub struct CrosswordGenerator {
    options: GeneratorOptions,
}

impl CrosswordGenerator {
    /// Creates a generator with the given options.
    #[must_use]
    pub fn new(options: GeneratorOptions) -> Self {
        Self { options }
    }

    /// Returns the generator's options.
    #[must_use]
    pub fn options(&self) -> &GeneratorOptions {
        &self.options
    }

    /// Generates a layout using a fresh random seed.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyWordList`] if `words` is empty.
    pub fn generate(
        &self,
        words: &[WordEntry],
        size: GridSize,
        theme: Option<&ThemeWord>,
    ) -> Result<GeneratedCrossword, GenerateError> {
        self.generate_with_seed(words, size, theme, LayoutSeed::random())
    }

    /// Generates a layout deterministically from `seed`.
    ///
    /// The same words, size, theme, options and seed always produce the same
    /// crossword.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyWordList`] if `words` is empty.
    pub fn generate_with_seed(
        &self,
        words: &[WordEntry],
        size: GridSize,
        theme: Option<&ThemeWord>,
        seed: LayoutSeed,
    ) -> Result<GeneratedCrossword, GenerateError> {
        if words.is_empty() {
            return Err(GenerateError::EmptyWordList);
        }
        log::debug!(
            "generating {}x{} crossword from {} words (seed {seed})",
            size.rows(),
            size.cols(),
            words.len()
        );

        let mut rng = seed.to_rng();
        let weights = &self.options.weights;
        let ordered = scoring::order_words(words, weights, &mut rng);
        let placer::Layout {
            mut grid,
            mut placed_words,
            unplaced_words,
        } = placer::place_words(size, &ordered, weights);
        if self.options.optimize {
            optimizer::optimize(&mut grid, &mut placed_words, weights);
        }
        let solution_word = theme.map(|theme| assigner::assign_theme(theme, &placed_words, &mut rng));
        let stats = GenerationStats::new(words.len(), &placed_words);
        log::debug!(
            "placed {}/{} words with {} crossings",
            stats.placed,
            stats.total,
            stats.intersections
        );

        Ok(GeneratedCrossword {
            seed,
            grid,
            placed_words,
            unplaced_words,
            solution_word,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{check_layout, check_solution_word};
    use proptest::prelude::*;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn entries(words: &[&str]) -> Vec<WordEntry> {
        words
            .iter()
            .map(|word| WordEntry::new(word, &format!("Clue for {word}")).expect("valid word"))
            .collect()
    }

    fn size(rows: usize, cols: usize) -> GridSize {
        GridSize::new(rows, cols).expect("valid size")
    }

    fn seed() -> LayoutSeed {
        SEED.parse().expect("valid seed")
    }

    fn assert_consistent(crossword: &GeneratedCrossword) {
        check_layout(&crossword.grid, &crossword.placed_words).expect("consistent layout");
        if let Some(solution) = &crossword.solution_word {
            check_solution_word(&crossword.grid, &crossword.placed_words, solution)
                .expect("consistent theme");
        }
    }

    #[test]
    fn test_empty_word_list() {
        let generator = CrosswordGenerator::default();
        assert_eq!(
            generator.generate(&[], size(10, 10), None),
            Err(GenerateError::EmptyWordList)
        );
    }

    #[test]
    fn test_cat_dog_tiger() {
        let generator = CrosswordGenerator::default();
        let words = entries(&["CAT", "DOG", "TIGER"]);
        let crossword = generator
            .generate_with_seed(&words, size(10, 10), None, seed())
            .expect("non-empty word list");

        assert_eq!(crossword.seed, seed());
        assert_eq!(crossword.placed_words.len(), 3);
        assert!(crossword.unplaced_words.is_empty());
        assert_eq!(crossword.placed_words[0].text, "TIGER");
        assert!(crossword.placed_words[1..].iter().any(|word| word.intersections >= 1));
        assert_eq!(crossword.placed_words[1].clue, "Clue for CAT");
        assert_eq!(crossword.stats.placed, 3);
        assert_eq!(crossword.stats.total, 3);
        assert!(crossword.solution_word.is_none());
        assert_consistent(&crossword);
    }

    #[test]
    fn test_same_seed_same_layout() {
        let generator = CrosswordGenerator::default();
        let words = entries(&["APPLE", "PEAR", "GRAPE", "LEMON", "MELON", "PLUM", "LIME"]);
        let theme = ThemeWord::new("FRUIT");
        let first = generator
            .generate_with_seed(&words, size(12, 12), Some(&theme), seed())
            .expect("non-empty word list");
        let second = generator
            .generate_with_seed(&words, size(12, 12), Some(&theme), seed())
            .expect("non-empty word list");
        assert_eq!(first, second);
        assert_consistent(&first);
    }

    #[test]
    fn test_overlong_word_is_reported() {
        let generator = CrosswordGenerator::default();
        let words = entries(&["SUPERCALIFRAGILISTIC", "CAT"]);
        let crossword = generator
            .generate_with_seed(&words, size(10, 10), None, seed())
            .expect("non-empty word list");

        assert_eq!(crossword.placed_words.len(), 1);
        assert_eq!(crossword.placed_words[0].text, "CAT");
        assert_eq!(crossword.placed_words[0].number, 1);
        assert_eq!(crossword.unplaced_words.len(), 1);
        assert_eq!(crossword.stats.unplaced(), 1);
        assert_consistent(&crossword);
    }

    #[test]
    fn test_theme_over_dog_frog() {
        let generator = CrosswordGenerator::default();
        let words = entries(&["DOG", "FROG"]);
        let theme = ThemeWord::new("GO");
        let crossword = generator
            .generate_with_seed(&words, size(8, 8), Some(&theme), seed())
            .expect("non-empty word list");

        let solution = crossword.solution_word.as_ref().expect("theme requested");
        assert!(solution.is_complete());
        let hosts: Vec<_> = solution
            .assignments
            .iter()
            .filter_map(|assignment| assignment.source.map(|source| source.word_index))
            .collect();
        assert_eq!(hosts.len(), 2);
        assert_ne!(hosts[0], hosts[1]);
        assert_consistent(&crossword);
    }

    #[test]
    fn test_optimizer_can_be_disabled() {
        let generator = CrosswordGenerator::new(GeneratorOptions {
            optimize: false,
            ..GeneratorOptions::default()
        });
        assert!(!generator.options().optimize);
        let words = entries(&["HOUSE", "MOUSE", "ZEBRA", "QUIZ", "JOLLY"]);
        let crossword = generator
            .generate_with_seed(&words, size(9, 9), None, seed())
            .expect("non-empty word list");
        assert_consistent(&crossword);
    }

    proptest! {
        #[test]
        fn generated_layouts_are_consistent(
            words in prop::collection::hash_set("[A-H]{2,7}", 1..14),
            theme in "[A-H]{0,6}",
            rows in 5_usize..=16,
            cols in 5_usize..=16,
            optimize in any::<bool>(),
            seed in any::<[u8; 32]>(),
        ) {
            let words: Vec<_> = words
                .iter()
                .map(|word| WordEntry::new(word, "").unwrap())
                .collect();
            let generator = CrosswordGenerator::new(GeneratorOptions {
                optimize,
                ..GeneratorOptions::default()
            });
            let theme = ThemeWord::new(&theme);
            let crossword = generator
                .generate_with_seed(&words, size(rows, cols), Some(&theme), LayoutSeed::from_bytes(seed))
                .unwrap();

            prop_assert_eq!(crossword.placed_words.len() + crossword.unplaced_words.len(), words.len());
            prop_assert!(check_layout(&crossword.grid, &crossword.placed_words).is_ok());
            let solution = crossword.solution_word.as_ref().unwrap();
            prop_assert!(check_solution_word(&crossword.grid, &crossword.placed_words, solution).is_ok());
            prop_assert_eq!(solution.assignments.len(), theme.text.len());
        }
    }
}
