//! Summary figures for a generation run.

use crossword_core::PlacedWord;

use crate::scoring::to_f64;

/// Summary figures for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Number of words on the grid.
    pub placed: usize,
    /// Number of words offered to the generator.
    pub total: usize,
    /// Sum of the crossing counts of all placed words.
    pub intersections: usize,
    /// Crossings per placed word, rounded to two decimals; `0.0` if nothing was placed.
    pub efficiency: f64,
}

impl GenerationStats {
    /// Computes statistics for `placed_words` out of `total` offered words.
    ///
    /// # Examples
    ///
    /// ```
    /// use crossword_generator::GenerationStats;
    ///
    /// let stats = GenerationStats::new(4, &[]);
    /// assert_eq!(stats.placed, 0);
    /// assert_eq!(stats.efficiency, 0.0);
    /// ```
    #[must_use]
    pub fn new(total: usize, placed_words: &[PlacedWord]) -> Self {
        let placed = placed_words.len();
        let intersections = placed_words.iter().map(|word| word.intersections).sum();
        let efficiency = if placed == 0 {
            0.0
        } else {
            (to_f64(intersections) / to_f64(placed) * 100.0).round() / 100.0
        };
        Self {
            placed,
            total,
            intersections,
            efficiency,
        }
    }

    /// Returns the number of offered words that did not make it onto the grid.
    #[must_use]
    pub fn unplaced(&self) -> usize {
        self.total.saturating_sub(self.placed)
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::{Orientation, Placement, Position};

    use super::*;

    fn placed(intersections: usize) -> PlacedWord {
        PlacedWord {
            text: "A".to_owned(),
            clue: String::new(),
            placement: Placement::new(Position::new(0, 0), Orientation::Across),
            intersections,
            number: 1,
        }
    }

    #[test]
    fn test_efficiency_is_rounded() {
        let stats = GenerationStats::new(5, &[placed(0), placed(1), placed(1)]);
        assert_eq!(stats.placed, 3);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.intersections, 2);
        assert!((stats.efficiency - 0.67).abs() < 1e-9);
        assert_eq!(stats.unplaced(), 2);
    }
}
