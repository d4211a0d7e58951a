//! Generator configuration.

/// Weights used by the word-ordering and placement heuristics.
///
/// The defaults were tuned by hand; they are knobs, not contracts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    /// Points per letter drawn from [`COMMON_LETTERS`](crate::scoring::COMMON_LETTERS).
    pub common_letter: f64,
    /// Points per other letter.
    pub other_letter: f64,
    /// Points per letter of word length.
    pub length: f64,
    /// Multiplier for the unique-letter ratio.
    pub letter_diversity: f64,
    /// Points per cell shared with the word a candidate was derived from.
    pub direct_intersection: f64,
    /// Points per cell shared with any placed word.
    pub covered_intersection: f64,
    /// Bonus for crossing the originating word at a right angle.
    pub perpendicular_crossing: f64,
    /// Points per distinct placed word sharing a cell with the candidate.
    pub touched_word: f64,
    /// Points per cell of distance between the candidate and the nearest grid edge.
    pub edge_distance: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            common_letter: 2.0,
            other_letter: 1.0,
            length: 0.5,
            letter_diversity: 3.0,
            direct_intersection: 10.0,
            covered_intersection: 5.0,
            perpendicular_crossing: 15.0,
            touched_word: 8.0,
            edge_distance: 0.5,
        }
    }
}

/// Options for [`CrosswordGenerator`](crate::CrosswordGenerator).
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorOptions {
    /// Heuristic weights.
    pub weights: ScoringWeights,
    /// Whether to run the repositioning pass after greedy placement.
    pub optimize: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            optimize: true,
        }
    }
}
