//! Heuristic scores.
//!
//! Two scores drive the generator: a per-word ordering score computed once
//! before placement, and a per-candidate placement score used to choose among
//! legal crossings.

use std::collections::HashSet;

use crossword_core::{Grid, PlacedWord, Placement, WordEntry};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;

use crate::ScoringWeights;

/// Letters that appear often in English words and therefore cross easily.
pub const COMMON_LETTERS: [char; 10] = ['E', 'A', 'R', 'I', 'O', 'T', 'N', 'S', 'L', 'C'];

#[expect(clippy::cast_precision_loss)]
pub(crate) fn to_f64(n: usize) -> f64 {
    n as f64
}

/// Scores how many crossing opportunities a word is likely to offer.
///
/// Common letters, length and letter diversity all raise the score.
///
/// # Examples
///
/// ```
/// use crossword_generator::{ScoringWeights, scoring::word_order_score};
///
/// let weights = ScoringWeights::default();
/// // T, I, E, R are common (4 × 2), G is not (1), plus 0.5 × 5 and 3 × 5/5.
/// assert_eq!(word_order_score("TIGER", &weights), 14.5);
/// ```
#[must_use]
pub fn word_order_score(word: &str, weights: &ScoringWeights) -> f64 {
    let len = word.chars().count();
    if len == 0 {
        return 0.0;
    }
    let letters: f64 = word
        .chars()
        .map(|ch| {
            if COMMON_LETTERS.contains(&ch.to_ascii_uppercase()) {
                weights.common_letter
            } else {
                weights.other_letter
            }
        })
        .sum();
    let unique = word.chars().collect::<HashSet<_>>().len();
    letters + weights.length * to_f64(len) + weights.letter_diversity * to_f64(unique) / to_f64(len)
}

/// Returns the words in descending ordering-score order.
///
/// Words with equal scores end up in an order decided by `rng`.
pub(crate) fn order_words(words: &[WordEntry], weights: &ScoringWeights, rng: &mut Pcg64) -> Vec<WordEntry> {
    let mut scored: Vec<(f64, &WordEntry)> = words
        .iter()
        .map(|entry| (word_order_score(entry.text(), weights), entry))
        .collect();
    scored.shuffle(rng);
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored.into_iter().map(|(_, entry)| entry.clone()).collect()
}

/// Scores a legal placement of `word` derived from crossing `origin_word`.
///
/// `origin_word` is the placed word the candidate was generated from; it
/// decides which crossings count as direct and whether the candidate forms a
/// right-angle crossing.
pub(crate) fn placement_score(
    grid: &Grid,
    word: &str,
    placement: Placement,
    origin_word: &PlacedWord,
    placed_words: &[PlacedWord],
    weights: &ScoringWeights,
) -> f64 {
    let len = word.chars().count();
    let filled: Vec<_> = placement
        .positions(len)
        .filter(|&pos| !grid.is_empty(pos))
        .collect();

    let direct = filled.iter().filter(|&&pos| origin_word.covers(pos)).count();
    let perpendicular = direct > 0 && placement.orientation != origin_word.orientation();
    let touched = placed_words
        .iter()
        .filter(|other| filled.iter().any(|&pos| other.covers(pos)))
        .count();

    let start = placement.origin;
    let end = placement.position_at(len - 1);
    let edge_distance = start
        .row()
        .min(start.col())
        .min(grid.rows() - 1 - end.row())
        .min(grid.cols() - 1 - end.col());

    let mut score = weights.direct_intersection * to_f64(direct)
        + weights.covered_intersection * to_f64(filled.len())
        + weights.touched_word * to_f64(touched)
        + weights.edge_distance * to_f64(edge_distance);
    if perpendicular {
        score += weights.perpendicular_crossing;
    }
    score
}
