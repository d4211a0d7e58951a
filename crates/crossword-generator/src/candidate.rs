//! Crossing candidates.

use crossword_core::{Grid, Orientation, PlacedWord, Placement};

use crate::{
    ScoringWeights,
    legality::{can_place, count_intersections},
    scoring::placement_score,
};

/// Alternative origins tried along the new word's own axis, after the exact crossing.
const SHIFTS: [isize; 3] = [0, -1, 1];

/// A legal, scored placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Candidate {
    pub(crate) placement: Placement,
    pub(crate) intersections: usize,
    pub(crate) score: f64,
}

/// Derives the placement of `word` that crosses `existing` with `word[offset]`
/// on top of `existing[existing_offset]`.
fn crossing_placement(existing: &PlacedWord, offset: usize, existing_offset: usize) -> Option<Placement> {
    let offset = isize::try_from(offset).ok()?;
    let existing_offset = isize::try_from(existing_offset).ok()?;
    let (orientation, d_row, d_col) = match existing.orientation() {
        Orientation::Across => (Orientation::Down, -offset, existing_offset),
        Orientation::Down => (Orientation::Across, existing_offset, -offset),
    };
    let origin = existing.origin().offset(d_row, d_col)?;
    Some(Placement::new(origin, orientation))
}

/// Enumerates every placement of `word` derived from crossing a placed word.
///
/// Order: placed words in list order, then letters of `word`, then matching
/// letters of the placed word, then the exact crossing followed by its
/// one-cell shifts. Placements are not yet checked for legality.
fn crossing_placements<'a>(
    word: &'a str,
    placed_words: &'a [PlacedWord],
) -> impl Iterator<Item = (Placement, &'a PlacedWord)> + 'a {
    placed_words.iter().flat_map(move |existing| {
        word.chars().enumerate().flat_map(move |(offset, letter)| {
            existing
                .text
                .chars()
                .enumerate()
                .filter(move |&(_, other)| other == letter)
                .filter_map(move |(existing_offset, _)| {
                    crossing_placement(existing, offset, existing_offset)
                })
                .flat_map(move |base| SHIFTS.into_iter().filter_map(move |delta| base.shifted(delta)))
                .map(move |placement| (placement, existing))
        })
    })
}

/// Finds the highest-scoring legal crossing placement of `word`.
///
/// Only placements sharing at least `min_intersections` (and at least one)
/// letters with the grid are considered. Ties keep the first candidate in
/// enumeration order.
pub(crate) fn best_crossing(
    grid: &Grid,
    word: &str,
    placed_words: &[PlacedWord],
    weights: &ScoringWeights,
    min_intersections: usize,
) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for (placement, existing) in crossing_placements(word, placed_words) {
        if !can_place(grid, word, placement, true) {
            continue;
        }
        let intersections = count_intersections(grid, word, placement);
        if intersections < min_intersections {
            continue;
        }
        let score = placement_score(grid, word, placement, existing, placed_words, weights);
        log::trace!("candidate {word} at {} {}: score {score}", placement.origin, placement.orientation);
        if best.is_none_or(|current| score > current.score) {
            best = Some(Candidate {
                placement,
                intersections,
                score,
            });
        }
    }
    best
}
