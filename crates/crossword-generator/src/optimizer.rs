//! Post-placement repositioning.

use crossword_core::{Grid, PlacedWord, check_layout};

use crate::{ScoringWeights, candidate::best_crossing};

/// Whether `word` has fewer than `min(2, len / 2)` crossings, with `len / 2`
/// taken as a real number.
fn needs_more_crossings(word: &PlacedWord) -> bool {
    word.intersections < 2 && word.intersections * 2 < word.len()
}

/// Moves weakly crossed words to spots where they cross more words.
///
/// Each word below its crossing target is lifted off a scratch copy of the
/// grid and the best crossing placement that beats its current crossing count
/// is searched for. The move is committed only if the resulting layout is
/// still consistent; clue numbers never change. Runs a single pass.
pub(crate) fn optimize(grid: &mut Grid, placed_words: &mut [PlacedWord], weights: &ScoringWeights) {
    for index in 0..placed_words.len() {
        let word = &placed_words[index];
        if !needs_more_crossings(word) {
            continue;
        }

        let others: Vec<PlacedWord> = placed_words
            .iter()
            .enumerate()
            .filter(|&(i, _)| i != index)
            .map(|(_, other)| other.clone())
            .collect();
        let mut scratch = Grid::new(grid.size());
        for other in &others {
            scratch.place_word(&other.text, other.placement);
        }

        let Some(candidate) = best_crossing(&scratch, &word.text, &others, weights, word.intersections + 1)
        else {
            continue;
        };
        if candidate.placement == word.placement {
            // later words crossed it where it stands
            placed_words[index].intersections = candidate.intersections;
            continue;
        }

        let mut moved = word.clone();
        moved.placement = candidate.placement;
        moved.intersections = candidate.intersections;
        scratch.place_word(&moved.text, moved.placement);

        let mut trial = placed_words.to_vec();
        trial[index] = moved.clone();
        if let Err(err) = check_layout(&scratch, &trial) {
            log::trace!("keeping {} in place: {err}", moved.text);
            continue;
        }

        log::debug!(
            "moved {}. {} from {} {} to {} {} ({} -> {} crossings)",
            moved.number,
            moved.text,
            word.placement.origin,
            word.placement.orientation,
            moved.placement.origin,
            moved.placement.orientation,
            word.intersections,
            moved.intersections
        );
        *grid = scratch;
        placed_words[index] = moved;
    }
}
