//! Greedy placement.

use crossword_core::{Grid, GridSize, Orientation, PlacedWord, Placement, Position, WordEntry};

use crate::{
    ScoringWeights,
    candidate::best_crossing,
    legality::{can_place, count_intersections},
};

/// Chebyshev radius of the neighbourhood used to measure crowding.
const DENSITY_RADIUS: isize = 2;

/// The result of the greedy pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Layout {
    pub(crate) grid: Grid,
    pub(crate) placed_words: Vec<PlacedWord>,
    pub(crate) unplaced_words: Vec<WordEntry>,
}

/// Places `words` one at a time, in the given order, without backtracking.
///
/// The first word that fits becomes the anchor. Every later word crosses an
/// existing word if it can, falls back to open space otherwise, and is left
/// out if neither works.
pub(crate) fn place_words(size: GridSize, words: &[WordEntry], weights: &ScoringWeights) -> Layout {
    let mut grid = Grid::new(size);
    let mut placed_words: Vec<PlacedWord> = Vec::with_capacity(words.len());
    let mut unplaced_words = Vec::new();

    for entry in words {
        let word = entry.text();
        let found = if placed_words.is_empty() {
            anchor_placement(&grid, word).map(|placement| (placement, 0))
        } else {
            best_crossing(&grid, word, &placed_words, weights, 1)
                .map(|candidate| (candidate.placement, candidate.intersections))
                .or_else(|| fallback_placement(&grid, word))
        };

        let Some((placement, intersections)) = found else {
            log::debug!("dropping {word}: no legal placement on a {}x{} grid", size.rows(), size.cols());
            unplaced_words.push(entry.clone());
            continue;
        };

        grid.place_word(word, placement);
        let number = placed_words.len() + 1;
        log::trace!(
            "placed {number}. {word} {} at {} with {intersections} crossing(s)",
            placement.orientation,
            placement.origin
        );
        placed_words.push(PlacedWord {
            text: word.to_owned(),
            clue: entry.clue().to_owned(),
            placement,
            intersections,
            number,
        });
    }

    Layout {
        grid,
        placed_words,
        unplaced_words,
    }
}

/// Centers the first word, down on tall or square grids and across on wide ones.
///
/// Returns `None` if the word is longer than the grid's longer side.
fn anchor_placement(grid: &Grid, word: &str) -> Option<Placement> {
    let len = word.chars().count();
    let (rows, cols) = (grid.rows(), grid.cols());
    let placement = if rows >= cols {
        Placement::new(Position::new(rows.checked_sub(len)? / 2, cols / 2), Orientation::Down)
    } else {
        Placement::new(Position::new(rows / 2, cols.checked_sub(len)? / 2), Orientation::Across)
    };
    can_place(grid, word, placement, false).then_some(placement)
}

/// Counts occupied cells around `pos`, excluding `pos` itself.
fn density(grid: &Grid, pos: Position) -> usize {
    let mut count = 0;
    for d_row in -DENSITY_RADIUS..=DENSITY_RADIUS {
        for d_col in -DENSITY_RADIUS..=DENSITY_RADIUS {
            if (d_row, d_col) == (0, 0) {
                continue;
            }
            if pos
                .offset(d_row, d_col)
                .and_then(|neighbor| grid.try_get(neighbor))
                .is_some_and(|cell| cell.is_letter())
            {
                count += 1;
            }
        }
    }
    count
}

/// Placements of a word of length `len` that start or end at `pos`.
fn placements_touching(pos: Position, len: usize) -> impl Iterator<Item = Placement> {
    let back = isize::try_from(len - 1).ok();
    Orientation::ALL.into_iter().flat_map(move |orientation| {
        let (d_row, d_col) = orientation.step();
        let ending_here = back
            .and_then(|back| pos.offset(-back * d_row, -back * d_col))
            .map(|origin| Placement::new(origin, orientation));
        [Some(Placement::new(pos, orientation)), ending_here]
            .into_iter()
            .flatten()
    })
}

/// Finds a placement that needs no crossing.
///
/// Empty cells near crowded regions are tried first, most crowded first, so
/// the layout stays compact. Failing that, the whole grid is scanned: across
/// placements row by row, then down placements column by column.
fn fallback_placement(grid: &Grid, word: &str) -> Option<(Placement, usize)> {
    let len = word.chars().count();

    let mut hotspots: Vec<(usize, Position)> = grid
        .positions()
        .filter(|&pos| grid.is_empty(pos))
        .map(|pos| (density(grid, pos), pos))
        .filter(|&(density, _)| density > 0)
        .collect();
    hotspots.sort_by(|a, b| b.0.cmp(&a.0));

    let near = hotspots
        .into_iter()
        .flat_map(|(_, pos)| placements_touching(pos, len));
    let across = grid
        .positions()
        .map(|pos| Placement::new(pos, Orientation::Across));
    let down = (0..grid.cols())
        .flat_map(|col| (0..grid.rows()).map(move |row| Position::new(row, col)))
        .map(|pos| Placement::new(pos, Orientation::Down));

    let placement = near
        .chain(across)
        .chain(down)
        .find(|&placement| can_place(grid, word, placement, false))?;
    log::trace!("{word} placed in open space at {}", placement.origin);
    Some((placement, count_intersections(grid, word, placement)))
}
