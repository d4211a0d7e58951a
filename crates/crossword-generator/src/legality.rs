//! Placement legality.
//!
//! A placement is legal when the word fits, agrees with every letter it
//! covers, does not run into a neighbouring word at either end, and does not
//! lie alongside another word except where it crosses one.

use crossword_core::{Cell, Grid, Placement};

/// Returns `true` if `word` may be written at `placement`.
///
/// Rules, checked in order:
///
/// 1. the whole span lies inside the grid;
/// 2. the cells just before the first letter and just after the last letter
///    are empty or off-grid;
/// 3. every covered cell is empty or already holds the matching letter
///    (the first mismatch rejects immediately);
/// 4. every covered cell that is still empty has empty cells on both sides
///    across the word's axis; a cell that already holds the letter is a
///    crossing and must instead have a letter on at least one of those sides,
///    i.e. belong to a word running the other way;
/// 5. no two consecutive covered cells are both already filled, and at least
///    one covered cell is still empty, so the word never overlaps a word
///    running the same way;
/// 6. when `require_intersection` is set, at least one covered cell already
///    holds its letter.
///
/// The check is a pure function of its arguments.
///
/// # Examples
///
/// ```
/// use crossword_core::{Grid, Orientation, Placement, Position};
/// use crossword_generator::legality::can_place;
///
/// let grid: Grid = "
///     .....
///     .CAT.
///     .....
///     .....
///     .....
/// "
/// .parse()?;
///
/// let crossing = Placement::new(Position::new(1, 3), Orientation::Down);
/// assert!(can_place(&grid, "TOE", crossing, true));
///
/// let alongside = Placement::new(Position::new(2, 1), Orientation::Across);
/// assert!(!can_place(&grid, "DOG", alongside, false));
/// # Ok::<(), crossword_core::GridParseError>(())
/// ```
#[must_use]
pub fn can_place(grid: &Grid, word: &str, placement: Placement, require_intersection: bool) -> bool {
    let len = word.chars().count();
    if !grid.fits(placement, len) {
        return false;
    }
    if placement.before().is_some_and(|pos| !grid.is_vacant(pos))
        || !grid.is_vacant(placement.after(len))
    {
        return false;
    }

    let mut intersections = 0;
    let mut previous_filled = false;
    for (pos, letter) in placement.positions(len).zip(word.chars()) {
        match grid[pos] {
            Cell::Letter(existing) if existing == letter => {
                if previous_filled || placement.sides(pos).all(|side| grid.is_vacant(side)) {
                    return false;
                }
                intersections += 1;
                previous_filled = true;
            }
            Cell::Letter(_) => return false,
            Cell::Empty => {
                if placement.sides(pos).any(|side| !grid.is_vacant(side)) {
                    return false;
                }
                previous_filled = false;
            }
        }
    }

    intersections < len && (!require_intersection || intersections > 0)
}

/// Returns the number of covered cells that already hold the word's letter.
#[must_use]
pub fn count_intersections(grid: &Grid, word: &str, placement: Placement) -> usize {
    placement
        .positions(word.chars().count())
        .zip(word.chars())
        .filter(|&(pos, letter)| grid.try_get(pos) == Some(Cell::Letter(letter)))
        .count()
}
