//! Theme-letter assignment.

use std::{cmp::Reverse, collections::HashSet};

use crossword_core::{LetterAssignment, LetterSource, PlacedWord, Position, SolutionWord, ThemeWord};
use rand::seq::SliceRandom as _;
use rand_pcg::Pcg64;

/// Upper bound on theme letters hosted by a single word.
///
/// Spreads the letters so that roughly every other word hosts one.
fn letters_per_word(theme_len: usize, placed_count: usize) -> usize {
    if placed_count < 2 {
        theme_len
    } else {
        (2 * theme_len).div_ceil(placed_count)
    }
}

/// Picks hosting cells for the letters of `theme`.
///
/// Letters are processed in order. For each, the unclaimed matching cells are
/// ranked by how many theme letters their word already hosts, then by word
/// length (longer first), with `rng` breaking remaining ties. Words at the
/// per-word cap are skipped unless nothing else matches. A letter with no
/// matching unclaimed cell is left unassigned.
pub(crate) fn assign_theme(theme: &ThemeWord, placed_words: &[PlacedWord], rng: &mut Pcg64) -> SolutionWord {
    let letters: Vec<char> = theme.text.chars().collect();
    let cap = letters_per_word(letters.len(), placed_words.len());
    let mut usage = vec![0; placed_words.len()];
    let mut claimed = HashSet::new();

    let mut assignments = Vec::with_capacity(letters.len());
    for (i, letter) in letters.into_iter().enumerate() {
        let mut source = find_source(letter, placed_words, &usage, &claimed, Some(cap), rng);
        if source.is_none() {
            source = find_source(letter, placed_words, &usage, &claimed, None, rng);
        }
        match source {
            Some(source) => {
                usage[source.word_index] += 1;
                claimed.insert(source.position);
            }
            None => log::debug!("theme letter {letter} ({}) has no host", i + 1),
        }
        assignments.push(LetterAssignment {
            letter,
            solution_position: i + 1,
            source,
        });
    }

    SolutionWord {
        text: theme.text.clone(),
        description: theme.description.clone(),
        assignments,
    }
}

fn find_source(
    letter: char,
    placed_words: &[PlacedWord],
    usage: &[usize],
    claimed: &HashSet<Position>,
    cap: Option<usize>,
    rng: &mut Pcg64,
) -> Option<LetterSource> {
    let mut candidates: Vec<LetterSource> = placed_words
        .iter()
        .enumerate()
        .filter(|&(word_index, _)| cap.is_none_or(|cap| usage[word_index] < cap))
        .flat_map(|(word_index, word)| {
            word.cells()
                .enumerate()
                .filter(|&(_, (position, ch))| {
                    ch.eq_ignore_ascii_case(&letter) && !claimed.contains(&position)
                })
                .map(move |(letter_index, (position, _))| LetterSource {
                    word_index,
                    letter_index,
                    position,
                })
        })
        .collect();
    candidates.shuffle(rng);
    candidates.sort_by_key(|source| {
        (
            usage[source.word_index],
            Reverse(placed_words[source.word_index].len()),
        )
    });
    candidates.into_iter().next()
}
