//! Serializable view of a generated crossword.
//!
//! Grid rows are compact strings (`.` for an empty cell) and coordinates are
//! zero-based, matching the text output.

use crossword_core::{LetterAssignment, PlacedWord, SolutionWord};
use crossword_generator::{GeneratedCrossword, GenerationStats};
use serde::{Deserialize, Serialize};

use crate::render::MISSING_LETTER;

/// DTO for a complete generation result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct CrosswordDto {
    pub(crate) seed: String,
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) grid: Vec<String>,
    pub(crate) words: Vec<PlacedWordDto>,
    pub(crate) unplaced: Vec<String>,
    pub(crate) solution: Option<SolutionDto>,
    pub(crate) stats: StatsDto,
}

/// DTO for one placed word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct PlacedWordDto {
    pub(crate) number: usize,
    pub(crate) text: String,
    pub(crate) clue: String,
    pub(crate) row: usize,
    pub(crate) col: usize,
    pub(crate) orientation: String,
    pub(crate) intersections: usize,
}

/// DTO for the theme word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SolutionDto {
    pub(crate) text: String,
    pub(crate) description: Option<String>,
    pub(crate) reveal: String,
    pub(crate) letters: Vec<LetterDto>,
}

/// DTO for one theme letter; `row`/`col` are absent when the letter has no host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct LetterDto {
    pub(crate) letter: char,
    pub(crate) position: usize,
    pub(crate) row: Option<usize>,
    pub(crate) col: Option<usize>,
}

/// DTO for generation statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub(crate) struct StatsDto {
    pub(crate) placed: usize,
    pub(crate) total: usize,
    pub(crate) intersections: usize,
    pub(crate) efficiency: f64,
}

impl From<&PlacedWord> for PlacedWordDto {
    fn from(word: &PlacedWord) -> Self {
        Self {
            number: word.number,
            text: word.text.clone(),
            clue: word.clue.clone(),
            row: word.origin().row(),
            col: word.origin().col(),
            orientation: word.orientation().to_string(),
            intersections: word.intersections,
        }
    }
}

impl From<&LetterAssignment> for LetterDto {
    fn from(assignment: &LetterAssignment) -> Self {
        let position = assignment.source.map(|source| source.position);
        Self {
            letter: assignment.letter,
            position: assignment.solution_position,
            row: position.map(|pos| pos.row()),
            col: position.map(|pos| pos.col()),
        }
    }
}

impl From<&SolutionWord> for SolutionDto {
    fn from(solution: &SolutionWord) -> Self {
        Self {
            text: solution.text.clone(),
            description: solution.description.clone(),
            reveal: solution.reveal(MISSING_LETTER),
            letters: solution.assignments.iter().map(LetterDto::from).collect(),
        }
    }
}

impl From<&GenerationStats> for StatsDto {
    fn from(stats: &GenerationStats) -> Self {
        Self {
            placed: stats.placed,
            total: stats.total,
            intersections: stats.intersections,
            efficiency: stats.efficiency,
        }
    }
}

impl From<&GeneratedCrossword> for CrosswordDto {
    fn from(crossword: &GeneratedCrossword) -> Self {
        Self {
            seed: crossword.seed.to_string(),
            rows: crossword.grid.rows(),
            cols: crossword.grid.cols(),
            grid: crossword.grid.to_string().lines().map(str::to_owned).collect(),
            words: crossword.placed_words.iter().map(PlacedWordDto::from).collect(),
            unplaced: crossword
                .unplaced_words
                .iter()
                .map(|entry| entry.text().to_owned())
                .collect(),
            solution: crossword.solution_word.as_ref().map(SolutionDto::from),
            stats: StatsDto::from(&crossword.stats),
        }
    }
}
