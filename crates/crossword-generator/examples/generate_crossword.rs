//! Example demonstrating crossword layout generation.
//!
//! This example shows how to:
//! - Create a `CrosswordGenerator`
//! - Generate a layout from a built-in word list
//! - Display the grid, placed words, theme reveal and seed
//! - Sample many seeds and keep the best-connected layout
//!
//! # Usage
//!
//! ```sh
//! cargo run --example generate_crossword
//! ```
//!
//! Reproduce a layout from a printed seed:
//!
//! ```sh
//! cargo run --example generate_crossword -- --seed c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1
//! ```
//!
//! Sample several seeds in parallel and keep the layout with the most
//! placed words, then the most crossings:
//!
//! ```sh
//! cargo run --example generate_crossword -- --max-tries 1000
//! ```
//!
//! Request a theme word:
//!
//! ```sh
//! cargo run --example generate_crossword -- --theme PUZZLE
//! ```

use std::process;

use clap::Parser;
use crossword_core::{GridSize, ThemeWord, WordEntry};
use crossword_generator::{CrosswordGenerator, GeneratedCrossword, LayoutSeed};
use rayon::prelude::*;

const WORDS: [(&str, &str); 10] = [
    ("CROSSWORD", "Game where you fill in words based on clues"),
    ("PUZZLE", "Brain teaser or problem to solve"),
    ("GENERATOR", "Tool that creates something automatically"),
    ("COMPILER", "Turns source code into machine code"),
    ("TERMINAL", "Text window for typing commands"),
    ("PROGRAM", "Set of instructions for a computer"),
    ("ALGORITHM", "Step-by-step procedure for calculations"),
    ("E-MAIL", "Electronic mail (with hyphen)"),
    ("O'BRIEN", "Common Irish surname"),
    ("RAIN-COAT", "Waterproof jacket for rainy weather"),
];

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Number of grid rows.
    #[arg(long, default_value_t = 15)]
    rows: usize,

    /// Number of grid columns.
    #[arg(long, default_value_t = 15)]
    cols: usize,

    /// Theme word whose letters are marked on the grid.
    #[arg(long, value_name = "WORD")]
    theme: Option<String>,

    /// Seed to reproduce (64 hex digits).
    #[arg(long, value_name = "HEX", conflicts_with = "max_tries")]
    seed: Option<LayoutSeed>,

    /// Seeds to sample when searching for the best layout.
    #[arg(long, value_name = "COUNT")]
    max_tries: Option<usize>,
}

fn main() {
    let args = Args::parse();

    let size = match GridSize::new(args.rows, args.cols) {
        Ok(size) => size,
        Err(err) => {
            eprintln!("{err}");
            process::exit(2);
        }
    };
    let words = WORDS
        .into_iter()
        .map(|(word, clue)| WordEntry::new(word, clue))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();
    let theme = args.theme.as_deref().map(ThemeWord::new);
    let generator = CrosswordGenerator::default();

    let crossword = match (args.seed, args.max_tries) {
        (Some(seed), _) => generator
            .generate_with_seed(&words, size, theme.as_ref(), seed)
            .unwrap(),
        (None, None) => generator.generate(&words, size, theme.as_ref()).unwrap(),
        (None, Some(0)) => {
            eprintln!("--max-tries must be at least 1.");
            process::exit(1);
        }
        (None, Some(max_tries)) => (0..max_tries)
            .into_par_iter()
            .map(|_| generator.generate(&words, size, theme.as_ref()).unwrap())
            .max_by_key(|crossword| (crossword.stats.placed, crossword.stats.intersections))
            .unwrap(),
    };

    print_crossword(&crossword);
}

fn print_crossword(crossword: &GeneratedCrossword) {
    println!("Seed:");
    println!("  {}", crossword.seed);
    println!();

    println!("Grid:");
    for line in crossword.grid.to_string().lines() {
        println!("  {line}");
    }
    println!();

    println!("Words:");
    for word in &crossword.placed_words {
        println!(
            "  {:>2}. {} ({} at {}, {} crossing(s)): {}",
            word.number,
            word.text,
            word.orientation(),
            word.origin(),
            word.intersections,
            word.clue
        );
    }
    if !crossword.unplaced_words.is_empty() {
        println!();
        println!("Unplaced:");
        for entry in &crossword.unplaced_words {
            println!("  {}", entry.text());
        }
    }

    if let Some(solution) = &crossword.solution_word {
        println!();
        println!("Theme:");
        println!("  {} -> {}", solution.text, solution.reveal('_'));
    }

    println!();
    println!("Stats:");
    println!("  placed: {}/{}", crossword.stats.placed, crossword.stats.total);
    println!("  crossings: {}", crossword.stats.intersections);
    println!("  efficiency: {:.2}", crossword.stats.efficiency);
}
