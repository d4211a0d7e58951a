//! Command-line front end for the crossword generator.
//!
//! The `crossword` binary reads a delimited word list, lays it out on a grid
//! and prints the result as text or JSON. This library holds everything but
//! the process setup so it can be tested without touching the file system.

use std::{fs, io::Write};

use crossword_core::{GridSize, ThemeWord, WordEntry, check_layout, check_solution_word};
use crossword_generator::{CrosswordGenerator, GeneratedCrossword, GeneratorOptions};
use crossword_words::WordList;

pub use self::{args::*, error::*, render::*};

mod args;
mod dto;
mod error;
mod render;

/// Builds the generator input from the contents of a word-list file.
///
/// # Errors
///
/// Returns [`CliError::EmptyInput`] if `content` has no non-blank lines and
/// [`CliError::NoValidWords`] if none of them holds a valid word.
pub fn load_words(content: &str) -> Result<Vec<WordEntry>, CliError> {
    let analysis = crossword_words::analyze(content);
    log::info!(
        "word list: {} lines, {} valid, {}-separated",
        analysis.line_count,
        analysis.valid_lines,
        analysis.separator
    );
    if analysis.line_count == 0 {
        return Err(CliError::EmptyInput);
    }

    let mut list = WordList::new();
    list.merge(crossword_words::parse(content));
    if list.is_empty() {
        return Err(CliError::NoValidWords);
    }
    Ok(list.into())
}

/// Runs the generator as configured by `args`.
///
/// # Errors
///
/// Returns [`CliError`] if the grid size is invalid, or if `args.check` is set
/// and the layout violates an invariant.
pub fn generate(args: &Args, words: &[WordEntry]) -> Result<GeneratedCrossword, CliError> {
    let size = GridSize::new(args.rows, args.cols)?;
    let theme = args.theme.as_deref().map(|theme| {
        let theme = ThemeWord::new(theme);
        match &args.theme_description {
            Some(description) => theme.with_description(description),
            None => theme,
        }
    });
    let generator = CrosswordGenerator::new(GeneratorOptions {
        optimize: !args.no_optimize,
        ..GeneratorOptions::default()
    });

    let crossword = match args.seed {
        Some(seed) => generator.generate_with_seed(words, size, theme.as_ref(), seed)?,
        None => generator.generate(words, size, theme.as_ref())?,
    };

    if args.check {
        check_layout(&crossword.grid, &crossword.placed_words)?;
        if let Some(solution) = &crossword.solution_word {
            check_solution_word(&crossword.grid, &crossword.placed_words, solution)?;
        }
        log::info!("layout check passed");
    }
    Ok(crossword)
}

/// Writes `crossword` to `out` in the requested format.
///
/// # Errors
///
/// Returns [`CliError`] if encoding or writing fails.
pub fn write_output(out: &mut impl Write, crossword: &GeneratedCrossword, format: Format) -> Result<(), CliError> {
    match format {
        Format::Text => write!(out, "{}", TextReport(crossword))?,
        Format::Json => {
            serde_json::to_writer_pretty(&mut *out, &dto::CrosswordDto::from(crossword))?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Reads the word list, generates a layout and prints it to standard output.
///
/// # Errors
///
/// Returns [`CliError`] on any failure along the way.
pub fn run(args: &Args) -> Result<(), CliError> {
    let content = fs::read_to_string(&args.input).map_err(|source| CliError::Read {
        path: args.input.clone(),
        source,
    })?;
    let words = load_words(&content)?;
    let crossword = generate(args, &words)?;
    if !crossword.unplaced_words.is_empty() {
        log::warn!(
            "{} of {} words could not be placed",
            crossword.unplaced_words.len(),
            words.len()
        );
    }
    write_output(&mut std::io::stdout().lock(), &crossword, args.format)
}

#[cfg(test)]
mod tests {
    use clap::Parser as _;

    use super::*;

    const SEED: &str = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["crossword", "words.csv", "--seed", SEED, "--check"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_load_words() {
        let words = load_words("cat,Meows\ndog\ncat,Again\n1x,bad\n").unwrap();
        let texts: Vec<_> = words.iter().map(WordEntry::text).collect();
        assert_eq!(texts, ["CAT", "DOG"]);
        assert_eq!(words[1].clue(), "Clue for DOG");

        assert!(matches!(load_words(" \n\n"), Err(CliError::EmptyInput)));
        assert!(matches!(load_words("1x,bad\n"), Err(CliError::NoValidWords)));
    }

    #[test]
    fn test_generate_is_reproducible() {
        let words = load_words("tiger,Striped\ncat,Meows\ndog,Barks\n").unwrap();
        let args = args(&["--theme", "cat", "--theme-description", "Pet"]);
        let first = generate(&args, &words).unwrap();
        let second = generate(&args, &words).unwrap();
        assert_eq!(first, second);
        assert_eq!(first.seed.to_string(), SEED);
        let solution = first.solution_word.as_ref().unwrap();
        assert_eq!(solution.description.as_deref(), Some("Pet"));
    }

    #[test]
    fn test_generate_rejects_bad_size() {
        let words = load_words("cat").unwrap();
        let args = args(&["--rows", "4"]);
        assert!(matches!(generate(&args, &words), Err(CliError::GridSize(_))));
    }

    #[test]
    fn test_write_output_formats() {
        let words = load_words("tiger\ncat\n").unwrap();
        let crossword = generate(&args(&[]), &words).unwrap();

        let mut text = Vec::new();
        write_output(&mut text, &crossword, Format::Text).unwrap();
        let text = String::from_utf8(text).unwrap();
        assert!(text.starts_with("Seed: "));

        let mut json = Vec::new();
        write_output(&mut json, &crossword, Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&json).unwrap();
        assert_eq!(value["stats"]["placed"], 2);
    }
}
