use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use crossword_generator::LayoutSeed;

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Human-readable grid, clue lists and statistics.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Generate a crossword layout from a word list.
///
/// The word list holds one `WORD<sep>CLUE` entry per line; the separator
/// (comma, semicolon or tab) is detected automatically.
#[derive(Debug, Clone, Parser)]
#[command(name = "crossword", author, version, about)]
pub struct Args {
    /// Word list file.
    #[arg(value_name = "FILE")]
    pub input: PathBuf,

    /// Number of grid rows (5-30).
    #[arg(long, default_value_t = 15)]
    pub rows: usize,

    /// Number of grid columns (5-30).
    #[arg(long, default_value_t = 15)]
    pub cols: usize,

    /// Theme word whose letters are marked on the grid.
    #[arg(long, value_name = "WORD")]
    pub theme: Option<String>,

    /// Description shown with the theme word.
    #[arg(long, value_name = "TEXT", requires = "theme")]
    pub theme_description: Option<String>,

    /// Seed to reproduce a previous layout (64 hex digits).
    #[arg(long, value_name = "HEX")]
    pub seed: Option<LayoutSeed>,

    /// Skip the repositioning pass after greedy placement.
    #[arg(long)]
    pub no_optimize: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Verify the layout invariants before printing.
    #[arg(long)]
    pub check: bool,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["crossword", "words.csv"]).unwrap();
        assert_eq!(args.input, PathBuf::from("words.csv"));
        assert_eq!((args.rows, args.cols), (15, 15));
        assert_eq!(args.format, Format::Text);
        assert!(args.seed.is_none());
        assert!(!args.no_optimize);
        assert!(!args.check);
    }

    #[test]
    fn test_all_flags() {
        let seed = "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1";
        let args = Args::try_parse_from([
            "crossword",
            "words.txt",
            "--rows",
            "9",
            "--cols",
            "12",
            "--theme",
            "zoo",
            "--theme-description",
            "Where animals live",
            "--seed",
            seed,
            "--no-optimize",
            "--format",
            "json",
            "--check",
        ])
        .unwrap();
        assert_eq!((args.rows, args.cols), (9, 12));
        assert_eq!(args.theme.as_deref(), Some("zoo"));
        assert_eq!(args.seed.map(|seed| seed.to_string()).as_deref(), Some(seed));
        assert!(args.no_optimize);
        assert_eq!(args.format, Format::Json);
        assert!(args.check);
    }

    #[test]
    fn test_rejects_bad_seed_and_orphan_description() {
        assert!(Args::try_parse_from(["crossword", "w.csv", "--seed", "xyz"]).is_err());
        assert!(Args::try_parse_from(["crossword", "w.csv", "--theme-description", "d"]).is_err());
    }
}
