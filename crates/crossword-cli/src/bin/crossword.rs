//! Crossword layout generator command-line tool.

use std::process;

use clap::Parser as _;
use crossword_cli::Args;

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = crossword_cli::run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
