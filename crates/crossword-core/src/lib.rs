//! Core data structures for crossword layouts.
//!
//! This crate provides the types shared by the layout generator, the word
//! intake and the front ends. It contains no placement logic of its own; it
//! only describes grids, words and how they relate.
//!
//! # Overview
//!
//! 1. **Coordinates** - Where things are on the board
//!    - [`position`]: Row/column coordinate of a single cell
//!    - [`orientation`]: Across or Down placement axis, and [`Placement`]
//!
//! 2. **Board** - The letter lattice
//!    - [`cell`]: A single cell, either empty or holding one letter
//!    - [`grid`]: A fixed `rows × cols` matrix of cells and its validated [`GridSize`]
//!
//! 3. **Words** - What gets placed
//!    - [`word`]: Input [`WordEntry`] records and generator output [`PlacedWord`]s
//!    - [`solution`]: The optional theme word and its letter assignments
//!
//! 4. **Verification** - Layout invariants
//!    - [`consistency`]: Checks that a grid and its placed words agree
//!
//! # Examples
//!
//! ```
//! use crossword_core::{Grid, GridSize, Orientation, Placement, Position};
//!
//! let mut grid = Grid::new(GridSize::new(5, 7)?);
//! let placement = Placement::new(Position::new(2, 1), Orientation::Across);
//! grid.place_word("TIGER", placement);
//!
//! assert_eq!(grid[Position::new(2, 3)].as_letter(), Some('G'));
//! assert!(grid.is_empty(Position::new(0, 0)));
//! # Ok::<(), crossword_core::GridSizeError>(())
//! ```

pub mod cell;
pub mod consistency;
pub mod grid;
pub mod orientation;
pub mod position;
pub mod solution;
pub mod word;

pub use self::{
    cell::Cell,
    consistency::{ConsistencyError, check_layout, check_solution_word},
    grid::{Grid, GridParseError, GridSize, GridSizeError},
    orientation::{Orientation, Placement},
    position::Position,
    solution::{LetterAssignment, LetterSource, SolutionWord, ThemeWord},
    word::{PlacedWord, WordEntry, WordError, validate_word},
};
