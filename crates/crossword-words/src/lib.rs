//! Word-list intake for the crossword generator.
//!
//! - [`WordList`]: an editable list of unique, normalized words and clues
//! - [`parse`] and [`analyze`]: reading comma, semicolon or tab separated text
//! - [`export`]: writing a list back out in the same format
//!
//! # Examples
//!
//! ```
//! use crossword_words::{Separator, WordList, export, parse};
//!
//! let mut list = WordList::new();
//! list.merge(parse("CAT;Meows\nDOG;Barks\nCAT;Again"));
//! list.add("emu", "")?;
//! assert_eq!(list.len(), 3);
//!
//! let text = export(list.entries(), Separator::Comma)?;
//! assert_eq!(text, "CAT,Meows\nDOG,Barks\nEMU,Clue for EMU");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{export::*, import::*, word_list::*};

mod export;
mod import;
mod word_list;
