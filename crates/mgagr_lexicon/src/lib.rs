//! Reader for `.mg` lexicon files.
//!
//! A lexicon file lists a start category, lexical entries with their
//! agreement-annotated slots, and morpheme equations:
//!
//! ```text
//! c;                                 / start category
//! the :: =n d[case:nom];             / entry: key :: slots;
//! walk[] + T[tense:past] == walked;  / morphemes == surface;
//! ```
//!
//! # Modules
//!
//! - [`reader`] - Line-oriented parsing of lexicon text
//! - [`lexicon`] - The parsed [`Lexicon`] and derived views

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod reader;

pub use lexicon::Lexicon;
pub use reader::{LexiconReader, load_lexicon, parse_lexicon};
