//! CLI driver, reporting, and serialization for mgagr.
//!
//! This crate provides:
//! - [`Session`] - Loads a lexicon and unpacks it under one configuration
//! - [`report`] - The `key :: entry` listing of accepted variants
//! - [`serialize`] - `MessagePack` snapshots of the accepted lexicon

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod report;
pub mod serialize;
mod session;

pub use serialize::{AcceptedLexicon, AcceptedRecord};
pub use session::Session;
