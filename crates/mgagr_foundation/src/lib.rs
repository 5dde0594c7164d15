//! Core value model for agreement-annotated lexical entries.
//!
//! This crate provides:
//! - [`Feature`] - A single morphological agreement atom
//! - [`FeatureBundle`] - A canonically sorted collection of features
//! - [`Polarity`] - The syntactic feature type of a slot
//! - [`Slot`] - A typed syntactic position, optionally carrying a bundle
//! - [`Entry`] - An ordered sequence of slots under a semantic key
//! - [`Inventory`] - Every value each feature name takes in a grammar
//! - [`Morpheme`] and [`MorphemeTable`] - Registered surface realizations
//! - [`Error`] - Error types shared by every layer

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entry;
pub mod error;
pub mod feature;
pub mod inventory;
pub mod morpheme;
pub mod polarity;
pub mod slot;

pub use entry::Entry;
pub use error::{EnumerationLimit, Error, ErrorContext, ErrorKind};
pub use feature::{Feature, FeatureBundle};
pub use inventory::Inventory;
pub use morpheme::{Morpheme, MorphemeTable};
pub use polarity::Polarity;
pub use slot::Slot;

/// Result type alias using the mgagr [`Error`] type.
pub type Result<T> = std::result::Result<T, Error>;
