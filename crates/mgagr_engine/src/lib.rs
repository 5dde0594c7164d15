//! Agreement unpacking and acceptance checks.
//!
//! This crate provides:
//! - [`unpack_entry`] - Enumerate every fully specified variant of an entry
//! - [`unpack_outgoing`] - Re-derive emitted values from received ones
//! - [`is_consistent`] - Reject variants with unresolved demands
//! - [`is_pronounceable`] - Match a variant against the morpheme table
//! - [`Pipeline`] - Batch unpacking and filtering of a whole lexicon
//!
//! # Cost
//!
//! Unpacking is exponential in the number of inventory names a slot does
//! not declare: each such name with `v` known values contributes a factor
//! of `2v + 1` (absent, or each value received, or each value emitted).
//! [`estimate_variants`] predicts the count before enumerating, and
//! [`UnpackConfig::with_max_variants`] turns an oversized entry into an
//! error instead of truncating it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod check;
pub mod config;
pub mod consensus;
pub mod pipeline;
pub mod product;
pub mod unpack;

pub use check::{
    DemandFailure, UnresolvedDemand, find_unresolved, is_consistent, is_good, is_pronounceable,
    is_pronounceable_exact, is_pronounceable_with, realizes_any,
};
pub use config::{PronounceabilityMode, UnpackConfig};
pub use consensus::{Consensus, collect_consensus, unpack_outgoing};
pub use pipeline::{AcceptedEntry, Pipeline, UnpackReport, UnpackStats};
pub use product::Product;
pub use unpack::{estimate_variants, unpack_entry, unpack_incoming, unpack_slot, variants};
