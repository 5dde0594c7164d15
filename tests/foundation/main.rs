//! Integration tests for Layer 0: Foundation
//!
//! Tests for the data model: features, bundles, slots, entries, the
//! feature inventory, morpheme tables, and errors.

mod bundles;
mod entries;
mod morphemes;
