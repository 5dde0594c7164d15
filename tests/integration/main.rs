//! Cross-layer integration tests for mgagr
//!
//! Tests that verify correct interaction between multiple crates.

mod serialization;
