//! Integration tests for Layer 2: Engine
//!
//! Tests unpacking, the consensus pass, and the acceptance checks.

mod checks;
mod unpacking;
