//! mgagr - Agreement unpacking for minimalist grammar lexicons
//!
//! This crate re-exports all layers of the mgagr system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: mgagr_runtime    - CLI, reporting, serialization
//! Layer 2: mgagr_engine     - Unpacking, consensus, consistency, pronounceability
//! Layer 1: mgagr_lexicon    - .mg lexicon reader
//! Layer 0: mgagr_foundation - Features, bundles, slots, entries, morphemes, Error
//! ```

pub use mgagr_engine as engine;
pub use mgagr_foundation as foundation;
pub use mgagr_lexicon as lexicon;
pub use mgagr_runtime as runtime;
