//! Integration tests for Layer 1: Lexicon
//!
//! Tests reading lexicon text and files into entries and morpheme tables.
