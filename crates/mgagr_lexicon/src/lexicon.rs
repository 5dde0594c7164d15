//! A parsed lexicon.

use std::collections::BTreeSet;

use mgagr_foundation::{Entry, Inventory, Morpheme, MorphemeTable};

/// Start category, entries, and morpheme table of one grammar.
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    start: String,
    entries: Vec<Entry>,
    table: MorphemeTable,
}

impl Lexicon {
    /// Creates a lexicon from its parts.
    #[must_use]
    pub fn new(start: impl Into<String>, entries: Vec<Entry>, table: MorphemeTable) -> Self {
        Self {
            start: start.into(),
            entries,
            table,
        }
    }

    /// The start category.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// The entries in file order.
    #[must_use]
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The morpheme table.
    #[must_use]
    pub fn table(&self) -> &MorphemeTable {
        &self.table
    }

    /// Every syntactic slot name used by any entry.
    #[must_use]
    pub fn slot_names(&self) -> BTreeSet<&str> {
        self.entries
            .iter()
            .flat_map(Entry::iter)
            .map(mgagr_foundation::Slot::name)
            .collect()
    }

    /// The global feature inventory over all entries.
    #[must_use]
    pub fn inventory(&self) -> Inventory {
        Inventory::from_entries(&self.entries)
    }

    /// The distinct registered morphemes.
    #[must_use]
    pub fn morphemes(&self) -> Vec<&Morpheme> {
        self.table.morphemes()
    }
}
