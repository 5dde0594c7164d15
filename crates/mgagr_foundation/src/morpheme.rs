//! Morphemes and the morpheme table.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::feature::FeatureBundle;

/// A semantic key paired with the surface features it requires.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Morpheme {
    key: Arc<str>,
    features: FeatureBundle,
}

impl Morpheme {
    /// Creates a morpheme.
    ///
    /// Required features are stored without lexical or direction tags.
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>, features: FeatureBundle) -> Self {
        Self {
            key: key.into(),
            features: features.compatible(),
        }
    }

    /// The semantic key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The required surface features.
    #[must_use]
    pub const fn features(&self) -> &FeatureBundle {
        &self.features
    }
}

impl fmt::Display for Morpheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key, self.features)
    }
}

/// Registered realizations: each ordered morpheme sequence maps to a
/// surface string.
///
/// Registration order is preserved. Registering the same sequence twice
/// replaces its surface string in place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Rows", into = "Rows"))]
pub struct MorphemeTable {
    rows: Rows,
    index: HashMap<Vec<Morpheme>, usize>,
}

type Rows = Vec<(Vec<Morpheme>, Arc<str>)>;

impl From<Rows> for MorphemeTable {
    fn from(rows: Rows) -> Self {
        let mut table = Self::new();
        for (sequence, surface) in rows {
            table.register(sequence, surface);
        }
        table
    }
}

impl From<MorphemeTable> for Rows {
    fn from(table: MorphemeTable) -> Self {
        table.rows
    }
}

impl MorphemeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `surface` as the realization of `sequence`.
    pub fn register(&mut self, sequence: Vec<Morpheme>, surface: impl Into<Arc<str>>) {
        let surface = surface.into();
        if let Some(&row) = self.index.get(&sequence) {
            self.rows[row].1 = surface;
        } else {
            self.index.insert(sequence.clone(), self.rows.len());
            self.rows.push((sequence, surface));
        }
    }

    /// Returns a table with `surface` registered for `sequence`.
    #[must_use]
    pub fn with(mut self, sequence: Vec<Morpheme>, surface: impl Into<Arc<str>>) -> Self {
        self.register(sequence, surface);
        self
    }

    /// Looks up the surface string of a morpheme sequence.
    #[must_use]
    pub fn surface(&self, sequence: &[Morpheme]) -> Option<&str> {
        self.index
            .get(sequence)
            .map(|&row| self.rows[row].1.as_ref())
    }

    /// Returns the number of registered sequences.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over `(sequence, surface)` rows in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&[Morpheme], &str)> {
        self.rows
            .iter()
            .map(|(seq, surface)| (seq.as_slice(), surface.as_ref()))
    }

    /// The distinct registered morphemes, in order of first appearance.
    #[must_use]
    pub fn morphemes(&self) -> Vec<&Morpheme> {
        let mut seen = std::collections::HashSet::new();
        self.rows
            .iter()
            .flat_map(|(seq, _)| seq.iter())
            .filter(|m| seen.insert(*m))
            .collect()
    }

    /// The distinct registered morphemes for one semantic key.
    #[must_use]
    pub fn morphemes_for(&self, key: &str) -> Vec<&Morpheme> {
        self.morphemes()
            .into_iter()
            .filter(|m| m.key() == key)
            .collect()
    }
}
