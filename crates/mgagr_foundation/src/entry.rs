//! Lexical entries.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::feature::{Feature, FeatureBundle};
use crate::slot::Slot;

/// A lexical entry: a semantic key and its ordered slots.
///
/// Slot order is the dependency chain along which agreement values are
/// received and re-emitted. It never changes once the entry is built;
/// transformations return new entries.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Entry {
    key: Arc<str>,
    slots: Vec<Slot>,
}

impl Entry {
    /// Creates an entry.
    #[must_use]
    pub fn new(key: impl Into<Arc<str>>, slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            key: key.into(),
            slots: slots.into_iter().collect(),
        }
    }

    /// Returns a new entry with the same key and different slots.
    #[must_use]
    pub fn with_slots(&self, slots: impl IntoIterator<Item = Slot>) -> Self {
        Self {
            key: Arc::clone(&self.key),
            slots: slots.into_iter().collect(),
        }
    }

    /// The semantic key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The slots in order.
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Returns the slot at `index`.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&Slot> {
        self.slots.get(index)
    }

    /// Returns the number of slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the entry has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Returns an iterator over the slots.
    pub fn iter(&self) -> std::slice::Iter<'_, Slot> {
        self.slots.iter()
    }

    /// The surface feature set realized by this entry.
    ///
    /// Slots are scanned last to first; for each feature name the first
    /// value met wins. Direction and lexical tags are erased.
    #[must_use]
    pub fn surface(&self) -> FeatureBundle {
        let mut seen: BTreeMap<&Arc<str>, Option<&Arc<str>>> = BTreeMap::new();
        for bundle in self.slots.iter().rev().filter_map(Slot::bundle) {
            for feature in bundle {
                seen.entry(feature.name_arc())
                    .or_insert_with(|| feature.value_arc());
            }
        }
        seen.into_iter()
            .map(|(name, value)| match value {
                Some(value) => Feature::new(Arc::clone(name), Arc::clone(value)),
                None => Feature::placeholder(Arc::clone(name)),
            })
            .collect()
    }

    /// Folds agreement into every slot name.
    #[must_use]
    pub fn vanilla(&self) -> Self {
        self.with_slots(self.slots.iter().map(Slot::vanilla))
    }

    /// Erases agreement values from every slot.
    #[must_use]
    pub fn stripped(&self) -> Self {
        self.with_slots(self.slots.iter().map(Slot::stripped))
    }
}

impl<'a> IntoIterator for &'a Entry {
    type Item = &'a Slot;
    type IntoIter = std::slice::Iter<'a, Slot>;

    fn into_iter(self) -> Self::IntoIter {
        self.slots.iter()
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.slots.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{slot}")?;
        }
        Ok(())
    }
}
