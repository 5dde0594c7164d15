//! The global feature inventory of a grammar.
//!
//! Built once from every entry before unpacking and shared read-only
//! afterwards. Backed by `im` ordered collections, so clones are O(1) and
//! iteration order is deterministic.

use std::fmt;
use std::sync::Arc;

use im::{OrdMap, OrdSet};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::entry::Entry;
use crate::slot::Slot;

/// Maps every feature name to the set of values it takes anywhere in the
/// grammar.
#[derive(Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Inventory(OrdMap<Arc<str>, OrdSet<Arc<str>>>);

impl Inventory {
    /// Creates an empty inventory.
    #[must_use]
    pub fn new() -> Self {
        Self(OrdMap::new())
    }

    /// Collects every valued feature carried by any slot of `entries`.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a Entry>) -> Self {
        let mut map: OrdMap<Arc<str>, OrdSet<Arc<str>>> = OrdMap::new();
        for bundle in entries
            .into_iter()
            .flat_map(Entry::iter)
            .filter_map(Slot::bundle)
        {
            for feature in bundle {
                if let Some(value) = feature.value_arc() {
                    map.entry(Arc::clone(feature.name_arc()))
                        .or_insert_with(OrdSet::new)
                        .insert(Arc::clone(value));
                }
            }
        }
        Self(map)
    }

    /// Returns a new inventory with `value` recorded under `name`.
    #[must_use]
    pub fn with_value(&self, name: impl Into<Arc<str>>, value: impl Into<Arc<str>>) -> Self {
        let name = name.into();
        let values = self.0.get(&name).cloned().unwrap_or_default().update(value.into());
        Self(self.0.update(name, values))
    }

    /// Returns the number of feature names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no feature is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `name` is a known feature name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// The known values of `name`, in sorted order.
    #[must_use]
    pub fn values(&self, name: &str) -> Option<&OrdSet<Arc<str>>> {
        self.0.get(name)
    }

    /// The known feature names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &Arc<str>> {
        self.0.keys()
    }

    /// Iterates over `(name, values)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&Arc<str>, &OrdSet<Arc<str>>)> {
        self.0.iter()
    }
}

impl fmt::Debug for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl fmt::Display for Inventory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (name, values)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            let values: Vec<&str> = values.iter().map(|v| &**v).collect();
            write!(f, "{name}:{{{}}}", values.join(","))?;
        }
        Ok(())
    }
}
