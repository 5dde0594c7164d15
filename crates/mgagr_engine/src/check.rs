//! Acceptance checks: consistency and pronounceability.
//!
//! Both checks are plain predicates. A failing variant is dropped by the
//! pipeline without a reason; [`find_unresolved`] re-runs the consistency
//! walk when a caller needs to know why.

use std::collections::HashMap;
use std::sync::Arc;

use mgagr_foundation::{Entry, Feature, FeatureBundle, Morpheme, MorphemeTable};

use crate::config::PronounceabilityMode;

/// Why a demanded value is not resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DemandFailure {
    /// No later slot pins the feature name at all.
    Unsupplied,
    /// The nearest later slot pinning the name holds another value.
    Mismatch {
        /// The value that slot holds.
        supplied: Option<Arc<str>>,
    },
}

/// A value some slot depends on but that is not correctly supplied.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnresolvedDemand {
    /// Index of the demanding slot.
    pub slot: usize,
    /// The demanded feature.
    pub feature: Feature,
    /// How resolution failed.
    pub failure: DemandFailure,
}

/// Finds the first unresolved demand, scanning slots last to first.
///
/// A slot demands each feature that is neither lexical nor received. A
/// demand is resolved by the nearest later slot that pins the same name,
/// either lexically or by receiving it; a received value takes precedence
/// over a lexical one on the same slot.
#[must_use]
pub fn find_unresolved(entry: &Entry) -> Option<UnresolvedDemand> {
    let mut supplied: HashMap<&str, Option<&Arc<str>>> = HashMap::new();

    for (index, slot) in entry.iter().enumerate().rev() {
        let Some(bundle) = slot.bundle() else {
            continue;
        };

        for demand in bundle.iter().filter(|f| !f.is_lexical() && !f.is_incoming()) {
            let failure = match supplied.get(demand.name()) {
                None => DemandFailure::Unsupplied,
                Some(value) if value.map(|v| &**v) == demand.value() => continue,
                Some(value) => DemandFailure::Mismatch {
                    supplied: value.cloned(),
                },
            };
            return Some(UnresolvedDemand {
                slot: index,
                feature: demand.clone(),
                failure,
            });
        }

        let pinned = bundle
            .iter()
            .filter(|f| f.is_lexical() && !f.is_incoming())
            .chain(bundle.iter().filter(|f| f.is_incoming()));
        for feature in pinned {
            supplied.insert(feature.name(), feature.value_arc());
        }
    }
    None
}

/// True if every demanded value is supplied, correctly, by a later slot.
#[must_use]
pub fn is_consistent(entry: &Entry) -> bool {
    find_unresolved(entry).is_none()
}

impl PronounceabilityMode {
    /// True if `required` is realized by `surface` under this mode.
    #[must_use]
    pub fn accepts(self, required: &FeatureBundle, surface: &FeatureBundle) -> bool {
        match self {
            Self::Subset => required.is_subset_of(surface),
            Self::Exact => required.set_eq(surface),
        }
    }
}

/// True if some morpheme registered for `key` requires a subset of the
/// entry's surface features.
#[must_use]
pub fn is_pronounceable(key: &str, entry: &Entry, table: &MorphemeTable) -> bool {
    is_pronounceable_with(key, entry, table, PronounceabilityMode::Subset)
}

/// True if some morpheme registered for `key` requires exactly the
/// entry's surface features.
#[must_use]
pub fn is_pronounceable_exact(key: &str, entry: &Entry, table: &MorphemeTable) -> bool {
    is_pronounceable_with(key, entry, table, PronounceabilityMode::Exact)
}

/// Pronounceability under an explicit matching mode.
#[must_use]
pub fn is_pronounceable_with(
    key: &str,
    entry: &Entry,
    table: &MorphemeTable,
    mode: PronounceabilityMode,
) -> bool {
    let required = table.morphemes_for(key);
    realizes_any(entry, required.into_iter().map(Morpheme::features), mode)
}

/// True if the entry's surface satisfies any of the `required` feature
/// sets under `mode`. The entry's key is not consulted.
#[must_use]
pub fn realizes_any<'r>(
    entry: &Entry,
    required: impl IntoIterator<Item = &'r FeatureBundle>,
    mode: PronounceabilityMode,
) -> bool {
    let surface = entry.surface();
    required.into_iter().any(|r| mode.accepts(r, &surface))
}

/// The final acceptance gate: consistent and pronounceable.
#[must_use]
pub fn is_good(key: &str, entry: &Entry, table: &MorphemeTable) -> bool {
    is_consistent(entry) && is_pronounceable(key, entry, table)
}
