//! Consensus pass: deriving emitted values from received ones.
//!
//! Emitted values are never chosen independently. A first fold over the
//! slots records, per feature name, the value received last and the index
//! of the slot that received it. A second fold rebuilds every slot's
//! outgoing side from its lexical features plus the consensus values,
//! except those received at that very slot.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use mgagr_foundation::{Entry, Feature, FeatureBundle, Slot};

/// Per feature name, the winning received feature and its slot index.
pub type Consensus = BTreeMap<Arc<str>, (Feature, usize)>;

/// Collects the received values of `entry`; a later slot overrides an
/// earlier one.
#[must_use]
pub fn collect_consensus(entry: &Entry) -> Consensus {
    entry
        .iter()
        .enumerate()
        .filter_map(|(i, slot)| slot.incoming().map(|incoming| (i, incoming)))
        .fold(Consensus::new(), |mut consensus, (i, incoming)| {
            for feature in incoming {
                consensus.insert(Arc::clone(feature.name_arc()), (feature, i));
            }
            consensus
        })
}

/// Rebuilds the outgoing side of the slot at `index`.
fn emit(slot: &Slot, index: usize, consensus: &Consensus) -> Slot {
    let Some(bundle) = slot.bundle() else {
        return slot.clone();
    };

    let lexical: BTreeSet<&str> = bundle
        .iter()
        .filter(|f| f.is_outgoing() && f.is_lexical())
        .map(Feature::name)
        .collect();

    // Derived outgoing values from any earlier pass are recomputed.
    let kept = bundle
        .iter()
        .filter(|f| !(f.is_outgoing() && !f.is_lexical()))
        .cloned();

    // Valve: a value is never sent back along the index it came from.
    let derived = consensus
        .iter()
        .filter(|(name, (_, from))| *from != index && !lexical.contains(&name[..]))
        .map(|(_, (feature, _))| {
            feature
                .clone()
                .with_incoming(Some(false))
                .with_lexical(false)
        });

    slot.replace_bundle(Some(FeatureBundle::new(kept.chain(derived))))
}

/// Finalizes a candidate whose incoming sides are fixed.
///
/// Slots without a bundle stay as they are. Lexical outgoing values are
/// kept verbatim and never overridden.
#[must_use]
pub fn unpack_outgoing(entry: &Entry) -> Entry {
    let consensus = collect_consensus(entry);
    entry.with_slots(
        entry
            .iter()
            .enumerate()
            .map(|(j, slot)| emit(slot, j, &consensus)),
    )
}
