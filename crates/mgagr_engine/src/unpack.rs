//! Combinatorial unpacking of partially specified entries.
//!
//! A slot that carries a bundle keeps the incoming features it declares.
//! Every inventory name it does *not* declare on its incoming side becomes
//! an option axis: absent, or one of the known values received, or one of
//! the known values emitted. The cross-product of all axes gives the
//! slot's candidates, and the cross-product of all slots' candidates gives
//! the entry's raw variants.

use std::collections::BTreeSet;

use mgagr_foundation::{Entry, Feature, FeatureBundle, Inventory, Slot};

use crate::consensus::unpack_outgoing;
use crate::product::Product;

/// One option axis: `None` leaves the name off the slot.
type Axis = Vec<Option<Feature>>;

/// Option axes for the undeclared names of a slot's bundle.
fn slot_axes(bundle: &FeatureBundle, inventory: &Inventory) -> Vec<Axis> {
    let declared: BTreeSet<&str> = bundle
        .iter()
        .filter(|f| f.is_incoming())
        .map(Feature::name)
        .collect();

    inventory
        .iter()
        .filter(|(name, _)| !declared.contains(&name[..]))
        .map(|(name, values)| {
            let received = values.iter().map(|v| Some(Feature::incoming(name.clone(), v.clone())));
            let emitted = values.iter().map(|v| Some(Feature::outgoing(name.clone(), v.clone())));
            std::iter::once(None).chain(received).chain(emitted).collect()
        })
        .collect()
}

/// Enumerates every candidate of one slot.
///
/// A slot without a bundle is its own only candidate. Otherwise each
/// candidate carries the declared incoming features, the original
/// emit-side features unchanged, and one choice per undeclared name.
#[must_use]
pub fn unpack_slot(slot: &Slot, inventory: &Inventory) -> Vec<Slot> {
    let Some(bundle) = slot.bundle() else {
        return vec![slot.clone()];
    };

    Product::new(slot_axes(bundle, inventory))
        .map(|choice| {
            let features = bundle.iter().cloned().chain(choice.into_iter().flatten());
            slot.replace_bundle(Some(FeatureBundle::new(features)))
        })
        .collect()
}

/// Lazily enumerates the raw variants of `entry`, before consensus.
fn raw_variants<'a>(entry: &'a Entry, inventory: &Inventory) -> impl Iterator<Item = Entry> + 'a {
    let per_slot: Vec<Vec<Slot>> = entry.iter().map(|s| unpack_slot(s, inventory)).collect();
    Product::new(per_slot).map(move |slots| entry.with_slots(slots))
}

/// Every raw combination of slot candidates, with incoming sides fixed
/// and outgoing sides not yet derived.
#[must_use]
pub fn unpack_incoming(entry: &Entry, inventory: &Inventory) -> Vec<Entry> {
    raw_variants(entry, inventory).collect()
}

/// Lazily enumerates the finalized variants of `entry`.
///
/// Each raw combination is passed through [`unpack_outgoing`]. Distinct raw
/// combinations may finalize to the same variant.
pub fn variants<'a>(entry: &'a Entry, inventory: &Inventory) -> impl Iterator<Item = Entry> + 'a {
    raw_variants(entry, inventory).map(|raw| unpack_outgoing(&raw))
}

/// Every finalized variant of `entry`, in enumeration order.
#[must_use]
pub fn unpack_entry(entry: &Entry, inventory: &Inventory) -> Vec<Entry> {
    variants(entry, inventory).collect()
}

/// Predicts how many raw variants [`unpack_entry`] will enumerate.
///
/// Returns `None` if the count overflows `usize`.
#[must_use]
pub fn estimate_variants(entry: &Entry, inventory: &Inventory) -> Option<usize> {
    entry.iter().try_fold(1usize, |acc, slot| {
        let per_slot = match slot.bundle() {
            None => Some(1),
            Some(bundle) => Product::new(slot_axes(bundle, inventory)).count_combinations(),
        }?;
        acc.checked_mul(per_slot)
    })
}
