//! Integration tests for combinatorial unpacking

use std::collections::HashSet;

use mgagr_engine::{estimate_variants, is_consistent, unpack_entry, unpack_incoming, unpack_slot};
use mgagr_foundation::{Entry, Feature, FeatureBundle, Inventory, Polarity, Slot};

fn two_by_two() -> Inventory {
    Inventory::new()
        .with_value("num", "sg")
        .with_value("num", "pl")
        .with_value("case", "nom")
        .with_value("case", "acc")
}

fn agreeing(name: &str, features: Vec<Feature>) -> Slot {
    Slot::new(Polarity::Category, name).with_bundle(FeatureBundle::new(features))
}

// =============================================================================
// Cross-product Completeness
// =============================================================================

#[test]
fn two_names_two_values_give_25_options() {
    let candidates = unpack_slot(&agreeing("d", vec![]), &two_by_two());
    assert_eq!(candidates.len(), 25);

    // Every option is a different bundle.
    let distinct: HashSet<_> = candidates.iter().collect();
    assert_eq!(distinct.len(), 25);
}

#[test]
fn options_cover_absent_received_and_emitted() {
    let candidates = unpack_slot(&agreeing("d", vec![]), &two_by_two());
    let bundles: Vec<_> = candidates.iter().filter_map(Slot::bundle).collect();

    assert!(bundles.iter().any(|b| b.is_empty()));
    assert!(bundles.iter().any(|b| b.contains(&Feature::incoming("num", "pl"))));
    assert!(bundles.iter().any(|b| b.contains(&Feature::outgoing("case", "acc"))));
    assert!(bundles.iter().all(|b| b.iter().all(|f| !f.is_lexical())));
}

#[test]
fn declared_names_contribute_a_fixed_factor() {
    let slot = agreeing("d", vec![Feature::incoming("case", "acc")]);
    let candidates = unpack_slot(&slot, &two_by_two());
    assert_eq!(candidates.len(), 5);
    assert!(candidates
        .iter()
        .all(|c| c.incoming().unwrap().contains(&Feature::incoming("case", "acc"))));
}

#[test]
fn entry_count_is_product_over_slots() {
    let entry = Entry::new(
        "k",
        [
            agreeing("a", vec![]),
            Slot::new(Polarity::RightSelector, "v"),
            agreeing("b", vec![Feature::incoming("num", "sg")]),
        ],
    );
    let inventory = two_by_two();
    assert_eq!(estimate_variants(&entry, &inventory), Some(25 * 5));
    assert_eq!(unpack_incoming(&entry, &inventory).len(), 125);
    assert_eq!(unpack_entry(&entry, &inventory).len(), 125);
}

#[test]
fn values_outside_the_inventory_never_appear() {
    let candidates = unpack_slot(&agreeing("d", vec![]), &two_by_two());
    for c in &candidates {
        for f in c.bundle().unwrap() {
            assert!(matches!(f.value(), Some("sg" | "pl" | "nom" | "acc")));
        }
    }
}

// =============================================================================
// End to End
// =============================================================================

#[test]
fn plain_single_slot_entry_is_its_own_variant() {
    let entry = Entry::new("x", [Slot::new(Polarity::Category, "c")]);
    let variants = unpack_entry(&entry, &two_by_two());
    assert_eq!(variants.len(), 1);
    assert_eq!(variants[0], entry);
    assert!(is_consistent(&variants[0]));
}

#[test]
fn variants_are_independent_of_the_original() {
    let entry = Entry::new("k", [agreeing("d", vec![])]);
    let variants = unpack_entry(&entry, &two_by_two());
    drop(entry);
    assert!(variants.iter().all(|v| v.key() == "k"));
}
