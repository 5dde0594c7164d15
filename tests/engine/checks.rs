//! Integration tests for consistency and pronounceability

use mgagr_engine::{
    DemandFailure, PronounceabilityMode, find_unresolved, is_consistent, is_good,
    is_pronounceable, is_pronounceable_exact, is_pronounceable_with,
};
use mgagr_foundation::{Entry, Feature, FeatureBundle, Morpheme, MorphemeTable, Polarity, Slot};

fn agreeing(name: &str, features: Vec<Feature>) -> Slot {
    Slot::new(Polarity::Category, name).with_bundle(FeatureBundle::new(features))
}

// =============================================================================
// Consistency
// =============================================================================

/// Slot 0 demands `num:pl`; `supplier` follows it.
fn demand_then(supplier: Option<Feature>) -> Entry {
    Entry::new(
        "k",
        [
            agreeing("a", vec![Feature::outgoing("num", "pl")]),
            agreeing("b", supplier.into_iter().collect()),
        ],
    )
}

#[test]
fn unsupplied_demand_is_rejected() {
    let entry = demand_then(None);
    assert!(!is_consistent(&entry));
    assert_eq!(find_unresolved(&entry).unwrap().failure, DemandFailure::Unsupplied);
}

#[test]
fn wrong_value_is_rejected() {
    let entry = demand_then(Some(Feature::incoming("num", "sg")));
    assert!(!is_consistent(&entry));
    let demand = find_unresolved(&entry).unwrap();
    assert_eq!(demand.slot, 0);
    assert_eq!(demand.feature, Feature::outgoing("num", "pl"));
}

#[test]
fn matching_value_is_accepted() {
    assert!(is_consistent(&demand_then(Some(Feature::incoming("num", "pl")))));
}

#[test]
fn lexical_values_are_never_demands() {
    let entry = Entry::new("k", [agreeing("a", vec![Feature::lexical("num", "pl")])]);
    assert!(is_consistent(&entry));
}

#[test]
fn received_values_are_never_demands() {
    let entry = Entry::new("k", [agreeing("a", vec![Feature::incoming("num", "pl")])]);
    assert!(is_consistent(&entry));
}

// =============================================================================
// Pronounceability
// =============================================================================

fn past_table() -> MorphemeTable {
    MorphemeTable::new().with(
        vec![Morpheme::new("V", FeatureBundle::new([Feature::new("tense", "past")]))],
        "walked",
    )
}

fn surfaced(features: Vec<Feature>) -> Entry {
    Entry::new("V", [Slot::new(Polarity::RightSelector, "d"), agreeing("v", features)])
}

#[test]
fn subset_accepts_wider_surface_exact_does_not() {
    let entry = surfaced(vec![Feature::lexical("tense", "past"), Feature::incoming("num", "sg")]);
    let table = past_table();
    assert!(is_pronounceable("V", &entry, &table));
    assert!(!is_pronounceable_exact("V", &entry, &table));
}

#[test]
fn matching_surface_passes_both_modes() {
    let entry = surfaced(vec![Feature::lexical("tense", "past")]);
    let table = past_table();
    assert!(is_pronounceable("V", &entry, &table));
    assert!(is_pronounceable_exact("V", &entry, &table));
    assert!(is_pronounceable_with("V", &entry, &table, PronounceabilityMode::Exact));
}

#[test]
fn surface_tags_are_ignored() {
    // Received rather than lexical; the surface is the same.
    let entry = surfaced(vec![Feature::incoming("tense", "past")]);
    assert!(is_pronounceable_exact("V", &entry, &past_table()));
}

#[test]
fn any_registered_morpheme_may_match() {
    let table = past_table().with(
        vec![Morpheme::new("V", FeatureBundle::new([Feature::new("tense", "pres")]))],
        "walks",
    );
    let entry = surfaced(vec![Feature::lexical("tense", "pres")]);
    assert!(is_pronounceable("V", &entry, &table));
}

#[test]
fn gate_requires_both() {
    let table = past_table();
    let good = surfaced(vec![Feature::lexical("tense", "past")]);
    assert!(is_good("V", &good, &table));

    let unpronounceable = surfaced(vec![Feature::lexical("tense", "fut")]);
    assert!(is_consistent(&unpronounceable));
    assert!(!is_good("V", &unpronounceable, &table));

    let inconsistent = surfaced(vec![
        Feature::lexical("tense", "past"),
        Feature::outgoing("num", "sg"),
    ]);
    assert!(!is_good("V", &inconsistent, &table));
}
