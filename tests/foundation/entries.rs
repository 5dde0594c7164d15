//! Integration tests for slots, entries, and the feature inventory

use mgagr_foundation::{Entry, Feature, FeatureBundle, Inventory, Polarity, Slot};

fn agreeing(polarity: Polarity, name: &str, features: Vec<Feature>) -> Slot {
    Slot::new(polarity, name).with_bundle(FeatureBundle::new(features))
}

// =============================================================================
// Polarity
// =============================================================================

#[test]
fn markers_round_trip_through_lookup() {
    for polarity in Polarity::ALL {
        let (prefix, suffix) = polarity.markers();
        assert_eq!(Polarity::from_markers(prefix, suffix).unwrap(), polarity);
    }
}

#[test]
fn positive_and_negative_partition() {
    for polarity in Polarity::ALL {
        assert_ne!(polarity.is_positive(), polarity.is_negative());
    }
    assert!(Polarity::StrongSelector.is_head_movement_selector());
    assert!(Polarity::CovertLicensor.is_licensor());
    assert!(Polarity::Licensee.is_negative());
}

#[test]
fn unknown_markers_rejected() {
    assert!(Polarity::from_markers("=", "=").is_err());
}

// =============================================================================
// Entries
// =============================================================================

#[test]
fn entry_display_joins_slots() {
    let entry = Entry::new(
        "the",
        [
            Slot::new(Polarity::RightSelector, "n"),
            agreeing(Polarity::Category, "d", vec![Feature::incoming("num", "sg")]),
            Slot::new(Polarity::Licensee, "k"),
        ],
    );
    assert_eq!(entry.to_string(), "=n d←[num:sg][]→ -k");
    assert_eq!(entry.len(), 3);
    assert_eq!(entry.slot(1).map(Slot::name), Some("d"));
}

#[test]
fn surface_prefers_later_slots() {
    let entry = Entry::new(
        "k",
        [
            agreeing(Polarity::RightSelector, "a", vec![Feature::incoming("num", "sg")]),
            agreeing(Polarity::Category, "b", vec![
                Feature::lexical("num", "pl"),
                Feature::incoming("case", "acc"),
            ]),
        ],
    );
    assert_eq!(
        entry.surface(),
        FeatureBundle::new([Feature::new("num", "pl"), Feature::new("case", "acc")])
    );
}

#[test]
fn surface_ignores_plain_slots() {
    let entry = Entry::new("k", [Slot::new(Polarity::Category, "d")]);
    assert!(entry.surface().is_empty());
}

#[test]
fn vanilla_and_stripped_forms() {
    let entry = Entry::new(
        "k",
        [
            Slot::new(Polarity::RightSelector, "n"),
            agreeing(Polarity::Category, "d", vec![
                Feature::incoming("num", "sg"),
                Feature::lexical("case", "nom"),
            ]),
        ],
    );
    assert_eq!(entry.vanilla().to_string(), "=n d_[case:nom]_[num:sg]");
    assert_eq!(entry.stripped().to_string(), "=n d_←[][]→");
}

// =============================================================================
// Inventory
// =============================================================================

#[test]
fn inventory_collects_every_value() {
    let entries = [
        Entry::new("a", [agreeing(Polarity::Category, "d", vec![Feature::lexical("num", "sg")])]),
        Entry::new("b", [agreeing(Polarity::Category, "d", vec![
            Feature::lexical("num", "pl"),
            Feature::lexical("case", "nom"),
        ])]),
        Entry::new("c", [Slot::new(Polarity::Category, "v")]),
    ];
    let inventory = Inventory::from_entries(&entries);

    assert_eq!(inventory.len(), 2);
    assert_eq!(inventory.values("num").map(|v| v.len()), Some(2));
    assert!(inventory.contains_name("case"));
    assert!(!inventory.contains_name("per"));
    assert_eq!(inventory.to_string(), "case:{nom} num:{pl,sg}");
}

#[test]
fn inventory_skips_placeholders() {
    let entries = [Entry::new("a", [agreeing(Polarity::Category, "d", vec![Feature::placeholder("num")])])];
    assert!(Inventory::from_entries(&entries).is_empty());
}

#[test]
fn with_value_is_persistent() {
    let base = Inventory::new().with_value("num", "sg");
    let grown = base.with_value("num", "pl");
    assert_eq!(base.values("num").map(|v| v.len()), Some(1));
    assert_eq!(grown.values("num").map(|v| v.len()), Some(2));
}
