//! Integration tests for features and feature bundles
//!
//! Tests canonical ordering, projections, and set comparisons.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use mgagr_foundation::{Feature, FeatureBundle};
use proptest::prelude::*;

fn hash_of<T: Hash>(value: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

// =============================================================================
// Canonical Form
// =============================================================================

#[test]
fn construction_order_is_irrelevant() {
    let a = FeatureBundle::new([
        Feature::incoming("num", "sg"),
        Feature::lexical("case", "nom"),
        Feature::outgoing("per", "3"),
    ]);
    let b = FeatureBundle::new([
        Feature::outgoing("per", "3"),
        Feature::incoming("num", "sg"),
        Feature::lexical("case", "nom"),
    ]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    assert_eq!(a.to_string(), b.to_string());
}

#[test]
fn display_forms() {
    let bundle = FeatureBundle::new([Feature::lexical("num", "pl"), Feature::new("case", "acc")]);
    assert_eq!(bundle.to_string(), "[case:acc,num:pl!]");
    assert_eq!(FeatureBundle::empty().to_string(), "[]");
}

#[test]
fn with_keeps_canonical_order() {
    let grown = FeatureBundle::empty()
        .with(Feature::new("z", "1"))
        .with(Feature::new("a", "1"));
    assert_eq!(grown, FeatureBundle::new([Feature::new("a", "1"), Feature::new("z", "1")]));
}

// =============================================================================
// Projections
// =============================================================================

#[test]
fn projections_split_by_direction() {
    let bundle = FeatureBundle::new([
        Feature::incoming("num", "sg"),
        Feature::lexical("case", "nom"),
        Feature::new("per", "3"),
    ]);
    assert_eq!(bundle.incoming(), FeatureBundle::new([Feature::incoming("num", "sg")]));
    assert_eq!(bundle.outgoing(), FeatureBundle::new([Feature::lexical("case", "nom")]));
}

#[test]
fn compatible_erases_tags() {
    let bundle = FeatureBundle::new([Feature::incoming("num", "sg"), Feature::lexical("case", "nom")]);
    assert_eq!(
        bundle.compatible(),
        FeatureBundle::new([Feature::new("num", "sg"), Feature::new("case", "nom")])
    );
}

#[test]
fn subset_and_set_equality() {
    let small = FeatureBundle::new([Feature::new("tense", "past")]);
    let large = FeatureBundle::new([Feature::new("tense", "past"), Feature::new("num", "sg")]);
    assert!(small.is_subset_of(&large));
    assert!(!large.is_subset_of(&small));
    assert!(!small.set_eq(&large));
    assert!(small.set_eq(&small.clone()));
    assert!(FeatureBundle::empty().is_subset_of(&small));
}

// =============================================================================
// Properties
// =============================================================================

fn arb_feature() -> impl Strategy<Value = Feature> {
    (
        prop::sample::select(vec!["num", "case", "per"]),
        prop::sample::select(vec!["a", "b", "c"]),
        any::<bool>(),
        prop::option::of(any::<bool>()),
    )
        .prop_map(|(name, value, lexical, incoming)| {
            Feature::new(name, value)
                .with_lexical(lexical)
                .with_incoming(incoming)
        })
}

proptest! {
    #[test]
    fn canonical_form_under_shuffle(
        (features, shuffled) in prop::collection::vec(arb_feature(), 0..8)
            .prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle())),
    ) {
        let a = FeatureBundle::new(features);
        let b = FeatureBundle::new(shuffled);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn projections_recover_directional_features(
        features in prop::collection::vec(arb_feature(), 0..8),
    ) {
        let bundle = FeatureBundle::new(features);
        let rejoined: FeatureBundle = bundle
            .incoming()
            .into_iter()
            .chain(bundle.outgoing())
            .collect();
        let directional: FeatureBundle = bundle
            .iter()
            .filter(|f| f.direction().is_some())
            .cloned()
            .collect();
        prop_assert_eq!(rejoined, directional);
    }
}
