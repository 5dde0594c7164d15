//! Integration tests for morphemes and the morpheme table

use mgagr_foundation::{Feature, FeatureBundle, Morpheme, MorphemeTable};

fn morpheme(key: &str, features: &[(&str, &str)]) -> Morpheme {
    Morpheme::new(
        key,
        features.iter().map(|&(n, v)| Feature::new(n, v)).collect(),
    )
}

#[test]
fn required_features_lose_tags() {
    let m = Morpheme::new("V", FeatureBundle::new([Feature::lexical("tense", "past")]));
    assert_eq!(m.features(), &FeatureBundle::new([Feature::new("tense", "past")]));
    assert_eq!(m.to_string(), "V[tense:past]");
}

#[test]
fn lookup_by_sequence() {
    let walk = morpheme("walk", &[]);
    let past = morpheme("T", &[("tense", "past")]);
    let table = MorphemeTable::new().with(vec![walk.clone(), past.clone()], "walked");

    assert_eq!(table.surface(&[walk.clone(), past.clone()]), Some("walked"));
    assert_eq!(table.surface(&[past, walk]), None);
}

#[test]
fn reregistration_replaces_in_place() {
    let dog = morpheme("dog", &[("num", "sg")]);
    let dogs = morpheme("dog", &[("num", "pl")]);
    let mut table = MorphemeTable::new()
        .with(vec![dog.clone()], "dog")
        .with(vec![dogs.clone()], "dogs");
    table.register(vec![dog.clone()], "doggo");

    assert_eq!(table.len(), 2);
    let rows: Vec<_> = table.iter().map(|(_, surface)| surface).collect();
    assert_eq!(rows, vec!["doggo", "dogs"]);
}

#[test]
fn distinct_morphemes_in_first_seen_order() {
    let walk = morpheme("walk", &[]);
    let past = morpheme("T", &[("tense", "past")]);
    let pres = morpheme("T", &[("tense", "pres")]);
    let table = MorphemeTable::new()
        .with(vec![walk.clone(), past.clone()], "walked")
        .with(vec![walk.clone(), pres.clone()], "walks");

    assert_eq!(table.morphemes(), vec![&walk, &past, &pres]);
    assert_eq!(table.morphemes_for("T"), vec![&past, &pres]);
    assert!(table.morphemes_for("N").is_empty());
}
