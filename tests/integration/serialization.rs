//! Accepted-lexicon serialization integration tests

use mgagr_engine::UnpackConfig;
use mgagr_runtime::Session;
use mgagr_runtime::serialize::{from_bytes, load_from_file, save_to_file, to_bytes};

const DEMO: &str = include_str!("../../demos/agreement.mg");

#[test]
fn accepted_lexicon_roundtrips() {
    let session = Session::from_source(DEMO).unwrap();
    let report = session.run().unwrap();
    let accepted = session.accepted(&report);

    assert_eq!(accepted.start, "c");
    assert_eq!(accepted.len(), report.accepted.len());

    let restored = from_bytes(&to_bytes(&accepted).unwrap()).unwrap();
    assert_eq!(restored, accepted);
    for (record, original) in restored.entries.iter().zip(&report.accepted) {
        assert_eq!(record.index, original.index);
        assert_eq!(record.key, original.key());
        assert_eq!(record.entry, original.entry);
    }
}

#[test]
fn accepted_lexicon_file_roundtrip() {
    let session = Session::from_source(DEMO)
        .unwrap()
        .with_config(UnpackConfig::strict());
    let accepted = session.accepted(&session.run().unwrap());

    let path = std::env::temp_dir().join("mgagr_test_integration.msgpack");
    save_to_file(&accepted, &path).unwrap();
    let restored = load_from_file(&path).unwrap();
    assert_eq!(restored, accepted);

    let _ = std::fs::remove_file(&path);
}
