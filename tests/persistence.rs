use std::collections::HashSet;

use activitymap::engine::{DELIMITER, Status};
use activitymap::store::{FileStore, MemoryStore, Session, Store};
use activitymap_test_utils::builders::{engine, graph};
use proptest::prelude::*;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

const LABELS: [&str; 6] = [
    "Coordinates",
    "Sprites",
    "Sprite positions",
    "Is an object a clone?",
    "Lists as text",
    "Text manipulation with lists",
];

#[test]
fn saved_string_uses_the_stored_delimiter() {
    let engine = engine(&LABELS, &[], &["Sprites", "Lists as text"]);
    assert_eq!(
        engine.save_completed(),
        "Sprites\u{0E22}\u{0E07}Lists as text"
    );
}

#[test]
fn loads_string_written_by_earlier_versions() {
    // Raw bytes as found in existing storage.
    let stored = String::from_utf8(
        [
            b"Coordinates".as_slice(),
            &[0xe0, 0xb8, 0xa2, 0xe0, 0xb8, 0x87],
            b"Sprites".as_slice(),
        ]
        .concat(),
    )
    .unwrap();

    let mut engine = engine(&LABELS, &[], &[]);
    engine.load_completed(&stored);

    assert_eq!(engine.completed_labels(), vec!["Coordinates", "Sprites"]);
}

#[test]
fn unknown_label_loads_as_empty_set() {
    let mut engine = engine(&LABELS, &[], &[]);
    engine.load_completed("UnknownLabel");
    assert!(engine.completed().is_empty());
}

#[test]
fn stale_labels_are_dropped_and_known_ones_kept() {
    let mut engine = engine(&LABELS, &[], &[]);
    engine.load_completed(&format!("Old activity{DELIMITER}Sprites{DELIMITER}Renamed"));
    assert_eq!(engine.completed_labels(), vec!["Sprites"]);
}

#[test]
fn loading_replaces_previous_completed_set() {
    let mut engine = engine(&LABELS, &[], &["Coordinates"]);
    engine.load_completed("Sprites");
    assert_eq!(engine.completed_labels(), vec!["Sprites"]);
}

proptest! {
    #[test]
    fn save_then_load_reproduces_any_subset(mask in proptest::collection::vec(any::<bool>(), LABELS.len())) {
        let subset: Vec<&str> = LABELS
            .iter()
            .zip(mask.iter())
            .filter(|(_, keep)| **keep)
            .map(|(label, _)| *label)
            .collect();

        let original = engine(&LABELS, &[], &subset);
        let saved = original.save_completed();

        let mut reloaded = engine(&LABELS, &[], &[]);
        reloaded.load_completed(&saved);

        let expected: HashSet<&str> = subset.iter().copied().collect();
        let actual: HashSet<&str> = reloaded.completed_labels().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }
}

#[test]
fn file_store_reports_missing_key_as_none() -> TestResult {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path().join("state"));
    assert_eq!(store.read("completedActivities")?, None);
    Ok(())
}

#[test]
fn file_store_round_trips_values() -> TestResult {
    let dir = TempDir::new()?;
    let store = FileStore::new(dir.path().join("nested").join("state"));

    let value = format!("A{DELIMITER}B");
    store.write("completedActivities", &value)?;

    assert_eq!(store.read("completedActivities")?, Some(value));
    assert!(store.dir().join("completedActivities").is_file());
    Ok(())
}

#[test]
fn session_persists_toggles_across_reopen() -> TestResult {
    let dir = TempDir::new()?;
    let connections = [("Sprites", "Sprite positions"), ("Coordinates", "Sprite positions")];

    {
        let mut session = Session::open(
            graph(&LABELS, &connections),
            FileStore::new(dir.path()),
            "completedActivities",
        )?;
        let engine = session.engine_mut();
        let sprites = engine.require("Sprites")?;
        let coords = engine.require("Coordinates")?;
        engine.toggle_completed(sprites);
        engine.toggle_completed(coords);
        session.save()?;
    }

    let session = Session::open(
        graph(&LABELS, &connections),
        FileStore::new(dir.path()),
        "completedActivities",
    )?;
    let engine = session.engine();
    let positions = engine.require("Sprite positions")?;

    assert_eq!(engine.completed().len(), 2);
    assert_eq!(engine.status(positions)?, Status::Unlocked);
    Ok(())
}

#[test]
fn session_drops_labels_removed_from_the_map() -> TestResult {
    let store = MemoryStore::with_value("k", format!("Sprites{DELIMITER}Retired activity"));

    let session = Session::open(graph(&LABELS, &[]), store.clone(), "k")?;
    assert_eq!(session.engine().completed_labels(), vec!["Sprites"]);

    session.save()?;
    assert_eq!(store.read("k")?, Some("Sprites".to_string()));
    Ok(())
}

#[test]
fn session_on_empty_store_starts_with_nothing_completed() -> TestResult {
    let session = Session::open(graph(&LABELS, &[]), MemoryStore::new(), "k")?;
    assert!(session.engine().completed().is_empty());
    assert_eq!(session.store().read("k")?, None);
    Ok(())
}
