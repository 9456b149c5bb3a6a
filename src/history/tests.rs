use super::{HistoryError, HistoryStore};

#[test]
fn test_add_is_newest_first() {
    let mut store = HistoryStore::new(10);
    store.add("first");
    store.add("second");
    let texts: Vec<&str> = store.iter().map(|r| r.text.as_str()).collect();
    assert_eq!(texts, ["second", "first"]);
}

#[test]
fn test_add_assigns_unique_ids() {
    let mut store = HistoryStore::new(10);
    let a = store.add("a");
    let b = store.add("b");
    let c = store.add("c");
    assert_ne!(a.id, b.id);
    assert_ne!(b.id, c.id);
}

#[test]
fn test_cap_truncates_oldest() {
    let mut store = HistoryStore::new(3);
    for i in 0..5 {
        store.add(&format!("note {i}"));
    }
    assert_eq!(store.len(), 3);
    assert_eq!(store.records()[0].text, "note 4");
    assert_eq!(store.records()[2].text, "note 2");
}

#[test]
fn test_remove() {
    let mut store = HistoryStore::new(10);
    let record = store.add("keep");
    let gone = store.add("drop");
    assert!(store.remove(&gone.id));
    assert!(!store.remove(&gone.id));
    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].id, record.id);
}

#[test]
fn test_json_round_trip() {
    let mut store = HistoryStore::new(10);
    store.add("ඔය කොහෙද?");
    store.add("මම ගෙදර");
    let json = store.to_json().unwrap();
    let loaded = HistoryStore::from_json(&json, 10).unwrap();
    assert_eq!(loaded.records(), store.records());
}

#[test]
fn test_json_uses_original_field_names() {
    let mut store = HistoryStore::new(10);
    store.add("text");
    let json = store.to_json().unwrap();
    assert!(json.contains("\"timestampMillis\""));
}

#[test]
fn test_save_and_open() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::new(10);
    store.add("saved text");
    store.save(&path).unwrap();

    let loaded = HistoryStore::open(&path, 10).unwrap();
    assert_eq!(loaded.records(), store.records());
}

#[test]
fn test_open_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let store = HistoryStore::open(&dir.path().join("absent.json"), 10).unwrap();
    assert!(store.is_empty());
}

#[test]
fn test_open_corrupt_file_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{ not json").unwrap();
    assert!(matches!(
        HistoryStore::open(&path, 10),
        Err(HistoryError::InvalidData(_))
    ));
}

#[test]
fn test_open_unsupported_version_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, r#"{"version": 99, "records": []}"#).unwrap();
    assert!(matches!(
        HistoryStore::open(&path, 10),
        Err(HistoryError::UnsupportedVersion(99))
    ));
}

#[test]
fn test_open_applies_cap() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");

    let mut store = HistoryStore::new(10);
    for i in 0..6 {
        store.add(&format!("note {i}"));
    }
    store.save(&path).unwrap();

    let loaded = HistoryStore::open(&path, 4).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded.records()[0].text, "note 5");
}
