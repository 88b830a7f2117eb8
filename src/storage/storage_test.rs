use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_get_missing_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("nope").unwrap(), None);
    assert!(storage.is_empty());
}

#[test]
fn memory_clones_share_state() {
    let a = MemoryStorage::new();
    let b = a.clone();
    a.set_item("k", "v").unwrap();
    assert_eq!(b.get_item("k").unwrap().as_deref(), Some("v"));
    b.remove_item("k").unwrap();
    assert_eq!(a.get_item("k").unwrap(), None);
}

#[test]
fn memory_remove_missing_key_succeeds() {
    let storage = MemoryStorage::new();
    assert!(storage.remove_item("k").is_ok());
}

#[test]
fn memory_set_overwrites() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "1").unwrap();
    storage.set_item("k", "2").unwrap();
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some("2"));
    assert_eq!(storage.len(), 1);
}

// =============================================================
// FileStorage
// =============================================================

#[test]
fn file_missing_is_empty_store() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("session.json"));
    assert_eq!(storage.get_item("api_token").unwrap(), None);
    assert!(storage.remove_item("api_token").is_ok());
    assert!(!storage.path().exists());
}

#[test]
fn file_round_trips_across_handles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    FileStorage::new(&path).set_item("api_token", "T").unwrap();
    FileStorage::new(&path).set_item("auth", "{}").unwrap();

    let reopened = FileStorage::new(&path);
    assert_eq!(reopened.get_item("api_token").unwrap().as_deref(), Some("T"));
    assert_eq!(reopened.get_item("auth").unwrap().as_deref(), Some("{}"));

    reopened.remove_item("api_token").unwrap();
    assert_eq!(reopened.get_item("api_token").unwrap(), None);
    assert_eq!(reopened.get_item("auth").unwrap().as_deref(), Some("{}"));
}

#[test]
fn file_corrupt_contents_is_encode_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");
    std::fs::write(&path, "not json").unwrap();
    let err = FileStorage::new(&path).get_item("k").unwrap_err();
    assert!(matches!(err, StorageError::Encode(_)));
}
