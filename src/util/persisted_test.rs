use super::*;
use crate::storage::MemoryStorage;
use serde::Deserialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Storage that counts writes on top of a memory map.
#[derive(Clone, Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: Arc<AtomicUsize>,
}

impl CountingStorage {
    fn writes(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }
}

impl Storage for CountingStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Prefs {
    view: String,
    tags: Vec<String>,
}

fn prefs() -> Prefs {
    Prefs { view: "month".to_owned(), tags: Vec::new() }
}

// =============================================================
// Watched
// =============================================================

#[test]
fn watched_notifies_once_per_mutation() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    let mut cell = Watched::new(1);
    cell.subscribe(move |v: &i32| sink.lock().unwrap().push(*v));

    cell.set(2);
    cell.update(|v| *v += 10);

    assert_eq!(*cell.get(), 12);
    assert_eq!(*seen.lock().unwrap(), vec![2, 12]);
}

#[test]
fn watched_update_returns_closure_result() {
    let mut cell = Watched::new(vec![1, 2]);
    let len = cell.update(|v| {
        v.push(3);
        v.len()
    });
    assert_eq!(len, 3);
    assert_eq!(cell.into_inner(), vec![1, 2, 3]);
}

// =============================================================
// PersistedCell hydration
// =============================================================

#[test]
fn missing_entry_yields_initial_without_writing() {
    let storage = CountingStorage::default();
    let cell = PersistedCell::create(storage.clone(), "k", prefs());

    assert_eq!(cell.get(), &prefs());
    assert_eq!(cell.key(), "k");
    assert_eq!(storage.writes(), 0);
    assert_eq!(storage.get_item("k").unwrap(), None);
}

#[test]
fn stored_entry_wins_over_initial() {
    let storage = MemoryStorage::new();
    storage.set_item("k", r#"{"view":"week","tags":["work"]}"#).unwrap();

    let cell = PersistedCell::create(storage, "k", prefs());

    assert_eq!(cell.get(), &Prefs { view: "week".to_owned(), tags: vec!["work".to_owned()] });
}

#[test]
fn empty_or_invalid_entry_falls_back() {
    let storage = MemoryStorage::new();
    storage.set_item("empty", "").unwrap();
    storage.set_item("bad", "{nope").unwrap();

    assert_eq!(PersistedCell::create(storage.clone(), "empty", 7).get(), &7);
    assert_eq!(PersistedCell::create(storage, "bad", prefs()).get(), &prefs());
}

// =============================================================
// PersistedCell write-through
// =============================================================

#[test]
fn each_mutation_writes_once_as_json() {
    let storage = CountingStorage::default();
    let mut cell = PersistedCell::create(storage.clone(), "k", prefs());

    cell.set(Prefs { view: "day".to_owned(), tags: Vec::new() });
    assert_eq!(storage.writes(), 1);
    assert_eq!(storage.get_item("k").unwrap().as_deref(), Some(r#"{"view":"day","tags":[]}"#));

    cell.update(|p| p.tags.push("home".to_owned()));
    assert_eq!(storage.writes(), 2);
    assert_eq!(
        storage.get_item("k").unwrap().as_deref(),
        Some(r#"{"view":"day","tags":["home"]}"#)
    );
}

#[test]
fn external_changes_are_not_observed() {
    let storage = MemoryStorage::new();
    let cell = PersistedCell::create(storage.clone(), "k", 1);
    storage.set_item("k", "99").unwrap();
    assert_eq!(cell.get(), &1);
}

#[test]
fn extra_subscribers_run_after_write() {
    let storage = MemoryStorage::new();
    let observed = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&observed);
    let reader = storage.clone();
    let mut cell = PersistedCell::create(storage, "k", 0);
    cell.subscribe(move |_: &i32| {
        *sink.lock().unwrap() = reader.get_item("k").unwrap();
    });

    cell.set(5);

    assert_eq!(observed.lock().unwrap().as_deref(), Some("5"));
}
