//! Values mirrored to durable storage on every change.
//!
//! DESIGN
//! ======
//! Change detection is explicit: [`Watched`] only notifies from `set` and
//! `update`, and `update` hands out `&mut T` so nested edits are covered by
//! the same single notification. [`PersistedCell`] is a `Watched` whose
//! first subscriber writes the full JSON value back under its key.
//! Storage is read exactly once, at creation; later external edits to the
//! key are not observed.

#[cfg(test)]
#[path = "persisted_test.rs"]
mod persisted_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::storage::{Storage, StorageError};

type Subscriber<T> = Box<dyn FnMut(&T) + Send + Sync>;

/// A value with an explicit subscriber list.
pub struct Watched<T> {
    value: T,
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Watched<T> {
    pub fn new(value: T) -> Self {
        Self { value, subscribers: Vec::new() }
    }

    /// Register `f` to run after every mutation.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&T) + Send + Sync + 'static,
    {
        self.subscribers.push(Box::new(f));
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn set(&mut self, value: T) {
        self.value = value;
        self.notify();
    }

    /// Mutate in place; subscribers run once afterwards.
    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        let out = f(&mut self.value);
        self.notify();
        out
    }

    pub fn into_inner(self) -> T {
        self.value
    }

    fn notify(&mut self) {
        for subscriber in &mut self.subscribers {
            subscriber(&self.value);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Watched<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Watched")
            .field("value", &self.value)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

/// A named durable slot with write-through on every mutation.
#[derive(Debug)]
pub struct PersistedCell<T> {
    key: String,
    inner: Watched<T>,
}

impl<T> PersistedCell<T>
where
    T: Serialize + DeserializeOwned + 'static,
{
    /// Hydrate from `storage[key]`, falling back to `initial`.
    ///
    /// An empty, unreadable or undecodable stored value falls back to
    /// `initial`. Creation never writes.
    pub fn create<S>(storage: S, key: impl Into<String>, initial: T) -> Self
    where
        S: Storage + Send + Sync + 'static,
    {
        let key = key.into();
        let value = hydrate(&storage, &key).unwrap_or(initial);
        let mut inner = Watched::new(value);
        let write_key = key.clone();
        inner.subscribe(move |value: &T| {
            if let Err(e) = write_through(&storage, &write_key, value) {
                log::warn!("persisting {write_key} failed: {e}");
            }
        });
        Self { key, inner }
    }
}

impl<T> PersistedCell<T> {
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn get(&self) -> &T {
        self.inner.get()
    }

    pub fn set(&mut self, value: T) {
        self.inner.set(value);
    }

    pub fn update<R>(&mut self, f: impl FnOnce(&mut T) -> R) -> R {
        self.inner.update(f)
    }

    /// Register an extra subscriber; it runs after the write-through.
    pub fn subscribe<F>(&mut self, f: F)
    where
        F: FnMut(&T) + Send + Sync + 'static,
    {
        self.inner.subscribe(f);
    }
}

fn hydrate<S: Storage, T: DeserializeOwned>(storage: &S, key: &str) -> Option<T> {
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) if !raw.is_empty() => raw,
        Ok(_) => return None,
        Err(e) => {
            log::warn!("reading {key} failed: {e}");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("stored {key} is not valid JSON, using initial value: {e}");
            None
        }
    }
}

fn write_through<S: Storage, T: Serialize>(storage: &S, key: &str, value: &T) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
    storage.set_item(key, &raw)
}
