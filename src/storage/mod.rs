//! Durable key-value storage behind a browser-shaped API.
//!
//! SYSTEM CONTEXT
//! ==============
//! Session facts and persisted UI values live in a flat string namespace.
//! In the browser that namespace is `localStorage`; the CLI keeps it in a
//! JSON file and tests keep it in memory. Everything above this module talks
//! to the [`Storage`] trait only.

mod file;
#[cfg(feature = "csr")]
mod local;
mod memory;

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

pub use file::FileStorage;
#[cfg(feature = "csr")]
pub use local::LocalStorage;
pub use memory::MemoryStorage;

/// Errors raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The backing store cannot be reached (no window, private mode, ...).
    #[error("storage unavailable")]
    Unavailable,

    /// The backend rejected the operation.
    #[error("storage backend failed: {0}")]
    Backend(String),

    /// A value could not be encoded or decoded.
    #[error("storage encoding failed: {0}")]
    Encode(String),
}

/// Flat string key-value store with interior mutability.
pub trait Storage {
    /// Read the raw value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Deleting a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if the backend rejects the delete.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
