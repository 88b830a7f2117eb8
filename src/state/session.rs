//! Explicit session context backed by durable storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! A session is two durable keys: the raw bearer token under `api_token` and
//! a JSON `{isAuthenticated, user}` record under `auth`. [`SessionStore`] owns
//! both. The API client reads the token for every request and clears both
//! keys on logout or a 401; the route guard only checks token presence.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::storage::{Storage, StorageError};

pub const TOKEN_KEY: &str = "api_token";
pub const AUTH_KEY: &str = "auth";

/// Persisted `auth` record. Field order is part of the stored format.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthRecord {
    pub is_authenticated: bool,
    #[serde(default)]
    pub user: Value,
}

/// Snapshot of the client-held session facts.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    pub is_authenticated: bool,
    pub token: Option<String>,
    pub user: Option<Value>,
}

/// Single owner of the session keys in a [`Storage`].
///
/// Clones share the underlying storage handle, so the API client, its
/// middleware and the route guard all observe the same session.
#[derive(Clone, Debug)]
pub struct SessionStore<S> {
    storage: S,
}

impl<S: Storage> SessionStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Current bearer token. An empty stored value counts as absent.
    ///
    /// Storage failures read as "no token" and are logged.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        match self.storage.get_item(TOKEN_KEY) {
            Ok(Some(token)) if !token.is_empty() => Some(token),
            Ok(_) => None,
            Err(e) => {
                log::warn!("session token unreadable: {e}");
                None
            }
        }
    }

    #[must_use]
    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Decoded `auth` record, if present and well-formed.
    #[must_use]
    pub fn record(&self) -> Option<AuthRecord> {
        let raw = match self.storage.get_item(AUTH_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                log::warn!("session record unreadable: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("session record malformed: {e}");
                None
            }
        }
    }

    /// Assemble a [`Session`] from both keys.
    #[must_use]
    pub fn load(&self) -> Session {
        let token = self.token();
        let record = self.record();
        let is_authenticated = token.is_some() && record.as_ref().is_some_and(|r| r.is_authenticated);
        let user = record.map(|r| r.user).filter(|u| !u.is_null());
        Session { is_authenticated, token, user }
    }

    /// Persist a freshly issued token and its user.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] if either key cannot be written.
    pub fn establish(&self, token: &str, user: Value) -> Result<(), StorageError> {
        let record = AuthRecord { is_authenticated: true, user };
        let raw = serde_json::to_string(&record).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.storage.set_item(TOKEN_KEY, token)?;
        self.storage.set_item(AUTH_KEY, &raw)
    }

    /// Remove both session keys.
    ///
    /// Both deletions are attempted even if the first fails.
    ///
    /// # Errors
    ///
    /// Returns the first [`StorageError`] encountered.
    pub fn clear(&self) -> Result<(), StorageError> {
        let token = self.storage.remove_item(TOKEN_KEY);
        let auth = self.storage.remove_item(AUTH_KEY);
        token.and(auth)
    }
}
