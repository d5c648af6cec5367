//! Durable key/value storage behind the session mirror.
//!
//! SYSTEM CONTEXT
//! ==============
//! The session keeps its identity in memory and mirrors it here so a page
//! reload does not log the operator out. `BrowserStorage` talks to
//! `window.localStorage` in hydrate builds and reports `Unavailable`
//! everywhere else (SSR, native tests). `MemoryStorage` is an in-process
//! map for tests and embedders.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `Result` so callers can decide how much to care.
//! The session store treats all failures as best-effort and keeps going.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Failure talking to a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage is reachable (no window, storage disabled, server render).
    #[error("durable storage unavailable")]
    Unavailable,
    /// The backend refused the operation (quota exceeded, security error).
    #[error("durable storage rejected operation: {0}")]
    Rejected(String),
}

/// String key/value store that survives page reloads.
pub trait DurableStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete the entry under `key`. Removing a missing key succeeds.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or refuses the removal.
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// `window.localStorage`, resolved on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

#[cfg(feature = "hydrate")]
fn rejected(err: &wasm_bindgen::JsValue) -> StorageError {
    StorageError::Rejected(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

impl DurableStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.set_item(key, value).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.remove_item(key).map_err(|e| rejected(&e))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

/// In-process storage backed by a map.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the raw value under `key`, bypassing the trait.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DurableStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.raw(key))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
        Ok(())
    }
}
