//! Session store: the single slot holding who is logged in.
//!
//! DESIGN
//! ======
//! The in-memory slot is authoritative for the lifetime of the page. Every
//! `set`/`clear` is mirrored into durable storage under one constant key so
//! a reload can restore it, but mirroring is best-effort: storage failures
//! are logged and swallowed, never surfaced and never retried.
//!
//! The store is an ordinary value with its storage backend injected, so the
//! app, the server renderer and tests each build their own instance. The app
//! wraps it in an `RwSignal` and passes that to each page as a prop.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::sync::Arc;

use super::identity::Identity;
use crate::util::storage::{DurableStorage, StorageError};

/// Storage key for the serialized identity record.
pub const STORAGE_KEY: &str = "user";

/// Holder of at most one `Identity`, mirrored to durable storage.
#[derive(Clone)]
pub struct SessionStore {
    identity: Option<Identity>,
    storage: Arc<dyn DurableStorage>,
}

impl SessionStore {
    /// Create a store with an empty slot. Storage is not read.
    pub fn empty(storage: Arc<dyn DurableStorage>) -> Self {
        Self { identity: None, storage }
    }

    /// Create a store and restore any identity already in storage.
    pub fn open(storage: Arc<dyn DurableStorage>) -> Self {
        let mut store = Self::empty(storage);
        store.restore();
        store
    }

    /// Reload the slot from storage.
    ///
    /// A missing, unreadable or undecodable record leaves the slot empty.
    pub fn restore(&mut self) {
        self.identity = match self.storage.get_item(STORAGE_KEY) {
            Ok(Some(raw)) => decode_record(&raw),
            Ok(None) => None,
            Err(e) => {
                log::debug!("session restore skipped: {e}");
                None
            }
        };
    }

    /// Current identity, if any.
    pub fn get(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }

    /// Replace the slot with `identity` and mirror it to storage.
    ///
    /// If the write fails, any older record is removed so a reload comes
    /// back logged out rather than as a previous identity.
    pub fn set(&mut self, identity: Identity) {
        let written = match serde_json::to_string(&identity) {
            Ok(raw) => self.storage.set_item(STORAGE_KEY, &raw),
            Err(e) => Err(StorageError::Rejected(format!("encode: {e}"))),
        };
        if let Err(e) = written {
            log::warn!("session storage write failed: {e}");
            report("remove", self.storage.remove_item(STORAGE_KEY));
        }
        log::debug!("session set: name={:?} role={}", identity.name, identity.role);
        self.identity = Some(identity);
    }

    /// Empty the slot and remove the storage record. Idempotent.
    pub fn clear(&mut self) {
        self.identity = None;
        report("remove", self.storage.remove_item(STORAGE_KEY));
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

/// Decode a stored record, treating any malformed value as logged out.
pub fn decode_record(raw: &str) -> Option<Identity> {
    match serde_json::from_str::<Identity>(raw) {
        Ok(identity) => Some(identity),
        Err(e) => {
            log::warn!("discarding malformed session record: {e}");
            None
        }
    }
}

fn report(op: &str, result: Result<(), StorageError>) {
    if let Err(e) = result {
        log::warn!("session storage {op} failed: {e}");
    }
}
