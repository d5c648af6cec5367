use super::*;
use crate::state::identity::Role;
use crate::util::storage::{BrowserStorage, MemoryStorage};

/// Backend that fails every operation, like a browser with storage disabled.
struct RejectingStorage;

impl DurableStorage for RejectingStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Rejected("SecurityError".to_owned()))
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("QuotaExceededError".to_owned()))
    }

    fn remove_item(&self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Rejected("SecurityError".to_owned()))
    }
}

/// Backend that accepts a fixed number of writes, then rejects the rest.
struct QuotaStorage {
    inner: MemoryStorage,
    writes_left: std::sync::Mutex<usize>,
}

impl QuotaStorage {
    fn new(writes: usize) -> Self {
        Self { inner: MemoryStorage::new(), writes_left: std::sync::Mutex::new(writes) }
    }
}

impl DurableStorage for QuotaStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut left = self.writes_left.lock().unwrap();
        if *left == 0 {
            return Err(StorageError::Rejected("QuotaExceededError".to_owned()));
        }
        *left -= 1;
        self.inner.set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove_item(key)
    }
}

fn memory() -> Arc<MemoryStorage> {
    Arc::new(MemoryStorage::new())
}

// =============================================================
// get / set / clear
// =============================================================

#[test]
fn empty_store_has_no_identity() {
    let store = SessionStore::empty(memory());
    assert!(store.get().is_none());
    assert!(!store.is_authenticated());
}

#[test]
fn set_then_get_returns_identity_verbatim() {
    let mut store = SessionStore::empty(memory());
    for identity in [
        Identity::new("alice", Role::Admin),
        Identity::new("bob", Role::User),
        Identity::new("", Role::User),
        Identity::new("  spaced  ", Role::Admin),
    ] {
        store.set(identity.clone());
        assert_eq!(store.get(), Some(&identity));
    }
}

#[test]
fn set_replaces_previous_identity() {
    let mut store = SessionStore::empty(memory());
    store.set(Identity::new("alice", Role::Admin));
    store.set(Identity::new("bob", Role::User));
    assert_eq!(store.get(), Some(&Identity::new("bob", Role::User)));
}

#[test]
fn clear_empties_slot() {
    let mut store = SessionStore::empty(memory());
    store.set(Identity::new("alice", Role::Admin));
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn clear_is_idempotent() {
    let mut store = SessionStore::empty(memory());
    store.clear();
    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn set_stores_unrecognized_role() {
    let mut store = SessionStore::empty(memory());
    let identity = Identity::new("eve", Role::parse("root"));
    store.set(identity.clone());
    assert_eq!(store.get(), Some(&identity));
}

// =============================================================
// Storage mirroring
// =============================================================

#[test]
fn set_writes_json_record_under_constant_key() {
    let storage = memory();
    let mut store = SessionStore::empty(storage.clone());
    store.set(Identity::new("alice", Role::Admin));
    assert_eq!(storage.raw(STORAGE_KEY).as_deref(), Some(r#"{"name":"alice","role":"admin"}"#));
}

#[test]
fn clear_removes_record() {
    let storage = memory();
    let mut store = SessionStore::empty(storage.clone());
    store.set(Identity::new("alice", Role::Admin));
    store.clear();
    assert!(storage.raw(STORAGE_KEY).is_none());
    assert!(storage.is_empty());
}

#[test]
fn empty_does_not_read_storage() {
    let storage = memory();
    storage.set_item(STORAGE_KEY, r#"{"name":"alice","role":"admin"}"#).unwrap();
    let store = SessionStore::empty(storage);
    assert!(store.get().is_none());
}

// =============================================================
// Restore (simulated reload)
// =============================================================

#[test]
fn reopen_restores_identity() {
    let storage = memory();
    let mut first = SessionStore::open(storage.clone());
    first.set(Identity::new("alice", Role::Admin));
    drop(first);

    let second = SessionStore::open(storage);
    assert_eq!(second.get(), Some(&Identity::new("alice", Role::Admin)));
}

#[test]
fn reopen_after_clear_is_absent() {
    let storage = memory();
    let mut first = SessionStore::open(storage.clone());
    first.set(Identity::new("alice", Role::Admin));
    first.clear();

    let second = SessionStore::open(storage);
    assert!(second.get().is_none());
}

#[test]
fn open_on_empty_storage_is_absent() {
    let store = SessionStore::open(memory());
    assert!(store.get().is_none());
}

#[test]
fn open_with_malformed_records_is_absent() {
    for raw in ["not json", "", "null", "[]", r#"{"name":"x"}"#, r#"{"role":"admin"}"#, r#"{"name":1,"role":"admin"}"#] {
        let storage = memory();
        storage.set_item(STORAGE_KEY, raw).unwrap();
        let store = SessionStore::open(storage);
        assert!(store.get().is_none(), "expected absent for {raw:?}");
    }
}

#[test]
fn restore_replaces_slot_with_storage_contents() {
    let storage = memory();
    let mut store = SessionStore::empty(storage.clone());
    storage.set_item(STORAGE_KEY, r#"{"name":"bob","role":"user"}"#).unwrap();
    store.restore();
    assert_eq!(store.get(), Some(&Identity::new("bob", Role::User)));
}

#[test]
fn decode_record_accepts_extra_fields() {
    let identity = decode_record(r#"{"name":"a","role":"user","theme":"dark"}"#);
    assert_eq!(identity, Some(Identity::new("a", Role::User)));
}

// =============================================================
// Failing storage
// =============================================================

#[test]
fn rejecting_storage_never_blocks_memory_slot() {
    let mut store = SessionStore::open(Arc::new(RejectingStorage));
    assert!(store.get().is_none());

    store.set(Identity::new("alice", Role::Admin));
    assert_eq!(store.get(), Some(&Identity::new("alice", Role::Admin)));

    store.clear();
    assert!(store.get().is_none());
}

#[test]
fn failed_write_does_not_leave_previous_identity_for_reload() {
    let storage = Arc::new(QuotaStorage::new(1));
    let mut store = SessionStore::open(storage.clone());

    store.set(Identity::new("alice", Role::Admin));
    store.set(Identity::new("bob", Role::User));
    assert_eq!(store.get(), Some(&Identity::new("bob", Role::User)));

    let reloaded = SessionStore::open(storage);
    assert!(reloaded.get().is_none(), "reload restored {:?}", reloaded.get());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn unavailable_browser_storage_behaves_like_memory_only() {
    let mut store = SessionStore::open(Arc::new(BrowserStorage));
    store.set(Identity::new("bob", Role::User));
    assert_eq!(store.get().map(|i| i.name.as_str()), Some("bob"));
}

#[test]
fn debug_output_omits_storage_backend() {
    let store = SessionStore::empty(memory());
    let rendered = format!("{store:?}");
    assert!(rendered.starts_with("SessionStore"));
    assert!(rendered.contains("identity: None"));
}
