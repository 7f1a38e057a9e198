//! # mediconnect-storage
//!
//! Key-value stores that hold the persisted MediConnect session.
//!
//! ## Overview
//!
//! Both stores implement [`KeyValueStore`](mediconnect_core::traits::KeyValueStore):
//!
//! - [`InMemoryStore`]: shared `HashMap`, for tests and embedding.
//! - [`FileStore`]: one JSON file per key under a directory, for the CLI.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use mediconnect_core::SessionStore;
//! use mediconnect_storage::FileStore;
//!
//! let sessions = SessionStore::new(Arc::new(FileStore::open(".mediconnect")?));
//! ```

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::InMemoryStore;

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use mediconnect_contracts::{
        error::PortalError,
        session::{Role, Session, SessionLookup, SESSION_KEY},
    };
    use mediconnect_core::{traits::KeyValueStore, SessionStore};

    use super::{FileStore, InMemoryStore};

    fn patient() -> Session {
        Session {
            email: "john@example.com".to_string(),
            role: Role::Patient,
            name: "John Doe".to_string(),
            id: "PAT456".to_string(),
            license_id: None,
            authenticated: true,
        }
    }

    // ── InMemoryStore ─────────────────────────────────────────────────────────

    #[test]
    fn memory_set_get_remove() {
        let store = InMemoryStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("k").unwrap(), None);

        store.set("k", "v1").unwrap();
        store.set("k", "v2").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v2"));
        assert_eq!(store.len(), 1);

        store.remove("k").unwrap();
        store.remove("k").unwrap();
        assert_eq!(store.get("k").unwrap(), None);
    }

    #[test]
    fn memory_clones_share_contents() {
        let a = InMemoryStore::new();
        let b = a.clone();
        a.set(SESSION_KEY, "{}").unwrap();
        assert_eq!(b.get(SESSION_KEY).unwrap().as_deref(), Some("{}"));
    }

    /// A poisoned lock surfaces as a storage error, which the session store
    /// reports as corrupt state rather than a logged-in user.
    #[test]
    fn memory_poisoned_lock_reads_as_corrupt_session() {
        let store = InMemoryStore::new();
        let sessions = SessionStore::new(Arc::new(store.clone()));
        sessions.save(&patient()).unwrap();

        let values = Arc::clone(&store.values);
        let _ = std::thread::spawn(move || {
            let _guard = values.lock().unwrap();
            panic!("poison the store");
        })
        .join();

        assert!(store.get(SESSION_KEY).is_err());
        assert!(matches!(sessions.lookup(), SessionLookup::Corrupt { .. }));
        assert!(!sessions.is_authenticated());
    }

    // ── FileStore ─────────────────────────────────────────────────────────────

    #[test]
    fn file_session_survives_reopen() {
        let tmp = tempfile::tempdir().unwrap();

        let first = SessionStore::new(Arc::new(FileStore::open(tmp.path()).unwrap()));
        first.save(&patient()).unwrap();

        let reopened = SessionStore::new(Arc::new(FileStore::open(tmp.path()).unwrap()));
        assert_eq!(reopened.current(), Some(patient()));

        reopened.clear().unwrap();
        assert_eq!(first.lookup(), SessionLookup::Empty);
    }

    #[test]
    fn file_remove_missing_key_is_ok() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        store.remove(SESSION_KEY).unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn file_truncated_record_is_corrupt() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();
        let raw = serde_json::to_string(&patient()).unwrap();
        store.set(SESSION_KEY, &raw[..raw.len() / 2]).unwrap();

        let sessions = SessionStore::new(Arc::new(store));
        assert!(matches!(sessions.lookup(), SessionLookup::Corrupt { .. }));
    }

    #[test]
    fn file_keys_cannot_escape_the_directory() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        let path = store.path_for(SESSION_KEY).unwrap();
        assert_eq!(path.parent(), Some(tmp.path()));
        assert_eq!(
            path.file_name().and_then(|n| n.to_str()),
            Some("mediconnect.user.json")
        );

        for key in ["../../etc/passwd", "a/b", "", ".", "..", "user name"] {
            assert!(
                matches!(store.path_for(key), Err(PortalError::Storage { .. })),
                "{key:?} should be rejected"
            );
            assert!(store.set(key, "x").is_err());
            assert!(store.get(key).is_err());
        }
    }

    #[test]
    fn file_distinct_keys_never_share_data() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set("mediconnect_user", "A").unwrap();
        store.set("mediconnect-user", "B").unwrap();
        store.set(".mediconnect_user", "C").unwrap();
        assert!(store.set("mediconnect/user", "D").is_err());

        assert_eq!(store.get("mediconnect_user").unwrap().as_deref(), Some("A"));
        assert_eq!(store.get("mediconnect-user").unwrap().as_deref(), Some("B"));
        assert_eq!(store.get(".mediconnect_user").unwrap().as_deref(), Some("C"));
    }

    #[test]
    fn file_set_replaces_whole_record_and_leaves_no_temp_files() {
        let tmp = tempfile::tempdir().unwrap();
        let store = FileStore::open(tmp.path()).unwrap();

        store.set(SESSION_KEY, &"x".repeat(4096)).unwrap();
        store.set(SESSION_KEY, "short").unwrap();
        assert_eq!(store.get(SESSION_KEY).unwrap().as_deref(), Some("short"));

        let names: Vec<String> = std::fs::read_dir(tmp.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["mediconnect.user.json"]);
    }
}
