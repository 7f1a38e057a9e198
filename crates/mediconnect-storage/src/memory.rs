//! In-memory implementation of `KeyValueStore`.
//!
//! `InMemoryStore` keeps every key in a `HashMap` behind `Arc<Mutex<_>>`.
//! Clones share the same map, so a test can hold one handle while the portal
//! holds another and both observe the same session.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use tracing::debug;

use mediconnect_contracts::error::{PortalError, PortalResult};
use mediconnect_core::traits::KeyValueStore;

/// A process-local key-value store. Contents vanish with the process.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    pub(crate) values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of keys currently stored.
    pub fn len(&self) -> usize {
        self.values.lock().map(|v| v.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn poisoned(e: impl std::fmt::Display) -> PortalError {
    PortalError::Storage {
        reason: format!("store lock poisoned: {}", e),
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        let values = self.values.lock().map_err(poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        let mut values = self.values.lock().map_err(poisoned)?;
        values.insert(key.to_string(), value.to_string());
        debug!(key = %key, bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        let mut values = self.values.lock().map_err(poisoned)?;
        let existed = values.remove(key).is_some();
        debug!(key = %key, existed, "removed value");
        Ok(())
    }
}
