//! File-backed implementation of `KeyValueStore`.
//!
//! Each key is one file, `<dir>/<key>.json`, replaced atomically on every `set`.
//! This gives the CLI the same durability browser local storage gives the
//! portal: a session survives across invocations until logout removes it.

use std::{
    fs,
    io::{ErrorKind, Write},
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;
use tracing::debug;

use mediconnect_contracts::error::{PortalError, PortalResult};
use mediconnect_core::traits::KeyValueStore;

/// A key-value store rooted at a directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn open(dir: impl AsRef<Path>) -> PortalResult<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|e| PortalError::Storage {
            reason: format!("failed to create store directory '{}': {}", dir.display(), e),
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// The file backing `key`.
    ///
    /// Keys are namespaced identifiers such as `mediconnect.user`. A key must
    /// be non-empty, use only `[A-Za-z0-9._-]`, and not consist of dots alone;
    /// anything else is rejected, so each key names its own file inside the
    /// store directory.
    pub fn path_for(&self, key: &str) -> PortalResult<PathBuf> {
        let valid_chars = key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if key.is_empty() || !valid_chars || key.chars().all(|c| c == '.') {
            return Err(PortalError::Storage {
                reason: format!("invalid store key '{}'", key),
            });
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> PortalResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortalError::Storage {
                reason: format!("failed to read '{}': {}", path.display(), e),
            }),
        }
    }

    /// Writes a temporary file in the store directory and renames it over the
    /// target. Readers see either the old record or the new one.
    fn set(&self, key: &str, value: &str) -> PortalResult<()> {
        let path = self.path_for(key)?;
        let write_err = |e: std::io::Error| PortalError::Storage {
            reason: format!("failed to write '{}': {}", path.display(), e),
        };

        let mut tmp = NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.as_file().sync_all().map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;

        debug!(key = %key, path = %path.display(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> PortalResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                debug!(key = %key, path = %path.display(), "removed value");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(PortalError::Storage {
                reason: format!("failed to remove '{}': {}", path.display(), e),
            }),
        }
    }
}
