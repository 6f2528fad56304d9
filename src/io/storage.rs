//! Durable key-value storage and the best-effort JSON adapter on top of it.
//!
//! The adapter never fails: reads fall back to a caller-supplied default and
//! writes swallow errors after logging them. The in-memory state held by the
//! caller stays authoritative for the session either way.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Error type for key-value store operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("invalid storage key: {0:?}")]
    InvalidKey(String),
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not encode value: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("storage unavailable")]
    Unavailable,
}

/// A host-provided string key-value store that survives restarts
pub trait KeyValueStore {
    /// Raw value under `key`, `None` if never written
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    /// Replace the value under `key`
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Directory-backed store: each key lives in `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File backing `key`. Keys are restricted to `[A-Za-z0-9_-]` so they
    /// cannot escape the store directory.
    pub fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Read { path, source }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        let write_err = |source: std::io::Error| StorageError::Write {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(&self.dir).map_err(write_err)?;
        // Write next to the target then rename, so a crash never leaves a
        // half-written file behind.
        let mut tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(write_err)?;
        tmp.write_all(value.as_bytes()).map_err(write_err)?;
        tmp.persist(&path).map_err(|e| write_err(e.error))?;
        Ok(())
    }
}

/// In-process store. Used by tests, and as a last resort when no data
/// directory is usable.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    unavailable: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a raw value
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    /// Make every later `get`/`set` fail, like a disabled or full store
    pub fn set_unavailable(&mut self, unavailable: bool) {
        self.unavailable = unavailable;
    }

    /// Raw stored value, bypassing the availability switch
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.unavailable {
            return Err(StorageError::Unavailable);
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Best-effort JSON access to a [`KeyValueStore`]
#[derive(Debug, Clone)]
pub struct Storage<S> {
    backend: S,
}

impl<S: KeyValueStore> Storage<S> {
    pub fn new(backend: S) -> Self {
        Storage { backend }
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Decode the JSON value under `key`, or `fallback` if it is absent,
    /// unreadable, or malformed.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let Some(raw) = self.load_raw(key) else {
            return fallback;
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                warn!(key, error = %e, "stored value is not valid; using default");
                fallback
            }
        }
    }

    /// Raw text under `key`. Empty values count as absent.
    pub fn load_raw(&self, key: &str) -> Option<String> {
        match self.backend.get(key) {
            Ok(Some(raw)) if !raw.is_empty() => Some(raw),
            Ok(_) => None,
            Err(e) => {
                warn!(key, error = %e, "could not read stored value; using default");
                None
            }
        }
    }

    /// Encode `value` as JSON and store it under `key`. Failures are logged
    /// and swallowed; the return value reports whether the write happened.
    pub fn save<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        let result = serde_json::to_string(value)
            .map_err(StorageError::from)
            .and_then(|json| self.backend.set(key, &json));
        match result {
            Ok(()) => {
                debug!(key, "saved");
                true
            }
            Err(e) => {
                warn!(key, error = %e, "could not save; keeping in-memory state only");
                false
            }
        }
    }
}
