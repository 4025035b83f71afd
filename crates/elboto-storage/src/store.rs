//! Named JSON key/value documents kept in the runtime directory.

use crate::error::{StorageError, StorageResult};
use crate::runtime_dir::RuntimeDir;
use parking_lot::Mutex;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

type Entries = BTreeMap<String, Value>;

/// A persistent string-keyed map stored as `<runtime>/<name>.json`.
///
/// The whole document is cached in memory and rewritten on every change.
/// Writes go through a temporary file that replaces the document, so readers
/// never see a half-written file. The internal mutex serializes writers
/// within the process; nothing guards against a second process.
#[derive(Debug)]
pub struct PersistentStore {
    name: String,
    dir: RuntimeDir,
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl PersistentStore {
    /// Opens the store called `name` (case-insensitive) inside `dir`.
    ///
    /// Loads the existing document if there is one; otherwise starts empty
    /// and makes sure the runtime directory exists for the first write.
    pub fn open(dir: &RuntimeDir, name: &str) -> StorageResult<Self> {
        let name = name.to_ascii_lowercase();
        if name.is_empty()
            || !name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(StorageError::InvalidName(name));
        }

        let path = dir.join(format!("{name}.json"));
        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
                path: path.clone(),
                source,
            })?,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                dir.ensure()?;
                Entries::new()
            }
            Err(source) => return Err(StorageError::Io { path, source }),
        };

        debug!(store = %name, entries = entries.len(), "Opened persistent store");
        Ok(Self {
            name,
            dir: dir.clone(),
            path,
            entries: Mutex::new(entries),
        })
    }

    /// The normalized store name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All keys, sorted.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.entries.lock().keys().cloned().collect()
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Returns true if the store has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Returns true if `key` is present.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Reads and deserializes the value under `key`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> StorageResult<Option<T>> {
        let value = self.entries.lock().get(key).cloned();
        value
            .map(serde_json::from_value)
            .transpose()
            .map_err(StorageError::from)
    }

    /// Deserializes every entry, in key order.
    pub fn entries<T: DeserializeOwned>(&self) -> StorageResult<Vec<(String, T)>> {
        let entries = self.entries.lock().clone();
        entries
            .into_iter()
            .map(|(key, value)| -> StorageResult<(String, T)> {
                Ok((key, serde_json::from_value(value)?))
            })
            .collect()
    }

    /// Stores `value` under `key` and flushes the document.
    ///
    /// On a failed flush the in-memory entry is rolled back.
    pub fn insert<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.entries.lock();
        let previous = entries.insert(key.to_string(), value);

        if let Err(err) = self.flush(&entries) {
            match previous {
                Some(previous) => entries.insert(key.to_string(), previous),
                None => entries.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }

    /// Removes `key`. Returns whether it was present.
    pub fn remove(&self, key: &str) -> StorageResult<bool> {
        let mut entries = self.entries.lock();
        let Some(previous) = entries.remove(key) else {
            return Ok(false);
        };

        if let Err(err) = self.flush(&entries) {
            entries.insert(key.to_string(), previous);
            return Err(err);
        }
        Ok(true)
    }

    fn flush(&self, entries: &Entries) -> StorageResult<()> {
        let io_err = |source: std::io::Error| StorageError::Io {
            path: self.path.clone(),
            source,
        };

        let text = serde_json::to_vec_pretty(entries)?;
        let mut file = tempfile::NamedTempFile::new_in(self.dir.path()).map_err(io_err)?;
        file.write_all(&text).map_err(io_err)?;
        file.as_file().sync_all().map_err(io_err)?;
        file.persist(&self.path).map_err(|err| {
            warn!(store = %self.name, error = %err, "Failed to replace store file");
            io_err(err.error)
        })?;

        debug!(store = %self.name, entries = entries.len(), "Flushed persistent store");
        Ok(())
    }
}
