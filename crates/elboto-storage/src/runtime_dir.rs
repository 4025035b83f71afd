//! The runtime state directory.

use crate::error::{StorageError, StorageResult};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Runtime directory location, relative to the working directory.
pub const DEFAULT_RUNTIME_DIR: &str = "runtime";

/// A directory for state that must outlive a single session.
///
/// Created on demand and never removed by the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeDir {
    path: PathBuf,
}

impl RuntimeDir {
    /// Refers to the directory at `path` without touching the filesystem.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The directory path.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path of `file_name` inside the directory.
    #[must_use]
    pub fn join(&self, file_name: impl AsRef<Path>) -> PathBuf {
        self.path.join(file_name)
    }

    /// Makes sure the directory exists. Does nothing if it already does.
    pub fn ensure(&self) -> StorageResult<()> {
        if self.path.is_dir() {
            debug!(path = %self.path.display(), "Runtime directory already exists");
            return Ok(());
        }
        if self.path.exists() {
            return Err(StorageError::NotADirectory(self.path.clone()));
        }

        std::fs::create_dir_all(&self.path).map_err(|source| StorageError::CreateDir {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), "Created runtime directory");
        Ok(())
    }
}

impl Default for RuntimeDir {
    fn default() -> Self {
        Self::new(DEFAULT_RUNTIME_DIR)
    }
}
