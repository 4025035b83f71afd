//! Storage error types.

use std::path::PathBuf;

/// Storage errors. Failing to create the runtime directory is fatal at startup.
#[derive(thiserror::Error, Debug)]
pub enum StorageError {
    /// The runtime directory could not be created.
    #[error("Failed to create runtime directory {path}: {source}")]
    CreateDir {
        /// The directory path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Something other than a directory already sits at the runtime path.
    #[error("Runtime path {0} exists but is not a directory")]
    NotADirectory(PathBuf),

    /// A store name that cannot be used as a file name.
    #[error("Invalid store name '{0}': use ASCII letters, digits, '-' or '_'")]
    InvalidName(String),

    /// A store file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        /// The file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// An existing store file is not valid JSON.
    #[error("Store file {path} is corrupt: {source}")]
    Corrupt {
        /// The file path.
        path: PathBuf,
        /// Underlying parse error.
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be converted to or from JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;
