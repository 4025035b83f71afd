//! Application-wide error types using thiserror.

use elboto_config::ConfigError;
use elboto_storage::StorageError;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration error.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Runtime directory or store error.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Logging could not be set up.
    #[error(transparent)]
    Logging(#[from] elboto_common::LoggingError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
