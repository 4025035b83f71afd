//! Structured logging infrastructure for Elboto.

use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter: everything at info, with serenity's HTTP chatter held back to warnings.
pub const DEFAULT_LOG_FILTER: &str = "info,serenity::http=warn";

/// Logging setup errors.
#[derive(thiserror::Error, Debug)]
pub enum LoggingError {
    /// The filter directive string could not be parsed.
    #[error("Invalid log filter '{directives}': {source}")]
    Filter {
        /// The rejected directives.
        directives: String,
        /// Underlying parse error.
        #[source]
        source: tracing_subscriber::filter::ParseError,
    },

    /// The log file could not be opened.
    #[error("Failed to open log file {path}: {source}")]
    File {
        /// The log file path.
        path: PathBuf,
        /// Underlying appender error.
        #[source]
        source: tracing_appender::rolling::InitError,
    },

    /// A global subscriber was already installed.
    #[error("Failed to install global subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Configuration for the logging system.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directives (e.g. "info", "elboto=debug"). `RUST_LOG` takes precedence.
    pub level: String,
    /// Optional file that receives a copy of every event.
    pub file_path: Option<PathBuf>,
    /// Whether to colorize console output.
    pub ansi: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_FILTER.to_string(),
            file_path: None,
            ansi: true,
        }
    }
}

impl LoggingConfig {
    /// Builds the env filter, preferring `RUST_LOG` over the configured level.
    ///
    /// A `RUST_LOG` that is set but unparsable is an error, not a fallback.
    pub fn env_filter(&self) -> Result<EnvFilter, LoggingError> {
        let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
        self.filter_with_override(from_env.as_deref())
    }

    fn filter_with_override(&self, env_directives: Option<&str>) -> Result<EnvFilter, LoggingError> {
        let directives = env_directives.unwrap_or(self.level.as_str());
        EnvFilter::try_new(directives).map_err(|source| LoggingError::Filter {
            directives: directives.to_string(),
            source,
        })
    }
}

/// Initialize the tracing subscriber with the given configuration.
///
/// The returned guard flushes the file writer on drop, so the caller must
/// hold it for the lifetime of the process.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>, LoggingError> {
    let env_filter = config.env_filter()?;

    let (file_layer, guard) = match &config.file_path {
        Some(path) => {
            let (writer, guard) = tracing_appender::non_blocking(open_log_file(path)?);
            let layer = fmt::layer()
                .with_ansi(false)
                .with_target(true)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_ansi(config.ansi).with_target(true))
        .with(file_layer)
        .try_init()?;

    Ok(guard)
}

fn open_log_file(path: &std::path::Path) -> Result<RollingFileAppender, LoggingError> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or_else(|| PathBuf::from("."), PathBuf::from);
    let file_name = path
        .file_name()
        .map_or_else(|| "elboto.log".into(), |name| name.to_string_lossy().into_owned());

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|source| LoggingError::File {
            path: path.to_path_buf(),
            source,
        })
}
