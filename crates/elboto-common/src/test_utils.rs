//! Test utilities and shared fixtures for Elboto.
//!
//! Enabled for this crate's own tests and, through the `testing` feature,
//! for integration tests of the other workspace crates.

use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Initialize logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let _ = fmt().with_test_writer().with_env_filter(filter).try_init();
    });
}

/// Create a temporary directory for tests that automatically cleans up.
pub fn create_temp_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("Failed to create temporary directory")
}

/// Write `contents` to `config.toml` inside `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.toml");
    std::fs::write(&path, contents).expect("Failed to write config fixture");
    path
}

/// Configuration file fixtures.
pub mod config_fixtures {
    /// The canonical well-formed configuration: NA has an account, the rest are absent.
    pub const VALID: &str = r#"
command_prefix = ">"
client_id = "abc123"
token = "secrettoken"
valorant_access_roles = ["Mods", 42]

[valorant_creds]
na = { username = "u", password = "p" }
eu = {}
"#;

    /// A configuration with only the required fields.
    pub const MINIMAL: &str = r#"
command_prefix = "!"
client_id = "1234567890"
token = "minimal-token"
"#;

    /// NA has a username but no password.
    pub const PARTIAL_CREDENTIALS: &str = r#"
command_prefix = ">"
client_id = "abc123"
token = "secrettoken"

[valorant_creds]
na = { username = "u" }
"#;

    /// A region code outside the known set.
    pub const UNKNOWN_REGION: &str = r#"
command_prefix = ">"
client_id = "abc123"
token = "secrettoken"

[valorant_creds]
oce = { username = "u", password = "p" }
"#;

    /// Builds a configuration with the given required fields and no optional sections.
    #[must_use]
    pub fn with_required(prefix: &str, client_id: &str, token: &str) -> String {
        format!("command_prefix = {prefix:?}\nclient_id = {client_id:?}\ntoken = {token:?}\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_creates_file() {
        let dir = create_temp_dir();
        let path = write_config(dir.path(), config_fixtures::MINIMAL);
        assert!(path.exists());
        assert_eq!(std::fs::read_to_string(path).unwrap(), config_fixtures::MINIMAL);
    }

    #[test]
    fn test_with_required_is_valid_toml() {
        let text = config_fixtures::with_required("?", "id", "tok");
        let value: toml::Table = text.parse().unwrap();
        assert_eq!(value["command_prefix"].as_str(), Some("?"));
    }
}
