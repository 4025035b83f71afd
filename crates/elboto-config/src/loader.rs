//! Configuration loading from the operator-authored TOML file.

use crate::defaults::{CONFIG_PATH_ENV, DEFAULT_CONFIG_PATH};
use crate::schema::{Config, RawConfig};
use crate::validator::ConfigValidator;
use elboto_common::Region;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration loading errors. All of them are fatal at startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file is missing or unreadable.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// The configuration file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML or has the wrong shape.
    ///
    /// Only the parser message and line are kept; the offending source line
    /// is dropped because it may hold the token.
    #[error(
        "Failed to parse configuration{}: {message}",
        .line.map_or_else(String::new, |l| format!(" at line {l}"))
    )]
    Parse {
        /// 1-based line of the error, when known.
        line: Option<usize>,
        /// Parser message.
        message: String,
    },

    /// A required field is missing or blank.
    #[error("Missing required configuration: {0}")]
    MissingField(&'static str),

    /// Only one of username/password was given for a region.
    #[error("Incomplete Valorant credentials for region {region}: username and password must both be set or both be omitted")]
    PartialCredentials {
        /// The offending region.
        region: Region,
    },

    /// Any other validation failure.
    #[error("Configuration validation failed: {0}")]
    Validation(String),
}

impl ConfigError {
    fn from_toml(err: &toml::de::Error, contents: &str) -> Self {
        let line = err.span().map(|span| {
            let end = span.start.min(contents.len());
            contents.as_bytes()[..end].iter().filter(|b| **b == b'\n').count() + 1
        });
        Self::Parse {
            line,
            message: err.message().to_string(),
        }
    }
}

/// Loads the configuration file from a fixed location.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    path: PathBuf,
}

impl ConfigLoader {
    /// Creates a loader for an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a loader for `$ELBOTO_CONFIG_PATH`, or `config.toml` in the
    /// working directory when the variable is unset.
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(resolve_config_path(std::env::var_os(CONFIG_PATH_ENV)))
    }

    /// The path this loader reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads, parses, and validates the configuration file.
    ///
    /// Nothing is logged here: the logging settings live in this file, so
    /// the subscriber is installed only after it has loaded.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let contents = std::fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Self::parse_str(&contents)
    }

    /// Parses and validates configuration text.
    pub fn parse_str(contents: &str) -> Result<Config, ConfigError> {
        let raw: RawConfig =
            toml::from_str(contents).map_err(|err| ConfigError::from_toml(&err, contents))?;
        ConfigValidator::validate(raw)
    }
}

/// Picks the configuration path from an optional override.
#[must_use]
pub fn resolve_config_path(override_path: Option<OsString>) -> PathBuf {
    override_path
        .filter(|path| !path.is_empty())
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::RegionCredentials;
    use elboto_common::test_utils::{config_fixtures, create_temp_dir, write_config};
    use elboto_common::{RoleIdentifier, Secret};

    #[test]
    fn test_load_valid_config() {
        let dir = create_temp_dir();
        let path = write_config(dir.path(), config_fixtures::VALID);

        let config = ConfigLoader::new(&path).load().expect("Failed to load config");

        assert_eq!(config.command_prefix, ">");
        assert_eq!(config.client_id, "abc123");
        assert_eq!(config.token, Secret::new("secrettoken"));
        assert_eq!(
            config.credentials(Region::Na),
            &RegionCredentials::account("u", "p")
        );
        for region in [Region::Eu, Region::Ap, Region::Ko] {
            assert_eq!(config.credentials(region), &RegionCredentials::Absent);
        }
        assert_eq!(
            config.valorant_access_roles,
            vec![RoleIdentifier::Name("Mods".to_string()), RoleIdentifier::Id(42)]
        );
    }

    #[test]
    fn test_missing_config_file() {
        let result = ConfigLoader::new("/nonexistent/path/config.toml").load();
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_invalid_toml() {
        let result = ConfigLoader::parse_str("command_prefix = \">\"\ntoken = [unclosed");
        match result {
            Err(ConfigError::Parse { line, .. }) => assert_eq!(line, Some(2)),
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_error_does_not_echo_token_line() {
        let err = ConfigLoader::parse_str("command_prefix = \">\"\ntoken = hunter2secret\n")
            .unwrap_err();
        assert!(!err.to_string().contains("hunter2secret"));
    }

    #[test]
    fn test_non_string_token_does_not_echo_value() {
        let err = ConfigLoader::parse_str(
            "command_prefix = \">\"\nclient_id = \"abc\"\ntoken = 918273645\n",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.to_string().contains("918273645"));
    }

    #[test]
    fn test_unknown_region_rejected() {
        let result = ConfigLoader::parse_str(config_fixtures::UNKNOWN_REGION);
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let text = format!("{}tokne = \"typo\"\n", config_fixtures::MINIMAL);
        assert!(matches!(
            ConfigLoader::parse_str(&text),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_region_listed_twice_rejected_in_either_order() {
        let partial_first = format!(
            "{}[valorant_creds]\nNA = {{ username = \"u\" }}\nna = {{ username = \"u\", password = \"p\" }}\n",
            config_fixtures::MINIMAL
        );
        let full_first = format!(
            "{}[valorant_creds]\nna = {{ username = \"first\", password = \"p1\" }}\nNA = {{ username = \"second\", password = \"p2\" }}\n",
            config_fixtures::MINIMAL
        );

        for text in [partial_first, full_first] {
            match ConfigLoader::parse_str(&text) {
                Err(ConfigError::Validation(message)) => {
                    assert!(message.contains("na"), "unexpected message: {message}");
                    assert!(!message.contains("p1") && !message.contains("p2"));
                }
                other => panic!("expected validation error, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_resolve_config_path() {
        assert_eq!(resolve_config_path(None), PathBuf::from(DEFAULT_CONFIG_PATH));
        assert_eq!(
            resolve_config_path(Some(OsString::new())),
            PathBuf::from(DEFAULT_CONFIG_PATH)
        );
        assert_eq!(
            resolve_config_path(Some(OsString::from("/etc/elboto.toml"))),
            PathBuf::from("/etc/elboto.toml")
        );
    }
}
