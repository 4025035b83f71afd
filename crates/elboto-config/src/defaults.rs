//! Default values and well-known locations.

/// Environment variable that overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "ELBOTO_CONFIG_PATH";

/// Configuration file location, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";
