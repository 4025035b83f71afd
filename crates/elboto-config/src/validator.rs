//! Turns a [`RawConfig`] into a validated [`Config`].

use crate::loader::ConfigError;
use crate::schema::{Config, RawConfig, RawCredentials, RawLogging, RegionCredentials};
use elboto_common::{LoggingConfig, Region, RoleIdentifier};
use std::collections::BTreeMap;

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates a raw configuration and converts it into its immutable form.
    ///
    /// Every known region ends up in the credential map; regions the file does
    /// not mention are recorded as [`RegionCredentials::Absent`].
    pub fn validate(raw: RawConfig) -> Result<Config, ConfigError> {
        let command_prefix = required_string(raw.command_prefix, "command_prefix")?;
        let client_id = required_string(raw.client_id, "client_id")?;
        let token = match raw.token {
            Some(token) if !token.is_blank() => token,
            _ => return Err(ConfigError::MissingField("token")),
        };

        let valorant_creds = Self::validate_credentials(raw.valorant_creds)?;
        Self::validate_roles(&raw.valorant_access_roles)?;

        Ok(Config {
            command_prefix,
            client_id,
            token,
            valorant_creds,
            valorant_access_roles: raw.valorant_access_roles,
            logging: logging_config(raw.logging),
        })
    }

    fn validate_credentials(
        entries: Vec<(Region, RawCredentials)>,
    ) -> Result<BTreeMap<Region, RegionCredentials>, ConfigError> {
        let mut raw = BTreeMap::new();
        for (region, creds) in entries {
            if raw.insert(region, creds).is_some() {
                return Err(ConfigError::Validation(format!(
                    "valorant_creds lists region {region} more than once"
                )));
            }
        }

        Region::ALL
            .into_iter()
            .map(|region| {
                let creds = raw.remove(&region).unwrap_or_default();
                Ok((region, region_credentials(region, creds)?))
            })
            .collect()
    }

    fn validate_roles(roles: &[RoleIdentifier]) -> Result<(), ConfigError> {
        for role in roles {
            if let RoleIdentifier::Name(name) = role {
                if name.trim().is_empty() {
                    return Err(ConfigError::Validation(
                        "valorant_access_roles must not contain blank role names".to_string(),
                    ));
                }
            }
        }
        Ok(())
    }
}

fn required_string(value: Option<String>, field: &'static str) -> Result<String, ConfigError> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::MissingField(field)),
    }
}

fn region_credentials(
    region: Region,
    raw: RawCredentials,
) -> Result<RegionCredentials, ConfigError> {
    // Blank strings count as not set.
    let username = raw.username.filter(|username| !username.trim().is_empty());
    let password = raw.password.filter(|password| !password.is_blank());

    match (username, password) {
        (Some(username), Some(password)) => Ok(RegionCredentials::Account { username, password }),
        (None, None) => Ok(RegionCredentials::Absent),
        _ => Err(ConfigError::PartialCredentials { region }),
    }
}

fn logging_config(raw: RawLogging) -> LoggingConfig {
    let defaults = LoggingConfig::default();
    LoggingConfig {
        level: raw.level.unwrap_or(defaults.level),
        file_path: raw.file.or(defaults.file_path),
        ansi: raw.ansi.unwrap_or(defaults.ansi),
    }
}
