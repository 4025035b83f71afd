//! Configuration schema definitions.
//!
//! [`RawConfig`] mirrors the file as written, with every field optional so
//! that a missing value produces a precise error instead of a serde one.
//! [`Config`] is the validated form handed to the rest of the process.

use elboto_common::{LoggingConfig, Region, RoleIdentifier, Secret};
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// The settings file as written by the operator.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    /// Command prefix.
    pub command_prefix: Option<String>,
    /// Discord application client ID.
    pub client_id: Option<String>,
    /// Discord bot token.
    pub token: Option<Secret>,
    /// Valorant credentials keyed by region code, in file order.
    ///
    /// Kept as a list because region codes are case-insensitive: `NA` and
    /// `na` are distinct TOML keys that name the same region.
    #[serde(default, deserialize_with = "region_entries")]
    pub valorant_creds: Vec<(Region, RawCredentials)>,
    /// Roles allowed to use the Valorant commands.
    #[serde(default)]
    pub valorant_access_roles: Vec<RoleIdentifier>,
    /// Logging section.
    #[serde(default)]
    pub logging: RawLogging,
}

fn region_entries<'de, D>(deserializer: D) -> Result<Vec<(Region, RawCredentials)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct RegionEntries;

    impl<'de> Visitor<'de> for RegionEntries {
        type Value = Vec<(Region, RawCredentials)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a table of credentials keyed by region code")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries = Vec::new();
            while let Some(entry) = map.next_entry::<Region, RawCredentials>()? {
                entries.push(entry);
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(RegionEntries)
}

/// A credential pair as written; either half may be missing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCredentials {
    /// Riot account username.
    pub username: Option<String>,
    /// Riot account password.
    pub password: Option<Secret>,
}

/// The `[logging]` section as written.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawLogging {
    /// Filter directives.
    pub level: Option<String>,
    /// Log file path.
    pub file: Option<PathBuf>,
    /// Colorized console output.
    pub ansi: Option<bool>,
}

/// Validated bot configuration. Read-only for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Command prefix, never blank.
    pub command_prefix: String,
    /// Discord application client ID, never blank.
    pub client_id: String,
    /// Discord bot token, never blank.
    pub token: Secret,
    /// One entry for every [`Region`].
    pub valorant_creds: BTreeMap<Region, RegionCredentials>,
    /// Roles allowed to use the Valorant commands.
    pub valorant_access_roles: Vec<RoleIdentifier>,
    /// Logging setup.
    pub logging: LoggingConfig,
}

static NO_ACCOUNT: RegionCredentials = RegionCredentials::Absent;

impl Config {
    /// Returns the credentials configured for `region`.
    #[must_use]
    pub fn credentials(&self, region: Region) -> &RegionCredentials {
        self.valorant_creds.get(&region).unwrap_or(&NO_ACCOUNT)
    }

    /// Regions that have an account configured.
    pub fn configured_regions(&self) -> impl Iterator<Item = Region> + '_ {
        self.valorant_creds
            .iter()
            .filter(|(_, creds)| creds.is_configured())
            .map(|(region, _)| *region)
    }
}

/// Credentials for one region: a full account or nothing at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionCredentials {
    /// A complete username/password pair.
    Account {
        /// Riot account username.
        username: String,
        /// Riot account password.
        password: Secret,
    },
    /// No account configured for this region.
    Absent,
}

impl RegionCredentials {
    /// Convenience constructor for a full account.
    pub fn account(username: impl Into<String>, password: impl Into<Secret>) -> Self {
        Self::Account {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns the username and password, if an account is configured.
    #[must_use]
    pub fn as_account(&self) -> Option<(&str, &Secret)> {
        match self {
            Self::Account { username, password } => Some((username, password)),
            Self::Absent => None,
        }
    }

    /// Returns true if an account is configured.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        matches!(self, Self::Account { .. })
    }
}
