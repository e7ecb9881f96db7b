//! Core configuration types and loading.

use groupmute_proto::{GroupId, MemberId};
use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Bot identity.
    pub bot: BotConfig,
    /// Log output configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Prometheus endpoint configuration.
    #[serde(default)]
    pub metrics: MetricsConfig,
    /// Static group rosters used by the console transport for role lookups.
    #[serde(default)]
    pub groups: Vec<GroupBlock>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Bot identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Phone number of the bot account, digits only (e.g., "1234567890").
    pub number: String,
    /// Display name used in logs.
    #[serde(default = "default_bot_name")]
    pub name: String,
}

impl BotConfig {
    /// The bot's member id as it appears in group participant lists.
    pub fn member_id(&self) -> MemberId {
        MemberId::from_number(&self.number)
    }
}

fn default_bot_name() -> String {
    "groupmute".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
    /// Default filter directive, overridden by `RUST_LOG` (default: "info").
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            filter: default_log_filter(),
        }
    }
}

fn default_log_filter() -> String {
    "info".to_string()
}

/// Prometheus metrics configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MetricsConfig {
    /// Port for the `/metrics` HTTP endpoint. Disabled when unset.
    pub port: Option<u16>,
}

/// A group roster entry.
#[derive(Debug, Clone, Deserialize)]
pub struct GroupBlock {
    /// Group identifier (e.g., "120363041234567890@g.us").
    pub id: String,
    /// Admin member ids or bare phone numbers.
    #[serde(default)]
    pub admins: Vec<String>,
    /// Other known members.
    #[serde(default)]
    pub members: Vec<String>,
}

impl GroupBlock {
    pub fn group_id(&self) -> GroupId {
        GroupId::new(self.id.trim())
    }

    /// Admin ids, with bare phone numbers expanded to account ids.
    pub fn admin_ids(&self) -> Vec<MemberId> {
        self.admins.iter().map(|a| member_id(a)).collect()
    }

    pub fn member_ids(&self) -> Vec<MemberId> {
        self.members.iter().map(|m| member_id(m)).collect()
    }
}

fn member_id(raw: &str) -> MemberId {
    let raw = raw.trim();
    if raw.contains('@') {
        MemberId::new(raw)
    } else {
        MemberId::from_number(raw)
    }
}
