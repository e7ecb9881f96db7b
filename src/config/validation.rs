//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use groupmute_proto::GroupId;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("bot.number is required")]
    MissingBotNumber,
    #[error("bot.number must contain only digits, got '{0}'")]
    InvalidBotNumber(String),
    #[error("groups[{index}].id is not a group identifier: '{id}'")]
    InvalidGroupId { index: usize, id: String },
    #[error("group '{0}' is listed more than once")]
    DuplicateGroup(String),
    #[error("group '{0}' has an empty admin entry")]
    EmptyAdmin(String),
    #[error("metrics.port must not be 0")]
    InvalidMetricsPort,
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let number = config.bot.number.trim();
    if number.is_empty() {
        errors.push(ValidationError::MissingBotNumber);
    } else if !number.chars().all(|c| c.is_ascii_digit()) {
        errors.push(ValidationError::InvalidBotNumber(number.to_string()));
    }

    let mut seen = HashSet::new();
    for (index, group) in config.groups.iter().enumerate() {
        if group.id.parse::<GroupId>().is_err() {
            errors.push(ValidationError::InvalidGroupId {
                index,
                id: group.id.clone(),
            });
            continue;
        }
        if !seen.insert(group.group_id()) {
            errors.push(ValidationError::DuplicateGroup(group.id.clone()));
        }
        if group.admins.iter().any(|a| a.trim().is_empty()) {
            errors.push(ValidationError::EmptyAdmin(group.id.clone()));
        }
    }

    if config.metrics.port == Some(0) {
        errors.push(ValidationError::InvalidMetricsPort);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
