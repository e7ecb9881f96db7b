//! Configuration loading and management.
//!
//! - [`types`]: Config struct definitions and TOML loading
//! - [`validation`]: Startup validation collecting every problem at once

mod types;
pub mod validation;

pub use types::{
    BotConfig, Config, ConfigError, GroupBlock, LogFormat, LoggingConfig, MetricsConfig,
};
pub use validation::{ValidationError, validate};
