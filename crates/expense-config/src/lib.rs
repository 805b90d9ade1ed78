//! Configuration management for the monthly expense report
//!
//! Settings come from a YAML file, are overridden by environment variables
//! and validated before any network I/O happens.

pub mod defaults;
pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ConfigLoader, CONFIG_PATH_ENV};
pub use schema::{
    Config, EmailConfig, LoggingSettings, NotionConfig, PropertyNames, ReportConfig, SmtpConfig,
};
