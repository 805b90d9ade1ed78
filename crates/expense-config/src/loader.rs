//! Configuration loading with environment variable overrides

use crate::schema::Config;
use std::env;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info};
use validator::Validate;

/// Environment variable naming the configuration file
pub const CONFIG_PATH_ENV: &str = "EXPENSE_REPORT_CONFIG";

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O error when reading configuration file
    #[error("Failed to read configuration file: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing error
    #[error("Failed to parse YAML configuration: {0}")]
    ParseError(#[from] serde_yaml::Error),

    /// Configuration validation error
    #[error("Configuration validation failed: {0}")]
    ValidationError(#[from] validator::ValidationErrors),

    /// Environment variable parsing error
    #[error("Failed to parse environment variable '{var}': {source}")]
    EnvParseError {
        var: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Explicitly named configuration file does not exist
    #[error("Configuration file not found: {0}")]
    MissingConfig(String),
}

impl From<ConfigError> for expense_common::ReportError {
    fn from(err: ConfigError) -> Self {
        expense_common::ReportError::config(err.to_string())
    }
}

/// Configuration loader for the application
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a YAML file with process environment overrides
    pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        Self::load_config_with(path, |var| env::var(var).ok())
    }

    /// Load configuration from a YAML file, resolving overrides through `lookup`
    pub fn load_config_with<P, F>(path: P, lookup: F) -> Result<Config, ConfigError>
    where
        P: AsRef<Path>,
        F: Fn(&str) -> Option<String>,
    {
        let content = std::fs::read_to_string(path.as_ref())?;
        let mut config: Config = serde_yaml::from_str(&content)?;
        debug!("Parsed configuration from {}", path.as_ref().display());

        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Locate and load the configuration.
    ///
    /// Uses `EXPENSE_REPORT_CONFIG` when set, then `config.yaml` / `config.yml`
    /// in the working directory, else defaults plus environment overrides.
    pub fn load() -> Result<Config, ConfigError> {
        if let Ok(config_path) = env::var(CONFIG_PATH_ENV) {
            return Self::load_from_file(config_path);
        }

        for candidate in ["config.yaml", "config.yml"] {
            if Path::new(candidate).exists() {
                info!("Loading configuration from {}", candidate);
                return Self::load_config(candidate);
            }
        }

        info!("No configuration file found, using defaults and environment");
        Self::load_from_env_with(|var| env::var(var).ok())
    }

    /// Build a configuration from defaults and overrides resolved through `lookup`
    pub fn load_from_env_with<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        Self::apply_overrides(&mut config, lookup)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicitly named file, which must exist
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::MissingConfig(path.display().to_string()));
        }
        info!("Loading configuration from {}", path.display());
        Self::load_config(path)
    }

    /// Apply overrides resolved through `lookup` to configuration
    pub fn apply_overrides<F>(config: &mut Config, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Query API
        if let Some(token) = lookup("NOTION_API_TOKEN") {
            config.notion.api_token = token;
        }

        if let Some(resource_id) = lookup("NOTION_RESOURCE_ID") {
            config.notion.resource_id = resource_id;
        }

        if let Some(timeout) = lookup("NOTION_TIMEOUT") {
            config.notion.timeout_seconds = parse_var("NOTION_TIMEOUT", &timeout)?;
        }

        // Mail relay
        if let Some(host) = lookup("SMTP_HOST") {
            config.smtp.host = host;
        }

        if let Some(port) = lookup("SMTP_PORT") {
            config.smtp.port = parse_var("SMTP_PORT", &port)?;
        }

        if let Some(user) = lookup("SMTP_USER") {
            config.smtp.user = user;
        }

        if let Some(pass) = lookup("SMTP_PASS") {
            config.smtp.pass = pass;
        }

        // Addressing
        if let Some(sender) = lookup("EMAIL_SENDER") {
            config.email.sender = sender;
        }

        if let Some(recipients) = lookup("EMAIL_RECIPIENTS") {
            config.email.recipients = recipients
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Report output
        if let Some(dir) = lookup("REPORT_OUTPUT_DIR") {
            config.report.output_dir = dir;
        }

        // Logging
        if let Some(level) = lookup("LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Some(file) = lookup("LOG_FILE") {
            config.logging.file = Some(file);
        }

        if let Some(json) = lookup("LOG_JSON") {
            config.logging.json = parse_var("LOG_JSON", &json)?;
        }

        Ok(())
    }
}

fn parse_var<T>(var: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value.trim().parse().map_err(|e| ConfigError::EnvParseError {
        var: var.to_string(),
        source: Box::new(e),
    })
}
