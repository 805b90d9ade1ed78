//! Integration tests for expense-config crate.

use expense_common::{LoggingConfig, ReportError};
use expense_config::{Config, ConfigError, ConfigLoader};
use std::io::Write;
use validator::Validate;

fn complete_config() -> Config {
    let mut config = Config::default();
    config.notion.api_token = "secret_abc".to_string();
    config.notion.resource_id = "a8aec43384f447ed84390e8e42c2e089".to_string();
    config.smtp.user = "reports@example.com".to_string();
    config.smtp.pass = "app-password".to_string();
    config.email.sender = "reports@example.com".to_string();
    config.email.recipients = vec!["alice@example.com".to_string()];
    config
}

#[test]
fn test_default_config_validation() {
    let mut config = Config::default();

    // Default config should fail validation due to empty secrets
    assert!(config.validate().is_err());

    config = complete_config();
    assert!(config.validate().is_ok());
}

#[test]
fn test_out_of_range_values_rejected() {
    let mut config = complete_config();
    config.notion.page_size = 101;
    assert!(config.validate().is_err());

    let mut config = complete_config();
    config.smtp.timeout_seconds = 0;
    assert!(config.validate().is_err());

    let mut config = complete_config();
    config.report.chart_library_url = "not a url".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_yaml_round_trip_through_file() {
    let config = complete_config();
    let yaml = serde_yaml::to_string(&config).unwrap();

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(yaml.as_bytes()).unwrap();

    let loaded = ConfigLoader::load_config_with(file.path(), |_| None).unwrap();
    assert_eq!(loaded.notion.resource_id, config.notion.resource_id);
    assert_eq!(loaded.email.recipients, config.email.recipients);
    assert_eq!(loaded.smtp.port, 587);
}

#[test]
fn test_config_error_converts_to_report_error() {
    let err: ReportError = ConfigError::MissingConfig("missing.yaml".to_string()).into();
    assert!(matches!(err, ReportError::Config { .. }));
    assert!(err.to_string().contains("missing.yaml"));
}

#[test]
fn test_logging_settings_conversion() {
    let mut config = complete_config();
    config.logging.level = "debug".to_string();
    config.logging.json = true;
    config.logging.file = Some("/tmp/expense-report.log".to_string());

    let logging = LoggingConfig::from(&config.logging);
    assert_eq!(logging.level, "debug");
    assert!(logging.json_format);
    assert_eq!(logging.file_path.as_deref(), Some("/tmp/expense-report.log"));
}
