//! Configuration schema definitions using serde with validation attributes.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Main configuration structure.
///
/// Every section falls back to its defaults when omitted, so a file only
/// needs the secrets and addresses; validation rejects empty required keys.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Config {
    /// Query API configuration
    #[validate]
    pub notion: NotionConfig,
    /// Mail relay configuration
    #[validate]
    pub smtp: SmtpConfig,
    /// Message addressing and content
    #[validate]
    pub email: EmailConfig,
    /// Report document settings
    #[validate]
    pub report: ReportConfig,
    /// Logging settings
    #[validate]
    pub logging: LoggingSettings,
}

/// Query API configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct NotionConfig {
    /// Integration bearer token
    #[validate(length(min = 1, message = "API token cannot be empty"))]
    pub api_token: String,

    /// Identifier of the database holding the expense records
    #[validate(custom = "crate::validation::validate_resource_id")]
    pub resource_id: String,

    /// API base URL
    #[validate(url(message = "API base URL must be a valid URL"))]
    pub api_base_url: String,

    /// Value sent in the `Notion-Version` header
    #[validate(length(min = 1, message = "API version cannot be empty"))]
    pub notion_version: String,

    /// Records requested per page when fetching everything
    #[validate(range(min = 1, max = 100, message = "Page size must be between 1 and 100"))]
    pub page_size: u32,

    /// Request timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,

    /// Names of the database properties holding each field
    #[validate]
    pub properties: PropertyNames,
}

/// Names of the database properties read by the normalizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct PropertyNames {
    /// Title property holding the expense name
    #[validate(length(min = 1, message = "Property name cannot be empty"))]
    pub name: String,
    /// Number property holding the amount
    #[validate(length(min = 1, message = "Property name cannot be empty"))]
    pub amount: String,
    /// Rich text property holding the category
    #[validate(length(min = 1, message = "Property name cannot be empty"))]
    pub category: String,
    /// Date property holding the expense date
    #[validate(length(min = 1, message = "Property name cannot be empty"))]
    pub date: String,
}

/// Mail relay configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SmtpConfig {
    /// Relay host name
    #[serde(alias = "smtp_host")]
    #[validate(length(min = 1, message = "SMTP host cannot be empty"))]
    pub host: String,

    /// Submission port (STARTTLS)
    #[serde(alias = "smtp_port")]
    #[validate(range(min = 1, message = "SMTP port cannot be 0"))]
    pub port: u16,

    /// Login user name
    #[serde(alias = "smtp_user")]
    #[validate(length(min = 1, message = "SMTP user cannot be empty"))]
    pub user: String,

    /// Login password
    #[serde(alias = "smtp_pass")]
    #[validate(length(min = 1, message = "SMTP password cannot be empty"))]
    pub pass: String,

    /// Connection and command timeout in seconds
    #[validate(range(min = 1, max = 300, message = "Timeout must be between 1 and 300 seconds"))]
    pub timeout_seconds: u64,
}

/// Message addressing and content.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct EmailConfig {
    /// Sender address
    #[validate(email(message = "Sender must be a valid email address"))]
    pub sender: String,

    /// Recipient addresses, all addressed in one submission
    #[validate(
        length(min = 1, message = "At least one recipient is required"),
        custom = "crate::validation::validate_recipients"
    )]
    pub recipients: Vec<String>,

    /// Plain-text body
    pub body: String,
}

/// Report document settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory the report file is written to before delivery
    #[validate(custom = "crate::validation::validate_output_dir")]
    pub output_dir: String,

    /// Stylesheet linked from the document head
    #[validate(url(message = "Stylesheet URL must be a valid URL"))]
    pub stylesheet_url: Option<String>,

    /// Chart library script included from a CDN
    #[validate(url(message = "Chart library URL must be a valid URL"))]
    pub chart_library_url: String,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct LoggingSettings {
    /// Level or filter directives (e.g. "info", "expense_notion=debug")
    #[validate(custom = "crate::validation::validate_log_level")]
    pub level: String,

    /// Optional log file path
    pub file: Option<String>,

    /// Whether to emit JSON lines
    pub json: bool,

    /// Whether to use colored console output
    pub colored: bool,
}

impl From<&LoggingSettings> for expense_common::LoggingConfig {
    fn from(settings: &LoggingSettings) -> Self {
        Self {
            level: settings.level.clone(),
            json_format: settings.json,
            colored: settings.colored,
            file_path: settings.file.clone(),
            ..Self::default()
        }
    }
}
