//! Validation utilities and regex patterns

use regex::Regex;
use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;
use validator::ValidationError;

/// Database identifiers: 32 hex digits, optionally hyphenated as a UUID
pub static RESOURCE_ID_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[0-9A-Fa-f]{8}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{4}-?[0-9A-Fa-f]{12}$",
    )
    .expect("Invalid resource id regex pattern")
});

const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

fn error_with_message(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

/// Validate a database identifier
pub fn validate_resource_id(resource_id: &str) -> Result<(), ValidationError> {
    if resource_id.is_empty() {
        return Err(error_with_message(
            "empty_resource_id",
            "Resource id cannot be empty",
        ));
    }

    if RESOURCE_ID_REGEX.is_match(resource_id) {
        Ok(())
    } else {
        Err(error_with_message(
            "invalid_resource_id",
            "Resource id must be 32 hexadecimal digits",
        ))
    }
}

/// Validate that every recipient is a distinct, well-formed email address
pub fn validate_recipients(recipients: &[String]) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for recipient in recipients {
        if !validator::validate_email(recipient.as_str()) {
            return Err(error_with_message(
                "invalid_recipient",
                format!("Recipient '{}' is not a valid email address", recipient),
            ));
        }
        if !seen.insert(recipient.to_ascii_lowercase()) {
            return Err(error_with_message(
                "duplicate_recipient",
                format!("Recipient '{}' is listed more than once", recipient),
            ));
        }
    }
    Ok(())
}

/// Validate a log level or a comma-separated list of `target=level` directives
pub fn validate_log_level(level: &str) -> Result<(), ValidationError> {
    let valid = !level.trim().is_empty()
        && level.split(',').all(|directive| {
            let level = directive.rsplit('=').next().unwrap_or_default().trim();
            LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str())
        });

    if valid {
        Ok(())
    } else {
        Err(error_with_message(
            "invalid_log_level",
            "Log level must be one of: trace, debug, info, warn, error, off",
        ))
    }
}

/// Validate the report output directory path (basic check for valid path characters)
pub fn validate_output_dir(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() {
        return Err(error_with_message(
            "empty_output_dir",
            "Output directory cannot be empty",
        ));
    }

    // Colon stays allowed for Windows drive letters
    let invalid_chars = ['<', '>', '"', '|', '?', '*'];
    if path.chars().any(|c| invalid_chars.contains(&c)) {
        return Err(error_with_message(
            "invalid_output_dir_characters",
            "Output directory contains invalid characters",
        ));
    }

    Ok(())
}
