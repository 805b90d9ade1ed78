//! Extraction of typed expense fields from raw records

use crate::models::RawRecord;
use chrono::NaiveDate;
use expense_common::{ExpenseRow, Result, ReportError};
use expense_config::PropertyNames;
use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;
use tracing::{debug, instrument};

/// Date format accepted for the date property
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Exact `YYYY-MM-DD` shape, checked before chrono parses the value
static DATE_SHAPE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("Invalid date regex pattern")
});

const TITLE_PATH: &str = "/title/0/text/content";
const NUMBER_PATH: &str = "/number";
const RICH_TEXT_PATH: &str = "/rich_text/0/plain_text";
const DATE_PATH: &str = "/date/start";

/// Normalize one record.
///
/// Any missing or wrongly-shaped property is a [`ReportError::Data`] naming
/// the property and the record id; nothing is skipped.
pub fn normalize(record: &RawRecord, properties: &PropertyNames) -> Result<ExpenseRow> {
    let name = string_at(record, &properties.name, TITLE_PATH)?;
    let amount = number_at(record, &properties.amount)?;
    let category = string_at(record, &properties.category, RICH_TEXT_PATH)?;
    let date = date_at(record, &properties.date)?;

    Ok(ExpenseRow {
        name,
        category,
        amount,
        date,
    })
}

/// Normalize every record, preserving order
#[instrument(skip_all, fields(records = records.len()))]
pub fn normalize_all(records: &[RawRecord], properties: &PropertyNames) -> Result<Vec<ExpenseRow>> {
    let rows = records
        .iter()
        .map(|record| normalize(record, properties))
        .collect::<Result<Vec<_>>>()?;
    debug!("Normalized {} records", rows.len());
    Ok(rows)
}

fn value_at<'a>(record: &'a RawRecord, property: &str, path: &str) -> Result<&'a Value> {
    record
        .property_value(property, path)
        .ok_or_else(|| data_error(record, property, format!("property '{}' has no value at '{}'", property, path)))
}

fn string_at(record: &RawRecord, property: &str, path: &str) -> Result<String> {
    value_at(record, property, path)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| data_error(record, property, format!("property '{}' is not text", property)))
}

fn number_at(record: &RawRecord, property: &str) -> Result<f64> {
    value_at(record, property, NUMBER_PATH)?
        .as_f64()
        .ok_or_else(|| data_error(record, property, format!("property '{}' is not a number", property)))
}

fn date_at(record: &RawRecord, property: &str) -> Result<NaiveDate> {
    let raw = string_at(record, property, DATE_PATH)?;
    let invalid = || {
        data_error(
            record,
            property,
            format!("property '{}' has date '{}', expected YYYY-MM-DD", property, raw),
        )
    };
    if !DATE_SHAPE_REGEX.is_match(&raw) {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| invalid())
}

fn data_error(record: &RawRecord, property: &str, message: String) -> ReportError {
    let record_id = record.id().map(str::to_string);
    let message = match &record_id {
        Some(id) => format!("record {}: {}", id, message),
        None => message,
    };
    ReportError::data_field(message, property, record_id)
}
