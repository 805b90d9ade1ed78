//! Domain types shared across the pipeline stages

use crate::error::{Result, ReportError};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One normalized expense entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRow {
    /// Expense title
    pub name: String,
    /// Free-text category
    pub category: String,
    /// Amount spent
    pub amount: f64,
    /// Calendar date of the expense
    pub date: NaiveDate,
}

/// Summed amount for one (day, category) pair within a month.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AggregateRow {
    /// Day of month, 1-31
    pub day: u32,
    /// Category text
    pub category: String,
    /// Sum of all amounts sharing this day and category
    pub total_amount: f64,
}

/// The calendar month a report covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReportPeriod {
    first_day: NaiveDate,
}

impl ReportPeriod {
    /// Create a period for the given year and month (1-12).
    pub fn new(year: i32, month: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .map(|first_day| Self { first_day })
            .ok_or_else(|| ReportError::new(format!("invalid report month {}-{}", year, month)))
    }

    /// The month containing `date`.
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// The current month according to the local clock.
    pub fn current() -> Self {
        Self::containing(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// Year-month key with zero-padded month, e.g. `2024-04`.
    pub fn key(&self) -> String {
        self.first_day.format("%Y-%m").to_string()
    }

    /// Full English month name, e.g. `April`.
    pub fn month_name(&self) -> String {
        self.first_day.format("%B").to_string()
    }

    /// Report title embedding the month name, e.g. `Monthly-Report-April`.
    pub fn report_title(&self) -> String {
        format!("Monthly-Report-{}", self.month_name())
    }

    /// Whether `date` falls inside this month.
    pub fn contains(&self, date: &NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }
}

impl fmt::Display for ReportPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key())
    }
}
