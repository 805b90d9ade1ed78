//! Integration tests for expense-common crate.

use chrono::NaiveDate;
use expense_common::{AggregateRow, ExpenseRow, ReportError, ReportPeriod};

#[test]
fn test_expense_row_serde() {
    let row = ExpenseRow {
        name: "Groceries".to_string(),
        category: "Food".to_string(),
        amount: 42.5,
        date: NaiveDate::from_ymd_opt(2024, 4, 3).unwrap(),
    };

    let json = serde_json::to_value(&row).unwrap();
    assert_eq!(json["date"], "2024-04-03");
    assert_eq!(json["amount"], 42.5);

    let back: ExpenseRow = serde_json::from_value(json).unwrap();
    assert_eq!(back, row);
}

#[test]
fn test_aggregate_row_fields() {
    let row = AggregateRow {
        day: 14,
        category: "Transport".to_string(),
        total_amount: 20.0,
    };
    assert_eq!(row.day, 14);
    assert_eq!(row.category, "Transport");
}

#[test]
fn test_period_for_each_month() {
    let names = [
        "January", "February", "March", "April", "May", "June", "July", "August", "September",
        "October", "November", "December",
    ];
    for (index, name) in names.iter().enumerate() {
        let month = index as u32 + 1;
        let period = ReportPeriod::new(2025, month).unwrap();
        assert_eq!(period.month_name(), *name);
        assert_eq!(period.key(), format!("2025-{:02}", month));
    }
}

#[test]
fn test_current_period_contains_today() {
    let today = chrono::Local::now().date_naive();
    assert!(ReportPeriod::current().contains(&today));
}

#[test]
fn test_error_display() {
    let err = ReportError::render("total for Food is NaN");
    assert_eq!(err.to_string(), "Render error: total for Food is NaN");
}
