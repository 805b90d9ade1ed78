//! Test fixtures shared by the workspace crates.
//!
//! Enabled for dependents through the `testing` feature.

use crate::{AggregateRow, ExpenseRow};
use chrono::NaiveDate;
use serde_json::{json, Value};

/// Build a calendar date, panicking on invalid input.
pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid fixture date")
}

/// Build an expense row.
pub fn expense(name: &str, category: &str, amount: f64, date: NaiveDate) -> ExpenseRow {
    ExpenseRow {
        name: name.to_string(),
        category: category.to_string(),
        amount,
        date,
    }
}

/// Build an aggregate row.
pub fn aggregate(day: u32, category: &str, total_amount: f64) -> AggregateRow {
    AggregateRow {
        day,
        category: category.to_string(),
        total_amount,
    }
}

/// A database page in the query API's nested property shape.
pub fn notion_page(id: &str, name: &str, amount: f64, category: &str, date: &str) -> Value {
    json!({
        "object": "page",
        "id": id,
        "properties": {
            "Name": {
                "id": "title",
                "type": "title",
                "title": [{
                    "type": "text",
                    "text": { "content": name, "link": null },
                    "plain_text": name
                }]
            },
            "Amount": { "id": "amt", "type": "number", "number": amount },
            "Category": {
                "id": "cat",
                "type": "rich_text",
                "rich_text": [{
                    "type": "text",
                    "text": { "content": category, "link": null },
                    "plain_text": category
                }]
            },
            "Date": {
                "id": "dt",
                "type": "date",
                "date": { "start": date, "end": null, "time_zone": null }
            }
        }
    })
}

/// One query API response page.
pub fn notion_query_page(results: Vec<Value>, next_cursor: Option<&str>) -> Value {
    json!({
        "object": "list",
        "results": results,
        "has_more": next_cursor.is_some(),
        "next_cursor": next_cursor,
    })
}
