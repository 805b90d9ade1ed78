//! Month filtering and (day, category) aggregation

use chrono::Datelike;
use expense_common::{AggregateRow, ExpenseRow, ReportPeriod};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Rows dated inside `period`, in input order
pub fn monthly_table(rows: &[ExpenseRow], period: ReportPeriod) -> Vec<ExpenseRow> {
    rows.iter()
        .filter(|row| period.contains(&row.date))
        .cloned()
        .collect()
}

/// Sum amounts per (day of month, category).
///
/// Output is ordered by day, then by category byte order, with one row per
/// pair. Rows are expected to come from a single month; days from different
/// months would be merged.
#[instrument(skip_all, fields(rows = rows.len()))]
pub fn aggregate(rows: &[ExpenseRow]) -> Vec<AggregateRow> {
    let mut totals: BTreeMap<(u32, &str), f64> = BTreeMap::new();
    for row in rows {
        *totals.entry((row.date.day(), row.category.as_str())).or_insert(0.0) += row.amount;
    }
    debug!("{} day/category totals", totals.len());

    totals
        .into_iter()
        .map(|((day, category), total_amount)| AggregateRow {
            day,
            category: category.to_string(),
            total_amount,
        })
        .collect()
}
