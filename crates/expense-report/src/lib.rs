//! # Expense Report
//!
//! Monthly expense report: fetches expense records from a Notion database,
//! charts the current month and emails the resulting HTML report.
//!
//! The binary wires [`ReportPipeline`] to the real query API and SMTP relay;
//! tests drive it with in-memory doubles.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod pipeline;

pub use pipeline::{ReportPipeline, RunSummary};
