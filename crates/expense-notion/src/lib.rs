//! # Expense Notion
//!
//! Fetches expense records from a Notion database and normalizes them into
//! [`expense_common::ExpenseRow`] values.
//!
//! [`RecordFetcher`] drives cursor pagination over any [`RecordSource`];
//! [`NotionClient`] is the HTTP implementation.

pub mod client;
pub mod models;
pub mod normalizer;
pub mod pagination;
pub mod source;

pub use client::NotionClient;
pub use models::{QueryRequest, QueryResponse, RawRecord};
pub use normalizer::{normalize, normalize_all};
pub use pagination::{RecordFetcher, MAX_PAGE_SIZE};
pub use source::RecordSource;

#[cfg(any(test, feature = "testing"))]
pub use source::MockRecordSource;
