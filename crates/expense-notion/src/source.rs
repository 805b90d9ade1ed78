//! Seam between pagination and the HTTP transport

use crate::models::{QueryRequest, QueryResponse};
use async_trait::async_trait;
use expense_common::Result;

/// Something that answers database query requests one page at a time.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Issue exactly one query request
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse>;
}
