//! Cursor-following pagination over a [`RecordSource`]

use crate::models::{QueryRequest, RawRecord};
use crate::source::RecordSource;
use expense_common::{ensure, Result, ReportError};
use expense_config::defaults::DEFAULT_PAGE_SIZE;
use futures::stream::{self, Stream, TryStreamExt};
use tracing::{debug, info, instrument};

/// Largest page the query endpoint accepts
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Cursor {
    Start,
    At(String),
    Done,
}

/// Fetches raw records page by page.
#[derive(Debug)]
pub struct RecordFetcher<S> {
    source: S,
    page_size: u32,
}

impl<S: RecordSource> RecordFetcher<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Use a different page size when fetching everything
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Lazy stream of result pages.
    ///
    /// Nothing is requested until polled. Each poll issues one request and the
    /// stream ends after the page reporting `has_more = false`. Calling this
    /// again starts over from the first page.
    pub fn pages(&self) -> impl Stream<Item = Result<Vec<RawRecord>>> + '_ {
        let source = &self.source;
        let page_size = self.page_size;

        stream::try_unfold(Cursor::Start, move |cursor| async move {
            let request = match cursor {
                Cursor::Done => return Ok(None),
                Cursor::Start => QueryRequest::first(page_size),
                Cursor::At(cursor) => QueryRequest::after(page_size, cursor),
            };

            let response = source.query(request).await?;
            debug!(
                "Received page with {} records (has_more = {})",
                response.results.len(),
                response.has_more
            );

            let next = match (response.has_more, response.next_cursor) {
                (false, _) => Cursor::Done,
                (true, Some(cursor)) if !cursor.is_empty() => Cursor::At(cursor),
                (true, _) => {
                    return Err(ReportError::api(
                        "Response reports more results but carries no next cursor",
                    ))
                }
            };

            Ok(Some((response.results, next)))
        })
    }

    /// Every record in the database, in response order
    #[instrument(skip(self), fields(page_size = self.page_size))]
    pub async fn fetch_all(&self) -> Result<Vec<RawRecord>> {
        let records: Vec<RawRecord> = self.pages().try_concat().await?;
        info!("Fetched {} records", records.len());
        Ok(records)
    }

    /// At most `limit` records from a single request; the cursor is not followed
    #[instrument(skip(self))]
    pub async fn fetch_first(&self, limit: u32) -> Result<Vec<RawRecord>> {
        ensure!(
            (1..=MAX_PAGE_SIZE).contains(&limit),
            ReportError::config(format!(
                "Record limit must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, limit
            ))
        );

        let response = self.source.query(QueryRequest::first(limit)).await?;
        info!("Fetched {} records", response.results.len());
        Ok(response.results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QueryResponse;
    use crate::source::MockRecordSource;
    use expense_common::test_utils::{notion_page, notion_query_page};
    use futures::StreamExt;
    use mockall::{predicate::eq, Sequence};

    fn page(ids: &[&str], next_cursor: Option<&str>) -> QueryResponse {
        let results = ids
            .iter()
            .map(|id| notion_page(id, "Lunch", 12.0, "Food", "2024-04-03"))
            .collect();
        serde_json::from_value(notion_query_page(results, next_cursor)).unwrap()
    }

    fn ids(records: &[RawRecord]) -> Vec<&str> {
        records.iter().filter_map(RawRecord::id).collect()
    }

    #[tokio::test]
    async fn test_three_pages_three_requests() {
        let mut source = MockRecordSource::new();
        let mut seq = Sequence::new();

        let first = page(&["a", "b"], Some("c1"));
        let second = page(&["c"], Some("c2"));
        let third = page(&["d", "e"], None);

        source
            .expect_query()
            .with(eq(QueryRequest::first(100)))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(first));
        source
            .expect_query()
            .with(eq(QueryRequest::after(100, "c1")))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(second));
        source
            .expect_query()
            .with(eq(QueryRequest::after(100, "c2")))
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(third));

        let fetcher = RecordFetcher::new(source);
        let records = fetcher.fetch_all().await.unwrap();

        assert_eq!(ids(&records), vec!["a", "b", "c", "d", "e"]);
    }

    #[tokio::test]
    async fn test_single_page() {
        let mut source = MockRecordSource::new();
        let only = page(&["a"], None);
        source
            .expect_query()
            .times(1)
            .return_once(move |_| Ok(only));

        let records = RecordFetcher::new(source).fetch_all().await.unwrap();
        assert_eq!(ids(&records), vec!["a"]);
    }

    #[tokio::test]
    async fn test_stream_is_lazy_and_restartable() {
        let mut source = MockRecordSource::new();
        source
            .expect_query()
            .with(eq(QueryRequest::first(100)))
            .times(2)
            .returning(|_| Ok(page(&["a"], Some("c1"))));

        let fetcher = RecordFetcher::new(source);

        // Building the stream issues nothing; each restart requests the first page again
        let _unpolled = fetcher.pages();
        for _ in 0..2 {
            let mut pages = Box::pin(fetcher.pages());
            let first = pages.next().await.unwrap().unwrap();
            assert_eq!(ids(&first), vec!["a"]);
        }
    }

    #[tokio::test]
    async fn test_missing_cursor_is_fatal() {
        let mut source = MockRecordSource::new();
        let broken = page(&["a"], None);
        source.expect_query().times(1).return_once(move |_| {
            Ok(QueryResponse {
                has_more: true,
                ..broken
            })
        });

        let err = RecordFetcher::new(source).fetch_all().await.unwrap_err();
        assert!(matches!(err, ReportError::Api { .. }));
    }

    #[tokio::test]
    async fn test_error_stops_pagination() {
        let mut source = MockRecordSource::new();
        let mut seq = Sequence::new();
        let first = page(&["a"], Some("c1"));

        source
            .expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(move |_| Ok(first));
        source
            .expect_query()
            .times(1)
            .in_sequence(&mut seq)
            .return_once(|_| Err(ReportError::api_with_status("rate_limited", 429)));

        let err = RecordFetcher::new(source).fetch_all().await.unwrap_err();
        assert_eq!(err.status_code(), Some(429));
    }

    #[tokio::test]
    async fn test_fetch_first_single_request() {
        let mut source = MockRecordSource::new();
        let limited = page(&["a", "b"], Some("c1"));
        source
            .expect_query()
            .with(eq(QueryRequest::first(2)))
            .times(1)
            .return_once(move |_| Ok(limited));

        let records = RecordFetcher::new(source).fetch_first(2).await.unwrap();
        assert_eq!(ids(&records), vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_fetch_first_rejects_bad_limit() {
        let fetcher = RecordFetcher::new(MockRecordSource::new());
        assert!(fetcher.fetch_first(0).await.is_err());
        assert!(fetcher.fetch_first(101).await.is_err());
    }

    #[tokio::test]
    async fn test_custom_page_size() {
        let mut source = MockRecordSource::new();
        let only = page(&[], None);
        source
            .expect_query()
            .with(eq(QueryRequest::first(25)))
            .times(1)
            .return_once(move |_| Ok(only));

        let records = RecordFetcher::new(source)
            .with_page_size(25)
            .fetch_all()
            .await
            .unwrap();
        assert!(records.is_empty());
    }
}
