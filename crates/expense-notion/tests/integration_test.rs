//! Integration tests for expense-notion crate.

use async_trait::async_trait;
use expense_common::test_utils::{notion_page, notion_query_page, ymd};
use expense_common::Result;
use expense_config::PropertyNames;
use expense_notion::{normalize_all, QueryRequest, QueryResponse, RecordFetcher, RecordSource};
use std::sync::Mutex;

/// Serves pre-built pages keyed by cursor and records every request.
struct ScriptedSource {
    pages: Vec<serde_json::Value>,
    requests: Mutex<Vec<QueryRequest>>,
}

impl ScriptedSource {
    fn new(pages: Vec<serde_json::Value>) -> Self {
        Self {
            pages,
            requests: Mutex::new(Vec::new()),
        }
    }
}

#[async_trait]
impl RecordSource for ScriptedSource {
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse> {
        let index = match &request.start_cursor {
            None => 0,
            Some(cursor) => cursor.trim_start_matches("cursor-").parse::<usize>().unwrap(),
        };
        self.requests.lock().unwrap().push(request);
        Ok(serde_json::from_value(self.pages[index].clone())?)
    }
}

#[tokio::test]
async fn test_fetch_and_normalize_across_pages() {
    let source = ScriptedSource::new(vec![
        notion_query_page(
            vec![
                notion_page("p1", "Groceries", 42.5, "Food", "2024-04-03"),
                notion_page("p2", "Bus pass", 20.0, "Transport", "2024-04-03"),
            ],
            Some("cursor-1"),
        ),
        notion_query_page(
            vec![notion_page("p3", "Dinner", 30.0, "Food", "2024-03-28")],
            Some("cursor-2"),
        ),
        notion_query_page(vec![], None),
    ]);

    let fetcher = RecordFetcher::new(source);
    let records = fetcher.fetch_all().await.unwrap();
    let rows = normalize_all(&records, &PropertyNames::default()).unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].name, "Groceries");
    assert_eq!(rows[2].date, ymd(2024, 3, 28));

    let requests = fetcher.source().requests.lock().unwrap();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.page_size == 100));
    assert_eq!(requests[0].start_cursor, None);
    assert_eq!(requests[2].start_cursor.as_deref(), Some("cursor-2"));
}

#[tokio::test]
async fn test_fetch_first_ignores_remaining_pages() {
    let source = ScriptedSource::new(vec![notion_query_page(
        vec![notion_page("p1", "Groceries", 42.5, "Food", "2024-04-03")],
        Some("cursor-1"),
    )]);

    let fetcher = RecordFetcher::new(source);
    let records = fetcher.fetch_first(1).await.unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(fetcher.source().requests.lock().unwrap().len(), 1);
}
