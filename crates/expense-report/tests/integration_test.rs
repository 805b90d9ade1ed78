//! End-to-end tests for the report pipeline with in-memory doubles.

use expense_common::test_utils::{notion_page, notion_query_page};
use expense_common::{ReportError, ReportPeriod};
use expense_config::Config;
use expense_mailer::MockMailTransport;
use expense_notion::{MockRecordSource, QueryRequest, QueryResponse};
use expense_report::ReportPipeline;
use std::path::Path;
use std::sync::{Arc, Mutex};

fn config(output_dir: &Path) -> Config {
    let mut config = Config::default();
    config.email.sender = "reports@example.com".to_string();
    config.email.recipients = vec![
        "alice@example.com".to_string(),
        "bob@example.com".to_string(),
    ];
    config.report.output_dir = output_dir.display().to_string();
    config
}

fn may() -> ReportPeriod {
    ReportPeriod::new(2024, 5).unwrap()
}

fn response(pages: Vec<serde_json::Value>, next_cursor: Option<&str>) -> QueryResponse {
    serde_json::from_value(notion_query_page(pages, next_cursor)).unwrap()
}

#[tokio::test]
async fn test_paginated_month_is_mailed() {
    let dir = tempfile::tempdir().unwrap();

    let mut source = MockRecordSource::new();
    source.expect_query().times(2).returning(|request: QueryRequest| {
        Ok(match request.start_cursor.as_deref() {
            None => response(
                vec![
                    notion_page("p1", "Groceries", 42.5, "Food", "2024-05-03"),
                    notion_page("p2", "Cinema", 12.0, "Fun", "2024-04-30"),
                ],
                Some("next"),
            ),
            Some(_) => response(
                vec![notion_page("p3", "Bakery", 7.5, "Food", "2024-05-03")],
                None,
            ),
        })
    });

    let sent = Arc::new(Mutex::new(Vec::new()));
    let captured = Arc::clone(&sent);
    let mut transport = MockMailTransport::new();
    transport.expect_send().times(1).returning(move |message| {
        captured
            .lock()
            .unwrap()
            .push(String::from_utf8_lossy(&message.formatted()).into_owned());
        Ok(())
    });

    let pipeline = ReportPipeline::new(source, transport, &config(dir.path())).unwrap();
    let summary = pipeline.run(may(), None).await.unwrap();

    assert_eq!(summary.records_fetched, 3);
    assert_eq!(summary.rows_in_period, 2);
    assert_eq!(summary.aggregate_rows, 1);
    assert_eq!(summary.report_file, "Monthly-Report-May.html");
    assert!(!dir.path().join("Monthly-Report-May.html").exists());

    let sent = sent.lock().unwrap();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].contains("Monthly-Report for May"));
    assert!(sent[0].contains("Monthly-Report-May.html"));
}

#[tokio::test]
async fn test_empty_month_still_sends_report() {
    let dir = tempfile::tempdir().unwrap();

    let mut source = MockRecordSource::new();
    source.expect_query().times(1).returning(|_| {
        Ok(response(
            vec![notion_page("p1", "Old", 1.0, "Food", "2023-05-03")],
            None,
        ))
    });

    let mut transport = MockMailTransport::new();
    transport.expect_send().times(1).returning(|_| Ok(()));

    let pipeline = ReportPipeline::new(source, transport, &config(dir.path())).unwrap();
    let summary = pipeline.run(may(), None).await.unwrap();

    assert_eq!(summary.rows_in_period, 0);
    assert_eq!(summary.aggregate_rows, 0);
}

#[tokio::test]
async fn test_failed_delivery_keeps_report() {
    let dir = tempfile::tempdir().unwrap();

    let mut source = MockRecordSource::new();
    source.expect_query().times(1).returning(|_| {
        Ok(response(
            vec![notion_page("p1", "Groceries", 42.5, "Food", "2024-05-03")],
            None,
        ))
    });

    let mut transport = MockMailTransport::new();
    transport
        .expect_send()
        .times(1)
        .returning(|_| Err(ReportError::mail("connection reset")));

    let pipeline = ReportPipeline::new(source, transport, &config(dir.path())).unwrap();
    let err = pipeline.run(may(), None).await.unwrap_err();

    assert!(matches!(err, ReportError::Mail { .. }));
    let html = std::fs::read_to_string(dir.path().join("Monthly-Report-May.html")).unwrap();
    assert!(html.contains("Food"));
}

#[tokio::test]
async fn test_limit_issues_one_request() {
    let dir = tempfile::tempdir().unwrap();

    let mut source = MockRecordSource::new();
    source
        .expect_query()
        .withf(|request| request.page_size == 1 && request.start_cursor.is_none())
        .times(1)
        .returning(|_| {
            Ok(response(
                vec![notion_page("p1", "Groceries", 42.5, "Food", "2024-05-03")],
                Some("ignored"),
            ))
        });

    let mut transport = MockMailTransport::new();
    transport.expect_send().times(1).returning(|_| Ok(()));

    let pipeline = ReportPipeline::new(source, transport, &config(dir.path())).unwrap();
    let summary = pipeline.run(may(), Some(1)).await.unwrap();

    assert_eq!(summary.records_fetched, 1);
}

#[tokio::test]
async fn test_api_error_aborts_run() {
    let dir = tempfile::tempdir().unwrap();

    let mut source = MockRecordSource::new();
    source
        .expect_query()
        .times(1)
        .returning(|_| Err(ReportError::api_with_status("unauthorized: API token is invalid.", 401)));

    let mut transport = MockMailTransport::new();
    transport.expect_send().times(0);

    let pipeline = ReportPipeline::new(source, transport, &config(dir.path())).unwrap();
    let err = pipeline.run(may(), None).await.unwrap_err();

    assert_eq!(err.status_code(), Some(401));
}
