//! HTTP client for the database query endpoint

use crate::models::{ApiErrorBody, QueryRequest, QueryResponse};
use crate::source::RecordSource;
use async_trait::async_trait;
use expense_common::{Result, ReportError};
use expense_config::NotionConfig;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, error, instrument};
use url::Url;

const NOTION_VERSION_HEADER: &str = "notion-version";

/// Query client authenticated with a static bearer token
#[derive(Debug, Clone)]
pub struct NotionClient {
    client: Client,
    query_url: Url,
}

impl NotionClient {
    /// Create a new client from the query API configuration
    pub fn new(config: &NotionConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();

        let mut auth = HeaderValue::from_str(&format!("Bearer {}", config.api_token))
            .map_err(|e| ReportError::config_with_source("API token is not a valid header value", e))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let version = HeaderValue::from_str(&config.notion_version)
            .map_err(|e| ReportError::config_with_source("API version is not a valid header value", e))?;
        headers.insert(HeaderName::from_static(NOTION_VERSION_HEADER), version);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| ReportError::network_with_source("Failed to create HTTP client", e))?;

        let query_url = build_query_url(&config.api_base_url, &config.resource_id)?;

        Ok(Self { client, query_url })
    }

    /// Endpoint every query is posted to
    pub fn query_url(&self) -> &Url {
        &self.query_url
    }
}

#[async_trait]
impl RecordSource for NotionClient {
    #[instrument(skip(self))]
    async fn query(&self, request: QueryRequest) -> Result<QueryResponse> {
        debug!("Posting query with page size {}", request.page_size);

        let response = self
            .client
            .post(self.query_url.clone())
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ReportError::network_with_source("Failed to read response body", e))?;

        parse_query_response(status, &body)
    }
}

/// `{base}/v1/databases/{id}/query`
pub fn build_query_url(base_url: &str, resource_id: &str) -> Result<Url> {
    let raw = format!(
        "{}/v1/databases/{}/query",
        base_url.trim_end_matches('/'),
        resource_id
    );
    Url::parse(&raw).map_err(|e| ReportError::config_with_source(format!("Invalid query URL '{}'", raw), e))
}

/// Turn a status and body into a page or an API error
pub fn parse_query_response(status: StatusCode, body: &str) -> Result<QueryResponse> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    let message = match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody {
            code: Some(code),
            message: Some(message),
        }) => format!("{}: {}", code, message),
        Ok(ApiErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ => format!("Query API returned status {}", status),
    };

    error!("Query failed with status {}: {}", status, message);
    Err(ReportError::api_with_status(message, status.as_u16()))
}
