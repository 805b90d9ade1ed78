//! Wire types for the database query endpoint

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of a database query request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryRequest {
    /// Records requested in this page (1-100)
    pub page_size: u32,
    /// Cursor returned by the previous page; absent for the first page
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub start_cursor: Option<String>,
}

impl QueryRequest {
    /// Request for the first page
    pub fn first(page_size: u32) -> Self {
        Self {
            page_size,
            start_cursor: None,
        }
    }

    /// Request for the page starting at `cursor`
    pub fn after(page_size: u32, cursor: impl Into<String>) -> Self {
        Self {
            page_size,
            start_cursor: Some(cursor.into()),
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResponse {
    pub results: Vec<RawRecord>,
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

/// Error object returned with non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// A database page in its native nested-property JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRecord(Value);

impl RawRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Page identifier, used in diagnostics
    pub fn id(&self) -> Option<&str> {
        self.0.get("id").and_then(Value::as_str)
    }

    /// Value at `path` below the named property, if present and not null.
    ///
    /// `path` is a JSON pointer relative to the property object,
    /// e.g. `/title/0/text/content`.
    pub fn property_value(&self, property: &str, path: &str) -> Option<&Value> {
        let pointer = format!("/properties/{}{}", escape_pointer_token(property), path);
        self.0.pointer(&pointer).filter(|value| !value.is_null())
    }
}

impl From<Value> for RawRecord {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

fn escape_pointer_token(token: &str) -> String {
    token.replace('~', "~0").replace('/', "~1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_first_request_omits_cursor() {
        let body = serde_json::to_value(QueryRequest::first(100)).unwrap();
        assert_eq!(body, json!({ "page_size": 100 }));

        let body = serde_json::to_value(QueryRequest::after(50, "abc")).unwrap();
        assert_eq!(body, json!({ "page_size": 50, "start_cursor": "abc" }));
    }

    #[test]
    fn test_response_deserialization() {
        let response: QueryResponse = serde_json::from_value(json!({
            "object": "list",
            "results": [{ "id": "p1", "properties": {} }],
            "has_more": true,
            "next_cursor": "c1",
            "type": "page_or_database"
        }))
        .unwrap();

        assert_eq!(response.results.len(), 1);
        assert_eq!(response.results[0].id(), Some("p1"));
        assert!(response.has_more);
        assert_eq!(response.next_cursor.as_deref(), Some("c1"));
    }

    #[test]
    fn test_property_value_escapes_names() {
        let record = RawRecord::new(json!({
            "id": "p1",
            "properties": {
                "Cost/Item": { "number": 3.5 },
                "Empty": { "number": null }
            }
        }));

        assert_eq!(
            record.property_value("Cost/Item", "/number"),
            Some(&json!(3.5))
        );
        assert_eq!(record.property_value("Empty", "/number"), None);
        assert_eq!(record.property_value("Missing", "/number"), None);
    }
}
