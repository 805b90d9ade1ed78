//! Default values for every configuration section.

use crate::schema::*;

/// Query API base URL.
pub const DEFAULT_API_BASE_URL: &str = "https://api.notion.com";

/// Query API version header value.
pub const DEFAULT_NOTION_VERSION: &str = "2022-06-28";

/// Page size used when fetching every record.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Stylesheet linked from the report head.
pub const DEFAULT_STYLESHEET_URL: &str = "https://codepen.io/chriddyp/pen/bWLwgP.css";

/// Chart library included from the CDN.
pub const DEFAULT_CHART_LIBRARY_URL: &str = "https://cdn.plot.ly/plotly-2.27.0.min.js";

impl Default for NotionConfig {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            resource_id: String::new(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            notion_version: DEFAULT_NOTION_VERSION.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            timeout_seconds: 30,
            properties: PropertyNames::default(),
        }
    }
}

impl Default for PropertyNames {
    fn default() -> Self {
        Self {
            name: "Name".to_string(),
            amount: "Amount".to_string(),
            category: "Category".to_string(),
            date: "Date".to_string(),
        }
    }
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: "smtp.gmail.com".to_string(),
            port: 587,
            user: String::new(),
            pass: String::new(),
            timeout_seconds: 30,
        }
    }
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            sender: String::new(),
            recipients: Vec::new(),
            body: "Please find the monthly report of your expenses attached.".to_string(),
        }
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: ".".to_string(),
            stylesheet_url: Some(DEFAULT_STYLESHEET_URL.to_string()),
            chart_library_url: DEFAULT_CHART_LIBRARY_URL.to_string(),
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            json: false,
            colored: true,
        }
    }
}
