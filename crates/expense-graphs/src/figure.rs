//! Serializable chart figures in the chart library's JSON schema

use expense_common::{AggregateRow, Result, ReportError};
use serde::Serialize;

/// A complete chart: traces plus layout, passed as-is to `Plotly.newPlot`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

impl Figure {
    pub fn new(trace: Trace) -> Self {
        Self {
            data: vec![trace],
            layout: Layout::default(),
        }
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    /// JSON safe to embed inside an inline `<script>` element
    pub fn to_script_json(&self) -> Result<String> {
        let json = serde_json::to_string(self)?;
        Ok(json.replace("</", "<\\/"))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Sankey(SankeyTrace),
    Pie(PieTrace),
    Bar(BarTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyTrace {
    pub arrangement: String,
    pub node: SankeyNode,
    pub link: SankeyLink,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyNode {
    pub pad: u32,
    pub thickness: u32,
    pub line: Line,
    pub label: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SankeyLink {
    pub source: Vec<usize>,
    pub target: Vec<usize>,
    pub value: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarTrace {
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovermode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_bgcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paper_bgcolor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    pub size: u32,
    pub color: String,
}

/// Totals of `rows`, failing on the first non-finite amount.
///
/// JSON has no representation for NaN or infinity, so such a total can
/// not reach a figure.
pub(crate) fn finite_totals(rows: &[AggregateRow]) -> Result<Vec<f64>> {
    rows.iter()
        .map(|row| {
            if row.total_amount.is_finite() {
                Ok(row.total_amount)
            } else {
                Err(ReportError::render(format!(
                    "total for '{}' on day {} is {}",
                    row.category, row.day, row.total_amount
                )))
            }
        })
        .collect()
}
