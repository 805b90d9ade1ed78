//! Flow view: Sankey diagram from days to categories

use crate::figure::{Figure, Font, Layout, Line, SankeyLink, SankeyNode, SankeyTrace, Title, Trace};
use crate::flow::FlowGraph;
use crate::traits::ChartBuilder;
use expense_common::{AggregateRow, Result};
use tracing::debug;

pub const FLOW_CHART_TITLE: &str = "Expense Flow as Sankey Diagram";

/// Sankey diagram with one link per aggregate row
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowChart;

impl FlowChart {
    pub fn new() -> Self {
        Self
    }

    fn layout() -> Layout {
        Layout {
            title: Some(Title {
                text: FLOW_CHART_TITLE.to_string(),
            }),
            hovermode: Some("x".to_string()),
            font: Some(Font {
                size: 10,
                color: "white".to_string(),
            }),
            plot_bgcolor: Some("black".to_string()),
            paper_bgcolor: Some("black".to_string()),
        }
    }
}

impl ChartBuilder for FlowChart {
    fn name(&self) -> &'static str {
        "Sankey"
    }

    fn description(&self) -> &'static str {
        "Sankey Diagram"
    }

    fn build(&self, rows: &[AggregateRow]) -> Result<Figure> {
        let value = crate::figure::finite_totals(rows)?;
        let graph = FlowGraph::from_aggregates(rows);
        debug!(
            "Flow graph with {} nodes and {} edges",
            graph.node_count(),
            graph.edges().len()
        );

        let trace = SankeyTrace {
            arrangement: "snap".to_string(),
            node: SankeyNode {
                pad: 10,
                thickness: 20,
                line: Line {
                    color: "black".to_string(),
                    width: 0.5,
                },
                label: graph.labels(),
            },
            link: SankeyLink {
                source: graph.edges().iter().map(|e| e.source).collect(),
                target: graph.edges().iter().map(|e| e.target).collect(),
                value,
            },
        };

        Ok(Figure::new(Trace::Sankey(trace)).with_layout(Self::layout()))
    }
}
