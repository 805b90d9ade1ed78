//! # Expense Graphs
//!
//! Turns normalized expense rows into the monthly report: aggregation by
//! day and category, the three chart figures, and the tabbed HTML document.

pub mod aggregator;
pub mod category_chart;
pub mod document;
pub mod figure;
pub mod flow;
pub mod flow_chart;
pub mod proportion_chart;
pub mod traits;

pub use aggregator::{aggregate, monthly_table};
pub use category_chart::CategoryChart;
pub use document::{ReportDocument, ReportRenderer};
pub use figure::{Figure, Trace};
pub use flow::{FlowEdge, FlowGraph};
pub use flow_chart::FlowChart;
pub use proportion_chart::ProportionChart;
pub use traits::ChartBuilder;
