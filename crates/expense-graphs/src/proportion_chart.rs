//! Proportion view: pie chart of aggregate totals

use crate::figure::{finite_totals, Figure, PieTrace, Trace};
use crate::traits::ChartBuilder;
use expense_common::{AggregateRow, Result};

/// One slice per aggregate row, labelled by category.
///
/// A category spending on several days shows up as several slices.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionChart;

impl ProportionChart {
    pub fn new() -> Self {
        Self
    }
}

impl ChartBuilder for ProportionChart {
    fn name(&self) -> &'static str {
        "Pie"
    }

    fn description(&self) -> &'static str {
        "Pie Chart"
    }

    fn build(&self, rows: &[AggregateRow]) -> Result<Figure> {
        let values = finite_totals(rows)?;
        let labels = rows.iter().map(|row| row.category.clone()).collect();
        Ok(Figure::new(Trace::Pie(PieTrace { labels, values })))
    }
}
