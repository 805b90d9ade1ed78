//! Category view: bar chart of aggregate totals

use crate::figure::{finite_totals, BarTrace, Figure, Trace};
use crate::traits::ChartBuilder;
use expense_common::{AggregateRow, Result};

/// One bar per aggregate row (x = category, y = total)
#[derive(Debug, Clone, Copy, Default)]
pub struct CategoryChart;

impl CategoryChart {
    pub fn new() -> Self {
        Self
    }
}

impl ChartBuilder for CategoryChart {
    fn name(&self) -> &'static str {
        "Bar"
    }

    fn description(&self) -> &'static str {
        "Bar Graph"
    }

    fn build(&self, rows: &[AggregateRow]) -> Result<Figure> {
        let y = finite_totals(rows)?;
        let x = rows.iter().map(|row| row.category.clone()).collect();
        Ok(Figure::new(Trace::Bar(BarTrace { x, y })))
    }
}
