//! Chart builder trait definitions for the report panels.

use crate::figure::Figure;
use expense_common::{AggregateRow, Result};

/// Builds one chart figure from the month's aggregate rows.
pub trait ChartBuilder: Send + Sync {
    /// Panel identifier, also used as the element id in the document.
    fn name(&self) -> &'static str;

    /// Human-readable label shown on the panel's tab button.
    fn description(&self) -> &'static str;

    /// Builds the figure. Empty input yields an empty but valid figure.
    fn build(&self, rows: &[AggregateRow]) -> Result<Figure>;
}
