//! Day-to-category flow graph

use expense_common::AggregateRow;

/// Weighted edge from a day node to a category node, as node indices.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowEdge {
    pub source: usize,
    pub target: usize,
    pub weight: f64,
}

/// Two disjoint node lists (days, then categories) and one edge per aggregate row.
///
/// Node `i < days.len()` is `days[i]`; node `days.len() + j` is `categories[j]`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlowGraph {
    days: Vec<u32>,
    categories: Vec<String>,
    edges: Vec<FlowEdge>,
}

impl FlowGraph {
    /// Build from aggregate rows; nodes keep first-appearance order
    pub fn from_aggregates(rows: &[AggregateRow]) -> Self {
        let mut graph = Self::default();
        for row in rows {
            let source = graph.day_node(row.day);
            let target = graph.category_slot(&row.category);
            graph.edges.push(FlowEdge {
                source,
                target,
                weight: row.total_amount,
            });
        }

        // Category slots become node indices once every day is known
        let offset = graph.days.len();
        for edge in &mut graph.edges {
            edge.target += offset;
        }
        graph
    }

    fn day_node(&mut self, day: u32) -> usize {
        match self.days.iter().position(|&d| d == day) {
            Some(index) => index,
            None => {
                self.days.push(day);
                self.days.len() - 1
            }
        }
    }

    fn category_slot(&mut self, category: &str) -> usize {
        match self.categories.iter().position(|c| c == category) {
            Some(index) => index,
            None => {
                self.categories.push(category.to_string());
                self.categories.len() - 1
            }
        }
    }

    pub fn days(&self) -> &[u32] {
        &self.days
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.days.len() + self.categories.len()
    }

    /// Node labels: days as numbers, then category names
    pub fn labels(&self) -> Vec<String> {
        self.days
            .iter()
            .map(u32::to_string)
            .chain(self.categories.iter().cloned())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
