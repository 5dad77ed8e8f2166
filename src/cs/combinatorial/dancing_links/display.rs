use std::collections::BTreeMap;
use std::fmt;

use super::node::{DancingLinks, Direction, NodeId};

impl DancingLinks {
    /// `(column id, live node count)` for every live column, in ring order.
    pub fn column_counts(&self) -> Vec<(usize, usize)> {
        self.live_columns()
            .filter_map(|h| self.column_of(h).map(|id| (id, self.size(h))))
            .collect()
    }

    /// The rows still reachable from a live column, keyed by row id, each
    /// with one of its data nodes.
    fn live_rows(&self) -> BTreeMap<usize, NodeId> {
        let mut rows = BTreeMap::new();
        for header in self.live_columns() {
            for node in self.ring(header, Direction::Down) {
                if let Some(row) = self.row_of(node) {
                    rows.entry(row).or_insert(node);
                }
            }
        }
        rows
    }
}

/// Prints the live part of the matrix: one line of `0`/`1` per live row,
/// over the live columns in ring order.
impl fmt::Display for DancingLinks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_solved() {
            return writeln!(f, "Matrix is empty.");
        }
        let columns: Vec<NodeId> = self.live_columns().collect();
        for node in self.live_rows().into_values() {
            let mut members = vec![self.header(node)];
            members.extend(self.ring(node, Direction::Right).map(|n| self.header(n)));
            let line: Vec<&str> = columns
                .iter()
                .map(|c| if members.contains(c) { "1" } else { "0" })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
