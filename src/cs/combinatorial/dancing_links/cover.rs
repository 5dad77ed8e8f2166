//! Reversible cover/uncover of columns.
//!
//! `uncover` replays `cover` backwards: rows bottom to top, and within a row
//! right to left. Only the complete pair is an identity on the torus; the
//! individual relinks do not commute.

use super::node::{DancingLinks, NodeId};

impl DancingLinks {
    /// Removes column `col` from the header ring, then unlinks every other
    /// node of every row in the column from its own column.
    ///
    /// `col` must be a live column header. The column's own vertical ring is
    /// left intact so [`uncover`](Self::uncover) can walk it again.
    pub(crate) fn cover(&mut self, col: NodeId) {
        debug_assert!(col.0 != 0 && self.is_header(col), "cover needs a column header");
        let left_col = self.nodes[col.0].left;
        let right_col = self.nodes[col.0].right;
        self.nodes[left_col.0].right = right_col;
        self.nodes[right_col.0].left = left_col;

        let mut row_node = self.nodes[col.0].down;
        while row_node != col {
            let mut node = self.nodes[row_node.0].right;
            while node != row_node {
                let up = self.nodes[node.0].up;
                let down = self.nodes[node.0].down;
                self.nodes[up.0].down = down;
                self.nodes[down.0].up = up;
                self.cols[self.nodes[node.0].header.0].size -= 1;
                node = self.nodes[node.0].right;
            }
            row_node = self.nodes[row_node.0].down;
        }
    }

    /// Exact inverse of [`cover`](Self::cover). Must be called on the most
    /// recently covered column that has not been uncovered yet.
    pub(crate) fn uncover(&mut self, col: NodeId) {
        debug_assert!(col.0 != 0 && self.is_header(col), "uncover needs a column header");
        let mut row_node = self.nodes[col.0].up;
        while row_node != col {
            let mut node = self.nodes[row_node.0].left;
            while node != row_node {
                let up = self.nodes[node.0].up;
                let down = self.nodes[node.0].down;
                self.cols[self.nodes[node.0].header.0].size += 1;
                self.nodes[up.0].down = node;
                self.nodes[down.0].up = node;
                node = self.nodes[node.0].left;
            }
            row_node = self.nodes[row_node.0].up;
        }

        let left_col = self.nodes[col.0].left;
        let right_col = self.nodes[col.0].right;
        self.nodes[left_col.0].right = col;
        self.nodes[right_col.0].left = col;
    }

    /// Covers the column of every node of `row_node`'s row except its own,
    /// walking right.
    pub(crate) fn cover_row(&mut self, row_node: NodeId) {
        let mut node = self.nodes[row_node.0].right;
        while node != row_node {
            self.cover(self.nodes[node.0].header);
            node = self.nodes[node.0].right;
        }
    }

    /// Undoes [`cover_row`](Self::cover_row), walking left.
    pub(crate) fn uncover_row(&mut self, row_node: NodeId) {
        let mut node = self.nodes[row_node.0].left;
        while node != row_node {
            self.uncover(self.nodes[node.0].header);
            node = self.nodes[node.0].left;
        }
    }
}
