//! The toroidal node arena.
//!
//! Every node lives in one `Vec` and every ring link is an index into it.
//! Slot 0 is the root, slots `1..=columns` are the column headers and the
//! data nodes follow in row order.

use std::fmt;

use crate::error::{MalformedInput, Result};

/// Handle to a node of a [`DancingLinks`] matrix.
///
/// Only meaningful for the matrix that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The position of this node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The root sentinel anchoring the header ring.
pub(crate) const ROOT: NodeId = NodeId(0);

/// Each dancing-links node links up/down/left/right in a circular list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) left: NodeId,
    pub(crate) right: NodeId,
    pub(crate) up: NodeId,
    pub(crate) down: NodeId,
    /// Header of the column this node belongs to. Headers point at themselves.
    pub(crate) header: NodeId,
    /// `None` for the root and the column headers.
    pub(crate) row: Option<usize>,
}

impl Node {
    /// A detached node whose four links point back at itself.
    pub(crate) fn self_loop(id: NodeId, header: NodeId, row: Option<usize>) -> Self {
        Node {
            left: id,
            right: id,
            up: id,
            down: id,
            header,
            row,
        }
    }
}

/// Per-column bookkeeping, indexed like the header nodes (slot 0 is the root).
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Column {
    /// Caller-facing column identifier; the root has none.
    pub(crate) id: Option<usize>,
    /// Number of data nodes currently linked into the vertical ring.
    pub(crate) size: usize,
}

/// A sparse boolean matrix stored as a torus of circular doubly linked lists.
///
/// Built once by [`DancingLinks::build`] or [`DancingLinks::from_matrix`];
/// afterwards the search only relinks existing nodes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DancingLinks {
    pub(crate) nodes: Vec<Node>,
    pub(crate) cols: Vec<Column>,
    /// Number of rows the matrix was built from, empty rows included.
    pub(crate) num_rows: usize,
}

impl DancingLinks {
    /// An arena holding the root and `column_count` headers linked into the
    /// header ring in column order.
    ///
    /// Fails with [`MalformedInput::TooManyColumns`] when the headers cannot
    /// be allocated.
    pub(crate) fn with_headers(column_count: usize) -> Result<Self> {
        let too_many = || MalformedInput::TooManyColumns { column_count };
        let slots = column_count.checked_add(1).ok_or_else(too_many)?;
        let mut nodes = Vec::new();
        let mut cols = Vec::new();
        nodes.try_reserve_exact(slots).map_err(|_| too_many())?;
        cols.try_reserve_exact(slots).map_err(|_| too_many())?;

        nodes.push(Node::self_loop(ROOT, ROOT, None));
        cols.push(Column { id: None, size: 0 });
        for c in 0..column_count {
            let id = NodeId(c + 1);
            nodes.push(Node::self_loop(id, id, None));
            cols.push(Column { id: Some(c), size: 0 });
        }
        let mut dlx = DancingLinks {
            nodes,
            cols,
            num_rows: 0,
        };
        for c in 1..=column_count {
            dlx.push_left_of(ROOT, NodeId(c));
        }
        Ok(dlx)
    }

    /// The root sentinel. The live columns are the ring `root().right ... root()`.
    pub fn root(&self) -> NodeId {
        ROOT
    }

    pub fn left(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].left
    }

    pub fn right(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].right
    }

    pub fn up(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].up
    }

    pub fn down(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].down
    }

    /// The column header owning `node`; headers return themselves.
    pub fn header(&self, node: NodeId) -> NodeId {
        self.nodes[node.0].header
    }

    /// Row identifier of a data node, `None` for headers and the root.
    pub fn row_of(&self, node: NodeId) -> Option<usize> {
        self.nodes[node.0].row
    }

    /// Column identifier of the column `node` belongs to, `None` for the root.
    pub fn column_of(&self, node: NodeId) -> Option<usize> {
        self.cols[self.header(node).0].id
    }

    /// Live node count of the column headed by `header`.
    pub fn size(&self, header: NodeId) -> usize {
        self.cols[header.0].size
    }

    pub fn is_header(&self, node: NodeId) -> bool {
        node.0 < self.cols.len()
    }

    /// Header of column `column`, if it exists. Only cheap because headers
    /// occupy a fixed block of the arena.
    pub fn column_header(&self, column: usize) -> Option<NodeId> {
        (column < self.num_columns()).then_some(NodeId(column + 1))
    }

    /// Number of columns the matrix was built with, covered or not.
    pub fn num_columns(&self) -> usize {
        self.cols.len() - 1
    }

    /// Number of rows the matrix was built with, including empty ones.
    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    /// Total number of data nodes (set bits) in the matrix.
    pub fn num_data_nodes(&self) -> usize {
        self.nodes.len() - self.cols.len()
    }

    /// True when no column is left in the header ring.
    pub fn is_solved(&self) -> bool {
        self.right(ROOT) == ROOT
    }

    /// Live column headers in ring order.
    pub fn live_columns(&self) -> RingIter<'_> {
        self.ring(ROOT, Direction::Right)
    }

    /// Walks the ring through `start` in `direction`, excluding `start` itself.
    pub fn ring(&self, start: NodeId, direction: Direction) -> RingIter<'_> {
        RingIter {
            dlx: self,
            start,
            current: self.step(start, direction),
            direction,
        }
    }

    pub(crate) fn step(&self, node: NodeId, direction: Direction) -> NodeId {
        let n = &self.nodes[node.0];
        match direction {
            Direction::Left => n.left,
            Direction::Right => n.right,
            Direction::Up => n.up,
            Direction::Down => n.down,
        }
    }

    /// Splices `node` in just left of `anchor` in the horizontal ring,
    /// i.e. at the end of the ring anchored by `anchor`.
    pub(crate) fn push_left_of(&mut self, anchor: NodeId, node: NodeId) {
        let last = self.nodes[anchor.0].left;
        self.nodes[node.0].left = last;
        self.nodes[node.0].right = anchor;
        self.nodes[last.0].right = node;
        self.nodes[anchor.0].left = node;
    }

    /// Splices `node` in just above `anchor` in the vertical ring,
    /// i.e. at the bottom of the column anchored by `anchor`.
    pub(crate) fn push_above(&mut self, anchor: NodeId, node: NodeId) {
        let last = self.nodes[anchor.0].up;
        self.nodes[node.0].up = last;
        self.nodes[node.0].down = anchor;
        self.nodes[last.0].down = node;
        self.nodes[anchor.0].up = node;
    }

    /// Checks `n.right.left == n`, `n.down.up == n` for every node and that
    /// every header's size matches the length of its vertical ring.
    pub fn is_consistent(&self) -> bool {
        let links_ok = (0..self.nodes.len()).map(NodeId).all(|n| {
            self.left(self.right(n)) == n
                && self.right(self.left(n)) == n
                && self.up(self.down(n)) == n
                && self.down(self.up(n)) == n
        });
        let sizes_ok = (1..self.cols.len())
            .map(NodeId)
            .all(|h| self.ring(h, Direction::Down).count() == self.size(h));
        links_ok && sizes_ok
    }
}

/// One of the four ring directions of the torus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// Iterator over a ring, produced by [`DancingLinks::ring`].
#[derive(Clone)]
pub struct RingIter<'a> {
    dlx: &'a DancingLinks,
    start: NodeId,
    current: NodeId,
    direction: Direction,
}

impl Iterator for RingIter<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.current == self.start {
            return None;
        }
        let node = self.current;
        self.current = self.dlx.step(node, self.direction);
        Some(node)
    }
}
