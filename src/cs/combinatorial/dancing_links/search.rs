//! Algorithm X over the torus.
//!
//! Both strategies visit the search tree in the same order: pick the live
//! column with the fewest rows (leftmost on ties), cover it, then try each of
//! its rows top to bottom. They differ only in where the choice points live,
//! the call stack or a `Vec`.

use std::ops::ControlFlow;

use super::node::{DancingLinks, NodeId};

/// Where the backtracking state is kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// One stack frame per chosen row.
    #[default]
    Recursive,
    /// An explicit stack of `(column, row)` choice points on the heap, for
    /// instances deep enough to threaten the call stack.
    Iterative,
}

/// Configuration options for a search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchConfig {
    pub strategy: Strategy,
    /// Stop after this many solutions. `None` searches exhaustively.
    pub max_solutions: Option<usize>,
}

impl SearchConfig {
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_max_solutions(mut self, max_solutions: usize) -> Self {
        self.max_solutions = Some(max_solutions);
        self
    }
}

/// What a search did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchReport {
    /// Number of exact covers found.
    pub solutions: usize,
    /// Number of search-tree nodes entered, the root included.
    pub nodes: u64,
    /// Largest number of rows chosen at once.
    pub max_depth: usize,
    /// False if the search stopped early because of `max_solutions`.
    pub exhausted: bool,
}

/// Receives each solution. Sinks that do not look at the rows skip the
/// bookkeeping of the partial solution entirely.
trait Sink {
    const RECORDS: bool;

    fn found(&mut self, rows: &[usize]);
}

struct Count;

impl Sink for Count {
    const RECORDS: bool = false;

    fn found(&mut self, _rows: &[usize]) {}
}

struct Emit<F>(F);

impl<F: FnMut(&[usize])> Sink for Emit<F> {
    const RECORDS: bool = true;

    fn found(&mut self, rows: &[usize]) {
        (self.0)(rows)
    }
}

struct Search<'a, S> {
    dlx: &'a mut DancingLinks,
    sink: S,
    /// Row ids of the partial solution, in choice order.
    rows: Vec<usize>,
    limit: Option<usize>,
    report: SearchReport,
}

impl<S: Sink> Search<'_, S> {
    fn enter(&mut self, depth: usize) {
        self.report.nodes += 1;
        self.report.max_depth = self.report.max_depth.max(depth);
    }

    fn record(&mut self, depth: usize) -> ControlFlow<()> {
        self.report.solutions += 1;
        log::trace!(
            "solution {} at depth {}: {:?}",
            self.report.solutions,
            depth,
            self.rows
        );
        self.sink.found(&self.rows);
        match self.limit {
            Some(limit) if self.report.solutions >= limit => ControlFlow::Break(()),
            _ => ControlFlow::Continue(()),
        }
    }

    fn choose(&mut self, row: NodeId) {
        if S::RECORDS {
            self.rows.extend(self.dlx.row_of(row));
        }
        self.dlx.cover_row(row);
    }

    fn unchoose(&mut self, row: NodeId) {
        self.dlx.uncover_row(row);
        if S::RECORDS {
            self.rows.pop();
        }
    }

    fn recurse(&mut self, depth: usize) -> ControlFlow<()> {
        self.enter(depth);
        let Some(col) = self.dlx.choose_column() else {
            return self.record(depth);
        };

        self.dlx.cover(col);
        let mut flow = ControlFlow::Continue(());
        let mut row = self.dlx.down(col);
        while row != col {
            self.choose(row);
            flow = self.recurse(depth + 1);
            self.unchoose(row);
            if flow.is_break() {
                break;
            }
            row = self.dlx.down(row);
        }
        self.dlx.uncover(col);
        flow
    }

    fn iterate(&mut self) -> ControlFlow<()> {
        // (covered column, row currently chosen from it)
        let mut frames: Vec<(NodeId, NodeId)> = Vec::new();
        let mut flow = ControlFlow::Continue(());
        loop {
            let depth = frames.len();
            self.enter(depth);
            match self.dlx.choose_column() {
                None => flow = self.record(depth),
                Some(col) => {
                    self.dlx.cover(col);
                    let row = self.dlx.down(col);
                    if row != col {
                        self.choose(row);
                        frames.push((col, row));
                        continue;
                    }
                    self.dlx.uncover(col);
                }
            }

            // Backtrack to the deepest choice point with a row left to try.
            loop {
                let Some(&(col, row)) = frames.last() else {
                    return flow;
                };
                self.unchoose(row);
                let next = self.dlx.down(row);
                if flow.is_continue() && next != col {
                    let top = frames.len() - 1;
                    frames[top].1 = next;
                    self.choose(next);
                    break;
                }
                self.dlx.uncover(col);
                frames.pop();
            }
        }
    }
}

impl DancingLinks {
    /// The live column with the fewest live rows, leftmost among equals.
    /// `None` once every column is covered.
    pub fn choose_column(&self) -> Option<NodeId> {
        let root = self.root();
        let mut c = self.right(root);
        if c == root {
            return None;
        }
        let mut best = c;
        let mut best_size = self.size(c);
        while c != root && best_size > 0 {
            if self.size(c) < best_size {
                best = c;
                best_size = self.size(c);
            }
            c = self.right(c);
        }
        Some(best)
    }

    fn run<S: Sink>(&mut self, config: &SearchConfig, sink: S) -> SearchReport {
        let mut search = Search {
            dlx: self,
            sink,
            rows: Vec::new(),
            limit: config.max_solutions,
            report: SearchReport::default(),
        };
        if config.max_solutions == Some(0) {
            return search.report;
        }
        let flow = match config.strategy {
            Strategy::Recursive => search.recurse(0),
            Strategy::Iterative => search.iterate(),
        };
        search.report.exhausted = flow.is_continue();
        log::debug!(
            "search finished: {} solutions, {} nodes, max depth {}, exhausted: {}",
            search.report.solutions,
            search.report.nodes,
            search.report.max_depth,
            search.report.exhausted
        );
        search.report
    }

    /// Runs a configurable search, calling `emit` with the row ids of each
    /// solution in the order they were chosen.
    ///
    /// The matrix is restored to its pre-call state when this returns, even
    /// if the search stopped early.
    pub fn search<F>(&mut self, config: &SearchConfig, emit: F) -> SearchReport
    where
        F: FnMut(&[usize]),
    {
        self.run(config, Emit(emit))
    }

    /// Like [`search`](Self::search), but only counts solutions and never
    /// materialises their rows.
    pub fn count_with(&mut self, config: &SearchConfig) -> SearchReport {
        self.run(config, Count)
    }

    /// Calls `emit` once per exact cover, in discovery order, and returns
    /// how many there were.
    ///
    /// # Example
    /// ```
    /// use dlx::DancingLinks;
    ///
    /// let mut dlx = DancingLinks::build(4, (0..4).map(|r| (r, vec![r]))).unwrap();
    /// let mut seen = Vec::new();
    /// let n = dlx.enumerate(|rows| seen.push(rows.to_vec()));
    /// assert_eq!(n, 1);
    /// assert_eq!(seen, vec![vec![0, 1, 2, 3]]);
    /// ```
    pub fn enumerate<F: FnMut(&[usize])>(&mut self, emit: F) -> usize {
        self.search(&SearchConfig::default(), emit).solutions
    }

    /// Number of exact covers.
    pub fn count(&mut self) -> usize {
        self.count_with(&SearchConfig::default()).solutions
    }

    /// Solve the exact cover problem, returning ALL solutions (each solution is a list of row ids).
    pub fn solve_all(&mut self) -> Vec<Vec<usize>> {
        let mut solutions = Vec::new();
        self.enumerate(|rows| solutions.push(rows.to_vec()));
        solutions
    }

    /// The first exact cover in discovery order, if any.
    pub fn first_solution(&mut self) -> Option<Vec<usize>> {
        let mut first = None;
        let config = SearchConfig::default().with_max_solutions(1);
        self.search(&config, |rows| first = Some(rows.to_vec()));
        first
    }
}

/// Enumerates every exact cover of `graph`.
///
/// With `emit`, each solution's row ids are passed to it in discovery order;
/// without, the search only counts. Returns the number of solutions.
pub fn enumerate(graph: &mut DancingLinks, emit: Option<&mut dyn FnMut(&[usize])>) -> usize {
    match emit {
        Some(emit) => graph.enumerate(emit),
        None => graph.count(),
    }
}
