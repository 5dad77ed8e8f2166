//! Dancing Links (Algorithm X) over a toroidal sparse matrix.
//!
//! This solves the "Exact Cover" problem by selecting rows so that every
//! column is covered exactly once. Every node of the matrix sits in two
//! circular doubly linked lists, one per row and one per column, so a column
//! and all rows touching it can be unlinked and relinked in place while
//! Knuth's Algorithm X backtracks through the choices.
//!
//! # Example
//! ```
//! // 4 columns (C0..C3) and 6 rows. Each row says which columns it covers.
//! //   R0: [1, 0, 1, 0]
//! //   R1: [1, 0, 0, 1]
//! //   R2: [0, 1, 1, 0]
//! //   R3: [0, 1, 0, 1]
//! //   R4: [1, 0, 1, 0]  (same as R0)
//! //   R5: [0, 1, 0, 1]  (same as R3)
//! use dlx::DancingLinks;
//!
//! let matrix = vec![
//!     vec![true,  false, true,  false], // R0
//!     vec![true,  false, false, true ], // R1
//!     vec![false, true,  true,  false], // R2
//!     vec![false, true,  false, true ], // R3
//!     vec![true,  false, true,  false], // R4
//!     vec![false, true,  false, true ], // R5
//! ];
//!
//! let mut dlx = DancingLinks::from_matrix(4, &matrix).unwrap();
//! // Rows come back in the order they were chosen.
//! assert_eq!(
//!     dlx.solve_all(),
//!     vec![vec![0, 3], vec![0, 5], vec![1, 2], vec![4, 3], vec![4, 5]]
//! );
//! assert_eq!(dlx.count(), 5);
//! ```
//!
//! Only the search mutates the torus, and it always hands it back in its
//! original state. Covering a column by hand is not part of the public API:
//!
//! ```compile_fail
//! let mut dlx = dlx::DancingLinks::build(1, vec![(0, vec![0])]).unwrap();
//! let root = dlx.root();
//! dlx.cover(root);
//! ```

mod builder;
mod cover;
mod display;
mod node;
mod search;

pub use builder::build;
pub use node::{DancingLinks, Direction, NodeId, RingIter};
pub use search::{enumerate, SearchConfig, SearchReport, Strategy};
