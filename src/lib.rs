//! Exact cover via Knuth's Dancing Links.
//!
//! [`DancingLinks`] stores a sparse boolean matrix as a torus of circular
//! doubly linked lists and runs Algorithm X on it, choosing the most
//! constrained column first. [`input::Instance`] reads instances from text.

pub mod cs;
pub mod error;
pub mod input;

pub use cs::combinatorial::dancing_links::{
    build, enumerate, DancingLinks, Direction, NodeId, SearchConfig, SearchReport, Strategy,
};
pub use error::{Error, MalformedInput, Result};
pub use input::Instance;
