pub mod dancing_links;
pub mod puzzles;

pub use dancing_links::{DancingLinks, SearchConfig, SearchReport, Strategy};
