pub mod dijkstra;
pub mod searching;
pub mod sorting;
pub mod traits;

pub use traits::{Path, ShortestPathAlgorithm, ShortestPathTree};
