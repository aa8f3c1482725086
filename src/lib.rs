//! Algorithms - a singly linked list, textbook sorts and searches, and Dijkstra
//!
//! The centerpiece is [`LinkedList`], a generic singly linked list whose nodes
//! are owned through `Option<Box<_>>` links. Every chain walk is iterative, so
//! very long lists neither overflow the stack on drop nor on any operation.
//!
//! Alongside it live the classic in-memory sorting and searching routines
//! (parameterized by ordering and equality predicates) and a single-source
//! shortest-path routine over an adjacency-map graph.
//!
//! ```
//! use algorithms::LinkedList;
//!
//! let mut list = LinkedList::from([1, 2, 3, 4]);
//! list.insert(10, 2).unwrap();
//! assert_eq!(list.to_vec(), vec![1, 2, 10, 3, 4]);
//! assert_eq!(list.remove_range(1, 2).unwrap(), 2);
//! assert_eq!(list.to_string(), "1, 3, 4");
//! ```

pub mod algorithm;
pub mod data_structures;
pub mod demo;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, searching::SearchAlgorithm, sorting::SortAlgorithm, Path,
    ShortestPathAlgorithm,
};
/// Re-export main types for convenient use
pub use data_structures::{Cursor, CursorMut, LinkedList};
pub use graph::AdjacencyMap;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// An index-based list operation was given a position outside its legal
    /// bound. Removing from an empty list is reported the same way.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vertex not found in graph: {0}")]
    VertexNotFound(String),

    #[error("no path found from {0} to {1}")]
    NoPath(String, String),

    #[error("invalid choice: {0}")]
    InvalidChoice(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
