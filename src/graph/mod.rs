pub mod adjacency_map;
pub mod traits;

pub use adjacency_map::AdjacencyMap;
pub use traits::{Cost, Graph, MutableGraph, Vertex};

/// Wrapper giving `f32`/`f64` the total order edge costs need
pub use ordered_float::OrderedFloat;
