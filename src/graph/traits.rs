use std::fmt::Debug;
use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Anything usable as a vertex name
pub trait Vertex: Ord + Clone + Debug {}

impl<N: Ord + Clone + Debug> Vertex for N {}

/// Anything usable as an edge cost
///
/// Costs are totally ordered and add up from zero. Use
/// `ordered_float::OrderedFloat` for floating point costs.
pub trait Cost: Copy + Ord + Zero + Debug {
    /// Adds two costs, or returns `None` if the sum does not fit
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! integer_cost {
    ($($t:ty),*) => {
        $(
            impl Cost for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

integer_cost!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

// Float sums saturate to infinity instead of overflowing
impl Cost for OrderedFloat<f32> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

impl Cost for OrderedFloat<f64> {
    fn checked_sum(self, other: Self) -> Option<Self> {
        Some(self + other)
    }
}

/// Trait representing a weighted directed graph keyed by vertex name
pub trait Graph<N, C>: Debug
where
    N: Vertex,
    C: Cost,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns an iterator over the outgoing edges from a vertex
    fn neighbors(&self, vertex: &N) -> Box<dyn Iterator<Item = (&N, C)> + '_>;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &N) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.edge_cost(from, to).is_some()
    }

    /// Gets the cost of an edge if it exists
    fn edge_cost(&self, from: &N, to: &N) -> Option<C>;
}

/// Trait for mutable graph operations
pub trait MutableGraph<N, C>: Graph<N, C>
where
    N: Vertex,
    C: Cost,
{
    /// Adds a vertex with no edges; returns false if it already existed
    fn add_vertex(&mut self, vertex: N) -> bool;

    /// Adds or updates a directed edge, creating missing endpoints
    ///
    /// Returns false, leaving the graph unchanged, for a negative cost.
    fn add_edge(&mut self, from: N, to: N, cost: C) -> bool;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &N, to: &N) -> bool;
}
