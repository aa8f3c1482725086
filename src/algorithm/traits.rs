use std::collections::BTreeMap;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::graph::{Cost, Graph, Vertex};
use crate::{Error, Result};

/// The total cost and the vertices of a path through a graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path<N, C> {
    /// Vertices from the start to the end, both included
    pub vertices: Vec<N>,

    /// Sum of the edge costs along the path
    pub cost: C,
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone)]
pub struct ShortestPathTree<N, C>
where
    N: Vertex,
    C: Cost,
{
    /// Cost from the source to each reached vertex
    pub costs: BTreeMap<N, C>,

    /// Predecessor of each reached vertex in the shortest path tree
    pub predecessors: BTreeMap<N, N>,

    /// Source vertex
    pub source: N,
}

impl<N, C> ShortestPathTree<N, C>
where
    N: Vertex,
    C: Cost,
{
    /// Get the shortest path from the source to `target`
    pub fn path_to(&self, target: &N) -> Option<Path<N, C>> {
        let cost = *self.costs.get(target)?;

        // Build path in reverse order
        let mut vertices = vec![target.clone()];
        let mut current = target;
        while *current != self.source {
            current = self.predecessors.get(current)?;
            vertices.push(current.clone());

            if vertices.len() > self.costs.len() {
                warn!("predecessor chain from {:?} does not reach the source", target);
                return None;
            }
        }
        vertices.reverse();

        Some(Path { vertices, cost })
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<N, C, G>
where
    N: Vertex,
    C: Cost,
    G: Graph<N, C>,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from a source vertex to all reachable vertices
    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, C>>;

    /// Finds the cheapest path from `start` to `end`
    ///
    /// Fails with [`Error::VertexNotFound`] if `start` is not in the graph
    /// and with [`Error::NoPath`] if `end` cannot be reached.
    fn shortest_path(&self, graph: &G, start: &N, end: &N) -> Result<Path<N, C>> {
        let tree = self.compute_shortest_paths(graph, start)?;
        tree.path_to(end)
            .ok_or_else(|| Error::NoPath(format!("{:?}", start), format!("{:?}", end)))
    }
}
