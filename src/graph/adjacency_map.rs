use crate::graph::traits::{Cost, Graph, MutableGraph, Vertex};
use std::collections::BTreeMap;

/// A directed graph stored as a map from each vertex to its outgoing edges
///
/// Every endpoint of an edge is also a key of the map, so a vertex without
/// outgoing edges maps to an empty list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    /// vertex -> [(target_vertex, cost)]
    edges: BTreeMap<N, Vec<(N, C)>>,
}

impl<N, C> AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        AdjacencyMap {
            edges: BTreeMap::new(),
        }
    }

    /// Returns the vertices in ascending order
    pub fn vertices(&self) -> impl Iterator<Item = &N> + '_ {
        self.edges.keys()
    }

    /// Validate that the graph doesn't have negative costs
    pub fn validate_non_negative(&self) -> bool {
        self.edges
            .values()
            .flatten()
            .all(|(_, cost)| *cost >= C::zero())
    }
}

impl<N, C> Default for AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    fn default() -> Self {
        AdjacencyMap::new()
    }
}

impl<N, C> Graph<N, C> for AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    fn vertex_count(&self) -> usize {
        self.edges.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|edges| edges.len()).sum()
    }

    fn neighbors(&self, vertex: &N) -> Box<dyn Iterator<Item = (&N, C)> + '_> {
        match self.edges.get(vertex) {
            Some(edges) => Box::new(edges.iter().map(|(target, cost)| (target, *cost))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn has_vertex(&self, vertex: &N) -> bool {
        self.edges.contains_key(vertex)
    }

    fn edge_cost(&self, from: &N, to: &N) -> Option<C> {
        self.edges
            .get(from)?
            .iter()
            .find(|(target, _)| target == to)
            .map(|(_, cost)| *cost)
    }
}

impl<N, C> MutableGraph<N, C> for AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    fn add_vertex(&mut self, vertex: N) -> bool {
        if self.edges.contains_key(&vertex) {
            return false;
        }
        self.edges.insert(vertex, Vec::new());
        true
    }

    fn add_edge(&mut self, from: N, to: N, cost: C) -> bool {
        if cost < C::zero() {
            return false;
        }

        self.add_vertex(to.clone());
        let outgoing = self.edges.entry(from).or_default();

        // Update the cost if the edge already exists
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = cost,
            None => outgoing.push((to, cost)),
        }
        true
    }

    fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        match self.edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}

/// Builds a graph from `(vertex, [(neighbor, cost)])` entries
///
/// Edges with a negative cost are skipped.
impl<N, C> FromIterator<(N, Vec<(N, C)>)> for AdjacencyMap<N, C>
where
    N: Vertex,
    C: Cost,
{
    fn from_iter<I: IntoIterator<Item = (N, Vec<(N, C)>)>>(iter: I) -> Self {
        let mut graph = AdjacencyMap::new();
        for (vertex, edges) in iter {
            graph.add_vertex(vertex.clone());
            for (target, cost) in edges {
                graph.add_edge(vertex.clone(), target, cost);
            }
        }
        graph
    }
}
