use std::collections::{BTreeMap, BTreeSet};

use log::{debug, trace};

use crate::algorithm::{Path, ShortestPathAlgorithm, ShortestPathTree};
use crate::data_structures::MinQueue;
use crate::graph::{Cost, Graph, Vertex};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Every edge cost must be nonnegative.
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }

    /// Settles vertices in cost order from `source`, stopping early once
    /// `target` is settled
    fn search<N, C, G>(
        &self,
        graph: &G,
        source: &N,
        target: Option<&N>,
    ) -> Result<ShortestPathTree<N, C>>
    where
        N: Vertex,
        C: Cost,
        G: Graph<N, C>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::VertexNotFound(format!("{:?}", source)));
        }

        let mut costs = BTreeMap::new();
        let mut predecessors = BTreeMap::new();
        let mut settled = BTreeSet::new();

        // Cost to the source is 0
        costs.insert(source.clone(), C::zero());
        let mut queue = MinQueue::new();
        queue.push(source.clone(), C::zero());

        while let Some((u, cost_u)) = queue.pop() {
            // A cheaper entry for u was already settled
            if !settled.insert(u.clone()) {
                continue;
            }
            if target == Some(&u) {
                break;
            }

            // Relax all outgoing edges
            for (v, cost) in graph.neighbors(&u) {
                if settled.contains(v) {
                    continue;
                }
                // A sum past the cost type's maximum can never be the cheapest
                let Some(new_cost) = cost_u.checked_sum(cost) else {
                    trace!("cost to {:?} through {:?} overflows, edge skipped", v, u);
                    continue;
                };
                let should_update = match costs.get(v) {
                    None => true,
                    Some(current) => new_cost < *current,
                };
                if should_update {
                    costs.insert(v.clone(), new_cost);
                    predecessors.insert(v.clone(), u.clone());
                    queue.push(v.clone(), new_cost);
                }
            }
        }

        debug!(
            "Dijkstra from {:?}: settled {} of {} vertices",
            source,
            settled.len(),
            graph.vertex_count()
        );

        Ok(ShortestPathTree {
            costs,
            predecessors,
            source: source.clone(),
        })
    }
}

impl<N, C, G> ShortestPathAlgorithm<N, C, G> for Dijkstra
where
    N: Vertex,
    C: Cost,
    G: Graph<N, C>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &N) -> Result<ShortestPathTree<N, C>> {
        self.search(graph, source, None)
    }

    fn shortest_path(&self, graph: &G, start: &N, end: &N) -> Result<Path<N, C>> {
        let tree = self.search(graph, start, Some(end))?;
        tree.path_to(end)
            .ok_or_else(|| Error::NoPath(format!("{:?}", start), format!("{:?}", end)))
    }
}
