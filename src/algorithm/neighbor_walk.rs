use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::PrimInt;

use crate::algorithm::traits::validate_endpoints;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// Linear walk that relaxes the current vertex's edges and then moves to the
/// first still-unvisited edge target.
///
/// Unlike Dijkstra it never looks for the globally nearest unvisited vertex, so it
/// stops as soon as the walk reaches a vertex with no unvisited neighbor. Distances
/// are exact on chains and trees explored along first edges; on branching graphs
/// they can be too large or missing. Use [`crate::Dijkstra`] for general graphs.
#[derive(Debug, Default, Clone, Copy)]
pub struct NeighborWalk;

impl NeighborWalk {
    /// Creates a new walk instance
    pub fn new() -> Self {
        NeighborWalk
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for NeighborWalk
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "NeighborWalk"
    }

    fn find_shortest_paths(
        &self,
        graph: &G,
        start: &K,
        finish: &K,
        max_iterations: usize,
    ) -> Result<DistanceTable<K, W>> {
        validate_endpoints(graph, start, finish)?;

        let mut unvisited: HashSet<K> = graph.vertices().cloned().collect();
        let mut distances = DistanceTable::new(graph.vertices(), start);
        let mut current = start.clone();

        for iteration in 0..max_iterations {
            let mut next: Option<K> = None;

            for edge in graph.outgoing_edges(&current) {
                distances.relax(&current, &edge.to, edge.cost)?;

                if next.is_none() && unvisited.contains(&edge.to) {
                    next = Some(edge.to.clone());
                }
            }

            unvisited.remove(&current);

            match next {
                Some(vertex) => {
                    trace!("Walk step {}: {:?} -> {:?}", iteration, current, vertex);
                    current = vertex;
                }
                None => {
                    debug!(
                        "Walk from {:?} stopped at {:?} after {} iterations, {} of {} vertices reached",
                        start,
                        current,
                        iteration + 1,
                        distances.reachable_count(),
                        distances.len()
                    );
                    return Ok(distances);
                }
            }
        }

        Err(Error::IterationLimitExceeded(max_iterations))
    }
}
