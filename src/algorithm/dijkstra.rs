use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::debug;
use num_traits::PrimInt;

use crate::algorithm::traits::validate_endpoints;
use crate::algorithm::{DistanceTable, ShortestPathAlgorithm};
use crate::data_structures::BinaryHeapWrapper;
use crate::graph::Graph;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm implementation
///
/// Every settled vertex counts as one iteration against `max_iterations`.
/// Distances are exact for non-negative edge costs.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<K, W, G> ShortestPathAlgorithm<K, W, G> for Dijkstra
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
    G: Graph<K, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }
    
    fn find_shortest_paths(
        &self,
        graph: &G,
        start: &K,
        finish: &K,
        max_iterations: usize,
    ) -> Result<DistanceTable<K, W>> {
        validate_endpoints(graph, start, finish)?;
        
        // The heap works on dense indices so keys only need Hash + Eq
        let keys: Vec<K> = graph.vertices().cloned().collect();
        let index: HashMap<&K, usize> = keys.iter().enumerate().map(|(i, k)| (k, i)).collect();
        
        let mut distances = DistanceTable::new(keys.iter(), start);
        let mut settled = vec![false; keys.len()];
        let mut iterations = 0;
        
        let source = *index.get(start).ok_or_else(|| {
            Error::InvalidState(format!("start {:?} missing from vertex index", start))
        })?;
        
        let mut queue = BinaryHeapWrapper::with_capacity(keys.len());
        queue.push(source, W::zero());
        
        // Main Dijkstra loop
        while let Some((u, _)) = queue.pop() {
            // Stale entry for a vertex that was already settled with a shorter distance
            if settled[u] {
                continue;
            }
            
            if iterations == max_iterations {
                return Err(Error::IterationLimitExceeded(max_iterations));
            }
            iterations += 1;
            settled[u] = true;
            
            let current = &keys[u];
            
            // Relax all outgoing edges
            for edge in graph.outgoing_edges(current) {
                let v = *index.get(&edge.to).ok_or_else(|| {
                    Error::InvalidState(format!("edge target {:?} is not a vertex", edge.to))
                })?;
                
                if settled[v] {
                    continue;
                }
                
                if distances.relax(current, &edge.to, edge.cost)? {
                    if let Some(new_dist) = distances.distance(&edge.to) {
                        queue.push(v, new_dist);
                    }
                }
            }
        }
        
        debug!(
            "Dijkstra from {:?} settled {} of {} vertices",
            start,
            iterations,
            keys.len()
        );
        
        Ok(distances)
    }
}
