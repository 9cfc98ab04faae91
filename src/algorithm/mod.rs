pub mod traits;
pub mod dijkstra;
pub mod neighbor_walk;

use std::fmt::Debug;
use std::hash::Hash;
use num_traits::PrimInt;

use crate::config::AlgorithmKind;
use crate::graph::Graph;
use crate::Result;

pub use dijkstra::Dijkstra;
pub use neighbor_walk::NeighborWalk;
pub use traits::{DistanceTable, ShortestPathAlgorithm};

/// Runs the algorithm selected by `kind`
pub fn find_shortest_paths<K, W, G>(
    kind: AlgorithmKind,
    graph: &G,
    start: &K,
    finish: &K,
    max_iterations: usize,
) -> Result<DistanceTable<K, W>>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
    G: Graph<K, W>,
{
    match kind {
        AlgorithmKind::Dijkstra => {
            Dijkstra::new().find_shortest_paths(graph, start, finish, max_iterations)
        }
        AlgorithmKind::NeighborWalk => {
            NeighborWalk::new().find_shortest_paths(graph, start, finish, max_iterations)
        }
    }
}
