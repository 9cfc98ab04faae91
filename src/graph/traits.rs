use std::fmt::Debug;
use std::hash::Hash;
use num_traits::PrimInt;

use crate::graph::keyed::Edge;

/// Trait representing a weighted directed graph keyed by arbitrary vertex identifiers
pub trait Graph<K, W>: Debug
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;
    
    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;
    
    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &K) -> bool;
    
    /// Returns an iterator over every vertex key, in no particular order
    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_>;
    
    /// Returns an iterator over the outgoing edges from a vertex, in insertion order.
    /// Unknown vertices have no edges.
    fn outgoing_edges(&self, vertex: &K) -> Box<dyn Iterator<Item = &Edge<K, W>> + '_>;
    
    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &K, to: &K) -> bool {
        self.outgoing_edges(from).any(|edge| edge.to == *to)
    }
    
    /// Gets the cost of the first edge between the two vertices, if any
    fn edge_cost(&self, from: &K, to: &K) -> Option<W> {
        self.outgoing_edges(from)
            .find(|edge| edge.to == *to)
            .map(|edge| edge.cost)
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<K, V, W>: Graph<K, W>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Adds a vertex with its payload. Returns false if the key already existed,
    /// in which case the payload is replaced and the edges are kept.
    fn add_vertex(&mut self, key: K, payload: V) -> bool;
    
    /// Appends a directed edge. Returns false, leaving the graph untouched,
    /// when either endpoint is not a vertex.
    fn add_edge(&mut self, from: K, to: K, cost: W) -> bool;
    
    /// Removes every edge from `from` to `to`
    fn remove_edge(&mut self, from: &K, to: &K) -> bool;
}
