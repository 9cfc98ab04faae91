use crate::graph::traits::{Graph, MutableGraph};
use num_traits::PrimInt;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed edge: destination key and a signed cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge<K, W = i64> {
    pub to: K,
    pub cost: W,
}

impl<K, W> Edge<K, W> {
    pub fn new(to: K, cost: W) -> Self {
        Edge { to, cost }
    }
}

/// A directed graph keyed by arbitrary vertex identifiers, each carrying an opaque payload
#[derive(Debug, Clone)]
pub struct KeyedGraph<K, V, W = i64>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Vertex key -> payload
    vertices: HashMap<K, V>,

    /// Outgoing edges for each vertex, in insertion order
    edges: HashMap<K, Vec<Edge<K, W>>>,
}

impl<K, V, W> KeyedGraph<K, V, W>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Creates a new empty graph
    pub fn new() -> Self {
        KeyedGraph {
            vertices: HashMap::new(),
            edges: HashMap::new(),
        }
    }

    /// Creates a new empty graph with room for the given number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        KeyedGraph {
            vertices: HashMap::with_capacity(vertices),
            edges: HashMap::with_capacity(vertices),
        }
    }

    /// Returns the payload stored for a vertex
    pub fn payload(&self, vertex: &K) -> Option<&V> {
        self.vertices.get(vertex)
    }

    /// Returns an iterator over every vertex together with its payload
    pub fn iter_vertices(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.vertices.iter()
    }

    /// Returns true if any edge has a negative cost
    pub fn has_negative_costs(&self) -> bool {
        self.edges
            .values()
            .flatten()
            .any(|edge| edge.cost < W::zero())
    }
}

impl<K, V, W> KeyedGraph<K, V, W>
where
    K: Hash + Eq + Clone + Debug,
    V: Clone,
    W: PrimInt + Debug,
{
    /// Returns a graph with the same vertices and every edge flipped
    pub fn reversed(&self) -> Self {
        let mut reversed = KeyedGraph {
            vertices: self.vertices.clone(),
            edges: HashMap::with_capacity(self.edges.len()),
        };

        for (from, edges) in &self.edges {
            for edge in edges {
                reversed
                    .edges
                    .entry(edge.to.clone())
                    .or_insert_with(Vec::new)
                    .push(Edge::new(from.clone(), edge.cost));
            }
        }

        reversed
    }
}

impl<K, V, W> Default for KeyedGraph<K, V, W>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V, W> Graph<K, W> for KeyedGraph<K, V, W>
where
    K: Hash + Eq + Clone + Debug,
    V: Debug,
    W: PrimInt + Debug,
{
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.edges.values().map(|edges| edges.len()).sum()
    }

    fn has_vertex(&self, vertex: &K) -> bool {
        self.vertices.contains_key(vertex)
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = &K> + '_> {
        Box::new(self.vertices.keys())
    }

    fn outgoing_edges(&self, vertex: &K) -> Box<dyn Iterator<Item = &Edge<K, W>> + '_> {
        if let Some(edges) = self.edges.get(vertex) {
            Box::new(edges.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }
}

impl<K, V, W> MutableGraph<K, V, W> for KeyedGraph<K, V, W>
where
    K: Hash + Eq + Clone + Debug,
    V: Debug,
    W: PrimInt + Debug,
{
    fn add_vertex(&mut self, key: K, payload: V) -> bool {
        self.vertices.insert(key, payload).is_none()
    }

    fn add_edge(&mut self, from: K, to: K, cost: W) -> bool {
        if !self.has_vertex(&from) || !self.has_vertex(&to) {
            return false;
        }

        self.edges
            .entry(from)
            .or_insert_with(Vec::new)
            .push(Edge::new(to, cost));
        true
    }

    fn remove_edge(&mut self, from: &K, to: &K) -> bool {
        if let Some(outgoing) = self.edges.get_mut(from) {
            let len_before = outgoing.len();
            outgoing.retain(|edge| edge.to != *to);
            len_before > outgoing.len()
        } else {
            false
        }
    }
}
