use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use log::warn;
use num_traits::{PrimInt, Saturating};
use crate::graph::Graph;
use crate::{Error, Result, VertexRole};

/// Best-known distances from a source to every vertex of a graph.
///
/// `None` stands for "infinity": the vertex was never reached. The table also
/// remembers the predecessor that produced each vertex's current distance.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceTable<K, W>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Source vertex key
    source: K,

    /// Distance from the source for every vertex of the graph
    distances: HashMap<K, Option<W>>,

    /// Predecessor in the path that produced the current distance
    predecessors: HashMap<K, K>,
}

impl<K, W> DistanceTable<K, W>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
{
    /// Creates a table with every vertex at infinity except the source at zero
    pub(crate) fn new<'a>(vertices: impl Iterator<Item = &'a K>, source: &K) -> Self
    where
        K: 'a,
    {
        let mut distances: HashMap<K, Option<W>> = vertices.map(|v| (v.clone(), None)).collect();
        distances.insert(source.clone(), Some(W::zero()));

        DistanceTable {
            source: source.clone(),
            distances,
            predecessors: HashMap::new(),
        }
    }

    /// Relaxes the edge `from -> to`. Returns true if `to` got a shorter distance.
    pub(crate) fn relax(&mut self, from: &K, to: &K, cost: W) -> Result<bool> {
        let from_distance = match self.distances.get(from) {
            Some(Some(distance)) => *distance,
            _ => {
                return Err(Error::InvalidState(format!(
                    "vertex {:?} expanded without a finite distance",
                    from
                )))
            }
        };

        let candidate = Saturating::saturating_add(from_distance, cost);

        let slot = self.distances.get_mut(to).ok_or_else(|| {
            Error::InvalidState(format!("edge target {:?} is not a vertex", to))
        })?;

        let improved = match *slot {
            None => true,
            Some(current) => candidate < current,
        };

        if improved {
            *slot = Some(candidate);
            self.predecessors.insert(to.clone(), from.clone());
        }

        Ok(improved)
    }

    /// Source vertex of the table
    pub fn source(&self) -> &K {
        &self.source
    }

    /// Distance from the source, `None` when unreached or not a vertex
    pub fn distance(&self, vertex: &K) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: &K) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Number of vertices in the table
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Iterates over every vertex and its distance, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (&K, Option<W>)> + '_ {
        self.distances.iter().map(|(k, d)| (k, *d))
    }

    /// Vertex through which `vertex` got its current distance
    pub fn predecessor(&self, vertex: &K) -> Option<&K> {
        self.predecessors.get(vertex)
    }

    /// Reconstructs the path from the source to `target` by following predecessors
    pub fn path_to(&self, target: &K) -> Option<Vec<K>> {
        if !self.is_reachable(target) {
            return None;
        }

        let mut path = Vec::new();
        let mut current = target.clone();
        let mut visited = HashSet::new();

        // Build path in reverse order
        while current != self.source {
            if !visited.insert(current.clone()) {
                warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }

            let pred = self.predecessors.get(&current)?.clone();
            path.push(current);
            current = pred;
        }

        path.push(self.source.clone());
        path.reverse();

        Some(path)
    }

    /// Consumes the table, returning the plain key -> distance map
    pub fn into_map(self) -> HashMap<K, Option<W>> {
        self.distances
    }
}

/// Checks that both endpoints of a query are vertices, start first
pub(crate) fn validate_endpoints<K, W, G>(graph: &G, start: &K, finish: &K) -> Result<()>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
    G: Graph<K, W>,
{
    if !graph.has_vertex(start) {
        return Err(Error::VertexNotFound {
            role: VertexRole::Start,
            key: format!("{:?}", start),
        });
    }

    if !graph.has_vertex(finish) {
        return Err(Error::VertexNotFound {
            role: VertexRole::Finish,
            key: format!("{:?}", finish),
        });
    }

    Ok(())
}

/// Trait for bounded single-source shortest path algorithms
pub trait ShortestPathAlgorithm<K, W, G>
where
    K: Hash + Eq + Clone + Debug,
    W: PrimInt + Debug,
    G: Graph<K, W>,
{
    /// Computes distances from `start` to every vertex of `graph`.
    ///
    /// `finish` only has to exist; the whole table is returned so callers can read
    /// off any target. Fails when either endpoint is missing, when `max_iterations`
    /// runs out before the algorithm terminates, or when a vertex is expanded
    /// without ever having been reached.
    fn find_shortest_paths(
        &self,
        graph: &G,
        start: &K,
        finish: &K,
        max_iterations: usize,
    ) -> Result<DistanceTable<K, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}
