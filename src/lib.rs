//! Hill Paths - keyed-graph shortest paths for grid puzzles
//!
//! This library provides a graph keyed by arbitrary hashable vertex identifiers,
//! two bounded single-source shortest path algorithms over it, and the
//! "hill climbing" heightmap puzzle that drives them.
//!
//! [`Dijkstra`] is the algorithm to reach for. [`NeighborWalk`] reproduces a
//! simpler walk that chases the first unvisited neighbor instead of the
//! globally nearest vertex; it only gives shortest distances on chain-like graphs.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod graph;
pub mod heightmap;
pub mod input;

pub use algorithm::{
    dijkstra::Dijkstra, neighbor_walk::NeighborWalk, DistanceTable, ShortestPathAlgorithm,
};
pub use config::{AlgorithmKind, SolverConfig};
/// Re-export main types for convenient use
pub use graph::keyed::{Edge, KeyedGraph};
pub use heightmap::Heightmap;

/// Which endpoint of a shortest path query failed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VertexRole {
    Start,
    Finish,
}

impl std::fmt::Display for VertexRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VertexRole::Start => write!(f, "Start"),
            VertexRole::Finish => write!(f, "Finish"),
        }
    }
}

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{role} vertex ({key}) not found")]
    VertexNotFound { role: VertexRole, key: String },

    #[error("Reached max iteration count ({0})")]
    IterationLimitExceeded(usize),

    #[error("Invalid algorithm state: {0}")]
    InvalidState(String),

    #[error("Invalid heightmap: {0}")]
    InvalidHeightmap(String),

    #[error("No path: {0}")]
    Unreachable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
