use serde::{Deserialize, Serialize};

/// Shortest path algorithm selection
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum AlgorithmKind {
    /// Binary-heap Dijkstra, exact on non-negative costs
    #[default]
    Dijkstra,
    /// First-unvisited-neighbor walk, exact only on chain-like graphs
    NeighborWalk,
}

impl AlgorithmKind {
    pub fn name(&self) -> &'static str {
        match self {
            AlgorithmKind::Dijkstra => "Dijkstra",
            AlgorithmKind::NeighborWalk => "NeighborWalk",
        }
    }
}

impl std::fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration for solving a puzzle
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    pub algorithm: AlgorithmKind,
    /// Iteration bound; `None` uses the vertex count of the graph, which is
    /// enough for both algorithms to terminate
    pub max_iterations: Option<usize>,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm
    pub fn with_algorithm(mut self, algorithm: AlgorithmKind) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set an explicit iteration bound
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Iteration bound to use for a graph with `vertex_count` vertices
    pub fn iteration_bound(&self, vertex_count: usize) -> usize {
        self.max_iterations.unwrap_or(vertex_count)
    }
}
