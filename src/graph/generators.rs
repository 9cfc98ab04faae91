use crate::graph::{KeyedGraph, MutableGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a chain `0 -> 1 -> ... -> n` where edge `i -> i + 1` costs `costs[i]`
pub fn chain(costs: &[i64]) -> KeyedGraph<usize, (), i64> {
    let mut graph = KeyedGraph::with_capacity(costs.len() + 1);

    for v in 0..=costs.len() {
        graph.add_vertex(v, ());
    }

    for (i, &cost) in costs.iter().enumerate() {
        graph.add_edge(i, i + 1, cost);
    }

    graph
}

/// Generates a width*height grid keyed by `(x, y)` with unit-cost edges
/// between orthogonal neighbours in both directions
pub fn grid(width: usize, height: usize) -> KeyedGraph<(usize, usize), (), i64> {
    let mut graph = KeyedGraph::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_vertex((x, y), ());
        }
    }

    for y in 0..height {
        for x in 0..width {
            if x + 1 < width {
                graph.add_edge((x, y), (x + 1, y), 1);
                graph.add_edge((x + 1, y), (x, y), 1);
            }
            if y + 1 < height {
                graph.add_edge((x, y), (x, y + 1), 1);
                graph.add_edge((x, y + 1), (x, y), 1);
            }
        }
    }

    graph
}

/// Generates a random directed graph with roughly `edge_factor * vertices` edges.
/// The same seed always yields the same graph.
pub fn random_graph(
    vertices: usize,
    edge_factor: f64,
    max_cost: i64,
    seed: u64,
) -> KeyedGraph<usize, (), i64> {
    let mut graph = KeyedGraph::with_capacity(vertices);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..vertices {
        graph.add_vertex(v, ());
    }

    if vertices < 2 {
        return graph;
    }

    let num_edges = (edge_factor * vertices as f64) as usize;
    let max_cost = max_cost.max(1);

    for _ in 0..num_edges {
        let u = rng.gen_range(0..vertices);
        let v = rng.gen_range(0..vertices);
        // Avoid self-loops
        if u != v {
            graph.add_edge(u, v, rng.gen_range(1..=max_cost));
        }
    }

    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;

    #[test]
    fn chain_links_consecutive_vertices() {
        let graph = chain(&[1, 2, 3]);
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert_eq!(graph.edge_cost(&2, &3), Some(3));
    }

    #[test]
    fn grid_has_bidirectional_edges() {
        let graph = grid(3, 2);
        assert_eq!(graph.vertex_count(), 6);
        // 2 rows * 2 horizontal pairs + 3 vertical pairs, both directions
        assert_eq!(graph.edge_count(), 14);
        assert!(graph.has_edge(&(1, 1), &(1, 0)));
    }

    #[test]
    fn random_graph_is_deterministic_per_seed() {
        let first = random_graph(50, 3.0, 20, 7);
        let second = random_graph(50, 3.0, 20, 7);
        assert_eq!(first.edge_count(), second.edge_count());
        for v in 0..50 {
            let a: Vec<_> = first.outgoing_edges(&v).cloned().collect();
            let b: Vec<_> = second.outgoing_edges(&v).cloned().collect();
            assert_eq!(a, b);
            assert!(a.iter().all(|edge| edge.to != v && (1..=20).contains(&edge.cost)));
        }
    }
}
