use std::time::{Duration, Instant};
use rayon::prelude::*;
use hill_paths::graph::generators::random_graph;
use hill_paths::graph::{Graph, KeyedGraph};
use hill_paths::{Dijkstra, DistanceTable, NeighborWalk, ShortestPathAlgorithm};

type BenchGraph = KeyedGraph<usize, (), i64>;

// Function to benchmark an algorithm on a graph
fn benchmark_algorithm<A>(
    algorithm: &A,
    graph: &BenchGraph,
    source: usize,
) -> (Duration, Option<DistanceTable<usize, i64>>)
where
    A: ShortestPathAlgorithm<usize, i64, BenchGraph>,
{
    let start = Instant::now();
    let result = algorithm.find_shortest_paths(graph, &source, &source, graph.vertex_count());
    let duration = start.elapsed();

    match result {
        Ok(table) => (duration, Some(table)),
        Err(e) => {
            log::warn!("{} failed: {}", algorithm.name(), e);
            (duration, None)
        }
    }
}

// Fraction of vertices Dijkstra reaches whose distance the walk gets exactly right
fn agreement(exact: &DistanceTable<usize, i64>, walk: &DistanceTable<usize, i64>) -> f64 {
    let reached: Vec<_> = exact.iter().filter(|(_, d)| d.is_some()).collect();
    if reached.is_empty() {
        return 1.0;
    }
    let matching = reached
        .iter()
        .filter(|(v, d)| walk.distance(v) == *d)
        .count();
    matching as f64 / reached.len() as f64
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![100, 1_000, 5_000, 20_000];
    let trials_per_size: u64 = 8;

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra vs NeighborWalk");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("Trials per size: {}", trials_per_size);
    println!("=====================================================");

    let dijkstra = Dijkstra::new();
    let walk = NeighborWalk::new();

    let mut results = Vec::new();

    for &size in &graph_sizes {
        // Trials are independent, so run them in parallel
        let trials: Vec<(Duration, Duration, f64, usize, usize)> = (0..trials_per_size)
            .into_par_iter()
            .map(|seed| {
                let graph = random_graph(size, edge_factor, 100, seed);
                let (dijkstra_time, exact) = benchmark_algorithm(&dijkstra, &graph, 0);
                let (walk_time, approx) = benchmark_algorithm(&walk, &graph, 0);

                let (score, exact_reach, walk_reach) = match (&exact, &approx) {
                    (Some(exact), Some(approx)) => (
                        agreement(exact, approx),
                        exact.reachable_count(),
                        approx.reachable_count(),
                    ),
                    _ => (0.0, 0, 0),
                };
                (dijkstra_time, walk_time, score, exact_reach, walk_reach)
            })
            .collect();

        let n = trials.len() as u32;
        let dijkstra_time: Duration = trials.iter().map(|t| t.0).sum::<Duration>() / n;
        let walk_time: Duration = trials.iter().map(|t| t.1).sum::<Duration>() / n;
        let score = trials.iter().map(|t| t.2).sum::<f64>() / n as f64;
        let exact_reach = trials.iter().map(|t| t.3).sum::<usize>() / n as usize;
        let walk_reach = trials.iter().map(|t| t.4).sum::<usize>() / n as usize;

        println!(
            "\n{} vertices: Dijkstra reached {} in {:?}, NeighborWalk reached {} in {:?}",
            size, exact_reach, dijkstra_time, walk_reach, walk_time
        );
        println!("NeighborWalk exact distances: {:.1}%", score * 100.0);

        results.push((size, dijkstra_time, walk_time, score));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Dijkstra (us)", "Walk (us)", "Exact (%)"
    );
    println!("-----------------------------------------------------");

    for (size, dijkstra_time, walk_time, score) in &results {
        println!(
            "{:<10} | {:<15} | {:<15} | {:<10.1}",
            size,
            dijkstra_time.as_micros(),
            walk_time.as_micros(),
            score * 100.0
        );
    }
}
