use hill_paths::graph::generators::chain;
use hill_paths::graph::{Graph, KeyedGraph, MutableGraph};
use hill_paths::{Error, NeighborWalk, ShortestPathAlgorithm, VertexRole};
use std::collections::HashMap;

// Test helper: builds a graph from named vertices and (from, to, cost) edges
fn build(vertices: &[&'static str], edges: &[(&'static str, &'static str, i64)]) -> KeyedGraph<&'static str, u32, i64> {
    let mut graph = KeyedGraph::new();
    for (i, v) in vertices.iter().enumerate() {
        graph.add_vertex(*v, i as u32);
    }
    for &(from, to, cost) in edges {
        assert!(graph.add_edge(from, to, cost), "edge {} -> {} should be added", from, to);
    }
    graph
}

fn walk(
    graph: &KeyedGraph<&'static str, u32, i64>,
    start: &'static str,
    finish: &'static str,
    max_iterations: usize,
) -> hill_paths::Result<HashMap<&'static str, Option<i64>>> {
    NeighborWalk::new()
        .find_shortest_paths(graph, &start, &finish, max_iterations)
        .map(|table| table.into_map())
}

#[test]
fn test_single_vertex_is_its_own_source() {
    let graph = build(&["A"], &[]);
    let distances = walk(&graph, "A", "A", 1).unwrap();
    assert_eq!(distances, HashMap::from([("A", Some(0))]));
}

#[test]
fn test_single_edge() {
    let graph = build(&["A", "B"], &[("A", "B", 5)]);
    let distances = walk(&graph, "A", "B", 2).unwrap();
    assert_eq!(distances, HashMap::from([("A", Some(0)), ("B", Some(5))]));
}

#[test]
fn test_missing_start_fails_regardless_of_finish() {
    let graph = build(&["A", "B"], &[("A", "B", 5)]);

    for finish in ["B", "nowhere"] {
        match walk(&graph, "Z", finish, 10) {
            Err(Error::VertexNotFound { role, key }) => {
                assert_eq!(role, VertexRole::Start);
                assert!(key.contains('Z'));
            }
            other => panic!("expected VertexNotFound for start, got {:?}", other),
        }
    }
}

#[test]
fn test_missing_finish_is_checked_against_its_own_key() {
    let graph = build(&["A", "B"], &[("A", "B", 5)]);
    match walk(&graph, "A", "Q", 10) {
        Err(Error::VertexNotFound { role, key }) => {
            assert_eq!(role, VertexRole::Finish);
            assert!(key.contains('Q'));
        }
        other => panic!("expected VertexNotFound for finish, got {:?}", other),
    }
}

#[test]
fn test_chain_converges_within_bound() {
    let graph = build(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2)]);
    let distances = walk(&graph, "A", "C", 3).unwrap();
    assert_eq!(
        distances,
        HashMap::from([("A", Some(0)), ("B", Some(1)), ("C", Some(3))])
    );
}

#[test]
fn test_chain_with_small_bound_exceeds_limit() {
    let graph = build(&["A", "B", "C"], &[("A", "B", 1), ("B", "C", 2)]);
    assert!(matches!(
        walk(&graph, "A", "C", 1),
        Err(Error::IterationLimitExceeded(1))
    ));
    assert!(matches!(
        walk(&graph, "A", "C", 0),
        Err(Error::IterationLimitExceeded(0))
    ));
}

#[test]
fn test_first_listed_edge_becomes_current() {
    // D lists E (cost 10) before F (cost 1); the walk follows E even though F is nearer
    let graph = build(
        &["D", "E", "F", "G", "H"],
        &[
            ("D", "E", 10),
            ("D", "F", 1),
            ("E", "G", 1),
            ("F", "H", 1),
        ],
    );
    let table = NeighborWalk::new()
        .find_shortest_paths(&graph, &"D", &"H", 10)
        .unwrap();

    // Both targets are relaxed in the same step
    assert_eq!(table.distance(&"E"), Some(10));
    assert_eq!(table.distance(&"F"), Some(1));
    // Only the E branch is walked
    assert_eq!(table.distance(&"G"), Some(11));
    assert_eq!(table.distance(&"H"), None);
    assert_eq!(table.len(), graph.vertex_count());
}

#[test]
fn test_unreached_vertices_stay_at_infinity() {
    let graph = build(&["A", "B", "island"], &[("A", "B", 3)]);
    let distances = walk(&graph, "A", "B", 5).unwrap();
    assert_eq!(distances.len(), 3);
    assert_eq!(distances["island"], None);
}

#[test]
fn test_cycle_terminates_once_every_neighbor_is_visited() {
    let graph = build(
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", 1), ("C", "A", 1)],
    );
    let distances = walk(&graph, "A", "C", 3).unwrap();
    assert_eq!(distances["A"], Some(0));
    assert_eq!(distances["C"], Some(2));
}

#[test]
fn test_negative_costs_are_not_rejected() {
    let graph = build(&["A", "B"], &[("A", "B", -4)]);
    let distances = walk(&graph, "A", "B", 2).unwrap();
    assert_eq!(distances["B"], Some(-4));
}

#[test]
fn test_repeated_runs_are_identical() {
    let graph = chain(&[4, 1, 7, 2]);
    let before = graph.edge_count();

    let first = NeighborWalk::new().find_shortest_paths(&graph, &0, &4, 10).unwrap();
    let second = NeighborWalk::new().find_shortest_paths(&graph, &0, &4, 10).unwrap();

    assert_eq!(first, second);
    assert_eq!(first.distance(&4), Some(14));
    assert_eq!(graph.edge_count(), before);
}
