#![allow(dead_code)]

use maximum_flow::maximum_flow::graph::Graph;
use maximum_flow::maximum_flow::MaximumFlow;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64Mcg;

pub const TOLERANCE: f64 = 1e-6;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn build_graph(num_nodes: usize, edges: &[(usize, usize, f64)]) -> Graph<f64> {
    let mut graph = Graph::default();
    graph.add_nodes(num_nodes);
    for &(from, to, upper) in edges {
        graph.add_directed_edge(from, to, upper).unwrap();
    }
    graph
}

// integer capacities keep every sum exact
pub fn random_graph(rng: &mut Pcg64Mcg, max_nodes: usize) -> Graph<f64> {
    let num_nodes = rng.random_range(2..=max_nodes);
    let num_edges = rng.random_range(0..=num_nodes * num_nodes);
    let mut graph = Graph::default();
    graph.add_nodes(num_nodes);
    for _ in 0..num_edges {
        let from = rng.random_range(0..num_nodes);
        let to = rng.random_range(0..num_nodes);
        let upper = rng.random_range(0..10) as f64;
        graph.add_directed_edge(from, to, upper).unwrap();
    }
    graph
}

pub fn seeded_rng(seed: u64) -> Pcg64Mcg {
    Pcg64Mcg::seed_from_u64(seed)
}

pub fn cut_capacity(graph: &Graph<f64>, source_side: &[bool]) -> f64 {
    (0..graph.num_edges())
        .map(|edge_id| graph.get_edge(edge_id).unwrap())
        .filter(|e| source_side[e.from] && !source_side[e.to])
        .map(|e| e.upper)
        .sum()
}

// exhaustive over all vertex subsets, small graphs only
pub fn brute_force_minimum_cut(graph: &Graph<f64>, source: usize, sink: usize) -> f64 {
    let n = graph.num_nodes();
    (0..1usize << n)
        .filter(|mask| mask >> source & 1 == 1 && mask >> sink & 1 == 0)
        .map(|mask| {
            let side: Vec<bool> = (0..n).map(|u| mask >> u & 1 == 1).collect();
            cut_capacity(graph, &side)
        })
        .fold(f64::INFINITY, f64::min)
}

pub fn assert_feasible(graph: &Graph<f64>, result: &MaximumFlow<usize, f64>, source: usize, sink: usize) {
    let mut balance = vec![0.0; graph.num_nodes()];
    for edge_id in 0..graph.num_edges() {
        let e = graph.get_edge(edge_id).unwrap();
        let flow = result.flow(edge_id);
        assert!(flow >= -TOLERANCE && flow <= e.upper + TOLERANCE, "edge {edge_id} carries {flow} with capacity {}", e.upper);
        balance[e.from] -= flow;
        balance[e.to] += flow;
    }

    for (u, b) in balance.iter().enumerate() {
        if u != source && u != sink {
            assert!(b.abs() <= TOLERANCE, "node {u} is unbalanced by {b}");
        }
    }
    assert!((balance[sink] - result.value).abs() <= TOLERANCE);
    assert!((balance[source] + result.value).abs() <= TOLERANCE);
}
