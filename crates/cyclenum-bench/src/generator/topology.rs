//! Topology strategies: random spanning tree and `G(n, p)` overlay.

use cyclenum_core::UndirectedGraph;
use rand::Rng;
use rand::rngs::StdRng;

/// Connects every vertex by attaching vertex `v` to a uniformly chosen
/// earlier vertex, for `v` in `1..n`.
///
/// Expects a graph without edges; the result is a tree on all vertices.
pub fn random_spanning_tree(graph: &mut UndirectedGraph, rng: &mut StdRng) {
    for v in 1..graph.vertex_count() {
        let parent = rng.gen_range(0..v);
        // Both ends are below vertex_count.
        if graph.add_edge(parent, v).is_err() {
            return;
        }
    }
}

/// Joins each vertex pair not already adjacent with probability
/// `probability`, visiting pairs in lexicographic order.
///
/// Probabilities outside `0.0..=1.0` are clamped.
pub fn gnp_overlay(graph: &mut UndirectedGraph, probability: f64, rng: &mut StdRng) {
    let p = probability.clamp(0.0, 1.0);
    let n = graph.vertex_count();
    for u in 0..n {
        for v in (u + 1)..n {
            if graph.has_edge(u, v) {
                continue;
            }
            if rng.gen_bool(p) && graph.add_edge(u, v).is_err() {
                return;
            }
        }
    }
}
