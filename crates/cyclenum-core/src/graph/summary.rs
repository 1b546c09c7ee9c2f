//! Structural summary of an [`UndirectedGraph`].
//!
//! The cycle rank `m - n + c` is the dimension of the graph's cycle space: the
//! number of independent cycles. It is zero exactly when the graph is a
//! forest, in which case neither enumerator can find anything. Components are
//! counted with `petgraph::algo::connected_components` on the converted graph.

use std::collections::HashSet;

use petgraph::algo::connected_components;
use serde::Serialize;

use crate::graph::UndirectedGraph;

/// Counts describing the shape of a graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges, parallel edges and loops included.
    pub edge_count: usize,
    /// Number of connected components (isolated vertices count as one each).
    pub components: usize,
    /// `edge_count - vertex_count + components`.
    pub cycle_rank: usize,
    /// Number of self-loops.
    pub self_loops: usize,
    /// Number of edges that duplicate an earlier edge between the same pair.
    pub parallel_edges: usize,
    /// Smallest vertex degree, `None` for the empty graph.
    pub min_degree: Option<usize>,
    /// Largest vertex degree, `None` for the empty graph.
    pub max_degree: Option<usize>,
}

impl GraphSummary {
    /// Computes the summary of `graph`.
    pub fn of(graph: &UndirectedGraph) -> Self {
        let edges = graph.edges();
        let components = connected_components(&graph.to_petgraph());

        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(edges.len());
        let mut self_loops = 0;
        let mut parallel_edges = 0;
        for &(u, v) in &edges {
            if u == v {
                self_loops += 1;
            } else if !seen.insert((u, v)) {
                parallel_edges += 1;
            }
        }

        let degrees = graph.adjacency().iter().map(Vec::len);

        Self {
            vertex_count: graph.vertex_count(),
            edge_count: edges.len(),
            components,
            cycle_rank: (edges.len() + components).saturating_sub(graph.vertex_count()),
            self_loops,
            parallel_edges,
            min_degree: degrees.clone().min(),
            max_degree: degrees.max(),
        }
    }

    /// Returns `true` if the graph has no self-loops and no parallel edges.
    pub fn is_simple(&self) -> bool {
        self.self_loops == 0 && self.parallel_edges == 0
    }

    /// Returns `true` if the graph contains at least one cycle of length
    /// three or more.
    ///
    /// Self-loops and parallel edges raise the cycle rank without forming such
    /// a cycle, so they are discounted.
    pub fn has_simple_cycle(&self) -> bool {
        self.cycle_rank > self.self_loops + self.parallel_edges
    }
}
