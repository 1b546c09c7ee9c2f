//! Shared test fixtures for unit tests throughout `cyclenum-core`.
//!
//! Compiled only in test builds. Integration tests under `tests/` define
//! their own local helpers because they link against the non-test library
//! build where this module is not available.
#![allow(clippy::expect_used)]

use crate::graph::UndirectedGraph;

pub use crate::graph::REFERENCE_EDGES as EXAMPLE_EDGES;

/// The six-vertex reference graph.
pub fn example_graph() -> UndirectedGraph {
    UndirectedGraph::reference()
}

/// Builds the path `0 - 1 - ... - (n-1)`.
pub fn path_graph(n: usize) -> UndirectedGraph {
    UndirectedGraph::from_edges(n, (1..n).map(|v| (v - 1, v))).expect("path edges are in range")
}

/// Builds the cycle `0 - 1 - ... - (n-1) - 0`.
pub fn cycle_graph(n: usize) -> UndirectedGraph {
    let mut g = path_graph(n);
    if n > 2 {
        g.add_edge(n - 1, 0).expect("closing edge is in range");
    }
    g
}

/// Two triangles sharing vertex 2: `0-1-2` and `2-3-4`.
pub fn bowtie_graph() -> UndirectedGraph {
    UndirectedGraph::from_edges(5, [(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)])
        .expect("bowtie edges are in range")
}
