#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod combinatorics;
pub mod cross_check;
pub mod cycles;
pub mod engine;
pub mod graph;
pub mod report;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use cross_check::{
    CrossCheck, complete_graph_cycle_count, complete_graph_vertex_set_count, cross_check,
};
pub use cycles::{
    CanonicalForm, CycleSink, Discovery, Path, StoreMode, candidate_count, canonical_key,
    combinatorial_cycles, count_unique, dedupe, dedupe_with, dfs_cycles_from, dfs_cycles_total,
    visit_combinatorial_cycles, visit_dfs_cycles,
};
pub use engine::{CycleEngine, EngineConfig, EngineError};
pub use graph::{GraphError, GraphSummary, REFERENCE_EDGES, UndirectedGraph};
pub use report::{AdjacencyList, PathList};

/// Returns the current version of the cyclenum-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
