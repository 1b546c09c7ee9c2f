//! Graph construction from command-line arguments.
//!
//! This module is the single place where the `cyclenum` binary turns flags
//! into an [`UndirectedGraph`]. Every failure becomes a [`CliError`] with exit
//! code 2 before any enumeration runs. The store ceiling is checked here too,
//! so commands never start a run that would exhaust memory.

use cyclenum_core::UndirectedGraph;

use crate::cli::GraphArgs;
use crate::error::CliError;

/// Builds the graph described by `args`, then applies its edge removals and
/// vertex isolations in that order.
///
/// # Errors
///
/// - [`CliError::NoGraphSource`] if no source flag was given.
/// - [`CliError::InvalidGraph`] if an edge or vertex is out of range.
pub fn build_graph(args: &GraphArgs) -> Result<UndirectedGraph, CliError> {
    let mut graph = if let Some(n) = args.complete {
        UndirectedGraph::complete(n)
    } else if args.example {
        UndirectedGraph::reference()
    } else if let Some(n) = args.vertices {
        UndirectedGraph::from_edges(n, args.edges.iter().map(|e| (e.u, e.v)))?
    } else {
        return Err(CliError::NoGraphSource);
    };

    for edge in &args.remove_edges {
        if !graph.remove_edge(edge.u, edge.v)? {
            tracing::warn!(u = edge.u, v = edge.v, "edge to remove was not present");
        }
    }
    for &vertex in &args.isolate {
        graph.isolate(vertex)?;
    }

    let summary = graph.summary();
    if !summary.is_simple() {
        tracing::warn!(
            self_loops = summary.self_loops,
            parallel_edges = summary.parallel_edges,
            "graph is not simple; loops and parallel edges inflate raw counts"
        );
    }
    tracing::debug!(
        vertices = summary.vertex_count,
        edges = summary.edge_count,
        "graph built"
    );
    Ok(graph)
}

/// Fails if `graph` is larger than the `--max-store-vertices` ceiling.
///
/// # Errors
///
/// Returns [`CliError::StoreLimitExceeded`] naming `operation`.
pub fn check_store_limit(
    graph: &UndirectedGraph,
    limit: usize,
    operation: &'static str,
) -> Result<(), CliError> {
    let vertices = graph.vertex_count();
    if vertices > limit {
        return Err(CliError::StoreLimitExceeded {
            operation,
            vertices,
            limit,
        });
    }
    Ok(())
}
