//! Implementation of `cyclenum inspect`.
//!
//! Prints structural statistics for the graph without enumerating anything:
//! - vertex and edge counts
//! - connected components and cycle rank
//! - self-loops and parallel edges
//! - degree range
//! - number of orderings the combinatorial enumerator would test
//! - the adjacency list
//!
//! In `--format json` mode a single JSON object is emitted to stdout.
//! In human mode, aligned key/value lines are printed, then the adjacency
//! list.
//!
//! Exit codes: 0 = success, 2 = invalid graph.
use cyclenum_core::{AdjacencyList, GraphSummary, UndirectedGraph, candidate_count};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::output::{write_field, write_json};

/// Everything `inspect` reports.
#[derive(Debug, Clone, Serialize)]
pub struct InspectReport<'g> {
    /// Structural summary.
    #[serde(flatten)]
    pub summary: GraphSummary,
    /// Orderings the combinatorial enumerator would test, or `None` if the
    /// figure overflows.
    pub combinatorial_candidates: Option<u128>,
    /// Neighbor lists in insertion order.
    pub adjacency: &'g [Vec<usize>],
}

impl<'g> InspectReport<'g> {
    /// Gathers the report for `graph`.
    pub fn of(graph: &'g UndirectedGraph) -> Self {
        Self {
            summary: graph.summary(),
            combinatorial_candidates: candidate_count(graph.vertex_count()),
            adjacency: graph.adjacency(),
        }
    }
}

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::OutputFailed`] if stdout cannot be written.
pub fn run(graph: &UndirectedGraph, format: OutputFormat) -> Result<(), CliError> {
    let report = InspectReport::of(graph);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, graph, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }
    Ok(())
}

/// Writes inspect statistics in human-readable aligned format.
fn print_human<W: std::io::Write>(
    w: &mut W,
    graph: &UndirectedGraph,
    report: &InspectReport<'_>,
) -> std::io::Result<()> {
    let s = &report.summary;
    write_field(w, "vertices", s.vertex_count)?;
    write_field(w, "edges", s.edge_count)?;
    write_field(w, "components", s.components)?;
    write_field(w, "cycle rank", s.cycle_rank)?;
    write_field(w, "self-loops", s.self_loops)?;
    write_field(w, "parallel edges", s.parallel_edges)?;
    if let (Some(min), Some(max)) = (s.min_degree, s.max_degree) {
        write_field(w, "degree", format!("{min}..={max}"))?;
    }
    match report.combinatorial_candidates {
        Some(n) => write_field(w, "combinatorial candidates", n)?,
        None => write_field(w, "combinatorial candidates", "overflow")?,
    }
    writeln!(w, "adjacency:")?;
    write!(w, "{}", AdjacencyList(graph))
}
