//! Implementation of `cyclenum sweep`.
//!
//! Enumerates the complete graphs `K1` through `KN` in count-only mode and
//! prints the raw discovery count of each selected enumerator next to the
//! closed-form number of simple cycles.
//!
//! Output (human mode): a right-aligned table, one row per graph.
//! Output (JSON mode): an array of [`SweepRow`] objects.
//!
//! Exit codes: 0 = success, 2 = `--max` above the store ceiling while the
//! combinatorial enumerator is selected.
use cyclenum_core::{CycleEngine, EngineConfig, UndirectedGraph, complete_graph_cycle_count};
use serde::Serialize;

use crate::cli::{Algorithm, OutputFormat};
use crate::error::CliError;
use crate::output::write_json;

/// Counts for one complete graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SweepRow {
    /// `n` in `Kn`.
    pub vertices: usize,
    /// Raw DFS discoveries, if the DFS ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs_raw: Option<u64>,
    /// Raw combinatorial discoveries, if it ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinatorial_raw: Option<u64>,
    /// Closed-form simple-cycle count.
    pub cycles: Option<u128>,
}

/// Computes one row per complete graph `K1..=Kmax`.
///
/// # Errors
///
/// Returns [`CliError::StoreLimitExceeded`] if the combinatorial enumerator
/// is selected and `max` exceeds `max_store_vertices`.
pub fn sweep(
    max: usize,
    algorithm: Algorithm,
    max_store_vertices: usize,
) -> Result<Vec<SweepRow>, CliError> {
    if algorithm.runs_combinatorial() && max > max_store_vertices {
        return Err(CliError::StoreLimitExceeded {
            operation: "combinatorial enumeration",
            vertices: max,
            limit: max_store_vertices,
        });
    }

    let mut rows = Vec::with_capacity(max);
    for n in 1..=max {
        let graph = UndirectedGraph::complete(n);
        let mut engine = CycleEngine::new(&graph, EngineConfig::default());
        let dfs_raw = algorithm.runs_dfs().then(|| engine.run_dfs_total());
        let combinatorial_raw = algorithm
            .runs_combinatorial()
            .then(|| engine.run_combinatorial());
        tracing::debug!(n, ?dfs_raw, ?combinatorial_raw, "complete graph finished");
        rows.push(SweepRow {
            vertices: n,
            dfs_raw,
            combinatorial_raw,
            cycles: complete_graph_cycle_count(n),
        });
    }
    Ok(rows)
}

/// Runs the `sweep` command.
///
/// # Errors
///
/// See [`sweep`].
pub fn run(
    max: usize,
    algorithm: Algorithm,
    max_store_vertices: usize,
    format: OutputFormat,
) -> Result<(), CliError> {
    let rows = sweep(max, algorithm, max_store_vertices)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &rows, algorithm)?,
        OutputFormat::Json => write_json(&mut out, &rows)?,
    }
    Ok(())
}

fn print_human<W: std::io::Write>(
    w: &mut W,
    rows: &[SweepRow],
    algorithm: Algorithm,
) -> std::io::Result<()> {
    write!(w, "{:>4}", "n")?;
    if algorithm.runs_dfs() {
        write!(w, "{:>16}", "dfs")?;
    }
    if algorithm.runs_combinatorial() {
        write!(w, "{:>16}", "combinatorial")?;
    }
    writeln!(w, "{:>16}", "cycles")?;

    for row in rows {
        write!(w, "{:>4}", row.vertices)?;
        for raw in [row.dfs_raw, row.combinatorial_raw].into_iter().flatten() {
            write!(w, "{raw:>16}")?;
        }
        match row.cycles {
            Some(c) => writeln!(w, "{c:>16}")?,
            None => writeln!(w, "{:>16}", "-")?,
        }
    }
    Ok(())
}
