//! Implementation of `cyclenum count`.
//!
//! Builds the graph, runs the selected enumerator(s) and prints raw discovery
//! counts. With `--unique` the run stores every discovered path and also
//! reports how many distinct cycles remain under the chosen canonical key.
//!
//! Output (human mode): aligned `label: value` lines.
//! Output (JSON mode): a single [`CountReport`] object.
//!
//! Exit codes: 0 = success, 1 = `--require-cycles` and nothing found,
//! 2 = invalid graph or store limit exceeded.
use cyclenum_core::{CanonicalForm, CycleEngine, EngineConfig, StoreMode, UndirectedGraph};
use serde::Serialize;

use crate::cli::{Algorithm, OutputFormat};
use crate::error::CliError;
use crate::output::{write_field, write_json};
use crate::source::check_store_limit;

/// Parsed `count` flags.
#[derive(Debug, Clone, Copy)]
pub struct CountOptions {
    /// Enumerator selection.
    pub algorithm: Algorithm,
    /// Restrict the DFS to this origin.
    pub origin: Option<usize>,
    /// Store paths and report unique counts.
    pub unique: bool,
    /// Key for the unique counts.
    pub canonical: CanonicalForm,
    /// Fail with exit code 1 when nothing is found.
    pub require_cycles: bool,
    /// `--max-store-vertices`.
    pub max_store_vertices: usize,
}

/// Counts from one enumerator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelCounts {
    /// Raw discoveries.
    pub raw: u64,
    /// Distinct canonical keys, when requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unique: Option<usize>,
}

/// Everything `count` reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountReport {
    /// Vertices in the enumerated graph.
    pub vertex_count: usize,
    /// DFS origin, if the run was restricted to one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin: Option<usize>,
    /// Key used for unique counts, if any were computed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_form: Option<CanonicalForm>,
    /// DFS counts, if the DFS ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<ChannelCounts>,
    /// Combinatorial counts, if the combinatorial enumerator ran.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinatorial: Option<ChannelCounts>,
}

impl CountReport {
    /// Returns `true` if any selected enumerator found something.
    pub fn found_any(&self) -> bool {
        [&self.dfs, &self.combinatorial]
            .into_iter()
            .flatten()
            .any(|c| c.raw > 0)
    }
}

/// Runs the enumerators selected by `opts` over `graph`.
///
/// # Errors
///
/// - [`CliError::StoreLimitExceeded`] if storing or brute force is requested
///   on a graph above the ceiling.
/// - [`CliError::InvalidGraph`] if `--origin` is out of range.
pub fn count(graph: &UndirectedGraph, opts: &CountOptions) -> Result<CountReport, CliError> {
    if opts.unique {
        check_store_limit(graph, opts.max_store_vertices, "path storage")?;
    }
    if opts.algorithm.runs_combinatorial() {
        check_store_limit(graph, opts.max_store_vertices, "combinatorial enumeration")?;
        if opts.origin.is_some() {
            tracing::warn!("--origin only restricts the DFS enumerator");
        }
    }

    let config = EngineConfig {
        store_mode: if opts.unique {
            StoreMode::StorePaths
        } else {
            StoreMode::CountOnly
        },
        canonical_form: opts.canonical,
    };
    let mut engine = CycleEngine::new(graph, config);

    let dfs = if opts.algorithm.runs_dfs() {
        match opts.origin {
            Some(origin) => engine.run_dfs_from(origin)?,
            None => engine.run_dfs_total(),
        };
        Some(ChannelCounts {
            raw: engine.dfs_count(),
            unique: opts.unique.then(|| engine.unique_dfs_count()).transpose()?,
        })
    } else {
        None
    };

    let combinatorial = if opts.algorithm.runs_combinatorial() {
        engine.run_combinatorial();
        Some(ChannelCounts {
            raw: engine.perm_count(),
            unique: opts.unique.then(|| engine.unique_perm_count()).transpose()?,
        })
    } else {
        None
    };

    Ok(CountReport {
        vertex_count: graph.vertex_count(),
        origin: opts.origin.filter(|_| opts.algorithm.runs_dfs()),
        canonical_form: opts.unique.then_some(opts.canonical),
        dfs,
        combinatorial,
    })
}

/// Runs the `count` command and writes the report to stdout.
///
/// # Errors
///
/// See [`count`]; additionally [`CliError::NoCycles`] when
/// `opts.require_cycles` is set and nothing was found.
pub fn run(
    graph: &UndirectedGraph,
    opts: &CountOptions,
    format: OutputFormat,
) -> Result<(), CliError> {
    let report = count(graph, opts)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &report)?,
        OutputFormat::Json => write_json(&mut out, &report)?,
    }

    if opts.require_cycles && !report.found_any() {
        return Err(CliError::NoCycles);
    }
    Ok(())
}

fn print_human<W: std::io::Write>(w: &mut W, report: &CountReport) -> std::io::Result<()> {
    write_field(w, "vertices", report.vertex_count)?;
    if let Some(origin) = report.origin {
        write_field(w, "origin", origin)?;
    }
    if let Some(form) = report.canonical_form {
        write_field(w, "canonical form", form_label(form))?;
    }
    for (name, counts) in [("dfs", &report.dfs), ("combinatorial", &report.combinatorial)] {
        let Some(counts) = counts else { continue };
        write_field(w, &format!("{name} raw"), counts.raw)?;
        if let Some(unique) = counts.unique {
            write_field(w, &format!("{name} unique"), unique)?;
        }
    }
    Ok(())
}

/// Flag spelling of a canonical form.
pub fn form_label(form: CanonicalForm) -> &'static str {
    match form {
        CanonicalForm::VertexSet => "vertex-set",
        CanonicalForm::Rotation => "rotation",
    }
}
