//! Implementation of `cyclenum list`.
//!
//! Prints every discovered cycle, one per line, as an open walk starting at
//! its origin. With `--unique` each cycle is printed once as its canonical
//! key instead. Listing always stores paths, so the `--max-store-vertices`
//! ceiling applies.
//!
//! Output (human mode): space-separated vertex ids per line. When both
//! enumerators run, each block is preceded by a `# dfs` or
//! `# combinatorial` header line.
//! Output (JSON mode): `{"dfs": [[...], ...], "combinatorial": [...]}` with
//! absent enumerators omitted.
//!
//! Exit codes: 0 = success, 2 = invalid graph or store limit exceeded.
use cyclenum_core::{
    CanonicalForm, CycleEngine, EngineConfig, Path, PathList, StoreMode, UndirectedGraph,
};
use serde::Serialize;

use crate::cli::{Algorithm, OutputFormat};
use crate::error::CliError;
use crate::output::write_json;
use crate::source::check_store_limit;

/// Parsed `list` flags.
#[derive(Debug, Clone, Copy)]
pub struct ListOptions {
    /// Enumerator selection.
    pub algorithm: Algorithm,
    /// Restrict the DFS to this origin.
    pub origin: Option<usize>,
    /// Print canonical keys instead of raw discoveries.
    pub unique: bool,
    /// Key for `unique`.
    pub canonical: CanonicalForm,
    /// `--max-store-vertices`.
    pub max_store_vertices: usize,
}

/// Cycles produced by each selected enumerator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Listing {
    /// DFS discoveries or keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dfs: Option<Vec<Path>>,
    /// Combinatorial discoveries or keys.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub combinatorial: Option<Vec<Path>>,
}

/// Collects the cycles selected by `opts`.
///
/// # Errors
///
/// - [`CliError::StoreLimitExceeded`] above the ceiling.
/// - [`CliError::InvalidGraph`] if `--origin` is out of range.
pub fn collect(graph: &UndirectedGraph, opts: &ListOptions) -> Result<Listing, CliError> {
    check_store_limit(graph, opts.max_store_vertices, "path storage")?;

    let config = EngineConfig {
        store_mode: StoreMode::StorePaths,
        canonical_form: opts.canonical,
    };
    let mut engine = CycleEngine::new(graph, config);
    let mut listing = Listing::default();

    if opts.algorithm.runs_dfs() {
        match opts.origin {
            Some(origin) => engine.run_dfs_from(origin)?,
            None => engine.run_dfs_total(),
        };
        listing.dfs = Some(if opts.unique {
            engine.unique_dfs_cycles()?
        } else {
            engine.dfs_paths()?.to_vec()
        });
    }
    if opts.algorithm.runs_combinatorial() {
        engine.run_combinatorial();
        listing.combinatorial = Some(if opts.unique {
            engine.unique_perm_cycles()?
        } else {
            engine.perm_paths()?.to_vec()
        });
    }
    Ok(listing)
}

/// Runs the `list` command and writes the cycles to stdout.
///
/// # Errors
///
/// See [`collect`].
pub fn run(
    graph: &UndirectedGraph,
    opts: &ListOptions,
    format: OutputFormat,
) -> Result<(), CliError> {
    let listing = collect(graph, opts)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &listing)?,
        OutputFormat::Json => write_json(&mut out, &listing)?,
    }
    Ok(())
}

fn print_human<W: std::io::Write>(w: &mut W, listing: &Listing) -> std::io::Result<()> {
    let headed = listing.dfs.is_some() && listing.combinatorial.is_some();
    for (name, paths) in [("dfs", &listing.dfs), ("combinatorial", &listing.combinatorial)] {
        let Some(paths) = paths else { continue };
        if headed {
            writeln!(w, "# {name}")?;
        }
        write!(w, "{}", PathList(paths))?;
    }
    Ok(())
}
