//! CLI error types with associated exit codes.
//!
//! [`CliError`] is the top-level error type for the `cyclenum` binary. Every
//! variant maps to a stable exit code (1 or 2) via [`CliError::exit_code`]:
//!
//! - Exit code **2**: input failure. The graph could not be built or the
//!   requested run is not allowed for it. Nothing has been enumerated.
//! - Exit code **1**: logical failure. The enumeration ran to completion but
//!   the result is a well-defined failure (enumerators disagree, no cycles
//!   where some were required).
//!
//! [`CliError::OutputClosed`] is the one exception: the reader of stdout went
//! away (e.g. `cyclenum list ... | head`), which exits 0 without a message.

use std::fmt;

use cyclenum_core::{EngineError, GraphError};

// ---------------------------------------------------------------------------
// CliError
// ---------------------------------------------------------------------------

/// All error conditions that the `cyclenum` CLI can produce.
///
/// Use [`CliError::exit_code`] to obtain the exit code associated with each
/// variant. [`CliError::message`] returns the human-readable error string
/// that `main` prints to stderr before exiting.
#[derive(Debug)]
pub enum CliError {
    // --- Exit code 2: input failures ---
    /// None of `--complete`, `--example` or `--vertices` was given.
    NoGraphSource,

    /// The graph rejected a vertex or adjacency argument.
    InvalidGraph {
        /// Description from the graph store.
        detail: String,
    },

    /// The run would store paths or brute-force a graph above the configured
    /// `--max-store-vertices` ceiling.
    StoreLimitExceeded {
        /// What was requested (e.g. `"combinatorial enumeration"`).
        operation: &'static str,
        /// Vertex count of the graph.
        vertices: usize,
        /// The configured ceiling.
        limit: usize,
    },

    /// A query needed stored paths but the run only counted.
    Unsupported {
        /// Description from the engine.
        detail: String,
    },

    /// Writing to stdout failed.
    OutputFailed {
        /// The underlying I/O error message.
        detail: String,
    },

    /// Stdout was closed by the reader.
    OutputClosed,

    // --- Exit code 1: logical failures ---
    /// The DFS and combinatorial enumerators produced different results.
    ///
    /// The comparison has already been printed; this variant exists so
    /// `main` can call `process::exit(1)` cleanly.
    CrossCheckFailed,

    /// `--require-cycles` was given and the graph has none.
    NoCycles,
}

impl CliError {
    /// Returns the process exit code for this error.
    ///
    /// - `2`: input failure (no graph, bad vertex, store limit, etc.).
    /// - `1`: logical failure (cross-check disagreement, no cycles).
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::NoGraphSource
            | Self::InvalidGraph { .. }
            | Self::StoreLimitExceeded { .. }
            | Self::Unsupported { .. }
            | Self::OutputFailed { .. } => 2,

            Self::CrossCheckFailed | Self::NoCycles => 1,

            Self::OutputClosed => 0,
        }
    }

    /// Returns a human-readable error message suitable for printing to stderr.
    pub fn message(&self) -> String {
        match self {
            Self::NoGraphSource => {
                "error: no graph given; use --complete N, --example, or --vertices N".to_owned()
            }
            Self::InvalidGraph { detail } => format!("error: invalid graph: {detail}"),
            Self::StoreLimitExceeded {
                operation,
                vertices,
                limit,
            } => format!(
                "error: {operation} on {vertices} vertices exceeds --max-store-vertices {limit}"
            ),
            Self::Unsupported { detail } => format!("error: {detail}"),
            Self::OutputFailed { detail } => format!("error: failed to write output: {detail}"),
            Self::OutputClosed => String::new(),
            Self::CrossCheckFailed => {
                "error: DFS and combinatorial enumerators disagree".to_owned()
            }
            Self::NoCycles => "error: graph has no simple cycles".to_owned(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CliError {}

impl From<GraphError> for CliError {
    fn from(e: GraphError) -> Self {
        Self::InvalidGraph {
            detail: e.to_string(),
        }
    }
}

impl From<EngineError> for CliError {
    fn from(e: EngineError) -> Self {
        match e {
            EngineError::Graph(inner) => inner.into(),
            EngineError::UnsupportedInMode { .. } => Self::Unsupported {
                detail: e.to_string(),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        if e.kind() == std::io::ErrorKind::BrokenPipe {
            return Self::OutputClosed;
        }
        Self::OutputFailed {
            detail: e.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
