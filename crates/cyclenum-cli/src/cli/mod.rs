//! Clap CLI definition: root struct, subcommands, and shared argument types.
use clap::{Args, Parser, Subcommand, ValueEnum};
use cyclenum_core::CanonicalForm;

/// An undirected edge written as `U-V`, e.g. `0-3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub u: usize,
    /// Second endpoint.
    pub v: usize,
}

impl std::str::FromStr for EdgeSpec {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (u, v) = s
            .split_once('-')
            .ok_or_else(|| format!("expected an edge like 0-3, got {s:?}"))?;
        let parse = |part: &str| {
            part.trim()
                .parse::<usize>()
                .map_err(|e| format!("invalid vertex {part:?} in edge {s:?}: {e}"))
        };
        Ok(EdgeSpec {
            u: parse(u)?,
            v: parse(v)?,
        })
    }
}

/// Output format for CLI commands.
///
/// `Human` emits plain text to stdout. `Json` emits a single JSON object.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text (default).
    Human,
    /// Structured JSON output.
    Json,
}

/// Which enumerator(s) a command runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Algorithm {
    /// Backtracking depth-first search.
    Dfs,
    /// Brute force over vertex subsets and their orderings.
    Combinatorial,
    /// Both enumerators.
    Both,
}

impl Algorithm {
    /// Whether the DFS enumerator is selected.
    pub fn runs_dfs(self) -> bool {
        matches!(self, Self::Dfs | Self::Both)
    }

    /// Whether the combinatorial enumerator is selected.
    pub fn runs_combinatorial(self) -> bool {
        matches!(self, Self::Combinatorial | Self::Both)
    }
}

/// Duplicate-cycle key used by unique counts and listings.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CanonicalArg {
    /// Cycles over the same vertex set are one cycle (default).
    VertexSet,
    /// Cycles are equal only if they traverse the same edges.
    Rotation,
}

impl From<CanonicalArg> for CanonicalForm {
    fn from(arg: CanonicalArg) -> Self {
        match arg {
            CanonicalArg::VertexSet => CanonicalForm::VertexSet,
            CanonicalArg::Rotation => CanonicalForm::Rotation,
        }
    }
}

/// Where the graph comes from, plus edits applied after it is built.
#[derive(Args, Clone, Debug)]
pub struct GraphArgs {
    /// Use the complete graph on N vertices.
    #[arg(long, value_name = "N", conflicts_with_all = ["example", "vertices"])]
    pub complete: Option<usize>,

    /// Use the built-in six-vertex reference graph.
    #[arg(long, conflicts_with = "vertices")]
    pub example: bool,

    /// Start from N isolated vertices (combine with --edge).
    #[arg(long, value_name = "N")]
    pub vertices: Option<usize>,

    /// Add the edge U-V (repeatable; requires --vertices).
    #[arg(long = "edge", value_name = "U-V", requires = "vertices")]
    pub edges: Vec<EdgeSpec>,

    /// Remove every U-V edge after the graph is built (repeatable).
    #[arg(long = "remove-edge", value_name = "U-V")]
    pub remove_edges: Vec<EdgeSpec>,

    /// Remove every edge touching vertex V after the graph is built
    /// (repeatable).
    #[arg(long, value_name = "V")]
    pub isolate: Vec<usize>,
}

/// All top-level subcommands exposed by the `cyclenum` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Count simple cycles with one or both enumerators.
    Count {
        #[command(flatten)]
        graph: GraphArgs,
        /// Enumerator to run: dfs, combinatorial, or both (default).
        #[arg(long, default_value = "both", value_enum)]
        algorithm: Algorithm,
        /// Only count DFS cycles that pass through this vertex.
        #[arg(long, value_name = "V")]
        origin: Option<usize>,
        /// Also report unique cycle counts (stores every discovered path).
        #[arg(long)]
        unique: bool,
        /// Duplicate-cycle key for unique counts.
        #[arg(long, default_value = "vertex-set", value_enum)]
        canonical: CanonicalArg,
        /// Exit with code 1 if no cycle is found.
        #[arg(long)]
        require_cycles: bool,
    },

    /// Print discovered cycles, one per line.
    List {
        #[command(flatten)]
        graph: GraphArgs,
        /// Enumerator to run: dfs (default) or combinatorial.
        #[arg(long, default_value = "dfs", value_enum)]
        algorithm: Algorithm,
        /// Only list DFS cycles that pass through this vertex.
        #[arg(long, value_name = "V")]
        origin: Option<usize>,
        /// Print each cycle once, as its canonical key.
        #[arg(long)]
        unique: bool,
        /// Duplicate-cycle key for --unique.
        #[arg(long, default_value = "vertex-set", value_enum)]
        canonical: CanonicalArg,
    },

    /// Print structural statistics and the adjacency list of a graph.
    Inspect {
        #[command(flatten)]
        graph: GraphArgs,
    },

    /// Run both enumerators and check that they agree.
    Verify {
        #[command(flatten)]
        graph: GraphArgs,
        /// Duplicate-cycle key for the unique comparison.
        #[arg(long, default_value = "rotation", value_enum)]
        canonical: CanonicalArg,
    },

    /// Count cycles of the complete graphs K1 through KN.
    Sweep {
        /// Largest complete graph to enumerate.
        #[arg(long, value_name = "N", default_value = "10")]
        max: usize,
        /// Enumerator to run: dfs, combinatorial, or both (default).
        #[arg(long, default_value = "both", value_enum)]
        algorithm: Algorithm,
    },

    /// Print the cyclenum-core library version.
    Version,
}

/// Root CLI struct for the `cyclenum` binary.
///
/// All global flags are defined here and marked `global = true` so that clap
/// propagates them to every subcommand.
#[derive(Parser)]
#[command(
    name = "cyclenum",
    version,
    about = "Simple-cycle enumeration for undirected graphs",
    long_about = "Counts and lists simple cycles of undirected graphs with a depth-first\n\
                  search and a brute-force subset/permutation enumerator, and\n\
                  cross-checks the two against each other."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Only log errors to stderr (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log per-origin and per-size progress to stderr (incompatible with
    /// `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Largest graph for which paths are stored or the combinatorial
    /// enumerator runs.
    ///
    /// Can also be set via the `CYCLENUM_MAX_STORE_VERTICES` environment
    /// variable. The CLI flag takes precedence over the environment variable.
    #[arg(
        long,
        global = true,
        env = "CYCLENUM_MAX_STORE_VERTICES",
        default_value = "10"
    )]
    pub max_store_vertices: usize,
}
