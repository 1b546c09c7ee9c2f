//! Simple-cycle enumeration over an [`UndirectedGraph`](crate::graph::UndirectedGraph).
//!
//! Two independent enumerators discover the same multiset of cycles and are
//! used to cross-validate each other:
//!
//! - [`dfs`]: backtracking search that closes walks back through a fixed
//!   origin. Run from every vertex, each cycle of length `k` is discovered
//!   `2k` times (once per starting vertex and direction).
//! - [`combinatorial`]: brute force over every vertex subset of size three or
//!   more and every ordering of each subset. A cycle of length `k` is accepted
//!   once per rotation and direction, again `2k` times.
//!
//! Raw discoveries are reduced to unique cycles by the [`canonical`]
//! submodule.
//!
//! # Result channels
//!
//! Materializing every discovery is combinatorially explosive, so each run is
//! either counting or storing, chosen by [`StoreMode`]. Results come back as a
//! tagged [`Discovery`], never as a bare number the caller has to interpret.

pub mod canonical;
pub mod combinatorial;
pub mod dfs;

pub use canonical::{CanonicalForm, canonical_key, count_unique, dedupe, dedupe_with};
pub use combinatorial::{candidate_count, combinatorial_cycles, visit_combinatorial_cycles};
pub use dfs::{dfs_cycles_from, dfs_cycles_total, visit_dfs_cycles};

use serde::{Deserialize, Serialize};

/// An open walk of vertex ids starting at the cycle's origin, without the
/// closing repeat of the origin.
pub type Path = Vec<usize>;

/// Whether discovered cycles are retained or only counted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StoreMode {
    /// Increment a counter per discovery. Memory stays bounded by the graph
    /// size; deduplication and path listing are unavailable.
    #[default]
    CountOnly,
    /// Keep every discovered path.
    StorePaths,
}

/// Receives each cycle as an enumerator discovers it.
///
/// The slice is only valid for the duration of the call; implementations
/// that keep it must copy it.
pub trait CycleSink {
    /// Records one discovered cycle.
    fn record(&mut self, cycle: &[usize]);
}

/// Outcome of an enumeration run: a count or the discovered paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Discovery {
    /// Number of raw discoveries (count-only mode).
    Count(u64),
    /// Every raw discovery in discovery order (store mode).
    Paths(Vec<Path>),
}

impl Discovery {
    /// Returns an empty result shaped for `mode`.
    pub fn empty(mode: StoreMode) -> Self {
        match mode {
            StoreMode::CountOnly => Discovery::Count(0),
            StoreMode::StorePaths => Discovery::Paths(Vec::new()),
        }
    }

    /// Returns the store mode this result was produced under.
    pub fn mode(&self) -> StoreMode {
        match self {
            Discovery::Count(_) => StoreMode::CountOnly,
            Discovery::Paths(_) => StoreMode::StorePaths,
        }
    }

    /// Number of raw discoveries, regardless of mode.
    pub fn total(&self) -> u64 {
        match self {
            Discovery::Count(n) => *n,
            Discovery::Paths(paths) => paths.len() as u64,
        }
    }

    /// Returns `true` if nothing was discovered.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// The stored paths, or `None` in count-only mode.
    pub fn paths(&self) -> Option<&[Path]> {
        match self {
            Discovery::Count(_) => None,
            Discovery::Paths(paths) => Some(paths),
        }
    }

    /// Consumes the result, returning the stored paths or `None` in
    /// count-only mode.
    pub fn into_paths(self) -> Option<Vec<Path>> {
        match self {
            Discovery::Count(_) => None,
            Discovery::Paths(paths) => Some(paths),
        }
    }

    /// Folds `other` into `self`: counts are summed, path lists concatenated.
    ///
    /// Mixing modes degrades to a count, since the count-only side has no
    /// paths to contribute.
    pub fn absorb(&mut self, other: Discovery) {
        let mine = std::mem::replace(self, Discovery::Count(0));
        *self = match (mine, other) {
            (Discovery::Paths(mut mine), Discovery::Paths(theirs)) => {
                mine.extend(theirs);
                Discovery::Paths(mine)
            }
            (mine, theirs) => Discovery::Count(mine.total() + theirs.total()),
        };
    }
}

impl CycleSink for Discovery {
    fn record(&mut self, cycle: &[usize]) {
        match self {
            Discovery::Count(n) => *n += 1,
            Discovery::Paths(paths) => paths.push(cycle.to_vec()),
        }
    }
}
