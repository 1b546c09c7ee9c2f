//! Agreement check between the DFS and combinatorial enumerators, plus the
//! closed-form cycle counts of complete graphs.
//!
//! The two enumerators share no traversal logic, so agreement on both the raw
//! and the unique counts is strong evidence that both are correct.

use std::collections::HashSet;

use serde::Serialize;

use crate::combinatorics::{binomial, falling_factorial};
use crate::cycles::{CanonicalForm, Path};
use crate::engine::{CycleEngine, EngineConfig, EngineError};
use crate::graph::UndirectedGraph;

/// Outcome of running both enumerators over the same graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossCheck {
    /// Number of vertices in the checked graph.
    pub vertex_count: usize,
    /// Key used for the unique counts.
    pub canonical_form: CanonicalForm,
    /// Raw DFS discoveries over all origins.
    pub dfs_raw: u64,
    /// Raw accepted permutations.
    pub combinatorial_raw: u64,
    /// Distinct keys among the DFS discoveries.
    pub dfs_unique: usize,
    /// Distinct keys among the accepted permutations.
    pub combinatorial_unique: usize,
    /// Whether both enumerators produced the same set of keys.
    pub unique_sets_match: bool,
}

impl CrossCheck {
    /// Returns `true` if raw counts, unique counts and unique key sets all
    /// agree.
    pub fn agrees(&self) -> bool {
        self.dfs_raw == self.combinatorial_raw
            && self.dfs_unique == self.combinatorial_unique
            && self.unique_sets_match
    }
}

/// Runs both enumerators in store mode over `graph` and compares them under
/// `form`.
///
/// Memory grows with the raw discovery count; callers bound the vertex count
/// before calling this on arbitrary input.
///
/// # Errors
///
/// Propagates [`EngineError`] from the store-mode queries. With the store
/// mode fixed here this does not happen in practice.
pub fn cross_check(graph: &UndirectedGraph, form: CanonicalForm) -> Result<CrossCheck, EngineError> {
    let mut engine = CycleEngine::new(graph, EngineConfig::storing().with_canonical_form(form));
    let dfs_raw = engine.run_dfs_total();
    let combinatorial_raw = engine.run_combinatorial();

    let dfs_keys = unique_keys(engine.unique_dfs_cycles()?);
    let perm_keys = unique_keys(engine.unique_perm_cycles()?);

    let check = CrossCheck {
        vertex_count: graph.vertex_count(),
        canonical_form: form,
        dfs_raw,
        combinatorial_raw,
        dfs_unique: dfs_keys.len(),
        combinatorial_unique: perm_keys.len(),
        unique_sets_match: dfs_keys == perm_keys,
    };
    if check.agrees() {
        tracing::info!(dfs_raw, dfs_unique = check.dfs_unique, "enumerators agree");
    } else {
        tracing::warn!(?check, "enumerators disagree");
    }
    Ok(check)
}

fn unique_keys(cycles: Vec<Path>) -> HashSet<Path> {
    cycles.into_iter().collect()
}

/// Number of simple cycles in the complete graph `K_n`:
/// `Σ_{k=3}^{n} C(n, k) · (k − 1)! / 2`.
///
/// Matches the unique count under [`CanonicalForm::Rotation`]. Returns
/// `None` on `u128` overflow.
pub fn complete_graph_cycle_count(n: usize) -> Option<u128> {
    let n = n as u64;
    (3..=n).try_fold(0u128, |acc, k| {
        let arrangements = falling_factorial(k - 1, k - 1)? / 2;
        acc.checked_add(binomial(n, k)?.checked_mul(arrangements)?)
    })
}

/// Number of distinct vertex sets that carry a cycle in `K_n`:
/// `2^n − 1 − n − C(n, 2)`.
///
/// Matches the unique count under [`CanonicalForm::VertexSet`]. Returns
/// `None` on `u128` overflow.
pub fn complete_graph_vertex_set_count(n: usize) -> Option<u128> {
    let n = n as u64;
    (3..=n).try_fold(0u128, |acc, k| acc.checked_add(binomial(n, k)?))
}
