//! Brute-force cycle enumeration by subset and permutation.
//!
//! For every subset size `r` in `3..=n`, every `r`-element vertex subset (in
//! lexicographic order, see [`SubsetMasks`]) is permuted from ascending order
//! through [`next_permutation`]. A permutation is accepted when it reads as a
//! closed walk: each element is adjacent to the next, and the last is
//! adjacent to the first.
//!
//! This is a reference implementation to check the DFS enumerator against,
//! not a production path. The work is `Σ C(n, r) · r!` adjacency tests
//! regardless of how sparse the graph is; [`candidate_count`] reports that
//! figure up front. Nothing is pruned during generation, which keeps the
//! search independent of the DFS traversal.

use crate::combinatorics::{SubsetMasks, falling_factorial, next_permutation};
use crate::cycles::{CycleSink, Discovery, StoreMode};
use crate::graph::UndirectedGraph;

/// Smallest subset size that can form a simple cycle.
pub const MIN_CYCLE_LEN: usize = 3;

/// Enumerates every accepted permutation of `graph`.
///
/// Each simple cycle of length `k` is accepted `2k` times (every rotation in
/// both directions), matching the raw multiplicity of
/// [`dfs_cycles_total`](crate::cycles::dfs_cycles_total).
pub fn combinatorial_cycles(graph: &UndirectedGraph, mode: StoreMode) -> Discovery {
    let mut found = Discovery::empty(mode);
    visit_combinatorial_cycles(graph, &mut found);
    found
}

/// Runs the subset/permutation search, handing each accepted permutation to
/// `sink`.
///
/// Graphs with fewer than three vertices produce nothing.
pub fn visit_combinatorial_cycles<S: CycleSink>(graph: &UndirectedGraph, sink: &mut S) {
    let adjacency = graph.adjacency();
    let n = graph.vertex_count();

    for size in MIN_CYCLE_LEN..=n {
        let mut accepted: u64 = 0;
        for mut candidate in SubsetMasks::new(n, size) {
            loop {
                if is_closed_walk(adjacency, &candidate) {
                    sink.record(&candidate);
                    accepted += 1;
                }
                if !next_permutation(&mut candidate) {
                    break;
                }
            }
        }
        tracing::debug!(size, accepted, "combinatorial subset size finished");
    }
}

/// Returns `true` if consecutive entries of `order` are adjacent, including
/// the wraparound pair from the last entry back to the first.
///
/// An empty order is trivially closed; callers only pass orders of length
/// [`MIN_CYCLE_LEN`] or more.
pub fn is_closed_walk(adjacency: &[Vec<usize>], order: &[usize]) -> bool {
    let len = order.len();
    (0..len).all(|i| {
        let u = order[i];
        let v = order[(i + 1) % len];
        adjacency.get(u).is_some_and(|neighbors| neighbors.contains(&v))
    })
}

/// Number of permutations the combinatorial enumerator tests on a graph with
/// `vertex_count` vertices: `Σ_{r=3}^{n} C(n, r) · r!`.
///
/// Returns `None` if the figure does not fit in a `u128`.
pub fn candidate_count(vertex_count: usize) -> Option<u128> {
    let n = vertex_count as u64;
    (MIN_CYCLE_LEN as u64..=n).try_fold(0u128, |acc, r| {
        acc.checked_add(falling_factorial(n, r)?)
    })
}
