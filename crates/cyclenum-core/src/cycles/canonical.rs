//! Duplicate-insensitive cycle keys and order-preserving deduplication.
//!
//! Both enumerators discover every cycle many times over (per starting vertex
//! and direction). A canonical key maps all of those discoveries to one
//! value; deduplication keeps the first occurrence of each key.
//!
//! # Forms
//!
//! - [`CanonicalForm::VertexSet`] (default): the cycle's vertices in
//!   ascending order. This is coarser than "distinct cycle": two cycles over
//!   the same vertex set with different edges collapse into one key. In `K4`
//!   the three Hamiltonian 4-cycles share the key `[0, 1, 2, 3]`.
//! - [`CanonicalForm::Rotation`]: the cycle rotated to start at its smallest
//!   vertex and oriented toward the smaller of that vertex's two cycle
//!   neighbors. Two discoveries share this key exactly when they traverse the
//!   same edges, so unique counts under this form are true simple-cycle
//!   counts.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::cycles::Path;

/// How raw discoveries are reduced to a comparison key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CanonicalForm {
    /// Ascending vertex set.
    #[default]
    VertexSet,
    /// Rotation- and reflection-normalized vertex sequence.
    Rotation,
}

/// Returns the canonical key of `cycle` under `form`.
pub fn canonical_key(cycle: &[usize], form: CanonicalForm) -> Path {
    match form {
        CanonicalForm::VertexSet => {
            let mut key = cycle.to_vec();
            key.sort_unstable();
            key
        }
        CanonicalForm::Rotation => rotation_key(cycle),
    }
}

fn rotation_key(cycle: &[usize]) -> Path {
    let Some(start) = cycle
        .iter()
        .enumerate()
        .min_by_key(|&(_, v)| v)
        .map(|(i, _)| i)
    else {
        return Vec::new();
    };

    let mut key = Vec::with_capacity(cycle.len());
    key.extend_from_slice(&cycle[start..]);
    key.extend_from_slice(&cycle[..start]);

    // Walk the other way round if that reaches a smaller neighbor first.
    let flip = matches!((key.get(1), key.last()), (Some(second), Some(last)) if last < second);
    if flip {
        key[1..].reverse();
    }
    key
}

/// Removes repeated cycles under the default [`CanonicalForm::VertexSet`]
/// key, returning the keys of the first occurrences in discovery order.
pub fn dedupe(cycles: &[Path]) -> Vec<Path> {
    dedupe_with(cycles, CanonicalForm::VertexSet)
}

/// Removes repeated cycles under `form`, returning the canonical keys of the
/// first occurrences in discovery order.
///
/// Applying this to its own output returns the output unchanged.
pub fn dedupe_with(cycles: &[Path], form: CanonicalForm) -> Vec<Path> {
    let mut seen: HashSet<Path> = HashSet::with_capacity(cycles.len());
    let mut unique = Vec::new();
    for cycle in cycles {
        let key = canonical_key(cycle, form);
        if !seen.contains(&key) {
            seen.insert(key.clone());
            unique.push(key);
        }
    }
    unique
}

/// Number of distinct keys among `cycles` under `form`.
pub fn count_unique(cycles: &[Path], form: CanonicalForm) -> usize {
    cycles
        .iter()
        .map(|c| canonical_key(c, form))
        .collect::<HashSet<_>>()
        .len()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::cycles::{StoreMode, combinatorial_cycles, dfs_cycles_total};
    use crate::graph::UndirectedGraph;
    use crate::test_helpers::example_graph;

    #[test]
    fn vertex_set_key_sorts() {
        assert_eq!(
            canonical_key(&[3, 0, 2, 1], CanonicalForm::VertexSet),
            vec![0, 1, 2, 3]
        );
    }

    #[test]
    fn rotation_key_normalizes_start_and_direction() {
        let expected = vec![0, 1, 2, 3];
        for discovery in [
            vec![0, 1, 2, 3],
            vec![2, 3, 0, 1],
            vec![3, 2, 1, 0],
            vec![1, 0, 3, 2],
        ] {
            assert_eq!(
                canonical_key(&discovery, CanonicalForm::Rotation),
                expected,
                "{discovery:?}"
            );
        }
    }

    #[test]
    fn rotation_key_distinguishes_edge_sets() {
        let a = canonical_key(&[0, 1, 2, 3], CanonicalForm::Rotation);
        let b = canonical_key(&[0, 2, 1, 3], CanonicalForm::Rotation);
        assert_ne!(a, b);
        assert_eq!(
            canonical_key(&[0, 1, 2, 3], CanonicalForm::VertexSet),
            canonical_key(&[0, 2, 1, 3], CanonicalForm::VertexSet)
        );
    }

    #[test]
    fn rotation_key_of_empty_cycle_is_empty() {
        assert!(canonical_key(&[], CanonicalForm::Rotation).is_empty());
    }

    #[test]
    fn dedupe_keeps_first_occurrence_order() {
        let raw = vec![vec![2, 1, 0], vec![3, 0, 1], vec![0, 2, 1], vec![1, 0, 3]];
        assert_eq!(dedupe(&raw), vec![vec![0, 1, 2], vec![0, 1, 3]]);
    }

    #[test]
    fn dedupe_of_empty_is_empty() {
        assert!(dedupe(&[]).is_empty());
        assert!(dedupe_with(&[], CanonicalForm::Rotation).is_empty());
    }

    #[test]
    fn dedupe_is_idempotent() {
        let raw = dfs_cycles_total(&example_graph(), StoreMode::StorePaths)
            .into_paths()
            .expect("store mode");
        for form in [CanonicalForm::VertexSet, CanonicalForm::Rotation] {
            let once = dedupe_with(&raw, form);
            assert_eq!(dedupe_with(&once, form), once, "{form:?}");
        }
    }

    #[test]
    fn example_graph_unique_counts() {
        let g = example_graph();
        let dfs = dfs_cycles_total(&g, StoreMode::StorePaths)
            .into_paths()
            .expect("store mode");
        let perm = combinatorial_cycles(&g, StoreMode::StorePaths)
            .into_paths()
            .expect("store mode");
        assert_eq!(dedupe(&dfs).len(), 23);
        assert_eq!(dedupe(&perm).len(), 23);
        assert_eq!(count_unique(&dfs, CanonicalForm::Rotation), 38);
        assert_eq!(count_unique(&perm, CanonicalForm::Rotation), 38);
    }

    #[test]
    fn k4_vertex_set_collapses_hamiltonian_cycles() {
        let raw = dfs_cycles_total(&UndirectedGraph::complete(4), StoreMode::StorePaths)
            .into_paths()
            .expect("store mode");
        // 4 triangles + 1 vertex set for the three 4-cycles.
        assert_eq!(count_unique(&raw, CanonicalForm::VertexSet), 5);
        assert_eq!(count_unique(&raw, CanonicalForm::Rotation), 7);
    }

    #[test]
    fn canonical_form_serializes_kebab_case() {
        let s = serde_json::to_string(&CanonicalForm::VertexSet).expect("serializes");
        assert_eq!(s, "\"vertex-set\"");
    }
}
