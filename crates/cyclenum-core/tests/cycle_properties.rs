//! Property-based tests for the cycle enumerators.
//!
//! Random simple graphs on 1-7 vertices are small enough for the
//! combinatorial enumerator to run in milliseconds, which lets every case
//! cross-check it against the DFS enumerator.
#![allow(clippy::expect_used)]

use std::collections::HashSet;

use cyclenum_core::{
    CanonicalForm, Path, StoreMode, UndirectedGraph, canonical_key, combinatorial_cycles,
    count_unique, cross_check, dedupe_with, dfs_cycles_total,
};
use proptest::prelude::*;

const MAX_VERTICES: usize = 7;

/// Strategy: a simple undirected graph (no loops, no parallel edges) on
/// `1..=MAX_VERTICES` vertices. Edge insertion order follows generation
/// order so neighbor lists are not always ascending.
fn arb_graph() -> impl Strategy<Value = UndirectedGraph> {
    (1usize..=MAX_VERTICES)
        .prop_flat_map(|n| {
            let pairs = prop::collection::vec((0..n, 0..n), 0..=14usize);
            (Just(n), pairs)
        })
        .prop_map(|(n, pairs)| {
            let mut seen = HashSet::new();
            let edges: Vec<(usize, usize)> = pairs
                .into_iter()
                .filter(|&(u, v)| u != v && seen.insert((u.min(v), u.max(v))))
                .collect();
            UndirectedGraph::from_edges(n, edges).expect("generated edges are in range")
        })
}

fn stored_dfs(graph: &UndirectedGraph) -> Vec<Path> {
    dfs_cycles_total(graph, StoreMode::StorePaths)
        .into_paths()
        .expect("store mode")
}

fn exact_keys(paths: &[Path]) -> HashSet<Path> {
    paths
        .iter()
        .map(|p| canonical_key(p, CanonicalForm::Rotation))
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Both enumerators agree on raw and unique counts under either key.
    #[test]
    fn enumerators_agree(g in arb_graph()) {
        for form in [CanonicalForm::VertexSet, CanonicalForm::Rotation] {
            let check = cross_check(&g, form).expect("store mode");
            prop_assert!(check.agrees(), "{:?}", check);
        }
    }

    /// Counting and storing discover the same number of cycles.
    #[test]
    fn count_and_store_modes_agree(g in arb_graph()) {
        prop_assert_eq!(
            dfs_cycles_total(&g, StoreMode::CountOnly).total(),
            dfs_cycles_total(&g, StoreMode::StorePaths).total()
        );
        prop_assert_eq!(
            combinatorial_cycles(&g, StoreMode::CountOnly).total(),
            combinatorial_cycles(&g, StoreMode::StorePaths).total()
        );
    }

    /// Deduplicating an already deduplicated list changes nothing.
    #[test]
    fn dedupe_is_idempotent(g in arb_graph()) {
        let raw = stored_dfs(&g);
        for form in [CanonicalForm::VertexSet, CanonicalForm::Rotation] {
            let once = dedupe_with(&raw, form);
            prop_assert_eq!(dedupe_with(&once, form), once);
        }
    }

    /// Every discovery is a simple cycle of length three or more.
    #[test]
    fn discoveries_are_simple_cycles(g in arb_graph()) {
        for p in stored_dfs(&g) {
            prop_assert!(p.len() >= 3, "{:?}", p);
            let distinct: HashSet<usize> = p.iter().copied().collect();
            prop_assert_eq!(distinct.len(), p.len());
            for i in 0..p.len() {
                prop_assert!(g.has_edge(p[i], p[(i + 1) % p.len()]));
            }
        }
    }

    /// Each cycle of length `k` is discovered `2k` times over all origins.
    #[test]
    fn raw_count_is_twice_total_cycle_length(g in arb_graph()) {
        let raw = stored_dfs(&g);
        let expected: u64 = exact_keys(&raw).iter().map(|c| 2 * c.len() as u64).sum();
        prop_assert_eq!(raw.len() as u64, expected);
    }

    /// A graph has a cycle exactly when its cycle rank is positive.
    #[test]
    fn cycle_rank_predicts_cycles(g in arb_graph()) {
        let found = dfs_cycles_total(&g, StoreMode::CountOnly).total();
        prop_assert_eq!(g.summary().has_simple_cycle(), found > 0);
    }

    /// Isolating a vertex removes exactly the cycles through it, for both
    /// enumerators.
    #[test]
    fn isolating_a_vertex_drops_its_cycles(g in arb_graph(), pick in any::<prop::sample::Index>()) {
        let v = pick.index(g.vertex_count());
        let before: HashSet<Path> = exact_keys(&stored_dfs(&g))
            .into_iter()
            .filter(|c| !c.contains(&v))
            .collect();

        let mut h = g.clone();
        h.isolate(v).expect("in range");
        let after = exact_keys(&stored_dfs(&h));
        prop_assert_eq!(&after, &before);

        let brute = combinatorial_cycles(&h, StoreMode::StorePaths)
            .into_paths()
            .expect("store mode");
        prop_assert!(brute.iter().all(|c| !c.contains(&v)), "{:?}", brute);
        prop_assert_eq!(exact_keys(&brute), before);
    }

    /// Adding an absent edge and removing it again restores the cycle count.
    #[test]
    fn add_then_remove_edge_restores_count(
        g in arb_graph(),
        a in any::<prop::sample::Index>(),
        b in any::<prop::sample::Index>(),
    ) {
        let n = g.vertex_count();
        let (u, v) = (a.index(n), b.index(n));
        prop_assume!(u != v && !g.has_edge(u, v));

        let baseline = dfs_cycles_total(&g, StoreMode::CountOnly).total();
        let mut h = g.clone();
        h.add_edge(u, v).expect("in range");
        let with_edge = dfs_cycles_total(&h, StoreMode::CountOnly).total();
        prop_assert!(with_edge >= baseline);
        prop_assert!(h.remove_edge(u, v).expect("in range"));
        prop_assert_eq!(dfs_cycles_total(&h, StoreMode::CountOnly).total(), baseline);
        prop_assert_eq!(h, g);
    }

    /// Vertex-set keys never outnumber exact keys.
    #[test]
    fn vertex_set_key_is_coarser(g in arb_graph()) {
        let raw = stored_dfs(&g);
        prop_assert!(
            count_unique(&raw, CanonicalForm::VertexSet)
                <= count_unique(&raw, CanonicalForm::Rotation)
        );
    }
}
