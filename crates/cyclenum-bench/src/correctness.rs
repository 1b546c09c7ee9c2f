//! Post-enumeration invariant checkers for correctness validation.

use std::collections::HashSet;

use cyclenum_core::{
    CanonicalForm, Path, StoreMode, UndirectedGraph, combinatorial_cycles, count_unique,
    dedupe_with, dfs_cycles_total,
};
use petgraph::algo::connected_components;

/// Verifies that the generator produced a simple graph whose petgraph view
/// agrees with the adjacency lists.
pub fn check_graph_invariants(graph: &UndirectedGraph) -> Result<(), String> {
    let summary = graph.summary();
    if !summary.is_simple() {
        return Err(format!(
            "graph is not simple: {} loops, {} parallel edges",
            summary.self_loops, summary.parallel_edges
        ));
    }
    let pg = graph.to_petgraph();
    if pg.node_count() != graph.vertex_count() {
        return Err(format!(
            "vertex count mismatch: petgraph={}, graph={}",
            pg.node_count(),
            graph.vertex_count()
        ));
    }
    if pg.edge_count() != graph.edge_count() {
        return Err(format!(
            "edge count mismatch: petgraph={}, graph={}",
            pg.edge_count(),
            graph.edge_count()
        ));
    }
    for (u, neighbors) in graph.adjacency().iter().enumerate() {
        for &v in neighbors {
            if !graph.has_edge(v, u) {
                return Err(format!("edge {u}-{v} is missing its reverse entry"));
            }
        }
    }
    Ok(())
}

/// Verifies that the graph has a single connected component.
pub fn check_connected(graph: &UndirectedGraph) -> Result<(), String> {
    if graph.vertex_count() == 0 {
        return Ok(());
    }
    let components = connected_components(&graph.to_petgraph());
    if components != 1 {
        return Err(format!("expected 1 component, found {components}"));
    }
    Ok(())
}

/// Verifies that `path` is a simple cycle of `graph`:
/// - at least three vertices
/// - no repeated vertex
/// - each consecutive pair, and the last back to the first, is an edge
pub fn check_simple_cycle(graph: &UndirectedGraph, path: &[usize]) -> Result<(), String> {
    if path.len() < 3 {
        return Err(format!("cycle {path:?} has fewer than three vertices"));
    }
    let unique: HashSet<_> = path.iter().collect();
    if unique.len() != path.len() {
        return Err(format!("cycle {path:?} repeats a vertex"));
    }
    for (i, &u) in path.iter().enumerate() {
        let v = path[(i + 1) % path.len()];
        if !graph.has_edge(u, v) {
            return Err(format!("cycle {path:?} uses missing edge {u}-{v}"));
        }
    }
    Ok(())
}

/// Verifies that both enumerators produce the same raw count and the same
/// set of unique cycles under `form`.
pub fn check_enumerators_agree(
    graph: &UndirectedGraph,
    form: CanonicalForm,
) -> Result<(), String> {
    let dfs = stored_dfs(graph)?;
    let perm = combinatorial_cycles(graph, StoreMode::StorePaths)
        .into_paths()
        .ok_or("combinatorial run did not store paths")?;

    if dfs.len() != perm.len() {
        return Err(format!(
            "raw count mismatch: dfs={}, combinatorial={}",
            dfs.len(),
            perm.len()
        ));
    }
    let dfs_keys: HashSet<Path> = dedupe_with(&dfs, form).into_iter().collect();
    let perm_keys: HashSet<Path> = dedupe_with(&perm, form).into_iter().collect();
    if dfs_keys != perm_keys {
        return Err(format!(
            "unique cycles differ: dfs={}, combinatorial={}",
            dfs_keys.len(),
            perm_keys.len()
        ));
    }
    Ok(())
}

/// Verifies that each distinct cycle of length `k` was discovered exactly
/// `2k` times by the all-origins DFS.
pub fn check_raw_multiplicity(graph: &UndirectedGraph) -> Result<(), String> {
    let dfs = stored_dfs(graph)?;
    let expected: usize = dedupe_with(&dfs, CanonicalForm::Rotation)
        .iter()
        .map(|c| 2 * c.len())
        .sum();
    if expected != dfs.len() {
        return Err(format!(
            "raw count {} does not equal sum of 2k over unique cycles ({expected})",
            dfs.len()
        ));
    }
    Ok(())
}

/// Verifies that deduplication is idempotent and never grows the input.
pub fn check_dedupe(cycles: &[Path], form: CanonicalForm) -> Result<(), String> {
    let once = dedupe_with(cycles, form);
    let twice = dedupe_with(&once, form);
    if once != twice {
        return Err("dedupe is not idempotent".to_owned());
    }
    if once.len() > cycles.len() {
        return Err("dedupe produced more cycles than it was given".to_owned());
    }
    if count_unique(cycles, form) != once.len() {
        return Err("count_unique disagrees with dedupe".to_owned());
    }
    Ok(())
}

fn stored_dfs(graph: &UndirectedGraph) -> Result<Vec<Path>, String> {
    dfs_cycles_total(graph, StoreMode::StorePaths)
        .into_paths()
        .ok_or_else(|| "dfs run did not store paths".to_owned())
}
