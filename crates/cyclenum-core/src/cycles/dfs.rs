//! Backtracking DFS cycle enumeration.
//!
//! A search rooted at `origin` extends an open walk one unvisited neighbor at
//! a time. Whenever the current vertex has `origin` as a neighbor and the
//! walk already holds more than two vertices, the walk closes into a simple
//! cycle and is reported. The length guard is what rejects the degenerate
//! back-and-forth over a single edge: with two vertices on the walk, the only
//! way back to `origin` is the edge just used.
//!
//! Every cycle through `origin` is found exactly twice, once per direction.
//! Running from every vertex ([`dfs_cycles_total`]) finds a cycle of length
//! `k` exactly `2k` times.
//!
//! # Path discipline
//!
//! The search runs on a heap-allocated frame stack rather than native
//! recursion, so walk length is bounded by memory and not by the thread
//! stack. A single walk buffer and on-walk table are shared by all frames and
//! restored with push/pop as frames enter and leave, so sibling branches
//! never observe each other's tentative vertices.

use crate::cycles::{CycleSink, Discovery, StoreMode};
use crate::graph::{GraphError, UndirectedGraph};

/// Enumerates the cycles that pass back through `origin`.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if `origin` is not a vertex of
/// `graph`.
pub fn dfs_cycles_from(
    graph: &UndirectedGraph,
    origin: usize,
    mode: StoreMode,
) -> Result<Discovery, GraphError> {
    let mut found = Discovery::empty(mode);
    visit_dfs_cycles(graph, origin, &mut found)?;
    Ok(found)
}

/// Enumerates cycles from every vertex as origin, in ascending vertex order,
/// aggregating the per-origin results.
///
/// Each cycle of length `k` contributes `2k` raw discoveries.
pub fn dfs_cycles_total(graph: &UndirectedGraph, mode: StoreMode) -> Discovery {
    let mut found = Discovery::empty(mode);
    let mut walk = Walk::new(graph.vertex_count());
    for origin in 0..graph.vertex_count() {
        let before = found.total();
        search(graph, origin, &mut walk, &mut found);
        tracing::debug!(
            origin,
            discovered = found.total() - before,
            "dfs origin finished"
        );
    }
    found
}

/// Drives the search rooted at `origin`, handing each cycle to `sink`.
///
/// # Errors
///
/// Returns [`GraphError::VertexOutOfRange`] if `origin` is not a vertex of
/// `graph`; `sink` is left untouched.
pub fn visit_dfs_cycles<S: CycleSink>(
    graph: &UndirectedGraph,
    origin: usize,
    sink: &mut S,
) -> Result<(), GraphError> {
    graph.check_vertex(origin)?;
    let mut walk = Walk::new(graph.vertex_count());
    search(graph, origin, &mut walk, sink);
    Ok(())
}

/// Walk buffer plus an on-walk table indexed by vertex id.
///
/// Empty between searches; reused across origins by [`dfs_cycles_total`].
struct Walk {
    path: Vec<usize>,
    on_path: Vec<bool>,
}

impl Walk {
    fn new(vertex_count: usize) -> Self {
        Self {
            path: Vec::with_capacity(vertex_count),
            on_path: vec![false; vertex_count],
        }
    }
}

/// One pending vertex on the explicit search stack: the vertex itself and
/// the index of the next neighbor to try.
struct Frame {
    node: usize,
    next: usize,
}

/// Iterative backtracking from `origin`.
///
/// A frame is pushed together with its vertex onto the walk and popped
/// together with it once its neighbor list is exhausted, so the walk always
/// mirrors the frame stack. Neighbors are tried in adjacency order, which
/// fixes the discovery order.
fn search<S: CycleSink>(graph: &UndirectedGraph, origin: usize, walk: &mut Walk, sink: &mut S) {
    let adjacency = graph.adjacency();
    let mut stack = vec![Frame {
        node: origin,
        next: 0,
    }];
    walk.path.push(origin);
    walk.on_path[origin] = true;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        let Some(&neighbor) = adjacency[node].get(frame.next) else {
            stack.pop();
            walk.path.pop();
            walk.on_path[node] = false;
            continue;
        };
        frame.next += 1;

        if neighbor == origin {
            if walk.path.len() > 2 {
                sink.record(&walk.path);
            }
        } else if !walk.on_path[neighbor] {
            // The parent and the origin are both on the walk, so the
            // membership test also excludes stepping straight back.
            walk.path.push(neighbor);
            walk.on_path[neighbor] = true;
            stack.push(Frame {
                node: neighbor,
                next: 0,
            });
        }
    }
}
