//! Undirected graph store consumed by the cycle enumerators.
//!
//! [`UndirectedGraph`] keeps one ordered neighbor list per vertex. Vertex ids
//! are dense integers in `0..vertex_count()`, fixed at construction. Every
//! edge `{u, v}` is recorded twice, once in each endpoint's list, so the
//! adjacency is symmetric by construction.
//!
//! Neighbor lists preserve insertion order. The enumerators iterate them in
//! that order, which fixes the discovery order of cycles (but never which
//! cycles are found).
//!
//! # Mutation and enumeration
//!
//! All mutation goes through `&mut self`. Enumeration entry points borrow the
//! graph immutably for the whole run, so the borrow checker rules out
//! interleaving edge updates with an enumeration in progress.
//!
//! # Structural summary
//!
//! See the [`summary`] submodule for [`GraphSummary`], which converts the
//! store into a `petgraph` [`UnGraph`] to count connected components and the
//! cycle rank.

pub mod summary;

pub use summary::GraphSummary;

use std::collections::HashMap;

use petgraph::graph::{NodeIndex, UnGraph};

#[cfg(test)]
mod tests;

/// Errors produced by graph construction and mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    /// A vertex id outside `0..vertex_count` was supplied.
    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the graph.
        vertex_count: usize,
    },
    /// A replacement adjacency lists `to` under `from` a different number of
    /// times than it lists `from` under `to`.
    #[error(
        "adjacency is not symmetric: {from} lists {to} {forward} time(s) but {to} lists {from} {reverse} time(s)"
    )]
    AsymmetricAdjacency {
        /// Vertex whose list contains the unmatched entries.
        from: usize,
        /// Neighbor with the mismatched reverse entries.
        to: usize,
        /// Occurrences of `to` in the list of `from`.
        forward: usize,
        /// Occurrences of `from` in the list of `to`.
        reverse: usize,
    },
    /// A replacement adjacency lists `vertex` under itself an odd number of
    /// times; each self-loop takes two entries.
    #[error("adjacency lists self-loop {vertex} an odd number of times")]
    OddSelfLoop {
        /// Vertex whose list holds the unpaired self entry.
        vertex: usize,
    },
}

/// Edge list of the six-vertex reference graph used for worked examples.
///
/// ```text
/// 0: 1 3 4
/// 1: 0 2 3 4
/// 2: 1 3 4 5
/// 3: 0 1 2 5
/// 4: 0 1 2 5
/// 5: 2 3 4
/// ```
pub const REFERENCE_EDGES: [(usize, usize); 11] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 3),
    (2, 4),
    (2, 5),
    (3, 5),
    (4, 5),
];

/// An undirected graph over the vertices `0..vertex_count`.
///
/// Construct with [`UndirectedGraph::new`], [`UndirectedGraph::complete`],
/// [`UndirectedGraph::from_edges`] or [`UndirectedGraph::from_adjacency`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UndirectedGraph {
    adjacency: Vec<Vec<usize>>,
}

impl UndirectedGraph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    pub fn new(vertex_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    /// Creates the complete graph on `vertex_count` vertices.
    ///
    /// Edges are inserted for every pair `i < j` in ascending order of `i`,
    /// then `j`.
    pub fn complete(vertex_count: usize) -> Self {
        let mut graph = Self::new(vertex_count);
        graph.connect_all();
        graph
    }

    /// Creates the six-vertex reference graph from [`REFERENCE_EDGES`].
    pub fn reference() -> Self {
        let mut graph = Self::new(6);
        for (u, v) in REFERENCE_EDGES {
            graph.adjacency[u].push(v);
            graph.adjacency[v].push(u);
        }
        graph
    }

    /// Creates a graph with `vertex_count` vertices and the given edges,
    /// inserted in iteration order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for the first edge endpoint
    /// outside `0..vertex_count`.
    pub fn from_edges<I>(vertex_count: usize, edges: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut graph = Self::new(vertex_count);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Creates a graph from a complete adjacency structure, replacing the
    /// usual edge-by-edge construction.
    ///
    /// The vertex count is `adjacency.len()`. Neighbor order is kept as
    /// given.
    ///
    /// # Errors
    ///
    /// - [`GraphError::VertexOutOfRange`] if any list names a vertex outside
    ///   `0..adjacency.len()`.
    /// - [`GraphError::AsymmetricAdjacency`] if `v` appears under `u` a
    ///   different number of times than `u` appears under `v`.
    /// - [`GraphError::OddSelfLoop`] if `u` appears under itself an odd number
    ///   of times.
    pub fn from_adjacency(adjacency: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let vertex_count = adjacency.len();
        let mut multiplicity: HashMap<(usize, usize), usize> = HashMap::new();
        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                if v >= vertex_count {
                    return Err(GraphError::VertexOutOfRange {
                        vertex: v,
                        vertex_count,
                    });
                }
                *multiplicity.entry((u, v)).or_default() += 1;
            }
        }

        for (u, neighbors) in adjacency.iter().enumerate() {
            for &v in neighbors {
                let forward = multiplicity.get(&(u, v)).copied().unwrap_or_default();
                if u == v {
                    if forward % 2 != 0 {
                        return Err(GraphError::OddSelfLoop { vertex: u });
                    }
                    continue;
                }
                let reverse = multiplicity.get(&(v, u)).copied().unwrap_or_default();
                if forward != reverse {
                    return Err(GraphError::AsymmetricAdjacency {
                        from: u,
                        to: v,
                        forward,
                        reverse,
                    });
                }
            }
        }
        Ok(Self { adjacency })
    }

    /// Returns the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges, counting parallel edges and
    /// self-loops individually.
    pub fn edge_count(&self) -> usize {
        let degree_sum: usize = self.adjacency.iter().map(Vec::len).sum();
        degree_sum / 2
    }

    /// Returns `Ok(())` if `vertex` names a vertex of this graph.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] otherwise.
    pub fn check_vertex(&self, vertex: usize) -> Result<(), GraphError> {
        if vertex < self.vertex_count() {
            Ok(())
        } else {
            Err(GraphError::VertexOutOfRange {
                vertex,
                vertex_count: self.vertex_count(),
            })
        }
    }

    /// Returns the neighbors of `vertex` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn neighbors(&self, vertex: usize) -> Result<&[usize], GraphError> {
        self.check_vertex(vertex)?;
        Ok(self.adjacency[vertex].as_slice())
    }

    /// Returns the degree of `vertex` (a self-loop contributes 2).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn degree(&self, vertex: usize) -> Result<usize, GraphError> {
        self.neighbors(vertex).map(<[usize]>::len)
    }

    /// Returns `true` if `u` and `v` are adjacent.
    ///
    /// Unknown vertices are simply not adjacent to anything.
    pub fn has_edge(&self, u: usize, v: usize) -> bool {
        self.adjacency
            .get(u)
            .is_some_and(|neighbors| neighbors.contains(&v))
    }

    /// Read-only view of the whole adjacency structure, indexed by vertex id.
    ///
    /// This is the snapshot the enumerators traverse.
    pub fn adjacency(&self) -> &[Vec<usize>] {
        &self.adjacency
    }

    /// Adds the undirected edge `{u, v}`.
    ///
    /// No deduplication is performed: adding the same pair twice records a
    /// parallel edge, and `u == v` records a self-loop. Neither affects the
    /// set of simple cycles of length three or more.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is
    /// unknown; the graph is left unchanged.
    pub fn add_edge(&mut self, u: usize, v: usize) -> Result<(), GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        self.adjacency[u].push(v);
        self.adjacency[v].push(u);
        Ok(())
    }

    /// Removes every edge between `u` and `v`.
    ///
    /// Returns `true` if at least one edge was removed.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] if either endpoint is
    /// unknown; the graph is left unchanged.
    pub fn remove_edge(&mut self, u: usize, v: usize) -> Result<bool, GraphError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        let before = self.adjacency[u].len();
        self.adjacency[u].retain(|&n| n != v);
        let removed = self.adjacency[u].len() != before;
        self.adjacency[v].retain(|&n| n != u);
        Ok(removed)
    }

    /// Removes every edge incident to `vertex`, leaving it isolated.
    ///
    /// Returns the number of neighbor entries that were dropped from
    /// `vertex`'s own list.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexOutOfRange`] for an unknown vertex.
    pub fn isolate(&mut self, vertex: usize) -> Result<usize, GraphError> {
        self.check_vertex(vertex)?;
        let neighbors = std::mem::take(&mut self.adjacency[vertex]);
        for &n in &neighbors {
            self.adjacency[n].retain(|&x| x != vertex);
        }
        Ok(neighbors.len())
    }

    /// Adds an edge between every pair of distinct vertices.
    ///
    /// Pairs are visited as `(i, j)` with `i < j`, ascending. Pairs that are
    /// already adjacent are skipped, so calling this on a partial graph
    /// completes it without creating parallel edges.
    pub fn connect_all(&mut self) {
        let n = self.vertex_count();
        for i in 0..n {
            for j in (i + 1)..n {
                if !self.adjacency[i].contains(&j) {
                    self.adjacency[i].push(j);
                    self.adjacency[j].push(i);
                }
            }
        }
    }

    /// Returns every edge once as `(u, v)` with `u <= v`.
    ///
    /// Parallel edges are yielded once per copy. A self-loop appears twice in
    /// its vertex's list and is yielded once.
    pub fn edges(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(self.edge_count());
        for (u, neighbors) in self.adjacency.iter().enumerate() {
            let mut loop_entries = 0usize;
            for &v in neighbors {
                if u < v {
                    out.push((u, v));
                } else if u == v {
                    loop_entries += 1;
                    if loop_entries % 2 == 1 {
                        out.push((u, v));
                    }
                }
            }
        }
        out
    }

    /// Converts the store into a `petgraph` [`UnGraph`].
    ///
    /// Node `i` of the result carries weight `i` and has index
    /// `NodeIndex::new(i)`. Edges follow [`UndirectedGraph::edges`] order.
    pub fn to_petgraph(&self) -> UnGraph<usize, ()> {
        let mut graph = UnGraph::with_capacity(self.vertex_count(), self.edge_count());
        for v in 0..self.vertex_count() {
            graph.add_node(v);
        }
        for (u, v) in self.edges() {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        graph
    }

    /// Computes a [`GraphSummary`] for this graph.
    pub fn summary(&self) -> GraphSummary {
        GraphSummary::of(self)
    }
}
