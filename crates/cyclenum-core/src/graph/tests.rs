#![allow(clippy::expect_used)]

use super::*;
use crate::test_helpers::{EXAMPLE_EDGES, example_graph};

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

#[test]
fn new_graph_has_no_edges() {
    let g = UndirectedGraph::new(4);
    assert_eq!(g.vertex_count(), 4);
    assert_eq!(g.edge_count(), 0);
    for v in 0..4 {
        assert!(g.neighbors(v).expect("in range").is_empty());
    }
}

#[test]
fn zero_vertex_graph_is_valid() {
    let g = UndirectedGraph::new(0);
    assert_eq!(g.vertex_count(), 0);
    assert!(g.edges().is_empty());
    assert_eq!(UndirectedGraph::default(), g);
}

#[test]
fn complete_graph_edge_count() {
    for n in 0..8 {
        let g = UndirectedGraph::complete(n);
        assert_eq!(g.edge_count(), n * n.saturating_sub(1) / 2, "K{n}");
    }
}

#[test]
fn complete_graph_neighbor_order_is_ascending() {
    let g = UndirectedGraph::complete(4);
    assert_eq!(g.neighbors(0).expect("in range"), &[1, 2, 3]);
    assert_eq!(g.neighbors(2).expect("in range"), &[0, 1, 3]);
}

#[test]
fn from_edges_preserves_insertion_order() {
    let g = example_graph();
    assert_eq!(g.edge_count(), EXAMPLE_EDGES.len());
    assert_eq!(g.neighbors(0).expect("in range"), &[1, 3, 4]);
    assert_eq!(g.neighbors(2).expect("in range"), &[1, 3, 4, 5]);
    assert_eq!(g.neighbors(5).expect("in range"), &[2, 3, 4]);
}

#[test]
fn from_edges_rejects_out_of_range_endpoint() {
    let err = UndirectedGraph::from_edges(3, [(0, 1), (1, 3)]).expect_err("3 is out of range");
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    );
}

#[test]
fn from_adjacency_accepts_symmetric_lists() {
    let g = UndirectedGraph::from_adjacency(vec![vec![1, 2], vec![0, 2], vec![1, 0]])
        .expect("symmetric");
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.neighbors(2).expect("in range"), &[1, 0]);
}

#[test]
fn from_adjacency_rejects_one_sided_entry() {
    let err = UndirectedGraph::from_adjacency(vec![vec![1], vec![]]).expect_err("asymmetric");
    assert_eq!(
        err,
        GraphError::AsymmetricAdjacency {
            from: 0,
            to: 1,
            forward: 1,
            reverse: 0
        }
    );
}

#[test]
fn from_adjacency_rejects_unmatched_parallel_entry() {
    let err = UndirectedGraph::from_adjacency(vec![vec![1, 1], vec![0]])
        .expect_err("0 lists 1 twice, 1 lists 0 once");
    assert_eq!(
        err,
        GraphError::AsymmetricAdjacency {
            from: 0,
            to: 1,
            forward: 2,
            reverse: 1
        }
    );

    let err = UndirectedGraph::from_adjacency(vec![vec![1], vec![0, 0]]).expect_err("asymmetric");
    assert_eq!(
        err,
        GraphError::AsymmetricAdjacency {
            from: 0,
            to: 1,
            forward: 1,
            reverse: 2
        }
    );
}

#[test]
fn from_adjacency_accepts_matched_parallel_edges_and_paired_self_loops() {
    let g = UndirectedGraph::from_adjacency(vec![vec![1, 1, 0, 0], vec![0, 0]])
        .expect("balanced");
    assert_eq!(g.edge_count(), 3);
    assert_eq!(g.edges(), vec![(0, 1), (0, 1), (0, 0)]);
}

#[test]
fn from_adjacency_rejects_unpaired_self_loop_entry() {
    let err = UndirectedGraph::from_adjacency(vec![vec![0, 0, 0]]).expect_err("odd self entry");
    assert_eq!(err, GraphError::OddSelfLoop { vertex: 0 });
}

#[test]
fn from_adjacency_rejects_unknown_vertex() {
    let err = UndirectedGraph::from_adjacency(vec![vec![5]]).expect_err("out of range");
    assert_eq!(
        err,
        GraphError::VertexOutOfRange {
            vertex: 5,
            vertex_count: 1
        }
    );
}

// ---------------------------------------------------------------------------
// Mutation
// ---------------------------------------------------------------------------

#[test]
fn add_edge_is_symmetric() {
    let mut g = UndirectedGraph::new(3);
    g.add_edge(0, 2).expect("in range");
    assert!(g.has_edge(0, 2));
    assert!(g.has_edge(2, 0));
    assert!(!g.has_edge(0, 1));
}

#[test]
fn add_edge_out_of_range_leaves_graph_unchanged() {
    let mut g = UndirectedGraph::new(2);
    let err = g.add_edge(0, 7).expect_err("out of range");
    assert!(matches!(err, GraphError::VertexOutOfRange { vertex: 7, .. }));
    assert_eq!(g.edge_count(), 0);
    assert!(g.neighbors(0).expect("in range").is_empty());
}

#[test]
fn remove_edge_removes_both_directions() {
    let mut g = example_graph();
    assert!(g.remove_edge(1, 3).expect("in range"));
    assert!(!g.has_edge(1, 3));
    assert!(!g.has_edge(3, 1));
    assert_eq!(g.edge_count(), EXAMPLE_EDGES.len() - 1);
}

#[test]
fn remove_missing_edge_reports_false() {
    let mut g = example_graph();
    assert!(!g.remove_edge(0, 5).expect("in range"));
    assert_eq!(g.edge_count(), EXAMPLE_EDGES.len());
}

#[test]
fn remove_edge_drops_parallel_copies() {
    let mut g = UndirectedGraph::new(2);
    g.add_edge(0, 1).expect("in range");
    g.add_edge(1, 0).expect("in range");
    assert_eq!(g.edge_count(), 2);
    assert!(g.remove_edge(0, 1).expect("in range"));
    assert_eq!(g.edge_count(), 0);
}

#[test]
fn remove_edge_out_of_range_is_an_error() {
    let mut g = UndirectedGraph::new(2);
    assert!(g.remove_edge(2, 0).is_err());
}

#[test]
fn add_then_remove_restores_adjacency() {
    let original = example_graph();
    let mut g = original.clone();
    g.add_edge(0, 5).expect("in range");
    assert_ne!(g, original);
    g.remove_edge(0, 5).expect("in range");
    assert_eq!(g, original);
}

#[test]
fn isolate_removes_all_incident_edges() {
    let mut g = example_graph();
    let dropped = g.isolate(2).expect("in range");
    assert_eq!(dropped, 4);
    assert_eq!(g.degree(2).expect("in range"), 0);
    for v in 0..g.vertex_count() {
        assert!(!g.has_edge(v, 2), "vertex {v} still lists 2");
    }
    assert_eq!(g.edge_count(), EXAMPLE_EDGES.len() - 4);
}

#[test]
fn connect_all_completes_partial_graph_without_duplicates() {
    let mut g = UndirectedGraph::from_edges(4, [(2, 3), (0, 1)]).expect("in range");
    g.connect_all();
    assert_eq!(g.edge_count(), 6);
    assert!(g.summary().is_simple());
}

// ---------------------------------------------------------------------------
// Read accessors
// ---------------------------------------------------------------------------

#[test]
fn neighbors_out_of_range_is_an_error() {
    let g = UndirectedGraph::new(3);
    assert_eq!(
        g.neighbors(3).expect_err("out of range"),
        GraphError::VertexOutOfRange {
            vertex: 3,
            vertex_count: 3
        }
    );
}

#[test]
fn has_edge_with_unknown_vertex_is_false() {
    let g = UndirectedGraph::complete(3);
    assert!(!g.has_edge(0, 9));
    assert!(!g.has_edge(9, 0));
}

#[test]
fn edges_lists_each_edge_once() {
    let g = example_graph();
    let mut edges = g.edges();
    edges.sort_unstable();
    let mut expected = EXAMPLE_EDGES.to_vec();
    expected.sort_unstable();
    assert_eq!(edges, expected);
}

#[test]
fn self_loop_counts_as_one_edge() {
    let mut g = UndirectedGraph::new(2);
    g.add_edge(1, 1).expect("in range");
    assert_eq!(g.edge_count(), 1);
    assert_eq!(g.edges(), vec![(1, 1)]);
    assert_eq!(g.degree(1).expect("in range"), 2);
}

#[test]
fn to_petgraph_mirrors_counts() {
    let g = example_graph();
    let pg = g.to_petgraph();
    assert_eq!(pg.node_count(), 6);
    assert_eq!(pg.edge_count(), 11);
    assert!(pg.contains_edge(NodeIndex::new(2), NodeIndex::new(5)));
    assert!(!pg.contains_edge(NodeIndex::new(0), NodeIndex::new(5)));
}

#[test]
fn graph_error_messages_name_the_vertex() {
    let msg = GraphError::VertexOutOfRange {
        vertex: 12,
        vertex_count: 4,
    }
    .to_string();
    assert!(msg.contains("12"), "message: {msg}");
    assert!(msg.contains('4'), "message: {msg}");
}
