//! Random graph generator.
//!
//! Produces [`UndirectedGraph`] instances from the Erdős–Rényi `G(n, p)`
//! model, optionally laid over a random spanning tree so the result is
//! connected.

pub mod topology;

use cyclenum_core::UndirectedGraph;
use rand::SeedableRng;
use rand::rngs::StdRng;

use topology::{gnp_overlay, random_spanning_tree};

/// Configuration for the graph generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of vertices.
    pub vertices: usize,
    /// Probability that any given vertex pair is joined (0.0-1.0).
    pub edge_probability: f64,
    /// Whether to start from a random spanning tree.
    pub connected: bool,
}

/// Predefined size tiers for benchmarking.
///
/// The combinatorial enumerator tests `Σ C(n, r) · r!` orderings, so tiers
/// stop well before it becomes impractical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 5 vertices, sparse.
    Tiny,
    /// 7 vertices.
    Small,
    /// 8 vertices.
    Medium,
    /// 9 vertices, dense.
    Large,
}

impl SizeTier {
    /// All tiers in ascending order.
    pub const ALL: [SizeTier; 4] = [
        SizeTier::Tiny,
        SizeTier::Small,
        SizeTier::Medium,
        SizeTier::Large,
    ];

    /// Short label used in benchmark ids.
    pub fn label(self) -> &'static str {
        match self {
            SizeTier::Tiny => "XS",
            SizeTier::Small => "S",
            SizeTier::Medium => "M",
            SizeTier::Large => "L",
        }
    }

    /// Returns the default `GeneratorConfig` for this size tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (vertices, edge_probability) = match self {
            SizeTier::Tiny => (5, 0.4),
            SizeTier::Small => (7, 0.5),
            SizeTier::Medium => (8, 0.5),
            SizeTier::Large => (9, 0.6),
        };
        GeneratorConfig {
            seed,
            vertices,
            edge_probability,
            connected: true,
        }
    }
}

/// Generates a graph from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. The result is
/// always simple: no loops, no parallel edges.
pub fn generate_graph(config: &GeneratorConfig) -> UndirectedGraph {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut graph = UndirectedGraph::new(config.vertices);
    if config.connected {
        random_spanning_tree(&mut graph, &mut rng);
    }
    gnp_overlay(&mut graph, config.edge_probability, &mut rng);
    graph
}
