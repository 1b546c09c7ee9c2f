//! Stateful enumeration facade over a borrowed graph.
//!
//! [`CycleEngine`] runs the two enumerators against one [`UndirectedGraph`]
//! and keeps their raw results side by side, so counts, stored paths and
//! unique cycles can be queried after the fact. Results accumulate across
//! runs until [`CycleEngine::reset`] is called: running the DFS from origin
//! 0 and then from origin 1 leaves the union of both runs in the DFS channel.
//!
//! The store mode is fixed when the engine is built. Path and unique-cycle
//! queries against a count-only engine fail with
//! [`EngineError::UnsupportedInMode`] rather than returning an empty list.

use crate::cycles::{
    CanonicalForm, Discovery, Path, StoreMode, candidate_count, combinatorial_cycles,
    count_unique, dedupe_with, dfs_cycles_total, visit_dfs_cycles,
};
use crate::graph::{GraphError, UndirectedGraph};

/// Engine construction options.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    /// Whether discoveries are stored or only counted.
    pub store_mode: StoreMode,
    /// Key used by the unique-cycle queries.
    pub canonical_form: CanonicalForm,
}

impl EngineConfig {
    /// Store-paths configuration with the default canonical form.
    pub fn storing() -> Self {
        Self {
            store_mode: StoreMode::StorePaths,
            ..Self::default()
        }
    }

    /// Returns this configuration with `form` as the canonical form.
    pub fn with_canonical_form(self, form: CanonicalForm) -> Self {
        Self {
            canonical_form: form,
            ..self
        }
    }
}

/// Errors returned by [`CycleEngine`] queries and runs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    /// The query needs stored paths but the engine only counts.
    #[error("{operation} requires store-paths mode")]
    UnsupportedInMode {
        /// Name of the rejected query.
        operation: &'static str,
    },
    /// A vertex argument was rejected by the graph.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Runs both enumerators over a borrowed graph and retains their results.
///
/// The borrow keeps the graph immutable for the engine's lifetime.
#[derive(Debug)]
pub struct CycleEngine<'g> {
    graph: &'g UndirectedGraph,
    config: EngineConfig,
    dfs: Discovery,
    perm: Discovery,
}

impl<'g> CycleEngine<'g> {
    /// Creates an engine with empty result channels.
    pub fn new(graph: &'g UndirectedGraph, config: EngineConfig) -> Self {
        Self {
            graph,
            config,
            dfs: Discovery::empty(config.store_mode),
            perm: Discovery::empty(config.store_mode),
        }
    }

    /// The graph being enumerated.
    pub fn graph(&self) -> &'g UndirectedGraph {
        self.graph
    }

    /// The configuration fixed at construction.
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    /// Runs the DFS enumerator from `origin`, returning how many cycles this
    /// run discovered.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::Graph`] if `origin` is out of range; the DFS
    /// channel is unchanged in that case.
    pub fn run_dfs_from(&mut self, origin: usize) -> Result<u64, EngineError> {
        let before = self.dfs.total();
        visit_dfs_cycles(self.graph, origin, &mut self.dfs)?;
        let found = self.dfs.total() - before;
        tracing::info!(origin, found, "dfs run from origin finished");
        Ok(found)
    }

    /// Runs the DFS enumerator from every vertex, returning how many cycles
    /// this run discovered.
    pub fn run_dfs_total(&mut self) -> u64 {
        let run = dfs_cycles_total(self.graph, self.config.store_mode);
        let found = run.total();
        self.dfs.absorb(run);
        tracing::info!(
            vertices = self.graph.vertex_count(),
            found,
            "dfs run over all origins finished"
        );
        found
    }

    /// Runs the combinatorial enumerator, returning how many permutations
    /// were accepted.
    pub fn run_combinatorial(&mut self) -> u64 {
        let vertices = self.graph.vertex_count();
        match candidate_count(vertices) {
            Some(candidates) => {
                tracing::info!(vertices, candidates, "combinatorial run starting");
            }
            None => {
                tracing::info!(vertices, "combinatorial run starting, candidates overflow u128");
            }
        }
        let run = combinatorial_cycles(self.graph, self.config.store_mode);
        let found = run.total();
        self.perm.absorb(run);
        tracing::info!(vertices, found, "combinatorial run finished");
        found
    }

    /// Raw DFS discoveries so far.
    pub fn dfs_count(&self) -> u64 {
        self.dfs.total()
    }

    /// Raw combinatorial discoveries so far.
    pub fn perm_count(&self) -> u64 {
        self.perm.total()
    }

    /// Raw DFS result channel.
    pub fn dfs_discovery(&self) -> &Discovery {
        &self.dfs
    }

    /// Raw combinatorial result channel.
    pub fn perm_discovery(&self) -> &Discovery {
        &self.perm
    }

    /// Every DFS discovery in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn dfs_paths(&self) -> Result<&[Path], EngineError> {
        stored(&self.dfs, "dfs_paths")
    }

    /// Every accepted permutation in discovery order.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn perm_paths(&self) -> Result<&[Path], EngineError> {
        stored(&self.perm, "perm_paths")
    }

    /// DFS discoveries reduced to their canonical keys, first occurrence
    /// first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn unique_dfs_cycles(&self) -> Result<Vec<Path>, EngineError> {
        let paths = stored(&self.dfs, "unique_dfs_cycles")?;
        Ok(dedupe_with(paths, self.config.canonical_form))
    }

    /// Combinatorial discoveries reduced to their canonical keys, first
    /// occurrence first.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn unique_perm_cycles(&self) -> Result<Vec<Path>, EngineError> {
        let paths = stored(&self.perm, "unique_perm_cycles")?;
        Ok(dedupe_with(paths, self.config.canonical_form))
    }

    /// Number of distinct canonical keys among the DFS discoveries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn unique_dfs_count(&self) -> Result<usize, EngineError> {
        let paths = stored(&self.dfs, "unique_dfs_count")?;
        Ok(count_unique(paths, self.config.canonical_form))
    }

    /// Number of distinct canonical keys among the combinatorial
    /// discoveries.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnsupportedInMode`] in count-only mode.
    pub fn unique_perm_count(&self) -> Result<usize, EngineError> {
        let paths = stored(&self.perm, "unique_perm_count")?;
        Ok(count_unique(paths, self.config.canonical_form))
    }

    /// Clears both result channels.
    pub fn reset(&mut self) {
        self.dfs = Discovery::empty(self.config.store_mode);
        self.perm = Discovery::empty(self.config.store_mode);
    }
}

fn stored<'a>(found: &'a Discovery, operation: &'static str) -> Result<&'a [Path], EngineError> {
    found
        .paths()
        .ok_or(EngineError::UnsupportedInMode { operation })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::test_helpers::{cycle_graph, example_graph};

    #[test]
    fn default_config_counts_with_vertex_sets() {
        let config = EngineConfig::default();
        assert_eq!(config.store_mode, StoreMode::CountOnly);
        assert_eq!(config.canonical_form, CanonicalForm::VertexSet);
        assert_eq!(EngineConfig::storing().store_mode, StoreMode::StorePaths);
    }

    #[test]
    fn fresh_engine_reports_zero() {
        let g = example_graph();
        let engine = CycleEngine::new(&g, EngineConfig::storing());
        assert_eq!(engine.dfs_count(), 0);
        assert_eq!(engine.perm_count(), 0);
        assert_eq!(engine.unique_dfs_count(), Ok(0));
    }

    #[test]
    fn example_graph_through_the_engine() {
        let g = example_graph();
        let mut engine = CycleEngine::new(&g, EngineConfig::storing());
        assert_eq!(engine.run_dfs_total(), 352);
        assert_eq!(engine.run_combinatorial(), 352);
        assert_eq!(engine.unique_dfs_count(), Ok(23));
        assert_eq!(engine.unique_perm_count(), Ok(23));
        assert_eq!(
            engine.unique_dfs_cycles().expect("store mode"),
            engine.unique_dfs_cycles().expect("store mode")
        );
    }

    #[test]
    fn rotation_form_counts_exact_cycles() {
        let g = example_graph();
        let config = EngineConfig::storing().with_canonical_form(CanonicalForm::Rotation);
        let mut engine = CycleEngine::new(&g, config);
        engine.run_dfs_from(0).expect("in range");
        assert_eq!(engine.dfs_count(), 50);
        assert_eq!(engine.unique_dfs_count(), Ok(25));
    }

    #[test]
    fn count_only_rejects_path_queries() {
        let g = example_graph();
        let mut engine = CycleEngine::new(&g, EngineConfig::default());
        engine.run_dfs_total();
        assert_eq!(engine.dfs_count(), 352);
        assert_eq!(
            engine.dfs_paths(),
            Err(EngineError::UnsupportedInMode {
                operation: "dfs_paths"
            })
        );
        assert!(matches!(
            engine.unique_perm_count(),
            Err(EngineError::UnsupportedInMode { .. })
        ));
        let err = engine.unique_dfs_cycles().expect_err("count-only");
        assert_eq!(err.to_string(), "unique_dfs_cycles requires store-paths mode");
    }

    #[test]
    fn runs_accumulate_until_reset() {
        let g = cycle_graph(3);
        let mut engine = CycleEngine::new(&g, EngineConfig::default());
        assert_eq!(engine.run_dfs_from(0).expect("in range"), 2);
        assert_eq!(engine.run_dfs_from(1).expect("in range"), 2);
        assert_eq!(engine.dfs_count(), 4);
        engine.run_dfs_total();
        assert_eq!(engine.dfs_count(), 10);
        engine.reset();
        assert_eq!(engine.dfs_count(), 0);
        assert_eq!(engine.perm_count(), 0);
    }

    #[test]
    fn out_of_range_origin_leaves_channel_untouched() {
        let g = cycle_graph(3);
        let mut engine = CycleEngine::new(&g, EngineConfig::storing());
        engine.run_dfs_from(0).expect("in range");
        let err = engine.run_dfs_from(9).expect_err("out of range");
        assert_eq!(
            err,
            EngineError::Graph(GraphError::VertexOutOfRange {
                vertex: 9,
                vertex_count: 3
            })
        );
        assert_eq!(engine.dfs_paths().expect("store mode").len(), 2);
    }

    #[test]
    fn stored_paths_are_exposed_in_discovery_order() {
        let g = cycle_graph(4);
        let mut engine = CycleEngine::new(&g, EngineConfig::storing());
        engine.run_dfs_from(0).expect("in range");
        assert_eq!(
            engine.dfs_paths().expect("store mode"),
            &[vec![0, 1, 2, 3], vec![0, 3, 2, 1]]
        );
        assert_eq!(
            engine.unique_dfs_cycles().expect("store mode"),
            vec![vec![0, 1, 2, 3]]
        );
    }
}
