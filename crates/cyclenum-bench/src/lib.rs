//! Random graph generator and benchmark utilities for cyclenum.
//!
//! This crate provides deterministic generation of random undirected graphs
//! for benchmarking and property-based testing of `cyclenum-core`.

pub mod correctness;
pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_graph};
