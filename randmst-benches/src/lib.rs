//! Benchmark support crate for randmst.
//!
//! Provides parameter types and seeded graph fixtures used by the Criterion
//! benchmarks for graph generation, Prim's algorithm and whole experiments.

pub mod error;
pub mod fixtures;
pub mod params;
