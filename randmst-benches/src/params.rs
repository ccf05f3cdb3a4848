//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-graph benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrialBenchParams {
    /// Number of vertices.
    pub node_count: usize,
    /// Edge-weight dimension, `0` for uniform weights.
    pub dimension: u8,
    /// Whether pruning is disabled.
    pub full: bool,
}

impl fmt::Display for TrialBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mode = if self.full { "full" } else { "pruned" };
        write!(f, "n={},dim={},{mode}", self.node_count, self.dimension)
    }
}

/// Parameters for a whole-experiment benchmark.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperimentBenchParams {
    /// Number of vertices per graph.
    pub node_count: usize,
    /// Number of trials per run.
    pub trials: usize,
}

impl fmt::Display for ExperimentBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},trials={}", self.node_count, self.trials)
    }
}
