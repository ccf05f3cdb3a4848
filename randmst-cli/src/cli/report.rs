//! Serialisable view of an experiment summary.

use randmst_core::ExperimentSummary;
use serde::Serialize;

/// Fields written for each experiment, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Mean MST weight over all trials.
    pub average_weight: f64,
    /// Vertices per graph.
    pub node_count: usize,
    /// Number of trials.
    pub trials: usize,
    /// Edge-weight model.
    pub dimension: u8,
    /// Whether pruning was disabled.
    pub full: bool,
    /// Mean graph generation time in seconds.
    pub generation_seconds: f64,
    /// Mean MST solve time in seconds.
    pub solve_seconds: f64,
    /// Sample standard deviation of the MST weight.
    pub weight_std_dev: f64,
    /// Mean number of stored edges per graph.
    pub average_edge_count: f64,
}

impl From<&ExperimentSummary> for SummaryReport {
    fn from(summary: &ExperimentSummary) -> Self {
        Self {
            average_weight: summary.average_weight(),
            node_count: summary.node_count(),
            trials: summary.trials(),
            dimension: summary.dimension().get(),
            full: summary.is_full(),
            generation_seconds: summary.average_generation_seconds(),
            solve_seconds: summary.average_solve_seconds(),
            weight_std_dev: summary.weight_std_dev(),
            average_edge_count: summary.average_edge_count(),
        }
    }
}
