//! Per-trial outcomes and their reduction into experiment averages.

use std::time::Duration;

use crate::Dimension;

use super::ExperimentConfig;

/// Scalar results of one trial.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrialOutcome {
    weight: f64,
    edge_count: usize,
    generation: Duration,
    solve: Duration,
}

impl TrialOutcome {
    pub(crate) const fn new(
        weight: f64,
        edge_count: usize,
        generation: Duration,
        solve: Duration,
    ) -> Self {
        Self {
            weight,
            edge_count,
            generation,
            solve,
        }
    }

    /// Returns the MST weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }

    /// Returns the number of edges stored after pruning.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edge_count }

    /// Returns the time spent generating the graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn generation(&self) -> Duration { self.generation }

    /// Returns the time spent solving the MST.
    #[must_use]
    #[rustfmt::skip]
    pub const fn solve(&self) -> Duration { self.solve }
}

/// Averages over every trial of an experiment.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperimentSummary {
    node_count: usize,
    trials: usize,
    dimension: Dimension,
    full: bool,
    average_weight: f64,
    weight_std_dev: f64,
    average_edge_count: f64,
    average_generation_seconds: f64,
    average_solve_seconds: f64,
}

impl ExperimentSummary {
    /// Reduces `outcomes` into averages for `config`.
    ///
    /// The standard deviation is the sample standard deviation and is zero
    /// for a single trial.
    #[must_use]
    pub fn from_outcomes(config: &ExperimentConfig, outcomes: &[TrialOutcome]) -> Self {
        let count = outcomes.len().max(1) as f64;
        let mean = |value: fn(&TrialOutcome) -> f64| outcomes.iter().map(value).sum::<f64>() / count;

        let average_weight = mean(|outcome| outcome.weight);
        let weight_std_dev = if outcomes.len() > 1 {
            let squares: f64 = outcomes
                .iter()
                .map(|outcome| (outcome.weight - average_weight).powi(2))
                .sum();
            (squares / (count - 1.0)).sqrt()
        } else {
            0.0
        };

        Self {
            node_count: config.node_count().get(),
            trials: outcomes.len(),
            dimension: config.dimension(),
            full: config.is_full(),
            average_weight,
            weight_std_dev,
            average_edge_count: mean(|outcome| outcome.edge_count as f64),
            average_generation_seconds: mean(|outcome| outcome.generation.as_secs_f64()),
            average_solve_seconds: mean(|outcome| outcome.solve.as_secs_f64()),
        }
    }

    /// Returns the number of vertices per graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the number of trials that contributed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> usize { self.trials }

    /// Returns the edge-weight model.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> Dimension { self.dimension }

    /// Returns `true` when pruning was disabled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_full(&self) -> bool { self.full }

    /// Returns the mean MST weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_weight(&self) -> f64 { self.average_weight }

    /// Returns the sample standard deviation of the MST weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight_std_dev(&self) -> f64 { self.weight_std_dev }

    /// Returns the mean number of stored edges per graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_edge_count(&self) -> f64 { self.average_edge_count }

    /// Returns the mean graph generation time in seconds.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_generation_seconds(&self) -> f64 { self.average_generation_seconds }

    /// Returns the mean MST solve time in seconds.
    #[must_use]
    #[rustfmt::skip]
    pub const fn average_solve_seconds(&self) -> f64 { self.average_solve_seconds }
}
