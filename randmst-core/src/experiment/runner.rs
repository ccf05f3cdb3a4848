//! Trial execution and worker scheduling.

use std::{
    sync::Arc,
    thread,
    time::Instant,
};

use rand::Rng;
use rayon::prelude::*;
use tracing::{Span, debug, info, instrument};

use crate::{GraphGenerator, MstError, Result, error::ExperimentError, prim_mst_weight};

use super::{
    ExecutionStrategy, Experiment, ExperimentSummary, TrialOutcome,
    rng::trial_rng,
};

/// Runs one trial: generates a graph with `rng`, then solves its MST.
///
/// The graph is dropped before returning; only the weight, the edge count
/// and the two stage timings survive.
///
/// # Errors
/// Returns the solver's [`MstError`], typically
/// [`MstError::Disconnected`] when pruning isolated part of the graph.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randmst_core::{Dimension, GraphGenerator, run_trial};
///
/// let generator = GraphGenerator::new(50, Dimension::UNIFORM, true);
/// let outcome = run_trial(&generator, &mut SmallRng::seed_from_u64(1))?;
/// assert_eq!(outcome.edge_count(), 50 * 49 / 2);
/// assert!(outcome.weight() > 0.0);
/// # Ok::<(), randmst_core::MstError>(())
/// ```
pub fn run_trial<R: Rng + ?Sized>(
    generator: &GraphGenerator,
    rng: &mut R,
) -> core::result::Result<TrialOutcome, MstError> {
    let started = Instant::now();
    let graph = generator.generate(rng);
    let generation = started.elapsed();

    let started = Instant::now();
    let weight = prim_mst_weight(&graph)?;
    let solve = started.elapsed();

    Ok(TrialOutcome::new(weight, graph.edge_count(), generation, solve))
}

impl Experiment {
    /// Runs every trial and reduces the outcomes.
    ///
    /// Trials run concurrently according to the configured
    /// [`ExecutionStrategy`]. The call returns only after every trial has
    /// finished; the first failing trial (in trial order) fails the run.
    ///
    /// # Errors
    /// Returns [`ExperimentError::TrialFailed`] when a trial's solver fails,
    /// [`ExperimentError::WorkerPanicked`] when a worker panics, and
    /// [`ExperimentError::Spawn`] when a worker thread cannot be created.
    #[instrument(
        name = "experiment.run",
        err,
        skip(self),
        fields(
            node_count = self.config().node_count().get(),
            trials = self.config().trials().get(),
            dimension = %self.config().dimension(),
            full = self.config().is_full(),
            strategy = %self.config().strategy(),
        ),
    )]
    pub fn run(&self) -> Result<ExperimentSummary> {
        let outcomes = match self.config().strategy() {
            ExecutionStrategy::ThreadPerTrial => self.run_thread_per_trial()?,
            ExecutionStrategy::Pool => self.run_on_pool()?,
        };

        let summary = ExperimentSummary::from_outcomes(self.config(), &outcomes);
        info!(
            average_weight = summary.average_weight(),
            average_generation_seconds = summary.average_generation_seconds(),
            average_solve_seconds = summary.average_solve_seconds(),
            "experiment completed"
        );
        Ok(summary)
    }

    fn run_thread_per_trial(&self) -> Result<Vec<TrialOutcome>> {
        let trials = self.config().trials().get();
        let parent = Span::current();
        thread::scope(|scope| {
            let mut handles = Vec::with_capacity(trials);
            for trial in 0..trials {
                let span = parent.clone();
                let handle = thread::Builder::new()
                    .name(format!("randmst-trial-{trial}"))
                    .spawn_scoped(scope, move || span.in_scope(|| self.run_indexed_trial(trial)))
                    .map_err(|err| ExperimentError::Spawn {
                        trial,
                        message: Arc::from(err.to_string()),
                    })?;
                handles.push((trial, handle));
            }

            handles
                .into_iter()
                .map(|(trial, handle)| {
                    handle
                        .join()
                        .map_err(|_| ExperimentError::WorkerPanicked { trial })?
                })
                .collect()
        })
    }

    fn run_on_pool(&self) -> Result<Vec<TrialOutcome>> {
        let trials = self.config().trials().get();
        let parent = Span::current();
        (0..trials)
            .into_par_iter()
            .map(|trial| parent.in_scope(|| self.run_indexed_trial(trial)))
            .collect()
    }

    #[instrument(name = "experiment.trial", level = "debug", err, skip(self))]
    fn run_indexed_trial(&self, trial: usize) -> Result<TrialOutcome> {
        let mut rng = trial_rng(self.config().seed(), trial);
        let outcome = run_trial(&self.config().generator(), &mut rng)
            .map_err(|source| ExperimentError::TrialFailed { trial, source })?;

        debug!(
            weight = outcome.weight(),
            edges = outcome.edge_count(),
            generation_seconds = outcome.generation().as_secs_f64(),
            solve_seconds = outcome.solve().as_secs_f64(),
            "trial completed"
        );
        record_trial_metrics(&outcome);
        Ok(outcome)
    }
}

#[cfg(feature = "metrics")]
fn record_trial_metrics(outcome: &TrialOutcome) {
    metrics::counter!("randmst_trials_completed").increment(1);
    metrics::histogram!("randmst_graph_generation_seconds")
        .record(outcome.generation().as_secs_f64());
    metrics::histogram!("randmst_mst_solve_seconds").record(outcome.solve().as_secs_f64());
    metrics::histogram!("randmst_mst_weight").record(outcome.weight());
}

#[cfg(not(feature = "metrics"))]
fn record_trial_metrics(_outcome: &TrialOutcome) {}
