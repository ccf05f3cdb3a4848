//! Builder and validated configuration for experiments.

use std::{fmt, num::NonZeroUsize};

use crate::{Dimension, GraphGenerator, Result, error::ExperimentError};

/// Default number of vertices per graph.
const DEFAULT_NODE_COUNT: usize = 1_000;

/// Selects how trials are scheduled onto threads.
///
/// # Examples
/// ```
/// use randmst_core::ExecutionStrategy;
///
/// assert_eq!(ExecutionStrategy::default(), ExecutionStrategy::ThreadPerTrial);
/// assert_eq!(ExecutionStrategy::Pool.as_str(), "pool");
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExecutionStrategy {
    /// Spawn one OS thread per trial and join them all.
    #[default]
    ThreadPerTrial,
    /// Run trials on the Rayon global thread pool.
    Pool,
}

impl ExecutionStrategy {
    /// Returns the stable name used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ThreadPerTrial => "thread-per-trial",
            Self::Pool => "pool",
        }
    }
}

impl fmt::Display for ExecutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Controls how each trial's random source is seeded.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum SeedPolicy {
    /// Seed every trial from operating-system entropy.
    #[default]
    Entropy,
    /// Derive every trial's seed from a fixed base seed and the trial index.
    Fixed(u64),
}

/// Validated, immutable experiment parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExperimentConfig {
    node_count: NonZeroUsize,
    trials: NonZeroUsize,
    dimension: Dimension,
    full: bool,
    seed: SeedPolicy,
    strategy: ExecutionStrategy,
}

impl ExperimentConfig {
    /// Returns the number of vertices per graph.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> NonZeroUsize { self.node_count }

    /// Returns the number of independent trials.
    #[must_use]
    #[rustfmt::skip]
    pub const fn trials(&self) -> NonZeroUsize { self.trials }

    /// Returns the edge-weight model.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> Dimension { self.dimension }

    /// Returns `true` when pruning is disabled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_full(&self) -> bool { self.full }

    /// Returns the seeding policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> SeedPolicy { self.seed }

    /// Returns the scheduling strategy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn strategy(&self) -> ExecutionStrategy { self.strategy }

    /// Returns the graph generator every trial uses.
    #[must_use]
    pub const fn generator(&self) -> GraphGenerator {
        GraphGenerator::new(self.node_count.get(), self.dimension, self.full)
    }
}

/// Configures and constructs [`Experiment`] instances.
///
/// # Examples
/// ```
/// use randmst_core::{ExecutionStrategy, ExperimentBuilder, SeedPolicy};
///
/// let experiment = ExperimentBuilder::new()
///     .with_node_count(64)
///     .with_trials(4)
///     .with_dimension(2)
///     .with_seed(SeedPolicy::Fixed(1))
///     .with_execution_strategy(ExecutionStrategy::Pool)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(experiment.config().node_count().get(), 64);
/// assert_eq!(experiment.config().dimension().get(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct ExperimentBuilder {
    node_count: usize,
    trials: usize,
    dimension: u8,
    full: bool,
    seed: SeedPolicy,
    strategy: ExecutionStrategy,
}

impl Default for ExperimentBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            trials: 1,
            dimension: 0,
            full: false,
            seed: SeedPolicy::Entropy,
            strategy: ExecutionStrategy::ThreadPerTrial,
        }
    }
}

impl ExperimentBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::ExperimentBuilder;
    ///
    /// let builder = ExperimentBuilder::new();
    /// assert_eq!(builder.node_count(), 1_000);
    /// assert_eq!(builder.trials(), 1);
    /// assert!(!builder.is_full());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of vertices per graph.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured vertex count.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Overrides the number of trials.
    #[must_use]
    pub fn with_trials(mut self, trials: usize) -> Self {
        self.trials = trials;
        self
    }

    /// Returns the configured trial count.
    #[must_use]
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Overrides the edge-weight dimension (`0` for uniform weights).
    #[must_use]
    pub fn with_dimension(mut self, dimension: u8) -> Self {
        self.dimension = dimension;
        self
    }

    /// Returns the configured dimension.
    #[must_use]
    pub fn dimension(&self) -> u8 {
        self.dimension
    }

    /// Disables pruning when `full` is `true`.
    #[must_use]
    pub fn with_full(mut self, full: bool) -> Self {
        self.full = full;
        self
    }

    /// Returns `true` when pruning is disabled.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.full
    }

    /// Sets how trial random sources are seeded.
    #[must_use]
    pub fn with_seed(mut self, seed: SeedPolicy) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the scheduling strategy.
    #[must_use]
    pub fn with_execution_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Returns the configured scheduling strategy.
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.strategy
    }

    /// Validates the configuration and constructs an [`Experiment`].
    ///
    /// # Errors
    /// Returns [`ExperimentError::InvalidVertexCount`],
    /// [`ExperimentError::InvalidTrialCount`] or
    /// [`ExperimentError::InvalidDimension`] when a parameter is out of range.
    ///
    /// # Examples
    /// ```
    /// use randmst_core::{ExperimentBuilder, ExperimentError};
    ///
    /// let err = ExperimentBuilder::new().with_trials(0).build().unwrap_err();
    /// assert_eq!(err, ExperimentError::InvalidTrialCount { got: 0 });
    /// ```
    pub fn build(self) -> Result<Experiment> {
        let node_count = NonZeroUsize::new(self.node_count).ok_or(
            ExperimentError::InvalidVertexCount {
                got: self.node_count,
            },
        )?;
        let trials = NonZeroUsize::new(self.trials)
            .ok_or(ExperimentError::InvalidTrialCount { got: self.trials })?;
        let dimension = Dimension::new(self.dimension).ok_or(ExperimentError::InvalidDimension {
            got: self.dimension,
        })?;

        Ok(Experiment::new(ExperimentConfig {
            node_count,
            trials,
            dimension,
            full: self.full,
            seed: self.seed,
            strategy: self.strategy,
        }))
    }
}

/// Entry point for running a random MST experiment.
///
/// # Examples
/// ```
/// use randmst_core::{ExperimentBuilder, SeedPolicy};
///
/// let experiment = ExperimentBuilder::new()
///     .with_node_count(32)
///     .with_trials(3)
///     .with_full(true)
///     .with_seed(SeedPolicy::Fixed(5))
///     .build()?;
/// let summary = experiment.run()?;
/// assert_eq!(summary.trials(), 3);
/// assert!(summary.average_weight() > 0.0);
/// # Ok::<(), randmst_core::ExperimentError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Experiment {
    config: ExperimentConfig,
}

impl Experiment {
    pub(crate) const fn new(config: ExperimentConfig) -> Self {
        Self { config }
    }

    /// Returns the validated configuration.
    #[must_use]
    #[rustfmt::skip]
    pub const fn config(&self) -> &ExperimentConfig { &self.config }
}
