//! Monte-Carlo experiment orchestration.
//!
//! An [`Experiment`] runs independent trials, each generating one random
//! graph and solving its MST, then reduces the per-trial outcomes into an
//! [`ExperimentSummary`] once every worker has finished. Workers never share
//! mutable state; each owns its random source and hands its result back
//! through its join handle.

mod config;
mod rng;
mod runner;
mod summary;

pub use self::{
    config::{ExecutionStrategy, Experiment, ExperimentBuilder, ExperimentConfig, SeedPolicy},
    runner::run_trial,
    summary::{ExperimentSummary, TrialOutcome},
};
