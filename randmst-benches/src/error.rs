//! Benchmark setup error type.
//!
//! Lets fixture builders propagate failures with `?` instead of panicking
//! inside Criterion closures.

use randmst_core::{ExperimentError, MstError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The requested dimension is outside `0..=4`.
    #[error("dimension {value} is not supported")]
    InvalidDimension {
        /// The rejected dimension.
        value: u8,
    },
    /// No seed in the search window produced a connected graph.
    #[error("no connected graph for {params} after {attempts} seeds")]
    NoConnectedGraph {
        /// Rendered benchmark parameters.
        params: String,
        /// Number of seeds tried.
        attempts: u64,
    },
    /// MST computation failed.
    #[error("MST computation failed: {0}")]
    Mst(#[from] MstError),
    /// Experiment configuration or execution failed.
    #[error("experiment failed: {0}")]
    Experiment(#[from] ExperimentError),
}
