//! Error types for the randmst core library.
//!
//! Defines the experiment-level error enum, the stable error-code macro shared
//! by every error type in the crate, and a convenient result alias.

use std::sync::Arc;

use thiserror::Error;

use crate::mst::MstError;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

pub(crate) use define_error_codes;

/// Error type produced when configuring or running an experiment.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ExperimentError {
    /// The vertex count must be at least one.
    #[error("vertex count must be at least 1 (got {got})")]
    InvalidVertexCount {
        /// The rejected vertex count.
        got: usize,
    },
    /// The trial count must be at least one.
    #[error("trial count must be at least 1 (got {got})")]
    InvalidTrialCount {
        /// The rejected trial count.
        got: usize,
    },
    /// The dimension must lie in `0..=4`.
    #[error("dimension must be between 0 and 4 (got {got})")]
    InvalidDimension {
        /// The rejected dimension.
        got: u8,
    },
    /// A trial failed while solving its graph.
    #[error("trial {trial} failed: {source}")]
    TrialFailed {
        /// Zero-based index of the failing trial.
        trial: usize,
        /// Underlying solver error.
        #[source]
        source: MstError,
    },
    /// A worker thread panicked before returning its outcome.
    #[error("worker for trial {trial} panicked")]
    WorkerPanicked {
        /// Zero-based index of the trial whose worker panicked.
        trial: usize,
    },
    /// The operating system refused to spawn a worker thread.
    #[error("failed to spawn worker for trial {trial}: {message}")]
    Spawn {
        /// Zero-based index of the trial that could not be started.
        trial: usize,
        /// Rendered I/O error reported by the thread builder.
        message: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`ExperimentError`] variants.
    enum ExperimentErrorCode for ExperimentError {
        /// The vertex count must be at least one.
        InvalidVertexCount => InvalidVertexCount { .. } => "EXPERIMENT_INVALID_VERTEX_COUNT",
        /// The trial count must be at least one.
        InvalidTrialCount => InvalidTrialCount { .. } => "EXPERIMENT_INVALID_TRIAL_COUNT",
        /// The dimension must lie in `0..=4`.
        InvalidDimension => InvalidDimension { .. } => "EXPERIMENT_INVALID_DIMENSION",
        /// A trial failed while solving its graph.
        TrialFailed => TrialFailed { .. } => "EXPERIMENT_TRIAL_FAILED",
        /// A worker thread panicked.
        WorkerPanicked => WorkerPanicked { .. } => "EXPERIMENT_WORKER_PANICKED",
        /// A worker thread could not be spawned.
        Spawn => Spawn { .. } => "EXPERIMENT_SPAWN_FAILED",
    }
}

impl ExperimentError {
    /// Retrieve the inner [`crate::MstErrorCode`] when a trial failed inside the solver.
    #[must_use]
    pub const fn mst_code(&self) -> Option<crate::MstErrorCode> {
        match self {
            Self::TrialFailed { source, .. } => Some(source.code()),
            _ => None,
        }
    }

    /// Returns `true` for errors raised before any trial ran.
    #[must_use]
    pub const fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidVertexCount { .. }
                | Self::InvalidTrialCount { .. }
                | Self::InvalidDimension { .. }
        )
    }
}

/// Convenient alias for results returned by the experiment API.
pub type Result<T> = core::result::Result<T, ExperimentError>;
