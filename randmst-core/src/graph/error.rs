//! Error types produced while assembling graphs from explicit edge lists.

use thiserror::Error;

use crate::error::define_error_codes;

/// Errors produced by [`crate::Graph::from_edges`].
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum GraphError {
    /// An edge referenced a vertex that is not present in the graph.
    #[error("edge references vertex {node}, but node_count is {node_count}")]
    InvalidNodeId {
        /// The invalid vertex id referenced by an edge.
        node: usize,
        /// The number of vertices in the graph.
        node_count: usize,
    },
    /// An edge carried a NaN or infinite weight.
    #[error("edge ({left}, {right}) has non-finite weight")]
    NonFiniteWeight {
        /// The left endpoint id.
        left: usize,
        /// The right endpoint id.
        right: usize,
    },
    /// An edge carried a negative weight.
    #[error("edge ({left}, {right}) has negative weight")]
    NegativeWeight {
        /// The left endpoint id.
        left: usize,
        /// The right endpoint id.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge referenced a vertex that is not present in the graph.
        InvalidNodeId => InvalidNodeId { .. } => "GRAPH_INVALID_NODE_ID",
        /// An edge carried a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "GRAPH_NON_FINITE_WEIGHT",
        /// An edge carried a negative weight.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
    }
}
