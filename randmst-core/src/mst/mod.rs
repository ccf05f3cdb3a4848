//! Minimum spanning tree weight via Prim's algorithm.
//!
//! The solver grows a single tree from vertex 0 using a binary [`MinHeap`]
//! with lazy deletion: relaxing an edge pushes a fresh entry instead of
//! lowering an existing one, and entries for vertices already in the tree
//! are skipped when they reach the top of the heap.

use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::{
    Graph,
    error::define_error_codes,
    heap::{HeapEntry, HeapError, MinHeap},
};

/// Errors returned while computing a minimum spanning tree weight.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested an MST for a graph without vertices.
    #[error("cannot compute an MST for an empty graph")]
    EmptyGraph,
    /// Some vertices could not be reached from vertex 0.
    #[error("graph is disconnected: {unreached} of {node_count} vertices unreachable from vertex 0")]
    Disconnected {
        /// Number of vertices never added to the tree.
        unreached: usize,
        /// Number of vertices in the graph.
        node_count: usize,
    },
    /// The priority queue reported an underflow, which indicates a logic error.
    #[error("MST invariant violated: {0}")]
    Heap(#[from] HeapError),
}

define_error_codes! {
    /// Machine-readable error codes for [`MstError`].
    enum MstErrorCode for MstError {
        /// The caller requested an MST for a graph without vertices.
        EmptyGraph => EmptyGraph => "MST_EMPTY_GRAPH",
        /// Some vertices could not be reached from vertex 0.
        Disconnected => Disconnected { .. } => "MST_DISCONNECTED",
        /// The priority queue reported an underflow.
        HeapUnderflow => Heap(..) => "MST_HEAP_UNDERFLOW",
    }
}

/// Progress of a single vertex through Prim's algorithm.
///
/// `Unvisited -> Frontier -> Visited`, where `Frontier` may be lowered any
/// number of times and `Visited` is terminal.
#[derive(Clone, Copy, Debug, PartialEq)]
enum VertexState {
    Unvisited,
    Frontier(f64),
    Visited(f64),
}

impl VertexState {
    const fn is_visited(self) -> bool {
        matches!(self, Self::Visited(_))
    }

    /// Returns `true` when an edge of `weight` improves on the best known
    /// connection.
    fn improves_on(self, weight: f64) -> bool {
        match self {
            Self::Unvisited => true,
            Self::Frontier(best) => weight < best,
            Self::Visited(_) => false,
        }
    }
}

/// Computes the total weight of a minimum spanning tree of `graph`.
///
/// The graph is only read, so solving the same graph twice yields identical
/// results. Heap ties are broken arbitrarily, which never changes the sum.
///
/// # Errors
///
/// Returns an error when:
/// - the graph has no vertices
/// - some vertex is unreachable from vertex 0 (for example after pruning)
///
/// # Examples
/// ```
/// use randmst_core::{Graph, prim_mst_weight};
///
/// let graph = Graph::from_edges(
///     4,
///     &[
///         (0, 1, 0.5),
///         (0, 2, 0.3),
///         (0, 3, 0.9),
///         (1, 2, 0.4),
///         (1, 3, 0.2),
///         (2, 3, 0.6),
///     ],
/// )?;
/// let weight = prim_mst_weight(&graph)?;
/// assert!((weight - 0.9).abs() < 1e-12);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "mst.prim",
    level = "debug",
    err,
    skip(graph),
    fields(node_count = graph.node_count()),
)]
pub fn prim_mst_weight(graph: &Graph) -> Result<f64, MstError> {
    let node_count = graph.node_count();
    if node_count == 0 {
        return Err(MstError::EmptyGraph);
    }

    let mut states = vec![VertexState::Unvisited; node_count];
    states[0] = VertexState::Frontier(0.0);
    let mut heap = MinHeap::with_capacity(node_count);
    heap.insert(HeapEntry::new(0, 0.0));
    let mut stale = 0_usize;

    while !heap.is_empty() {
        let entry = heap.extract_min()?;
        let vertex = entry.vertex();
        if states[vertex].is_visited() {
            stale += 1;
            continue;
        }
        states[vertex] = VertexState::Visited(entry.weight());

        for edge in graph.neighbours(vertex) {
            let target = edge.target();
            if states[target].improves_on(edge.weight()) {
                states[target] = VertexState::Frontier(edge.weight());
                heap.insert(HeapEntry::new(target, edge.weight()));
            }
        }
    }

    let mut total = 0.0;
    let mut unreached = 0_usize;
    for state in &states {
        match state {
            VertexState::Visited(weight) => total += weight,
            VertexState::Unvisited | VertexState::Frontier(_) => unreached += 1,
        }
    }

    if unreached > 0 {
        warn!(unreached, node_count, "graph is disconnected");
        return Err(MstError::Disconnected {
            unreached,
            node_count,
        });
    }

    debug!(weight = total, stale_entries = stale, "mst computed");
    Ok(total)
}


#[cfg(test)]
mod property;
