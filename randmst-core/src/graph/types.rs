//! Adjacency-list graph representation shared by the generator and solver.

use super::GraphError;

/// An outgoing edge stored in a vertex's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    target: usize,
    weight: f64,
}

impl Edge {
    pub(crate) const fn new(target: usize, weight: f64) -> Self {
        Self { target, weight }
    }

    /// Returns the vertex at the far end of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the non-negative edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> f64 { self.weight }
}

/// An undirected weighted graph stored as one adjacency list per vertex.
///
/// Every edge is stored twice, once per endpoint, with identical weights.
/// Adjacency lists keep insertion order.
///
/// # Examples
/// ```
/// use randmst_core::Graph;
///
/// let graph = Graph::from_edges(3, &[(0, 1, 0.5), (1, 2, 0.25)])?;
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.neighbours(1).len(), 2);
/// # Ok::<(), randmst_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub(crate) fn with_node_count(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Builds a graph from explicit `(left, right, weight)` triples.
    ///
    /// Self-edges are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error when:
    /// - an endpoint is `>= node_count`
    /// - a weight is NaN or infinite
    /// - a weight is negative
    pub fn from_edges(node_count: usize, edges: &[(usize, usize, f64)]) -> Result<Self, GraphError> {
        let mut graph = Self::with_node_count(node_count);
        for &(left, right, weight) in edges {
            for node in [left, right] {
                if node >= node_count {
                    return Err(GraphError::InvalidNodeId { node, node_count });
                }
            }
            if !weight.is_finite() {
                return Err(GraphError::NonFiniteWeight { left, right });
            }
            if weight < 0.0 {
                return Err(GraphError::NegativeWeight { left, right });
            }
            if left != right {
                graph.insert_undirected(left, right, weight);
            }
        }
        Ok(graph)
    }

    /// Stores `(left, right, weight)` in both adjacency lists.
    ///
    /// Callers guarantee both endpoints are in range and distinct.
    pub(crate) fn insert_undirected(&mut self, left: usize, right: usize, weight: f64) {
        if let Some(edges) = self.adjacency.get_mut(left) {
            edges.push(Edge::new(right, weight));
        }
        if let Some(edges) = self.adjacency.get_mut(right) {
            edges.push(Edge::new(left, weight));
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Returns the number of undirected edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns the edges incident to `node`, or an empty slice when `node` is
    /// out of range.
    #[must_use]
    pub fn neighbours(&self, node: usize) -> &[Edge] {
        match self.adjacency.get(node) {
            Some(edges) => edges,
            None => &[],
        }
    }

    /// Iterates each undirected edge once as `(smaller, larger, weight)`.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize, f64)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(source, edges)| {
            edges
                .iter()
                .filter(move |edge| source < edge.target)
                .map(move |edge| (source, edge.target, edge.weight))
        })
    }

    /// Returns the subgraph holding only edges with `weight <= threshold`.
    ///
    /// Applying the generator's threshold to a graph generated with pruning
    /// disabled yields exactly the graph pruning would have produced from the
    /// same random draws.
    #[must_use]
    pub fn pruned(&self, threshold: f64) -> Self {
        let adjacency = self
            .adjacency
            .iter()
            .map(|edges| {
                edges
                    .iter()
                    .filter(|edge| edge.weight <= threshold)
                    .copied()
                    .collect()
            })
            .collect();
        Self { adjacency }
    }
}
