//! Random graph generation for a single trial.

use rand::{Rng, distributions::Standard};
use tracing::{debug, instrument};

use super::{Dimension, Graph, Point, pruning_threshold};

/// Draws random complete graphs, optionally pruned.
///
/// The generator is deterministic with respect to the random source passed
/// to [`GraphGenerator::generate`]; callers give every trial its own
/// independently seeded source.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use randmst_core::{Dimension, GraphGenerator};
///
/// let generator = GraphGenerator::new(16, Dimension::UNIFORM, true);
/// let graph = generator.generate(&mut SmallRng::seed_from_u64(7));
/// assert_eq!(graph.node_count(), 16);
/// assert_eq!(graph.edge_count(), 16 * 15 / 2);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GraphGenerator {
    node_count: usize,
    dimension: Dimension,
    full: bool,
}

impl GraphGenerator {
    /// Creates a generator for graphs with `node_count` vertices.
    ///
    /// When `full` is `true` every edge is kept; otherwise edges heavier than
    /// [`pruning_threshold`] are discarded.
    #[must_use]
    pub const fn new(node_count: usize, dimension: Dimension, full: bool) -> Self {
        Self {
            node_count,
            dimension,
            full,
        }
    }

    /// Returns the number of vertices in generated graphs.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the edge-weight model.
    #[must_use]
    #[rustfmt::skip]
    pub const fn dimension(&self) -> Dimension { self.dimension }

    /// Returns `true` when pruning is disabled.
    #[must_use]
    #[rustfmt::skip]
    pub const fn is_full(&self) -> bool { self.full }

    /// Returns the pruning threshold in force, or `None` when pruning is
    /// disabled.
    #[must_use]
    pub fn threshold(&self) -> Option<f64> {
        if self.full {
            None
        } else {
            Some(pruning_threshold(self.node_count, self.dimension))
        }
    }

    /// Generates one random graph using `rng` for every draw.
    ///
    /// With a Euclidean model all vertex positions are drawn first, in vertex
    /// order. Pairs are then visited as `(i, j)` with `j < i`; the uniform
    /// model draws exactly one weight per pair in that order, pruned or not.
    #[instrument(
        name = "graph.generate",
        level = "debug",
        skip(self, rng),
        fields(
            node_count = self.node_count,
            dimension = %self.dimension,
            full = self.full,
        ),
    )]
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Graph {
        let points: Vec<Point> = if self.dimension.is_uniform() {
            Vec::new()
        } else {
            (0..self.node_count)
                .map(|_| Point::sample(self.dimension, rng))
                .collect()
        };

        let threshold = self.threshold();
        let mut graph = Graph::with_node_count(self.node_count);
        for i in 0..self.node_count {
            for j in 0..i {
                let weight = match (points.get(i), points.get(j)) {
                    (Some(left), Some(right)) => left.distance(right),
                    _ => rng.sample(Standard),
                };
                if threshold.is_some_and(|limit| weight > limit) {
                    continue;
                }
                graph.insert_undirected(i, j, weight);
            }
        }

        debug!(
            edges = graph.edge_count(),
            threshold = threshold.unwrap_or(f64::INFINITY),
            "graph generated"
        );
        graph
    }
}
