//! Pruning thresholds for random MST experiments.

use std::f64::consts::PI;

use super::Dimension;

/// Safety factor applied on top of the expected longest MST edge.
const SAFETY_FACTOR: f64 = 1.5;

/// Empirical constants for the uniform-weight threshold `3 / n^0.864`.
const UNIFORM_SCALE: f64 = 3.0;
const UNIFORM_EXPONENT: f64 = 0.864;

/// Returns the weight above which edges are assumed never to belong to the
/// MST of a random graph with `node_count` vertices.
///
/// For uniform weights the bound is the empirical fit `1.5 * 3 / n^0.864`.
/// For Euclidean weights in `d` dimensions it is the random geometric graph
/// connectivity radius `1.5 * (log2(n) / (pi * n))^(1/d)`.
///
/// The bound holds with high probability only; small graphs can become
/// disconnected once pruned.
///
/// # Examples
/// ```
/// use randmst_core::{Dimension, pruning_threshold};
///
/// let uniform = pruning_threshold(1_000, Dimension::UNIFORM);
/// assert!(uniform > 0.0 && uniform < 0.05);
///
/// let square = pruning_threshold(1_000, Dimension::new(2).expect("valid"));
/// assert!(square > uniform);
/// ```
#[must_use]
pub fn pruning_threshold(node_count: usize, dimension: Dimension) -> f64 {
    let n = node_count as f64;
    if dimension.is_uniform() {
        SAFETY_FACTOR * (UNIFORM_SCALE / n.powf(UNIFORM_EXPONENT))
    } else {
        let exponent = 1.0 / f64::from(dimension.get());
        SAFETY_FACTOR * (n.log2() / (PI * n)).powf(exponent)
    }
}
