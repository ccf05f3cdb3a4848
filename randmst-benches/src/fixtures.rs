//! Seeded graphs for benchmarks.
//!
//! Every fixture is derived from an explicit seed so repeated benchmark runs
//! measure identical inputs.

use rand::{SeedableRng, rngs::SmallRng};
use randmst_core::{Dimension, Graph, GraphGenerator, MstError, prim_mst_weight};

use crate::{error::BenchSetupError, params::TrialBenchParams};

/// Seeds tried by [`connected_graph`] before giving up.
const MAX_ATTEMPTS: u64 = 64;

/// Builds the generator described by `params`.
///
/// # Errors
/// Returns [`BenchSetupError::InvalidDimension`] for dimensions above four.
pub fn generator(params: &TrialBenchParams) -> Result<GraphGenerator, BenchSetupError> {
    let dimension = Dimension::new(params.dimension).ok_or(BenchSetupError::InvalidDimension {
        value: params.dimension,
    })?;
    Ok(GraphGenerator::new(params.node_count, dimension, params.full))
}

/// Generates the graph for `params` from `seed`.
///
/// # Errors
/// Returns [`BenchSetupError::InvalidDimension`] for dimensions above four.
pub fn seeded_graph(params: &TrialBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    let mut rng = SmallRng::seed_from_u64(seed);
    Ok(generator(params)?.generate(&mut rng))
}

/// Returns the first graph, starting at `seed`, that Prim's algorithm spans.
///
/// Pruned graphs occasionally disconnect; benchmarking the solver on those
/// would measure an early exit.
///
/// # Errors
/// Returns [`BenchSetupError::NoConnectedGraph`] when every seed in the
/// window disconnects, and propagates other solver failures.
pub fn connected_graph(params: &TrialBenchParams, seed: u64) -> Result<Graph, BenchSetupError> {
    for candidate in seed..seed.saturating_add(MAX_ATTEMPTS) {
        let graph = seeded_graph(params, candidate)?;
        match prim_mst_weight(&graph) {
            Ok(_) => return Ok(graph),
            Err(MstError::Disconnected { .. }) => {}
            Err(err) => return Err(err.into()),
        }
    }
    Err(BenchSetupError::NoConnectedGraph {
        params: params.to_string(),
        attempts: MAX_ATTEMPTS,
    })
}
