//! Graph strategies for MST property tests.

use proptest::prelude::*;
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::{Dimension, Graph, GraphGenerator};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 48;

/// Topology of a generated fixture.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum Topology {
    /// Random spanning tree plus random extra edges.
    Sparse,
    /// Complete graph from the random generator.
    Complete,
    /// Pruned generator output, which may or may not be connected.
    Pruned,
    /// Weights drawn from a handful of values to stress ties.
    Tied,
}

/// A generated graph together with how it was produced.
#[derive(Clone, Debug)]
pub(super) struct Fixture {
    pub graph: Graph,
    pub topology: Topology,
}

pub(super) fn fixture_strategy() -> impl Strategy<Value = Fixture> {
    (
        prop_oneof![
            Just(Topology::Sparse),
            Just(Topology::Complete),
            Just(Topology::Pruned),
            Just(Topology::Tied),
        ],
        0_u8..=Dimension::MAX,
        any::<u64>(),
    )
        .prop_map(|(topology, dimension, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let dimension = Dimension::new(dimension).unwrap_or_default();
            build_fixture(topology, dimension, &mut rng)
        })
}

pub(super) fn build_fixture(topology: Topology, dimension: Dimension, rng: &mut SmallRng) -> Fixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let graph = match topology {
        Topology::Sparse => sparse_graph(node_count, rng, |rng| rng.gen_range(0.0..1.0)),
        Topology::Tied => sparse_graph(node_count, rng, |rng| f64::from(rng.gen_range(0_u8..3))),
        Topology::Complete => GraphGenerator::new(node_count, dimension, true).generate(rng),
        Topology::Pruned => GraphGenerator::new(node_count, dimension, false).generate(rng),
    };
    Fixture { graph, topology }
}

/// Links every vertex to a random earlier one, then adds up to `2n` extra
/// random edges.
fn sparse_graph(
    node_count: usize,
    rng: &mut SmallRng,
    mut weight: impl FnMut(&mut SmallRng) -> f64,
) -> Graph {
    let mut edges = Vec::new();
    for node in 1..node_count {
        let parent = rng.gen_range(0..node);
        edges.push((parent, node, weight(rng)));
    }
    let extra = rng.gen_range(0..=2 * node_count);
    for _ in 0..extra {
        let left = rng.gen_range(0..node_count);
        let right = rng.gen_range(0..node_count);
        edges.push((left, right, weight(rng)));
    }
    match Graph::from_edges(node_count, &edges) {
        Ok(graph) => graph,
        Err(err) => panic!("generated edges must be valid: {err}"),
    }
}
