//! Unit tests for graph construction and generation.

use rand::{SeedableRng, rngs::SmallRng};
use rstest::rstest;

use super::{Dimension, Graph, GraphError, GraphErrorCode, GraphGenerator, Point, pruning_threshold};

fn dimension(value: u8) -> Dimension {
    Dimension::new(value).expect("dimension is valid")
}

fn assert_symmetric(graph: &Graph) {
    for node in 0..graph.node_count() {
        for edge in graph.neighbours(node) {
            let reciprocal = graph
                .neighbours(edge.target())
                .iter()
                .filter(|back| back.target() == node && back.weight() == edge.weight())
                .count();
            assert!(
                reciprocal >= 1,
                "edge ({node}, {}) has no reciprocal",
                edge.target()
            );
        }
    }
}

#[rstest]
#[case(0, true)]
#[case(4, true)]
#[case(5, false)]
#[case(u8::MAX, false)]
fn dimension_accepts_zero_through_four(#[case] value: u8, #[case] valid: bool) {
    assert_eq!(Dimension::new(value).is_some(), valid);
}

#[test]
fn from_edges_rejects_out_of_range_endpoints() {
    let err = Graph::from_edges(2, &[(0, 2, 0.5)]).expect_err("vertex 2 does not exist");
    assert_eq!(
        err,
        GraphError::InvalidNodeId {
            node: 2,
            node_count: 2
        }
    );
    assert_eq!(err.code(), GraphErrorCode::InvalidNodeId);
}

#[rstest]
#[case::nan(f64::NAN, GraphErrorCode::NonFiniteWeight)]
#[case::infinite(f64::INFINITY, GraphErrorCode::NonFiniteWeight)]
#[case::negative(-0.5, GraphErrorCode::NegativeWeight)]
fn from_edges_rejects_invalid_weights(#[case] weight: f64, #[case] code: GraphErrorCode) {
    let err = Graph::from_edges(2, &[(0, 1, weight)]).expect_err("weight is invalid");
    assert_eq!(err.code(), code);
}

#[test]
fn from_edges_ignores_self_edges_and_stores_reciprocals() {
    let graph = Graph::from_edges(3, &[(1, 1, 0.2), (0, 2, 0.7)]).expect("edges are valid");
    assert_eq!(graph.edge_count(), 1);
    assert!(graph.neighbours(1).is_empty());
    assert_eq!(graph.neighbours(0)[0].target(), 2);
    assert_eq!(graph.neighbours(2)[0].target(), 0);
    assert!(graph.neighbours(7).is_empty());
    assert_symmetric(&graph);
}

#[test]
fn point_distance_ignores_zero_padding() {
    let left = Point::new([0.0, 0.0, 0.0, 0.0]);
    let right = Point::new([0.3, 0.4, 0.0, 0.0]);
    assert!((left.distance(&right) - 0.5).abs() < 1e-12);
}

#[rstest]
#[case(1)]
#[case(3)]
fn sampled_points_pad_unused_coordinates(#[case] value: u8) {
    let mut rng = SmallRng::seed_from_u64(17);
    let point = Point::sample(dimension(value), &mut rng);
    let used = usize::from(value);
    for (index, coordinate) in point.coordinates().iter().enumerate() {
        if index < used {
            assert!((0.0..1.0).contains(coordinate));
        } else {
            assert_eq!(*coordinate, 0.0);
        }
    }
}

#[rstest]
#[case::uniform(1_000, 0, 4.5 / 1_000_f64.powf(0.864))]
#[case::line(1_024, 1, 1.5 * 10.0 / (std::f64::consts::PI * 1_024.0))]
#[case::square(1_024, 2, 1.5 * (10.0 / (std::f64::consts::PI * 1_024.0)).sqrt())]
fn pruning_threshold_matches_formula(
    #[case] node_count: usize,
    #[case] value: u8,
    #[case] expected: f64,
) {
    let threshold = pruning_threshold(node_count, dimension(value));
    assert!((threshold - expected).abs() < 1e-12, "{threshold} != {expected}");
}

#[test]
fn pruning_threshold_shrinks_as_graphs_grow() {
    for value in 0..=Dimension::MAX {
        let small = pruning_threshold(100, dimension(value));
        let large = pruning_threshold(10_000, dimension(value));
        assert!(large < small, "dimension {value}: {large} >= {small}");
    }
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn full_generation_yields_complete_symmetric_graph(#[case] value: u8) {
    let mut rng = SmallRng::seed_from_u64(u64::from(value));
    let generator = GraphGenerator::new(40, dimension(value), true);
    assert_eq!(generator.threshold(), None);
    let graph = generator.generate(&mut rng);

    assert_eq!(graph.node_count(), 40);
    assert_eq!(graph.edge_count(), 40 * 39 / 2);
    for node in 0..graph.node_count() {
        assert_eq!(graph.neighbours(node).len(), 39);
    }
    assert_symmetric(&graph);
}

#[rstest]
#[case(0)]
#[case(1)]
#[case(2)]
#[case(3)]
#[case(4)]
fn generated_weights_are_never_negative(#[case] value: u8) {
    let mut rng = SmallRng::seed_from_u64(99);
    let graph = GraphGenerator::new(60, dimension(value), true).generate(&mut rng);
    // The longest diagonal of the unit 4-cube is 2.
    let upper = if value == 0 { 1.0 } else { 2.0 };
    for (_, _, weight) in graph.edges() {
        assert!(weight >= 0.0);
        if value == 0 {
            assert!(weight < upper);
        } else {
            assert!(weight <= upper);
        }
    }
}

#[rstest]
#[case(0)]
#[case(2)]
#[case(4)]
fn pruned_generation_respects_threshold(#[case] value: u8) {
    let mut rng = SmallRng::seed_from_u64(5);
    let generator = GraphGenerator::new(300, dimension(value), false);
    let threshold = generator.threshold().expect("pruning is enabled");
    let graph = generator.generate(&mut rng);

    assert!(graph.edge_count() < 300 * 299 / 2);
    assert!(graph.edges().all(|(_, _, weight)| weight <= threshold));
    assert_symmetric(&graph);
}

#[rstest]
#[case(0)]
#[case(3)]
fn pruning_a_full_graph_matches_pruned_generation(#[case] value: u8) {
    let full = GraphGenerator::new(150, dimension(value), true)
        .generate(&mut SmallRng::seed_from_u64(21));
    let pruned_generator = GraphGenerator::new(150, dimension(value), false);
    let pruned = pruned_generator.generate(&mut SmallRng::seed_from_u64(21));
    let threshold = pruned_generator.threshold().expect("pruning is enabled");

    assert_eq!(full.pruned(threshold), pruned);
}

#[test]
fn identical_seeds_generate_identical_graphs() {
    let generator = GraphGenerator::new(80, dimension(2), false);
    let first = generator.generate(&mut SmallRng::seed_from_u64(8));
    let second = generator.generate(&mut SmallRng::seed_from_u64(8));
    assert_eq!(first, second);
}
