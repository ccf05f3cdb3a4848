//! Sequential Kruskal oracle for MST property verification.

use crate::Graph;

/// Result of the Kruskal oracle.
#[derive(Clone, Copy, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: f64,
    /// Number of connected components.
    pub component_count: usize,
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
pub(super) fn sequential_kruskal(graph: &Graph) -> OracleResult {
    let node_count = graph.node_count();
    let mut edges: Vec<(usize, usize, f64)> = graph.edges().collect();
    edges.sort_unstable_by(|left, right| left.2.total_cmp(&right.2));

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut components = node_count;
    let mut total_weight = 0.0;

    for (source, target, weight) in edges {
        let source_root = find_root(&mut parent, source);
        let target_root = find_root(&mut parent, target);
        if source_root != target_root {
            parent[target_root] = source_root;
            total_weight += weight;
            components -= 1;
        }
    }

    OracleResult {
        total_weight,
        component_count: components,
    }
}

/// Finds the root of `node`, halving paths on the way.
fn find_root(parent: &mut [usize], node: usize) -> usize {
    let mut current = node;
    while parent[current] != current {
        parent[current] = parent[parent[current]];
        current = parent[current];
    }
    current
}
