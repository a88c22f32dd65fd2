//! Naive reference implementations used as property-test oracles.
//!
//! Deliberately independent of the library internals: components are tracked
//! with a relabelling array instead of a union-find, and MST weight comes
//! from a fresh sort.

use crate::Edge;

/// Result of the reference minimum spanning forest computation.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct OracleForest {
    /// Total weight of the forest.
    pub total_weight: i64,
    /// Number of edges selected.
    pub edge_count: usize,
    /// Number of connected components of the input.
    pub component_count: usize,
}

/// Computes a minimum spanning forest over the edges accepted by `keep`.
pub(super) fn minimum_forest(
    vertex_count: usize,
    edges: &[Edge],
    keep: impl Fn(&Edge) -> bool,
) -> OracleForest {
    let mut candidates: Vec<Edge> = edges.iter().copied().filter(|edge| keep(edge)).collect();
    candidates.sort_by_key(Edge::weight);

    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut total_weight = 0_i64;
    let mut edge_count = 0;
    for edge in candidates {
        let from = label[edge.target()];
        let to = label[edge.source()];
        if from == to {
            continue;
        }
        for entry in &mut label {
            if *entry == from {
                *entry = to;
            }
        }
        total_weight += edge.weight();
        edge_count += 1;
    }

    OracleForest {
        total_weight,
        edge_count,
        component_count: vertex_count - edge_count,
    }
}

/// Labels each vertex with the smallest vertex index of its component.
pub(super) fn component_labels(vertex_count: usize, edges: &[Edge]) -> Vec<usize> {
    let mut label: Vec<usize> = (0..vertex_count).collect();
    let mut changed = true;
    while changed {
        changed = false;
        for edge in edges {
            let (source, target) = edge.endpoints();
            let lowest = label[source].min(label[target]);
            if label[source] != lowest || label[target] != lowest {
                label[source] = lowest;
                label[target] = lowest;
                changed = true;
            }
        }
    }
    label
}

mod tests {
    use super::*;

    #[test]
    fn oracle_triangle() {
        let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
        let forest = minimum_forest(3, &edges, |_| true);
        assert_eq!(
            forest,
            OracleForest {
                total_weight: 3,
                edge_count: 2,
                component_count: 1
            }
        );
    }

    #[test]
    fn oracle_respects_exclusions() {
        let edges = [Edge::new(0, 1, 1), Edge::new(1, 2, 2), Edge::new(0, 2, 3)];
        let forest = minimum_forest(3, &edges, |edge| *edge != Edge::new(0, 1, 1));
        assert_eq!(forest.total_weight, 5);
    }

    #[test]
    fn oracle_disconnected_pair() {
        let edges = [Edge::new(0, 1, 1), Edge::new(2, 3, 2)];
        let forest = minimum_forest(5, &edges, |_| true);
        assert_eq!(forest.component_count, 3);
        assert_eq!(forest.total_weight, 3);
    }

    #[test]
    fn oracle_ignores_self_loops() {
        let edges = [Edge::new(0, 0, -5), Edge::new(0, 1, 2)];
        let forest = minimum_forest(2, &edges, |_| true);
        assert_eq!(forest.total_weight, 2);
        assert_eq!(forest.edge_count, 1);
    }

    #[test]
    fn labels_follow_the_smallest_member() {
        let edges = [Edge::new(3, 1, 1), Edge::new(1, 2, 1)];
        assert_eq!(component_labels(5, &edges), vec![0, 1, 1, 1, 4]);
    }
}
