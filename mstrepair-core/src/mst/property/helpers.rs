//! Shared helper functions for MST property-based tests.

use crate::Edge;

/// Path-halving find for verification union-find arrays.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Returns the index of the first edge closing a cycle, if any.
pub(super) fn first_cycle_edge(vertex_count: usize, edges: &[Edge]) -> Option<usize> {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for (index, edge) in edges.iter().enumerate() {
        let left = find_root(&mut parent, edge.source());
        let right = find_root(&mut parent, edge.target());
        if left == right {
            return Some(index);
        }
        parent[right] = left;
    }
    None
}
