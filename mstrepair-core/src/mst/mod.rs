//! Minimum spanning tree (MST) construction.
//!
//! Two independent sequential algorithms are provided so their results can
//! be cross-checked: Kruskal's algorithm over a stably sorted copy of the
//! edge sequence, and Prim's algorithm grown from vertex `0`. Both return a
//! [`SpanningForest`]; on a disconnected graph the forest is incomplete and
//! [`SpanningForest::is_spanning_tree`] reports `false`.

mod repair;

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{adjacency::Adjacency, edge::Edge, edge::sum_weights, union_find::UnionFind};

pub use self::repair::Repair;
pub(crate) use self::repair::{assemble, find_replacement};

/// An ordered, cycle-free edge sequence over a fixed vertex set.
///
/// When the source graph is connected and the forest was produced by
/// Kruskal or Prim, the forest is a minimum spanning tree.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SpanningForest {
    edges: Vec<Edge>,
    vertex_count: usize,
}

impl SpanningForest {
    pub(crate) const fn new(vertex_count: usize, edges: Vec<Edge>) -> Self {
        Self {
            edges,
            vertex_count,
        }
    }

    /// Returns the forest edges in selection order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<Edge> { self.edges }

    /// Returns the number of vertices the forest is defined over.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the number of edges in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` when the forest has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the summed edge weight, saturating on overflow.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        sum_weights(&self.edges)
    }

    /// Returns the number of trees in the forest, counting isolated vertices.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.vertex_count.saturating_sub(self.edges.len())
    }

    /// Returns `true` when the forest is a single tree touching every vertex.
    ///
    /// A graph without vertices has no spanning tree.
    #[must_use]
    pub fn is_spanning_tree(&self) -> bool {
        self.vertex_count > 0 && self.edges.len() == self.vertex_count - 1
    }
}

impl<'a> IntoIterator for &'a SpanningForest {
    type Item = &'a Edge;
    type IntoIter = std::slice::Iter<'a, Edge>;

    fn into_iter(self) -> Self::IntoIter {
        self.edges.iter()
    }
}

/// Kruskal's algorithm over edges whose endpoints are in range.
///
/// Sorting is stable, so equal-weight edges are considered in their original
/// order. Every edge is scanned; there is no early exit once `V - 1` edges
/// are selected.
pub(crate) fn kruskal(vertex_count: usize, edges: &[Edge]) -> SpanningForest {
    let mut ordered: Vec<&Edge> = edges.iter().collect();
    ordered.sort_by_key(|edge| edge.weight());

    let mut sets = UnionFind::new(vertex_count);
    let mut forest = Vec::with_capacity(forest_capacity(vertex_count, edges.len()));
    for edge in ordered {
        if sets.union(edge.source(), edge.target()) {
            forest.push(*edge);
        }
    }

    SpanningForest::new(vertex_count, forest)
}

/// Prim's algorithm grown from vertex `0`.
///
/// Candidates are ordered by `(weight, edge index)`, so equal-weight edges
/// leave the queue in insertion order. Stops once the queue drains or
/// `V - 1` edges are selected.
pub(crate) fn prim(adjacency: &Adjacency<'_>) -> SpanningForest {
    let vertex_count = adjacency.vertex_count();
    let edges = adjacency.edges();
    let mut forest = Vec::with_capacity(forest_capacity(vertex_count, edges.len()));
    if vertex_count == 0 {
        return SpanningForest::new(vertex_count, forest);
    }

    let mut visited = vec![false; vertex_count];
    let mut frontier = BinaryHeap::new();
    visited[0] = true;
    enqueue_frontier(&mut frontier, adjacency, &visited, 0);

    while forest.len() < vertex_count - 1 {
        let Some(Reverse((_, index))) = frontier.pop() else {
            break;
        };
        let Some(edge) = edges.get(index) else {
            continue;
        };
        let (source, target) = edge.endpoints();
        if visited[source] && visited[target] {
            continue;
        }

        forest.push(*edge);
        let reached = if visited[source] { target } else { source };
        visited[reached] = true;
        enqueue_frontier(&mut frontier, adjacency, &visited, reached);
    }

    SpanningForest::new(vertex_count, forest)
}

/// A forest never holds more than `V - 1` edges nor more than the graph has.
const fn forest_capacity(vertex_count: usize, edge_count: usize) -> usize {
    let bound = vertex_count.saturating_sub(1);
    if edge_count < bound {
        edge_count
    } else {
        bound
    }
}

fn enqueue_frontier(
    frontier: &mut BinaryHeap<Reverse<(i64, usize)>>,
    adjacency: &Adjacency<'_>,
    visited: &[bool],
    vertex: usize,
) {
    for (index, edge) in adjacency.incident(vertex) {
        let unvisited = edge
            .other_endpoint(vertex)
            .is_some_and(|other| !visited.get(other).copied().unwrap_or(true));
        if unvisited {
            frontier.push(Reverse((edge.weight(), index)));
        }
    }
}

#[cfg(test)]
mod property;
