//! MST repair after deleting a single tree edge.
//!
//! Removing an edge from a spanning tree splits it into exactly two
//! components. The repair locates both sides with a breadth-first search and
//! then rescans every graph edge for the cheapest one that crosses the cut,
//! which costs `O(E)` instead of a full recomputation.

use std::collections::BTreeSet;

use crate::{
    GraphError, Result,
    adjacency::Adjacency,
    connectivity::reachable_from,
    edge::Edge,
    error::check_vertex,
};

use super::SpanningForest;

/// Outcome of removing one edge from a spanning tree and reconnecting it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Repair {
    removed: Edge,
    source_side: BTreeSet<usize>,
    target_side: BTreeSet<usize>,
    replacement: Option<Edge>,
    forest: SpanningForest,
}

impl Repair {
    /// Returns the edge that was removed from the tree.
    #[must_use]
    #[rustfmt::skip]
    pub const fn removed(&self) -> &Edge { &self.removed }

    /// Returns the component containing the removed edge's source.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source_side(&self) -> &BTreeSet<usize> { &self.source_side }

    /// Returns the component containing the removed edge's target.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target_side(&self) -> &BTreeSet<usize> { &self.target_side }

    /// Returns the cheapest edge reconnecting both sides, if any exists.
    #[must_use]
    #[rustfmt::skip]
    pub const fn replacement(&self) -> Option<&Edge> { self.replacement.as_ref() }

    /// Returns the repaired forest: the remaining tree edges in their
    /// original order followed by the replacement, when one was found.
    #[must_use]
    #[rustfmt::skip]
    pub const fn forest(&self) -> &SpanningForest { &self.forest }

    /// Consumes the repair and returns the repaired forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_forest(self) -> SpanningForest { self.forest }

    /// Returns `true` when a replacement edge reconnected the two sides.
    #[must_use]
    pub const fn is_reconnected(&self) -> bool {
        self.replacement.is_some()
    }
}

/// Cut produced by removing one tree edge.
pub(crate) struct Cut {
    pub(crate) remaining: Vec<Edge>,
    pub(crate) source_side: BTreeSet<usize>,
    pub(crate) target_side: BTreeSet<usize>,
}

#[derive(Clone, Copy, Eq, PartialEq)]
enum Side {
    Source,
    Target,
}

impl Cut {
    /// Removes the first structural match of `removed` from `tree` and
    /// discovers both resulting components.
    fn split(vertex_count: usize, tree: &[Edge], removed: &Edge) -> Result<Self> {
        check_vertex(removed.source(), vertex_count)?;
        check_vertex(removed.target(), vertex_count)?;
        let position = tree
            .iter()
            .position(|edge| edge == removed)
            .ok_or(GraphError::EdgeNotInTree { edge: *removed })?;

        let mut remaining = tree.to_vec();
        remaining.remove(position);

        let adjacency = Adjacency::build(vertex_count, &remaining)?;
        let source_side = reachable_from(&adjacency, removed.source());
        let target_side = reachable_from(&adjacency, removed.target());
        Ok(Self {
            remaining,
            source_side,
            target_side,
        })
    }

    /// Places `vertex` on one side of the cut. Vertices reachable from both
    /// endpoints or from neither belong to no side.
    fn side_of(&self, vertex: usize) -> Option<Side> {
        match (
            self.source_side.contains(&vertex),
            self.target_side.contains(&vertex),
        ) {
            (true, false) => Some(Side::Source),
            (false, true) => Some(Side::Target),
            _ => None,
        }
    }

    fn crosses(&self, edge: &Edge) -> bool {
        match (self.side_of(edge.source()), self.side_of(edge.target())) {
            (Some(left), Some(right)) => left != right,
            _ => false,
        }
    }

    /// Scans `candidates` in order, keeping the first crossing edge of
    /// minimum weight. Edges structurally equal to `removed` are skipped.
    fn cheapest_crossing(&self, candidates: &[Edge], removed: &Edge) -> Option<Edge> {
        let mut best: Option<Edge> = None;
        for edge in candidates {
            if edge == removed || !self.crosses(edge) {
                continue;
            }
            if best.is_none_or(|current| edge.weight() < current.weight()) {
                best = Some(*edge);
            }
        }
        best
    }
}

/// Finds the cheapest edge of `graph_edges` reconnecting `tree` after
/// `removed` is deleted from it.
pub(crate) fn find_replacement(
    vertex_count: usize,
    graph_edges: &[Edge],
    tree: &[Edge],
    removed: &Edge,
) -> Result<(Cut, Option<Edge>)> {
    let cut = Cut::split(vertex_count, tree, removed)?;
    let replacement = cut.cheapest_crossing(graph_edges, removed);
    Ok((cut, replacement))
}

/// Assembles the [`Repair`] from a cut and its replacement.
pub(crate) fn assemble(
    vertex_count: usize,
    removed: Edge,
    cut: Cut,
    replacement: Option<Edge>,
) -> Repair {
    let Cut {
        mut remaining,
        source_side,
        target_side,
    } = cut;
    remaining.extend(replacement);
    Repair {
        removed,
        source_side,
        target_side,
        replacement,
        forest: SpanningForest::new(vertex_count, remaining),
    }
}
