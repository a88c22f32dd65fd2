//! Component discovery over an arbitrary edge subset.
//!
//! A breadth-first traversal runs over an adjacency projection built from
//! the supplied edges. Nothing is kept between calls.

use std::collections::{BTreeSet, VecDeque};

use crate::{
    Result,
    adjacency::Adjacency,
    edge::Edge,
    error::check_vertex,
};

/// Returns every vertex reachable from `start` using only `edges`.
///
/// The start vertex is always part of the result, even when no edge touches
/// it.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidVertex`] when `start` or any edge
/// endpoint is outside `[0, vertex_count)`.
///
/// # Examples
/// ```
/// use mstrepair_core::{Edge, connected_component};
///
/// let edges = [Edge::new(0, 1, 1), Edge::new(2, 3, 1)];
/// let component = connected_component(4, &edges, 1)?;
/// assert_eq!(component.into_iter().collect::<Vec<_>>(), vec![0, 1]);
/// # Ok::<(), mstrepair_core::GraphError>(())
/// ```
pub fn connected_component(
    vertex_count: usize,
    edges: &[Edge],
    start: usize,
) -> Result<BTreeSet<usize>> {
    check_vertex(start, vertex_count)?;
    let adjacency = Adjacency::build(vertex_count, edges)?;
    Ok(reachable_from(&adjacency, start))
}

/// Returns `true` when `edges` form a spanning tree over `vertex_count`
/// vertices: exactly `vertex_count - 1` edges whose component containing
/// vertex `0` covers every vertex.
///
/// An empty vertex set has no spanning tree.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidVertex`] when an edge endpoint is
/// outside `[0, vertex_count)`.
pub fn is_spanning_tree(vertex_count: usize, edges: &[Edge]) -> Result<bool> {
    if vertex_count == 0 {
        return Ok(false);
    }
    if edges.len() != vertex_count - 1 {
        // Still surface malformed edges before answering.
        Adjacency::build(vertex_count, edges)?;
        return Ok(false);
    }
    let component = connected_component(vertex_count, edges, 0)?;
    Ok(component.len() == vertex_count)
}

pub(crate) fn reachable_from(adjacency: &Adjacency<'_>, start: usize) -> BTreeSet<usize> {
    let mut component = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for neighbour in adjacency.neighbours(current) {
            if component.insert(neighbour) {
                queue.push_back(neighbour);
            }
        }
    }

    component
}
