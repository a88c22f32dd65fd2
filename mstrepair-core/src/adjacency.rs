//! Adjacency projection derived from an edge slice.
//!
//! The projection is recomputed on demand from the edges it describes rather
//! than maintained alongside them, so it can never drift out of sync.

use crate::{
    Result,
    edge::Edge,
    error::check_vertex,
};

/// Vertex to incident-edge mapping over a borrowed edge slice.
///
/// Incident edges are listed per vertex in the order they appear in the
/// slice. A self-loop is listed once for its vertex.
#[derive(Clone, Debug)]
pub struct Adjacency<'a> {
    edges: &'a [Edge],
    incident: Vec<Vec<usize>>,
}

impl<'a> Adjacency<'a> {
    /// Builds the projection for `vertex_count` vertices.
    ///
    /// # Errors
    /// Returns [`crate::GraphError::InvalidVertex`] when an edge endpoint is
    /// outside `[0, vertex_count)`.
    pub fn build(vertex_count: usize, edges: &'a [Edge]) -> Result<Self> {
        for edge in edges {
            check_vertex(edge.source(), vertex_count)?;
            check_vertex(edge.target(), vertex_count)?;
        }
        Ok(Self::project(vertex_count, edges))
    }

    /// Builds the projection from edges already known to be in range.
    ///
    /// Endpoints outside `[0, vertex_count)` are skipped.
    pub(crate) fn project(vertex_count: usize, edges: &'a [Edge]) -> Self {
        let mut incident = vec![Vec::new(); vertex_count];
        for (index, edge) in edges.iter().enumerate() {
            if let Some(list) = incident.get_mut(edge.source()) {
                list.push(index);
            }
            if edge.is_self_loop() {
                continue;
            }
            if let Some(list) = incident.get_mut(edge.target()) {
                list.push(index);
            }
        }
        Self { edges, incident }
    }

    /// Returns the number of vertices covered by the projection.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.incident.len()
    }

    /// Returns the edge slice backing the projection.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &'a [Edge] { self.edges }

    /// Iterates over `(edge_index, edge)` pairs incident to `vertex`.
    ///
    /// Yields nothing when `vertex` is out of range.
    pub fn incident(&self, vertex: usize) -> impl Iterator<Item = (usize, &'a Edge)> + '_ {
        let edges = self.edges;
        self.incident
            .get(vertex)
            .into_iter()
            .flatten()
            .filter_map(move |&index| edges.get(index).map(|edge| (index, edge)))
    }

    /// Iterates over the vertices adjacent to `vertex`.
    pub fn neighbours(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        self.incident(vertex)
            .filter_map(move |(_, edge)| edge.other_endpoint(vertex))
    }

    /// Returns the number of incident edges of `vertex`.
    #[must_use]
    pub fn degree(&self, vertex: usize) -> usize {
        self.incident.get(vertex).map_or(0, Vec::len)
    }
}
