//! Weighted undirected graph over a fixed vertex set.
//!
//! Provides the [`Graph`] entry point: append-only edge insertion, MST
//! construction via Kruskal and Prim, and MST repair queries.

use std::collections::BTreeSet;

use tracing::{Span, debug, field, instrument};

use crate::{
    GraphError, Result,
    adjacency::Adjacency,
    builder::{GraphBuilder, SelfLoopPolicy},
    connectivity,
    edge::Edge,
    error::check_vertex,
    mst::{self, Repair, SpanningForest},
};

/// A weighted undirected graph with a fixed vertex count.
///
/// Vertices are the indices `[0, vertex_count)`. Edges are kept in insertion
/// order, which breaks ties between equal-weight edges. Edges are never
/// removed from the graph itself; repair queries work on caller-owned tree
/// edge sequences.
///
/// # Examples
/// ```
/// use mstrepair_core::Graph;
///
/// let mut graph = Graph::new(3);
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(1, 2, 1)?;
/// graph.add_edge(0, 2, 3)?;
///
/// let mst = graph.kruskal_mst();
/// assert_eq!(mst.total_weight(), 4);
/// assert_eq!(graph.prim_mst().total_weight(), 4);
///
/// let replacement = graph.find_replacement_edge(mst.edges(), &mst.edges()[0])?;
/// assert_eq!(replacement.map(|edge| edge.weight()), Some(4));
/// # Ok::<(), mstrepair_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    vertex_count: usize,
    edges: Vec<Edge>,
    self_loop_policy: SelfLoopPolicy,
}

impl Graph {
    /// Creates a graph with `vertex_count` vertices and no edges.
    ///
    /// Self-loops are accepted; use [`Graph::builder`] to reject them.
    #[must_use]
    pub fn new(vertex_count: usize) -> Self {
        Self::with_policy(vertex_count, SelfLoopPolicy::default())
    }

    /// Returns a builder for a graph with `vertex_count` vertices.
    #[must_use]
    pub fn builder(vertex_count: usize) -> GraphBuilder {
        GraphBuilder::new(vertex_count)
    }

    pub(crate) const fn with_policy(vertex_count: usize, self_loop_policy: SelfLoopPolicy) -> Self {
        Self {
            vertex_count,
            edges: Vec::new(),
            self_loop_policy,
        }
    }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertex_count }

    /// Returns the edges in insertion order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the number of edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the configured self-loop policy.
    #[must_use]
    #[rustfmt::skip]
    pub const fn self_loop_policy(&self) -> SelfLoopPolicy { self.self_loop_policy }

    /// Appends an undirected edge between `source` and `target`.
    ///
    /// The graph is left untouched when the call fails.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is outside
    /// `[0, vertex_count)`, or [`GraphError::SelfLoop`] when
    /// `source == target` and the graph rejects self-loops.
    pub fn add_edge(&mut self, source: usize, target: usize, weight: i64) -> Result<()> {
        check_vertex(source, self.vertex_count)?;
        check_vertex(target, self.vertex_count)?;
        if source == target && self.self_loop_policy == SelfLoopPolicy::Reject {
            return Err(GraphError::SelfLoop { vertex: source });
        }
        self.edges.push(Edge::new(source, target, weight));
        Ok(())
    }

    /// Returns the vertex to incident-edge projection of the current edges.
    #[must_use]
    pub fn adjacency(&self) -> Adjacency<'_> {
        Adjacency::project(self.vertex_count, &self.edges)
    }

    /// Computes a minimum spanning forest with Kruskal's algorithm.
    ///
    /// Equal-weight edges are considered in insertion order, so repeated
    /// calls on an unchanged graph return identical forests.
    #[must_use]
    #[instrument(
        name = "graph.kruskal_mst",
        level = "debug",
        skip(self),
        fields(
            vertices = self.vertex_count,
            edges = self.edges.len(),
            selected = field::Empty,
            total_weight = field::Empty,
        ),
    )]
    pub fn kruskal_mst(&self) -> SpanningForest {
        let forest = mst::kruskal(self.vertex_count, &self.edges);
        record_forest(&forest);
        forest
    }

    /// Computes a minimum spanning tree with Prim's algorithm from vertex `0`.
    ///
    /// On a disconnected graph only the tree containing vertex `0` is grown;
    /// check [`SpanningForest::is_spanning_tree`] to confirm connectivity.
    #[must_use]
    #[instrument(
        name = "graph.prim_mst",
        level = "debug",
        skip(self),
        fields(
            vertices = self.vertex_count,
            edges = self.edges.len(),
            selected = field::Empty,
            total_weight = field::Empty,
        ),
    )]
    pub fn prim_mst(&self) -> SpanningForest {
        let forest = mst::prim(&self.adjacency());
        record_forest(&forest);
        forest
    }

    /// Returns the cheapest graph edge reconnecting `mst` once `removed` is
    /// deleted from it, or `None` when the two sides cannot be rejoined.
    ///
    /// Every graph edge except those equal to `removed` is a candidate. Among
    /// crossing edges of minimum weight the first in insertion order wins.
    ///
    /// # Errors
    /// Returns [`GraphError::EdgeNotInTree`] when `removed` is not an element
    /// of `mst`, or [`GraphError::InvalidVertex`] when `mst` references a
    /// vertex outside the graph.
    #[instrument(
        name = "graph.find_replacement_edge",
        level = "debug",
        err,
        skip(self, mst),
        fields(tree_edges = mst.len(), replacement = field::Empty),
    )]
    pub fn find_replacement_edge(&self, mst: &[Edge], removed: &Edge) -> Result<Option<Edge>> {
        let (_, replacement) = mst::find_replacement(self.vertex_count, &self.edges, mst, removed)?;
        record_replacement(replacement.as_ref());
        Ok(replacement)
    }

    /// Removes `removed` from `mst` and reconnects the two sides with the
    /// cheapest crossing edge.
    ///
    /// # Errors
    /// Fails under the same conditions as [`Graph::find_replacement_edge`].
    ///
    /// # Examples
    /// ```
    /// use mstrepair_core::{Edge, Graph};
    ///
    /// let graph = Graph::builder(3)
    ///     .with_edges([(0, 1, 1), (1, 2, 2), (0, 2, 5)])
    ///     .build()?;
    /// let mst = graph.kruskal_mst();
    /// let repair = graph.repair_mst(mst.edges(), &Edge::new(1, 2, 2))?;
    /// assert_eq!(repair.replacement(), Some(&Edge::new(0, 2, 5)));
    /// assert_eq!(repair.forest().total_weight(), 6);
    /// # Ok::<(), mstrepair_core::GraphError>(())
    /// ```
    #[instrument(
        name = "graph.repair_mst",
        level = "debug",
        err,
        skip(self, mst),
        fields(tree_edges = mst.len(), replacement = field::Empty),
    )]
    pub fn repair_mst(&self, mst: &[Edge], removed: &Edge) -> Result<Repair> {
        let (cut, replacement) =
            mst::find_replacement(self.vertex_count, &self.edges, mst, removed)?;
        record_replacement(replacement.as_ref());
        Ok(mst::assemble(self.vertex_count, *removed, cut, replacement))
    }

    /// Returns the vertices reachable from `start` using only `edges`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when `start` or an edge endpoint
    /// is outside the graph.
    pub fn connected_component(&self, edges: &[Edge], start: usize) -> Result<BTreeSet<usize>> {
        connectivity::connected_component(self.vertex_count, edges, start)
    }
}

fn record_forest(forest: &SpanningForest) {
    let span = Span::current();
    span.record("selected", forest.len());
    span.record("total_weight", forest.total_weight());
}

fn record_replacement(replacement: Option<&Edge>) {
    match replacement {
        Some(edge) => {
            Span::current().record("replacement", field::display(edge));
        }
        None => debug!("no edge reconnects the two components"),
    }
}
