//! Type definitions for MST property-based tests.

use crate::Graph;

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Every edge carries a distinct weight, so the MST is unique.
    Unique,
    /// Edges draw from a pool of one to three weights, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning tree plus a few extra edges, which may repeat a pair
    /// or form a self-loop.
    Sparse,
    /// Close to a complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated graph together with the context needed to diagnose failures.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// `(source, target, weight)` triples in insertion order.
    pub edges: Vec<(usize, usize, i64)>,
    /// Distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn graph(&self) -> Graph {
        match Graph::builder(self.vertex_count)
            .with_edges(self.edges.iter().copied())
            .build()
        {
            Ok(graph) => graph,
            Err(err) => panic!("fixture produced an invalid edge: {err} ({self:?})"),
        }
    }

    /// Short description used in failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len()
        )
    }
}
