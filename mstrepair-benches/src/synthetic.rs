//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: a random tree links all vertices
//! first, then extra random edges add cycles so repair queries have
//! crossing candidates to scan.

use mstrepair_core::{Graph, GraphBuilder};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex on top of the connecting tree.
    pub extra_edges_per_vertex: usize,
    /// Inclusive upper bound for edge weights; weights start at 1.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected graph from `config`.
///
/// The same configuration always yields the same edge sequence.
///
/// # Errors
/// Returns [`BenchSetupError::ZeroValue`] when `vertex_count` is zero and
/// [`BenchSetupError::InvalidMaxWeight`] when `max_weight` is below one.
///
/// # Examples
/// ```
/// use mstrepair_benches::synthetic::{SyntheticGraphConfig, generate_graph};
///
/// let config = SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges_per_vertex: 2,
///     max_weight: 100,
///     seed: 7,
/// };
/// let graph = generate_graph(&config)?;
/// assert_eq!(graph.edge_count(), 9 + 20);
/// assert!(graph.kruskal_mst().is_spanning_tree());
/// # Ok::<(), mstrepair_benches::error::BenchSetupError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<Graph, BenchSetupError> {
    if config.vertex_count == 0 {
        return Err(BenchSetupError::ZeroValue {
            context: "vertex_count",
        });
    }
    if config.max_weight < 1 {
        return Err(BenchSetupError::InvalidMaxWeight {
            value: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.vertex_count;
    let extra = vertex_count.saturating_mul(config.extra_edges_per_vertex);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push((parent, vertex, rng.gen_range(1..=config.max_weight)));
    }
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push((source, target, rng.gen_range(1..=config.max_weight)));
    }

    Ok(GraphBuilder::new(vertex_count).with_edges(edges).build()?)
}
