//! Graph generation strategies for MST property-based tests.
//!
//! Each generator draws from a seeded [`SmallRng`] so failures reproduce
//! from the proptest seed alone, and emits edges in insertion order.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, WeightDistribution};

/// Minimum vertex count for generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 40;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 20;
/// Upper bound for random weights.
const MAX_WEIGHT: i64 = 100;

/// Generates fixtures covering all weight distributions, biased towards
/// many identical weights since they stress tie-breaking the most.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (
        prop_oneof![
            2 => Just(WeightDistribution::Unique),
            3 => Just(WeightDistribution::ManyIdentical),
            2 => Just(WeightDistribution::Sparse),
            2 => Just(WeightDistribution::Dense),
            2 => Just(WeightDistribution::Disconnected),
        ],
        any::<u64>(),
    )
        .prop_map(|(distribution, seed)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            generate_fixture(distribution, &mut rng)
        })
}

/// Generates a fixture for an explicitly chosen distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => generate_dense(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn random_pairs(
    rng: &mut SmallRng,
    vertex_count: usize,
    edge_probability: f64,
) -> Vec<(usize, usize)> {
    let mut pairs = Vec::new();
    for source in 0..vertex_count {
        for target in (source + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                pairs.push((source, target));
            }
        }
    }
    if pairs.is_empty() {
        pairs.push((0, 1));
    }
    pairs
}

fn generate_unique_weights(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let edge_probability = rng.gen_range(0.1..=0.5);
    let pairs = random_pairs(rng, vertex_count, edge_probability);
    let mut weights: Vec<i64> = (1..).take(pairs.len()).collect();
    shuffle(&mut weights, rng);

    GraphFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .zip(weights)
            .map(|((source, target), weight)| (source, target, weight))
            .collect(),
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    let edge_probability = rng.gen_range(0.2..=0.6);
    let pairs = random_pairs(rng, vertex_count, edge_probability);

    GraphFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .map(|(source, target)| (source, target, pool[rng.gen_range(0..pool.len())]))
            .collect(),
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut order, rng);

    let mut edges = Vec::with_capacity(vertex_count * 2);
    for window in order.windows(2) {
        edges.push((window[0], window[1], rng.gen_range(1..=MAX_WEIGHT)));
    }

    // Extra edges may repeat an existing pair or loop back on one vertex.
    let extra = rng.gen_range(0..=vertex_count);
    for _ in 0..extra {
        let source = rng.gen_range(0..vertex_count);
        let target = rng.gen_range(0..vertex_count);
        edges.push((source, target, rng.gen_range(1..=MAX_WEIGHT)));
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_dense(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=DENSE_MAX_VERTICES);
    let edge_probability = rng.gen_range(0.7..=0.95);
    let pairs = random_pairs(rng, vertex_count, edge_probability);

    GraphFixture {
        vertex_count,
        edges: pairs
            .into_iter()
            .map(|(source, target)| (source, target, rng.gen_range(1..=MAX_WEIGHT)))
            .collect(),
        distribution: WeightDistribution::Dense,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let component_count = rng.gen_range(2..=4);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(1..=10);
        if size > 1 {
            let edge_probability = rng.gen_range(0.3..=0.8);
            for (source, target) in random_pairs(rng, size, edge_probability) {
                edges.push((offset + source, offset + target, rng.gen_range(1..=MAX_WEIGHT)));
            }
        }
        offset += size;
    }

    GraphFixture {
        vertex_count: offset,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for index in (1..slice.len()).rev() {
        let other = rng.gen_range(0..=index);
        slice.swap(index, other);
    }
}
