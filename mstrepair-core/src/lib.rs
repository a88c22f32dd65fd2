//! Minimum spanning tree construction and single-edge repair.
//!
//! A [`Graph`] owns a fixed vertex set and an append-only edge sequence. It
//! builds minimum spanning trees with two independent algorithms (Kruskal and
//! Prim) and, given a tree and one of its edges, finds the cheapest edge that
//! reconnects the tree after that edge is deleted.

mod adjacency;
mod builder;
mod connectivity;
mod edge;
mod error;
mod graph;
mod mst;
mod union_find;

pub use crate::{
    adjacency::Adjacency,
    builder::{GraphBuilder, SelfLoopPolicy},
    connectivity::{connected_component, is_spanning_tree},
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result},
    graph::Graph,
    mst::{Repair, SpanningForest},
    union_find::UnionFind,
};
