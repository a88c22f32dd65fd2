//! Property-based tests for MST construction and repair.
//!
//! Checks Kruskal and Prim against a naive sequential oracle, validates the
//! structural invariants of every forest, asserts determinism across repeated
//! runs, and verifies that repairing any tree edge yields a minimum spanning
//! tree of the graph without that edge.

mod equivalence;
mod helpers;
mod oracle;
mod strategies;
mod structural;
mod types;
