//! Benchmark support crate for `mstrepair`.
//!
//! Provides seeded synthetic graphs and parameter labels used by the
//! Criterion benchmarks for tree construction and repair.

pub mod error;
pub mod params;
pub mod synthetic;
