//! Benchmark support crate for wgraph.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering minimum spanning tree computation and edge mutation.

pub mod error;
pub mod params;
pub mod synthetic;
