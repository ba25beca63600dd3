//! Shared test utilities used across wgraph crates.

pub mod ci;
pub mod tracing;
