//! wgraph core library.
//!
//! An in-memory undirected weighted graph with upsert/erase edge mutation and
//! on-demand minimum spanning tree computation via Kruskal's algorithm.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod graph;
mod mst;
#[cfg(test)]
mod test_utils;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result},
    graph::{EdgeInsertion, EdgeRecord, EdgeRemoval, WeightedGraph},
    mst::{MinimumSpanningForest, MstEdge},
};
