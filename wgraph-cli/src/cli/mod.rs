//! Command-line interface for building weighted graphs and reporting their
//! minimum spanning trees.
//!
//! `demo` replays a fixed four-vertex walkthrough; `mst` builds a graph from
//! edges given on the command line.

mod commands;
mod edge_spec;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, GraphReport, MAX_VERTICES, MstCommand, render_summary,
    run_cli,
};
pub use edge_spec::{EdgeSpec, EdgeSpecError};
