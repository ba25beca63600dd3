//! Command implementations and argument parsing for the wgraph CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use thiserror::Error;
use tracing::{Span, field, info, instrument};
use wgraph_core::{EdgeInsertion, GraphError, WeightedGraph};

use super::edge_spec::EdgeSpec;

/// Edges inserted by the `demo` walkthrough before the first report.
const DEMO_EDGES: [(usize, usize, f64); 6] = [
    (0, 1, 7.2),
    (0, 2, 7.5),
    (0, 3, 7.3),
    (1, 2, 7.6),
    (1, 3, 7.4),
    (2, 3, 7.7),
];

/// Upserts replayed by the `demo` walkthrough before the second report.
const DEMO_REWEIGHTS: [(usize, usize, f64); 2] = [(0, 2, 7.5), (0, 2, 7.8)];

const DEMO_VERTICES: usize = 4;

/// Largest vertex count the `mst` command will allocate.
pub const MAX_VERTICES: usize = 1 << 24;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "wgraph",
    about = "Build weighted graphs and report their minimum spanning trees."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Replay the four-vertex walkthrough and report before and after
    /// reweighting edge (0, 2).
    Demo,
    /// Build a graph from explicit edges and report its spanning forest.
    Mst(MstCommand),
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Number of vertices in the graph (at most 16777216).
    #[arg(long)]
    pub vertices: usize,

    /// Edge given as `source,target,weight`; repeat for more edges.
    #[arg(long = "edge", value_name = "U,V,W")]
    pub edges: Vec<EdgeSpec>,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An edge joined a vertex to itself.
    #[error("edge {vertex},{vertex} is a self-loop")]
    SelfLoop {
        /// The repeated endpoint.
        vertex: usize,
    },
    /// The requested vertex count exceeds [`MAX_VERTICES`].
    #[error("{requested} vertices requested; at most {limit} are supported")]
    TooManyVertices {
        /// Vertex count passed on the command line.
        requested: usize,
        /// Upper bound enforced by the command.
        limit: usize,
    },
    /// Graph construction failed.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Measurements of a graph at one point in a command.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphReport {
    /// Short description of when the report was taken.
    pub label: String,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of distinct undirected edges.
    pub edge_count: usize,
    /// Weight of the minimum spanning forest.
    pub mst_weight: f64,
    /// Connected components in the spanning forest.
    pub component_count: usize,
}

impl GraphReport {
    fn capture(label: &str, graph: &WeightedGraph) -> Self {
        let forest = graph.minimum_spanning_forest();
        Self {
            label: label.to_owned(),
            vertex_count: graph.vertex_count(),
            edge_count: graph.edge_count(),
            mst_weight: forest.total_weight(),
            component_count: forest.component_count(),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSummary {
    /// Name of the command that produced the summary.
    pub command: &'static str,
    /// Reports in the order they were taken.
    pub reports: Vec<GraphReport>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the vertex count exceeds [`MAX_VERTICES`], an
/// edge is a self-loop, or an edge references a vertex outside the graph.
///
/// # Examples
/// ```
/// use wgraph_cli::cli::{Cli, Command, run_cli};
///
/// let summary = run_cli(Cli { command: Command::Demo })?;
/// assert_eq!(summary.reports.len(), 2);
/// assert_eq!(summary.reports[0].edge_count, 6);
/// # Ok::<(), wgraph_cli::cli::CliError>(())
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    let summary = match cli.command {
        Command::Demo => {
            span.record("command", "demo");
            run_demo()?
        }
        Command::Mst(command) => {
            span.record("command", "mst");
            run_mst(&command)?
        }
    };
    info!(
        command = summary.command,
        reports = summary.reports.len(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(name = "cli.demo", err)]
pub(super) fn run_demo() -> Result<ExecutionSummary, CliError> {
    let mut graph = WeightedGraph::new(DEMO_VERTICES);
    for (source, target, weight) in DEMO_EDGES {
        graph.insert_edge(source, target, weight)?;
    }
    let initial = GraphReport::capture("initial", &graph);

    for (source, target, weight) in DEMO_REWEIGHTS {
        graph.insert_edge(source, target, weight)?;
    }
    let reweighted = GraphReport::capture("after reweighting 0,2", &graph);

    Ok(ExecutionSummary {
        command: "demo",
        reports: vec![initial, reweighted],
    })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(vertices = command.vertices, edges = command.edges.len()),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<ExecutionSummary, CliError> {
    if command.vertices > MAX_VERTICES {
        return Err(CliError::TooManyVertices {
            requested: command.vertices,
            limit: MAX_VERTICES,
        });
    }
    let mut graph = WeightedGraph::new(command.vertices);
    for edge in &command.edges {
        let outcome = graph.insert_edge(edge.source, edge.target, edge.weight)?;
        if outcome == EdgeInsertion::SelfLoopRejected {
            return Err(CliError::SelfLoop {
                vertex: edge.source,
            });
        }
    }
    Ok(ExecutionSummary {
        command: "mst",
        reports: vec![GraphReport::capture("mst", &graph)],
    })
}

/// Renders `summary` to `writer` as one block of `key: value` lines per
/// report.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::io::Cursor;
/// use wgraph_cli::cli::{ExecutionSummary, GraphReport, render_summary};
///
/// let summary = ExecutionSummary {
///     command: "mst",
///     reports: vec![GraphReport {
///         label: "mst".into(),
///         vertex_count: 2,
///         edge_count: 1,
///         mst_weight: 0.5,
///         component_count: 1,
///     }],
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer.into_inner()).expect("utf-8 output");
/// assert!(text.contains("mst weight: 0.500"));
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    for report in &summary.reports {
        writeln!(writer, "[{}]", report.label)?;
        writeln!(writer, "vertices: {}", report.vertex_count)?;
        writeln!(writer, "edges: {}", report.edge_count)?;
        writeln!(writer, "mst weight: {:.3}", report.mst_weight)?;
        writeln!(writer, "components: {}", report.component_count)?;
    }
    Ok(())
}
