//! CLI entry point for building weighted graphs and reporting their minimum
//! spanning trees.
//!
//! Initialises logging, parses arguments with clap, renders the summary to
//! stdout, and maps failures to a non-zero exit code after logging them with
//! their stable error code.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use wgraph_cli::cli::{Cli, CliError, render_summary, run_cli};
use wgraph_cli::logging::{self, LoggingError};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let summary = run_cli(cli).context("failed to execute command")?;
    let mut writer = BufWriter::new(io::stdout().lock());
    render_summary(&summary, &mut writer).context("failed to render summary")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let code = err.downcast_ref::<CliError>().and_then(|cli_error| match cli_error {
            CliError::Graph(graph) => Some(graph.code()),
            CliError::SelfLoop { .. } | CliError::TooManyVertices { .. } => None,
        });
        error!(
            error = %err,
            code = code.map(|code| field::display(code.as_str())),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

// Tracing is not available yet, so this is the one direct write to stderr.
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
