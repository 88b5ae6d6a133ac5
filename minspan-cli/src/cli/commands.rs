//! Command implementations and argument parsing for the minspan CLI.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use minspan_core::{DEFAULT_COST_TOLERANCE, GraphError, SolverBuilder, SolverError};
use thiserror::Error;
use tracing::{Span, field, info, info_span, instrument, warn};

use super::input::read_document;
use super::output::{GraphReport, Report, write_report};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "minspan",
    about = "Compute minimum spanning trees with Prim's and Kruskal's algorithms."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve every graph in a JSON document and write a JSON report.
    Solve(SolveCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// JSON document with a `graphs` array.
    #[arg(default_value = "input.json")]
    pub input: PathBuf,

    /// Where to write the JSON report.
    #[arg(long, short, default_value = "output.json")]
    pub output: PathBuf,

    /// Largest Prim/Kruskal cost difference still reported as a match.
    #[arg(long = "cost-tolerance", default_value_t = DEFAULT_COST_TOLERANCE)]
    pub cost_tolerance: f64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the input or writing the report failed.
    #[error("failed to access `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The input was not a valid document, or the report could not be encoded.
    #[error("invalid JSON in `{path}`: {source}")]
    Json {
        /// Path of the offending document.
        path: PathBuf,
        /// Underlying decoder error.
        #[source]
        source: serde_json::Error,
    },
    /// A graph in the batch failed validation.
    #[error("graph {graph_id} is invalid: {source}")]
    Graph {
        /// Identifier of the offending graph.
        graph_id: i64,
        /// Validation failure.
        #[source]
        source: GraphError,
    },
    /// The solver configuration was rejected.
    #[error(transparent)]
    Solver(#[from] SolverError),
}

impl CliError {
    /// Returns the stable core error code, when the failure came from the
    /// core library.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Graph { source, .. } => Some(source.code().as_str()),
            Self::Solver(source) => Some(source.code().as_str()),
            Self::Io { .. } | Self::Json { .. } => None,
        }
    }
}

/// Outcome of one solved graph, as shown on stdout.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphSummary {
    /// Identifier copied from the input.
    pub graph_id: i64,
    /// Whether the graph was connected.
    pub connected: bool,
    /// Prim's total weight.
    pub prim_cost: f64,
    /// Kruskal's total weight.
    pub kruskal_cost: f64,
    /// Whether the totals agreed within the configured tolerance.
    pub costs_match: bool,
}

/// Summarises a completed `solve` command.
#[derive(Debug, Clone, PartialEq)]
pub struct SolveSummary {
    /// Path the report was written to.
    pub output: PathBuf,
    /// Per-graph outcomes in input order.
    pub graphs: Vec<GraphSummary>,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the input cannot be read or parsed, a graph is
/// invalid, the tolerance is rejected, or the report cannot be written. No
/// report is written when any graph fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minspan_cli::cli::{Cli, Command, SolveCommand, run_cli};
/// # use tempfile::TempDir;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let dir = TempDir::new()?;
/// let input = dir.path().join("input.json");
/// std::fs::write(
///     &input,
///     r#"{"graphs": [{"id": 7, "nodes": ["A", "B"], "edges": [{"from": "A", "to": "B", "weight": 2.0}]}]}"#,
/// )?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         input,
///         output: dir.path().join("output.json"),
///         cost_tolerance: 0.01,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.graphs[0].graph_id, 7);
/// assert_eq!(summary.graphs[0].kruskal_cost, 2.0);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<SolveSummary, CliError> {
    match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve)
        }
    }
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(
        input = %command.input.display(),
        output = %command.output.display(),
        graphs = field::Empty,
    ),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<SolveSummary, CliError> {
    let solver = SolverBuilder::new()
        .with_cost_tolerance(command.cost_tolerance)
        .build()?;
    let document = read_document(&command.input)?;
    Span::current().record("graphs", document.graphs.len());

    let mut report = Report::default();
    let mut graphs = Vec::with_capacity(document.graphs.len());
    for entry in &document.graphs {
        let _span = info_span!("cli.graph", graph_id = entry.id).entered();
        let graph = entry.build_graph().map_err(|source| CliError::Graph {
            graph_id: entry.id,
            source,
        })?;
        if !graph.is_connected() {
            warn!(graph_id = entry.id, "graph is not connected");
        }

        let comparison = solver.solve(&graph);
        report
            .results
            .push(GraphReport::new(entry.id, &graph, &comparison)?);
        graphs.push(GraphSummary {
            graph_id: entry.id,
            connected: comparison.is_connected(),
            prim_cost: comparison.prim().total_weight(),
            kruskal_cost: comparison.kruskal().total_weight(),
            costs_match: comparison.costs_match(),
        });
    }

    write_report(&command.output, &report)?;
    info!(
        graphs = graphs.len(),
        output = %command.output.display(),
        "report written"
    );
    Ok(SolveSummary {
        output: command.output,
        graphs,
    })
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use minspan_cli::cli::{GraphSummary, SolveSummary, render_summary};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let summary = SolveSummary {
///     output: "out.json".into(),
///     graphs: vec![GraphSummary {
///         graph_id: 1,
///         connected: true,
///         prim_cost: 6.0,
///         kruskal_cost: 6.0,
///         costs_match: true,
///     }],
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.contains("Costs match: true"));
/// assert!(text.ends_with("Results written to out.json\n"));
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &SolveSummary, mut writer: impl Write) -> io::Result<()> {
    for graph in &summary.graphs {
        writeln!(writer, "Graph {}:", graph.graph_id)?;
        if !graph.connected {
            writeln!(writer, "  Warning: graph {} is not connected", graph.graph_id)?;
        }
        writeln!(writer, "  Prim MST cost: {}", graph.prim_cost)?;
        writeln!(writer, "  Kruskal MST cost: {}", graph.kruskal_cost)?;
        writeln!(writer, "  Costs match: {}", graph.costs_match)?;
    }
    writeln!(writer, "Results written to {}", summary.output.display())
}
