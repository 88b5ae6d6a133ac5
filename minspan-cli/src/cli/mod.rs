//! Command-line interface for solving MST batches from JSON documents.
//!
//! The `solve` command reads a document of graphs, runs Prim and Kruskal on
//! each one, writes a JSON report, and prints a short per-graph summary.

mod commands;
mod input;
mod output;

pub use commands::{
    Cli, CliError, Command, GraphSummary, SolveCommand, SolveSummary, render_summary, run_cli,
};
pub use input::{EdgeInput, GraphInput, InputDocument};
pub use output::{AlgorithmReport, EdgeReport, GraphReport, InputStats, Report};
