//! Output report schema.
//!
//! Costs and timings are rounded to two decimal places; edge weights are
//! written unrounded.

use std::path::Path;

use minspan_core::{Comparison, Graph, SpanningTree};
use serde::Serialize;

use super::CliError;

/// The full report written after a batch completes.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct Report {
    /// One entry per input graph, in input order.
    pub results: Vec<GraphReport>,
}

/// Results for one input graph.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GraphReport {
    /// Identifier copied from the input.
    pub graph_id: i64,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's result.
    pub prim: AlgorithmReport,
    /// Kruskal's result.
    pub kruskal: AlgorithmReport,
}

/// Vertex and edge counts of an input graph.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct InputStats {
    /// `V`.
    pub vertices: usize,
    /// `E`.
    pub edges: usize,
}

/// One algorithm's tree and instrumentation.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AlgorithmReport {
    /// Selected edges in selection order.
    pub mst_edges: Vec<EdgeReport>,
    /// Total weight, rounded to two decimals.
    pub total_cost: f64,
    /// Counted algorithmic steps.
    pub operations_count: u64,
    /// Wall-clock time in milliseconds, rounded to two decimals.
    pub execution_time_ms: f64,
}

/// An edge as written to the report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EdgeReport {
    /// `Edge::either()`.
    pub from: String,
    /// The endpoint opposite `from`.
    pub to: String,
    /// Unrounded weight.
    pub weight: f64,
}

impl GraphReport {
    pub(super) fn new(graph_id: i64, graph: &Graph, comparison: &Comparison) -> Result<Self, CliError> {
        Ok(Self {
            graph_id,
            input_stats: InputStats {
                vertices: graph.vertex_count(),
                edges: graph.edge_count(),
            },
            prim: AlgorithmReport::from_tree(graph_id, comparison.prim())?,
            kruskal: AlgorithmReport::from_tree(graph_id, comparison.kruskal())?,
        })
    }
}

impl AlgorithmReport {
    fn from_tree(graph_id: i64, tree: &SpanningTree) -> Result<Self, CliError> {
        let mst_edges = tree
            .edges()
            .iter()
            .map(|edge| {
                let from = edge.either();
                let to = edge
                    .other(from)
                    .map_err(|source| CliError::Graph { graph_id, source })?;
                Ok(EdgeReport {
                    from: from.to_owned(),
                    to: to.to_owned(),
                    weight: edge.weight(),
                })
            })
            .collect::<Result<Vec<_>, CliError>>()?;
        Ok(Self {
            mst_edges,
            total_cost: round2(tree.total_weight()),
            operations_count: tree.operations(),
            execution_time_ms: round2(tree.elapsed_ms()),
        })
    }
}

/// Rounds half away from zero to two decimal places.
pub(super) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

pub(super) fn write_report(path: &Path, report: &Report) -> Result<(), CliError> {
    let mut rendered = serde_json::to_string_pretty(report).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    rendered.push('\n');
    std::fs::write(path, rendered).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })
}
