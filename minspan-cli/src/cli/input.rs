//! Input document schema.

use std::path::Path;

use minspan_core::{Edge, Graph, GraphError};
use serde::Deserialize;

use super::CliError;

/// A batch of graphs to solve.
///
/// A document without a `graphs` key is an empty batch.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct InputDocument {
    /// Graphs in processing order.
    #[serde(default)]
    pub graphs: Vec<GraphInput>,
}

/// One graph in the input batch.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GraphInput {
    /// Caller-chosen identifier echoed into the report.
    #[serde(default)]
    pub id: i64,
    /// Vertex names; their order fixes vertex indices.
    #[serde(default)]
    pub nodes: Vec<String>,
    /// Weighted undirected edges.
    #[serde(default)]
    pub edges: Vec<EdgeInput>,
}

/// One edge in the input batch.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct EdgeInput {
    /// First endpoint.
    pub from: String,
    /// Second endpoint.
    pub to: String,
    /// Edge weight.
    pub weight: f64,
}

impl GraphInput {
    /// Builds the core [`Graph`] described by this entry.
    ///
    /// # Errors
    /// Returns the first [`GraphError`] raised while validating vertices or
    /// edges.
    pub fn build_graph(&self) -> Result<Graph, GraphError> {
        Graph::from_parts(
            self.nodes.iter().map(String::as_str),
            self.edges
                .iter()
                .map(|edge| Edge::new(edge.from.as_str(), edge.to.as_str(), edge.weight)),
        )
    }
}

pub(super) fn read_document(path: &Path) -> Result<InputDocument, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::Json {
        path: path.to_path_buf(),
        source,
    })
}
