//! Minimum spanning tree (MST) construction.
//!
//! Two independent algorithms compute an MST over the same read-only
//! [`Graph`]: [`prim`] grows a tree from vertex 0 using a lazy binary heap,
//! and [`kruskal`] greedily accepts globally sorted edges that join distinct
//! union-find components. Both return a [`SpanningTree`] carrying the selected
//! edges, their total weight, an operation count and the wall-clock time of
//! the run.
//!
//! Disconnected graphs are not an error. Both algorithms detect them up front
//! and return an empty tree with [`SpanningTree::is_connected`] cleared; no
//! spanning forest is attempted.

mod counter;
mod kruskal;
mod prim;
mod verify;

use std::{fmt, time::Duration};

use tracing::{debug, warn};

use crate::{edge::Edge, graph::Graph};

pub use self::{kruskal::kruskal, prim::prim, verify::WEIGHT_EPSILON};

pub(crate) use self::counter::OperationCounter;

/// Selects an MST algorithm.
///
/// # Examples
/// ```
/// use minspan_core::{Algorithm, Edge, Graph};
///
/// let graph = Graph::from_parts(["A", "B"], [Edge::new("A", "B", 3.0)])?;
/// let tree = Algorithm::Kruskal.run(&graph);
/// assert_eq!(tree.algorithm(), Algorithm::Kruskal);
/// assert_eq!(tree.total_weight(), 3.0);
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Vertex-frontier expansion from index 0.
    Prim,
    /// Global edge sort with union-find cycle rejection.
    Kruskal,
}

impl Algorithm {
    /// Both algorithms in the order the solver runs them.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Computes an MST of `graph` with this algorithm.
    #[must_use]
    pub fn run(self, graph: &Graph) -> SpanningTree {
        match self {
            Self::Prim => prim(graph),
            Self::Kruskal => kruskal(graph),
        }
    }

    /// Returns the lowercase algorithm name used in logs and reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The immutable outcome of one MST computation.
///
/// Edges are kept in the order the algorithm selected them, which is not
/// necessarily sorted by weight.
#[derive(Clone, Debug, PartialEq)]
pub struct SpanningTree {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_weight: f64,
    operations: u64,
    elapsed: Duration,
    connected: bool,
}

impl SpanningTree {
    /// Returns the algorithm that produced this tree.
    #[must_use]
    #[rustfmt::skip]
    pub fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the selected edges in discovery order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights as accumulated during the
    /// run.
    #[must_use]
    #[rustfmt::skip]
    pub fn total_weight(&self) -> f64 { self.total_weight }

    /// Returns the number of discrete algorithmic steps counted during the
    /// run. Observational only.
    #[must_use]
    #[rustfmt::skip]
    pub fn operations(&self) -> u64 { self.operations }

    /// Returns the wall-clock duration of the run.
    #[must_use]
    #[rustfmt::skip]
    pub fn elapsed(&self) -> Duration { self.elapsed }

    /// Returns the wall-clock duration of the run in fractional milliseconds.
    #[must_use]
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1_000.0
    }

    /// Returns whether the source graph was connected when the tree was
    /// computed.
    #[must_use]
    #[rustfmt::skip]
    pub fn is_connected(&self) -> bool { self.connected }

    pub(crate) fn disconnected(
        algorithm: Algorithm,
        operations: OperationCounter,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            edges: Vec::new(),
            total_weight: 0.0,
            operations: operations.get(),
            elapsed,
            connected: false,
        }
    }

    pub(crate) fn spanning(
        algorithm: Algorithm,
        edges: Vec<Edge>,
        total_weight: f64,
        operations: OperationCounter,
        elapsed: Duration,
    ) -> Self {
        Self {
            algorithm,
            edges,
            total_weight,
            operations: operations.get(),
            elapsed,
            connected: true,
        }
    }
}

/// Emits the per-run diagnostics shared by both algorithms.
fn report(tree: &SpanningTree, graph: &Graph) {
    if !tree.is_connected() {
        warn!(
            algorithm = %tree.algorithm(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "graph is disconnected; returning an empty tree"
        );
    }
    debug!(
        algorithm = %tree.algorithm(),
        tree_edges = tree.edges().len(),
        total_weight = tree.total_weight(),
        operations = tree.operations(),
        elapsed_ms = tree.elapsed_ms(),
        "mst computed"
    );
    #[cfg(feature = "metrics")]
    record_metrics(tree);
}

#[cfg(feature = "metrics")]
fn record_metrics(tree: &SpanningTree) {
    let algorithm = tree.algorithm().as_str();
    metrics::counter!("mst_operations_total", "algorithm" => algorithm)
        .increment(tree.operations());
    metrics::histogram!("mst_elapsed_ms", "algorithm" => algorithm).record(tree.elapsed_ms());
}

#[cfg(test)]
mod property;
