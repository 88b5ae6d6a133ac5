//! Sequential Kruskal's algorithm.
//!
//! Edges are collected once from [`Graph::edges`] order and stably sorted by
//! weight, so equal-weight edges keep that order and the produced tree is
//! reproducible. Acceptance stops as soon as `V - 1` edges are in the tree.

use std::time::Instant;

use tracing::instrument;

use crate::{edge::Edge, graph::Graph, union_find::UnionFind};

use super::{Algorithm, OperationCounter, SpanningTree, report};

/// Computes an MST with Kruskal's algorithm.
///
/// Returns an empty tree with the connectivity flag cleared when `graph` is
/// disconnected. The operation count includes one step per collected edge,
/// `n * floor(log2(n))` for sorting `n` edges, two endpoint lookups per
/// examined edge and one step per accepted edge.
///
/// # Examples
/// ```
/// use minspan_core::{Edge, Graph, kruskal};
///
/// let graph = Graph::from_parts(
///     ["A", "B", "C", "D"],
///     [
///         Edge::new("A", "B", 1.0),
///         Edge::new("A", "C", 4.0),
///         Edge::new("B", "C", 2.0),
///         Edge::new("C", "D", 3.0),
///         Edge::new("B", "D", 5.0),
///     ],
/// )?;
/// let tree = kruskal(&graph);
/// assert_eq!(tree.edges().len(), 3);
/// assert_eq!(tree.total_weight(), 6.0);
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> SpanningTree {
    let started = Instant::now();
    let mut operations = OperationCounter::default();

    let tree = if !graph.is_connected() {
        SpanningTree::disconnected(Algorithm::Kruskal, operations, started.elapsed())
    } else if graph.vertex_count() == 0 {
        SpanningTree::spanning(
            Algorithm::Kruskal,
            Vec::new(),
            0.0,
            operations,
            started.elapsed(),
        )
    } else {
        let (edges, total_weight) = select(graph, &mut operations);
        SpanningTree::spanning(
            Algorithm::Kruskal,
            edges,
            total_weight,
            operations,
            started.elapsed(),
        )
    };

    report(&tree, graph);
    tree
}

fn select(graph: &Graph, operations: &mut OperationCounter) -> (Vec<Edge>, f64) {
    let mut candidates = Vec::with_capacity(graph.edge_count());
    for candidate in graph.indexed_edges() {
        candidates.push(candidate);
        operations.tick();
    }

    candidates.sort_by(|(_, _, left), (_, _, right)| left.cmp_weight(right));
    operations.add(sort_cost(candidates.len()));

    let target = graph.vertex_count().saturating_sub(1);
    let mut components = UnionFind::new(graph.vertex_count());
    let mut tree_edges = Vec::with_capacity(target);
    let mut total_weight = 0.0;

    for (from, to, edge) in candidates {
        if tree_edges.len() == target {
            break;
        }
        // One step per endpoint resolution.
        operations.add(2);
        if components.union(from, to) {
            tree_edges.push(edge.clone());
            total_weight += edge.weight();
            operations.tick();
        }
    }

    (tree_edges, total_weight)
}

/// Analytic comparison cost of sorting `len` items: `len * floor(log2(len))`.
fn sort_cost(len: usize) -> u64 {
    if len == 0 {
        return 0;
    }
    let len = len as u64;
    len.saturating_mul(u64::from(len.ilog2()))
}
