//! Lazy Prim's algorithm.
//!
//! Every vertex moves through `Unvisited -> Frontier -> Settled`. The heap may
//! hold several entries for one vertex after relaxations; entries popped for an
//! already settled vertex are stale and skipped.

use std::{cmp::Ordering, collections::BinaryHeap, time::Instant};

use tracing::instrument;

use crate::{edge::Edge, graph::Graph};

use super::{Algorithm, OperationCounter, SpanningTree, report};

/// Index of the vertex Prim's algorithm grows the tree from.
const START_VERTEX: usize = 0;

#[derive(Clone, Copy, Debug)]
enum VertexState<'g> {
    Unvisited,
    Frontier {
        distance: f64,
        edge: Option<&'g Edge>,
    },
    Settled,
}

impl VertexState<'_> {
    fn distance(&self) -> f64 {
        match self {
            Self::Frontier { distance, .. } => *distance,
            Self::Unvisited | Self::Settled => f64::INFINITY,
        }
    }
}

/// Heap entry ordered so that [`BinaryHeap`] pops the smallest distance first,
/// breaking ties by insertion sequence.
#[derive(Clone, Copy, Debug)]
struct FrontierEntry {
    distance: f64,
    sequence: u64,
    vertex: usize,
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierEntry {}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Default)]
struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    next_sequence: u64,
}

impl Frontier {
    fn push(&mut self, vertex: usize, distance: f64) {
        self.heap.push(FrontierEntry {
            distance,
            sequence: self.next_sequence,
            vertex,
        });
        self.next_sequence += 1;
    }

    fn pop(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }
}

/// Computes an MST with Prim's algorithm, starting from vertex index 0.
///
/// Returns an empty tree with the connectivity flag cleared when `graph` is
/// disconnected. The operation count includes distance initialisations,
/// heap inserts and extractions, edge examinations, weight comparisons and
/// relaxations.
///
/// # Examples
/// ```
/// use minspan_core::{Edge, Graph, prim};
///
/// let graph = Graph::from_parts(
///     ["A", "B", "C"],
///     [
///         Edge::new("A", "B", 1.0),
///         Edge::new("B", "C", 2.0),
///         Edge::new("A", "C", 5.0),
///     ],
/// )?;
/// let tree = prim(&graph);
/// assert_eq!(tree.edges().len(), 2);
/// assert_eq!(tree.total_weight(), 3.0);
/// assert!(tree.check(&graph));
/// # Ok::<(), minspan_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> SpanningTree {
    let started = Instant::now();
    let mut operations = OperationCounter::default();

    let tree = if !graph.is_connected() {
        SpanningTree::disconnected(Algorithm::Prim, operations, started.elapsed())
    } else if graph.vertex_count() == 0 {
        SpanningTree::spanning(
            Algorithm::Prim,
            Vec::new(),
            0.0,
            operations,
            started.elapsed(),
        )
    } else {
        let (edges, total_weight) = grow(graph, &mut operations);
        SpanningTree::spanning(
            Algorithm::Prim,
            edges,
            total_weight,
            operations,
            started.elapsed(),
        )
    };

    report(&tree, graph);
    tree
}

fn grow(graph: &Graph, operations: &mut OperationCounter) -> (Vec<Edge>, f64) {
    let vertex_count = graph.vertex_count();
    let mut states = Vec::with_capacity(vertex_count);
    for _ in 0..vertex_count {
        states.push(VertexState::Unvisited);
        operations.tick();
    }

    let mut frontier = Frontier::default();
    states[START_VERTEX] = VertexState::Frontier {
        distance: 0.0,
        edge: None,
    };
    frontier.push(START_VERTEX, 0.0);
    operations.tick();

    let mut tree_edges = Vec::with_capacity(vertex_count.saturating_sub(1));
    let mut total_weight = 0.0;

    while let Some(FrontierEntry { vertex, .. }) = frontier.pop() {
        operations.tick();

        let connecting = match states[vertex] {
            VertexState::Settled => continue,
            VertexState::Frontier { edge, .. } => edge,
            VertexState::Unvisited => None,
        };
        states[vertex] = VertexState::Settled;

        if let Some(edge) = connecting {
            tree_edges.push(edge.clone());
            total_weight += edge.weight();
        }

        for (neighbour, edge) in graph.incident(vertex) {
            operations.tick();
            if matches!(states[neighbour], VertexState::Settled) {
                continue;
            }

            let weight = edge.weight();
            operations.tick();
            if weight < states[neighbour].distance() {
                states[neighbour] = VertexState::Frontier {
                    distance: weight,
                    edge: Some(edge),
                };
                frontier.push(neighbour, weight);
                operations.tick();
            }
        }
    }

    (tree_edges, total_weight)
}
