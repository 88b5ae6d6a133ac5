//! Type definitions for MST property-based tests.

use crate::{Edge, Graph};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a weight drawn from a continuous range.
    Unique,
    /// Large groups of edges share identical weights, stressing tie handling.
    ManyIdentical,
    /// A random spanning path plus a handful of extra edges.
    Sparse,
    /// Near-complete graph.
    Dense,
    /// Several components with no edges between them.
    Disconnected,
}

/// Generated graph description.
///
/// Edges are stored as `(from, to, weight)` index triples so failures print
/// compactly; [`Self::graph`] names vertex `i` as `v{i}`.
#[derive(Clone, Debug)]
pub(super) struct MstFixture {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Generated edges in insertion order.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl MstFixture {
    /// Builds the [`Graph`] described by this fixture.
    pub(super) fn graph(&self) -> Graph {
        let vertices = (0..self.vertex_count).map(vertex_name);
        let edges = self
            .edges
            .iter()
            .map(|&(from, to, weight)| Edge::new(vertex_name(from), vertex_name(to), weight));
        Graph::from_parts(vertices, edges).expect("generated fixtures must form valid graphs")
    }

    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            self.distribution,
            self.vertex_count,
            self.edges.len(),
        )
    }
}

/// Name assigned to vertex `index` in generated graphs.
pub(super) fn vertex_name(index: usize) -> String {
    format!("v{index}")
}

/// Configuration for the determinism property.
pub(super) struct DeterminismConfig {
    /// Number of times to rebuild and recompute per input.
    pub repetitions: usize,
}

impl DeterminismConfig {
    /// Reads `MINSPAN_MST_PBT_REPS`, defaulting to 3.
    pub(super) fn load() -> Self {
        let repetitions = std::env::var("MINSPAN_MST_PBT_REPS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(3);
        Self { repetitions }
    }
}
