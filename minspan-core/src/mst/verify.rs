//! Post-hoc validation of a computed spanning tree against its source graph.

use crate::{graph::Graph, union_find::UnionFind};

use super::SpanningTree;

/// Largest tolerated difference between the stored total weight and the sum
/// recomputed during [`SpanningTree::check`].
pub const WEIGHT_EPSILON: f64 = 1.0e-12;

impl SpanningTree {
    /// Audits this tree against `graph`.
    ///
    /// The check passes when
    /// - the edge weights sum to [`Self::total_weight`] within
    ///   [`WEIGHT_EPSILON`],
    /// - a tree computed on a connected graph holds exactly `V - 1` edges, and
    /// - replaying the edges through a fresh [`UnionFind`] never joins two
    ///   vertices that are already connected.
    ///
    /// An edge naming a vertex outside `graph` fails the check. The tree is
    /// never modified, so the audit can run any number of times.
    ///
    /// # Examples
    /// ```
    /// use minspan_core::{Edge, Graph, kruskal};
    ///
    /// let graph = Graph::from_parts(
    ///     ["A", "B", "C", "D"],
    ///     [Edge::new("A", "B", 1.0), Edge::new("C", "D", 2.0)],
    /// )?;
    /// let tree = kruskal(&graph);
    /// assert!(!tree.is_connected());
    /// assert!(tree.check(&graph));
    /// # Ok::<(), minspan_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn check(&self, graph: &Graph) -> bool {
        let recomputed: f64 = self.edges().iter().map(|edge| edge.weight()).sum();
        if (recomputed - self.total_weight()).abs() > WEIGHT_EPSILON {
            return false;
        }

        if self.is_connected() && self.edges().len() != graph.vertex_count().saturating_sub(1) {
            return false;
        }

        let mut components = UnionFind::new(graph.vertex_count());
        for edge in self.edges() {
            let Ok(from) = graph.index_of(edge.either()) else {
                return false;
            };
            let Ok(to) = edge.other(edge.either()).and_then(|name| graph.index_of(name)) else {
                return false;
            };
            if !components.union(from, to) {
                return false;
            }
        }

        true
    }
}
