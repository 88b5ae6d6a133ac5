//! Shared helpers for MST property-based tests.

use proptest::test_runner::TestCaseError;

use crate::{Edge, Graph};

/// Path-halving find over a bare parent array.
///
/// Kept independent of [`crate::UnionFind`] so the properties do not trust
/// the structure under test.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}

/// Resolves both endpoints of `edge` to indices in `graph`.
pub(super) fn endpoints(graph: &Graph, edge: &Edge) -> Result<(usize, usize), TestCaseError> {
    let resolve = |name: &str| {
        graph
            .index_of(name)
            .map_err(|e| TestCaseError::fail(format!("tree edge {edge} is not in the graph: {e}")))
    };
    let other = edge
        .other(edge.either())
        .map_err(|e| TestCaseError::fail(e.to_string()))?;
    Ok((resolve(edge.either())?, resolve(other)?))
}
