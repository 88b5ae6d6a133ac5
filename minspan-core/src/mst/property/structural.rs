//! Property 2: structural invariants of every produced tree.
//!
//! For both algorithms:
//!
//! - the connectivity flag matches [`crate::Graph::is_connected`];
//! - a connected input yields exactly `V - 1` edges that form no cycle,
//!   join every vertex, and pass [`crate::SpanningTree::check`];
//! - a disconnected input yields no edges and zero total weight.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Algorithm, Graph, SpanningTree};

use super::helpers::{endpoints, find_root};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let connected = graph.is_connected();

    for algorithm in Algorithm::ALL {
        let tree = algorithm.run(&graph);
        let context = || format!("{algorithm}: {}", fixture.describe());

        if tree.is_connected() != connected {
            return Err(TestCaseError::fail(format!(
                "connectivity flag {} but graph connectivity is {connected} ({})",
                tree.is_connected(),
                context(),
            )));
        }

        if connected {
            validate_edge_count(&graph, &tree).map_err(|e| annotate(e, &context()))?;
            validate_spanning_acyclic(&graph, &tree).map_err(|e| annotate(e, &context()))?;
            if !tree.check(&graph) {
                return Err(TestCaseError::fail(format!(
                    "check rejected a computed tree ({})",
                    context()
                )));
            }
        } else {
            validate_empty(&tree).map_err(|e| annotate(e, &context()))?;
        }
    }

    Ok(())
}

fn annotate(error: TestCaseError, context: &str) -> TestCaseError {
    TestCaseError::fail(format!("{error} ({context})"))
}

fn validate_edge_count(graph: &Graph, tree: &SpanningTree) -> TestCaseResult {
    let expected = graph.vertex_count().saturating_sub(1);
    if tree.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "edge count {}, expected V - 1 = {expected}",
            tree.edges().len(),
        )));
    }
    Ok(())
}

/// Replays the tree over a bare parent array, failing on the first cycle and
/// on any vertex left outside the single component.
fn validate_spanning_acyclic(graph: &Graph, tree: &SpanningTree) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for (i, edge) in tree.edges().iter().enumerate() {
        let (from, to) = endpoints(graph, edge)?;
        let from_root = find_root(&mut parent, from);
        let to_root = find_root(&mut parent, to);
        if from_root == to_root {
            return Err(TestCaseError::fail(format!("edge {i}: {edge} closes a cycle")));
        }
        parent[to_root] = from_root;
    }

    if graph.vertex_count() > 0 {
        let root = find_root(&mut parent, 0);
        for vertex in 1..graph.vertex_count() {
            if find_root(&mut parent, vertex) != root {
                return Err(TestCaseError::fail(format!(
                    "vertex {vertex} is not reached by the tree"
                )));
            }
        }
    }
    Ok(())
}

fn validate_empty(tree: &SpanningTree) -> TestCaseResult {
    if !tree.edges().is_empty() || tree.total_weight() != 0.0 {
        return Err(TestCaseError::fail(format!(
            "disconnected input produced {} edges with weight {}",
            tree.edges().len(),
            tree.total_weight(),
        )));
    }
    Ok(())
}
