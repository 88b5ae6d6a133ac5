//! Property 1: Prim and Kruskal agree, and match the oracle on small graphs.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{kruskal, prim};

use super::oracle::brute_force_mst_weight;
use super::types::MstFixture;

/// Agreement bound between the two algorithms' accumulated totals.
const CROSS_TOLERANCE: f64 = 1.0e-2;
/// Agreement bound against the oracle, whose weights are small integers.
const ORACLE_TOLERANCE: f64 = 1.0e-9;

/// Checks that both algorithms report the same connectivity, edge count and
/// total weight.
pub(super) fn run_cross_algorithm_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let prim_tree = prim(&graph);
    let kruskal_tree = kruskal(&graph);

    if prim_tree.is_connected() != kruskal_tree.is_connected() {
        return Err(TestCaseError::fail(format!(
            "connectivity disagreement: prim={}, kruskal={} ({})",
            prim_tree.is_connected(),
            kruskal_tree.is_connected(),
            fixture.describe(),
        )));
    }

    if prim_tree.edges().len() != kruskal_tree.edges().len() {
        return Err(TestCaseError::fail(format!(
            "edge count mismatch: prim={}, kruskal={} ({})",
            prim_tree.edges().len(),
            kruskal_tree.edges().len(),
            fixture.describe(),
        )));
    }

    let delta = (prim_tree.total_weight() - kruskal_tree.total_weight()).abs();
    if delta >= CROSS_TOLERANCE {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: prim={}, kruskal={} ({})",
            prim_tree.total_weight(),
            kruskal_tree.total_weight(),
            fixture.describe(),
        )));
    }

    Ok(())
}

/// Checks both algorithms against exhaustive enumeration.
pub(super) fn run_oracle_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let expected = brute_force_mst_weight(fixture);

    for tree in [prim(&graph), kruskal(&graph)] {
        match expected {
            Some(weight) => {
                if !tree.is_connected() {
                    return Err(TestCaseError::fail(format!(
                        "{} reported a spanning graph as disconnected ({})",
                        tree.algorithm(),
                        fixture.describe(),
                    )));
                }
                if (tree.total_weight() - weight).abs() > ORACLE_TOLERANCE {
                    return Err(TestCaseError::fail(format!(
                        "{} weight {} differs from oracle {weight} ({})",
                        tree.algorithm(),
                        tree.total_weight(),
                        fixture.describe(),
                    )));
                }
            }
            None => {
                if tree.is_connected() || !tree.edges().is_empty() {
                    return Err(TestCaseError::fail(format!(
                        "{} built a tree on a graph with no spanning tree ({})",
                        tree.algorithm(),
                        fixture.describe(),
                    )));
                }
            }
        }
    }

    Ok(())
}
