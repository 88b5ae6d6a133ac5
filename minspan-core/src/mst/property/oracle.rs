//! Brute-force oracle for MST property verification.
//!
//! Enumerates every subset of exactly `V - 1` edges of a small graph and keeps
//! the lightest one that spans all vertices. Exponential, so it is only fed
//! graphs with a handful of edges.

use super::helpers::find_root;
use super::types::MstFixture;

/// Returns the minimum spanning-tree weight, or `None` when no subset spans
/// the graph.
pub(super) fn brute_force_mst_weight(fixture: &MstFixture) -> Option<f64> {
    let vertex_count = fixture.vertex_count;
    if vertex_count <= 1 {
        return Some(0.0);
    }

    let edge_count = fixture.edges.len();
    assert!(edge_count < 20, "oracle fixture too large: {edge_count} edges");
    let needed = vertex_count - 1;

    let mut best: Option<f64> = None;
    for mask in 0_u32..(1 << edge_count) {
        if mask.count_ones() as usize != needed {
            continue;
        }
        if let Some(weight) = spanning_weight(fixture, mask) {
            best = Some(best.map_or(weight, |current| current.min(weight)));
        }
    }
    best
}

/// Sums the edges selected by `mask` if they form a spanning tree.
fn spanning_weight(fixture: &MstFixture, mask: u32) -> Option<f64> {
    let mut parent: Vec<usize> = (0..fixture.vertex_count).collect();
    let mut weight = 0.0;
    for (bit, &(from, to, edge_weight)) in fixture.edges.iter().enumerate() {
        if mask & (1 << bit) == 0 {
            continue;
        }
        let from_root = find_root(&mut parent, from);
        let to_root = find_root(&mut parent, to);
        if from_root == to_root {
            return None;
        }
        parent[to_root] = from_root;
        weight += edge_weight;
    }
    Some(weight)
}
