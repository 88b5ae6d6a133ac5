//! Minimum spanning trees over undirected weighted graphs.
//!
//! Build a [`Graph`] from named vertices and weighted [`Edge`]s, then compute
//! a [`SpanningTree`] with [`prim`] or [`kruskal`]. A [`Solver`] runs both and
//! cross-checks their totals; [`SpanningTree::check`] audits any tree against
//! its source graph.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod edge;
mod error;
mod graph;
mod mst;
mod solver;
mod union_find;

#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    edge::Edge,
    error::{GraphError, GraphErrorCode, Result, SolverError, SolverErrorCode},
    graph::{Graph, GraphBuilder},
    mst::{Algorithm, SpanningTree, WEIGHT_EPSILON, kruskal, prim},
    solver::{Comparison, DEFAULT_COST_TOLERANCE, Solver, SolverBuilder},
    union_find::UnionFind,
};
