//! Seeded synthetic graphs for benchmarking.
//!
//! Every generated graph is connected: vertex `j` is first joined to a random
//! earlier vertex, then random extra edges are sprinkled on top. Weights are
//! drawn uniformly from `[1, 100)`.

use minspan_core::{Edge, Graph};
use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::BenchSetupError;

/// Errors raised for unusable generator settings.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// At least two vertices are needed to place an edge.
    #[error("vertex count must be at least 2 (got {got})")]
    TooFewVertices {
        /// The rejected vertex count.
        got: usize,
    },
}

/// Configuration for synthetic graph generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Extra random edges per vertex beyond the spanning backbone.
    pub extra_degree: usize,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Generates a connected random graph with vertices named `n0`, `n1`, ...
///
/// # Errors
/// Returns [`BenchSetupError::Synthetic`] when fewer than two vertices are
/// requested.
///
/// # Examples
/// ```
/// use minspan_benches::source::{SyntheticConfig, generate_graph};
///
/// let config = SyntheticConfig { vertex_count: 50, extra_degree: 2, seed: 7 };
/// let graph = generate_graph(&config).expect("valid config");
/// assert_eq!(graph.vertex_count(), 50);
/// assert!(graph.is_connected());
/// ```
pub fn generate_graph(config: &SyntheticConfig) -> Result<Graph, BenchSetupError> {
    let vertex_count = config.vertex_count;
    if vertex_count < 2 {
        return Err(SyntheticError::TooFewVertices { got: vertex_count }.into());
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let extra = vertex_count.saturating_mul(config.extra_degree);
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1).saturating_add(extra));

    for j in 1..vertex_count {
        let i = rng.gen_range(0..j);
        edges.push(Edge::new(name(i), name(j), rng.gen_range(1.0..100.0)));
    }
    while edges.len() < vertex_count - 1 + extra {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        if i != j {
            edges.push(Edge::new(name(i), name(j), rng.gen_range(1.0..100.0)));
        }
    }

    Ok(Graph::from_parts((0..vertex_count).map(name), edges)?)
}

fn name(index: usize) -> String {
    format!("n{index}")
}
