//! Benchmark setup error type.
//!
//! Lets setup code propagate failures with `?` instead of panicking inside
//! Criterion closures.

use minspan_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The synthetic graph configuration was rejected.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// The generated edges did not form a valid graph.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
}
